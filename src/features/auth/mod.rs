//! Demo account feature: credential validation, the local session store, the
//! registration controller, and demo sign-in. Credentials are plaintext in
//! browser storage, so this module must never log a password.
//!
//! Flow Overview: Signup validates the password pair, stores the credential and
//! the current-user marker, then navigates home. Sign-in compares against the
//! stored credential. Sign-out clears only the current-user marker.

#[cfg(target_arch = "wasm32")]
mod guards;
pub(crate) mod registration;
pub(crate) mod sign_in;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub(crate) mod store;
pub(crate) mod types;
pub(crate) mod validation;

#[cfg(target_arch = "wasm32")]
pub(crate) use guards::RequireAuth;

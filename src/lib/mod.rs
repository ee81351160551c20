//! Shared frontend utilities for configuration, errors, logging, and build metadata.
//!
//! ## Demo account flow
//!
//! 1. **Sign up:** the form validates the password pair locally, writes the
//!    credential to `pb_registered` and the email to `pb_user`, then navigates home.
//! 2. **Sign in:** the submitted pair is compared with the registered credential;
//!    on a match the email becomes the current user.
//! 3. **Sign out:** `pb_user` is removed; the registered credential stays.
//!
//! Everything lives in browser local storage. Passwords are stored in plaintext,
//! so the flow is only enabled while `AppConfig::demo_auth` is set, and nothing
//! here may log a password.

pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod telemetry;
pub(crate) mod theme;

pub(crate) use errors::AppError;

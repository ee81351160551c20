//! Auth session context for the frontend. The provider reads the current-user
//! marker once on mount and exposes derived signals for guards and routes.
//! Only the email is kept in memory; the credential stays in storage.

use crate::features::auth::{
    sign_in::sign_out,
    store::{SessionStore, StoreError, browser_session_store},
};
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Current-user context shared through Leptos.
pub struct AuthContext {
    pub current_user: RwSignal<Option<String>>,
    pub is_authenticated: Signal<bool>,
}

impl AuthContext {
    /// Builds a context around the provided current-user signal.
    fn new(current_user: RwSignal<Option<String>>) -> Self {
        let is_authenticated = Signal::derive(move || current_user.get().is_some());
        Self {
            current_user,
            is_authenticated,
        }
    }

    /// Updates the in-memory session after sign-up or sign-in.
    pub fn set_session(&self, email: String) {
        self.current_user.set(Some(email));
    }

    /// Removes the stored marker and clears the in-memory session.
    pub fn sign_out(&self) -> Result<(), StoreError> {
        let store = browser_session_store()?;
        sign_out(&store)?;
        self.current_user.set(None);
        Ok(())
    }
}

/// Provides auth context hydrated from local storage.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let current_user = RwSignal::new(hydrate_current_user());
    provide_context(AuthContext::new(current_user));

    view! { {children()} }
}

fn hydrate_current_user() -> Option<String> {
    match browser_session_store().and_then(|store| store.current_user()) {
        Ok(current) => current,
        Err(err) => {
            tracing::warn!(error = %err, "could not read current user");
            None
        }
    }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| AuthContext::new(RwSignal::new(None)))
}

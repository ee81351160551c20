//! Demo sign-in against the single registered credential.

use crate::features::auth::store::{SessionStore, StoreError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignInOutcome {
    SignedIn,
    UnknownAccount,
    WrongPassword,
}

impl SignInOutcome {
    pub fn message(self) -> Option<&'static str> {
        match self {
            SignInOutcome::SignedIn => None,
            SignInOutcome::UnknownAccount => Some("No account is registered with that email."),
            SignInOutcome::WrongPassword => Some("Incorrect password."),
        }
    }
}

/// Marks `email` as the current user when the pair matches the registered credential.
pub fn sign_in<S: SessionStore>(
    store: &S,
    email: &str,
    password: &str,
) -> Result<SignInOutcome, StoreError> {
    let Some(credential) = store.registered_credential()? else {
        return Ok(SignInOutcome::UnknownAccount);
    };
    if credential.email != email {
        return Ok(SignInOutcome::UnknownAccount);
    }
    if credential.password != password {
        return Ok(SignInOutcome::WrongPassword);
    }

    store.set_current_user(email)?;
    tracing::info!(email, "signed in demo account");
    Ok(SignInOutcome::SignedIn)
}

/// Clears the current-user marker.
pub fn sign_out<S: SessionStore>(store: &S) -> Result<(), StoreError> {
    store.clear_current_user()?;
    tracing::info!("signed out");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{SignInOutcome, sign_in, sign_out};
    use crate::features::auth::{
        store::{LocalSessionStore, MemoryStorage, SessionStore},
        types::Credential,
    };

    fn registered(storage: &MemoryStorage) -> LocalSessionStore<&MemoryStorage> {
        let store = LocalSessionStore::new(storage);
        store
            .save_credential(&Credential::new("a@b.com", "longenough1"))
            .unwrap();
        store
    }

    #[test]
    fn matching_pair_sets_current_user() {
        let storage = MemoryStorage::new();
        let store = registered(&storage);

        assert_eq!(
            sign_in(&store, "a@b.com", "longenough1").unwrap(),
            SignInOutcome::SignedIn
        );
        assert_eq!(store.current_user().unwrap().as_deref(), Some("a@b.com"));
    }

    #[test]
    fn wrong_password_is_rejected_without_writes() {
        let storage = MemoryStorage::new();
        let store = registered(&storage);
        let writes = storage.write_count();

        let outcome = sign_in(&store, "a@b.com", "longenough2").unwrap();

        assert_eq!(outcome, SignInOutcome::WrongPassword);
        assert_eq!(outcome.message(), Some("Incorrect password."));
        assert_eq!(storage.write_count(), writes);
        assert_eq!(store.current_user().unwrap(), None);
    }

    #[test]
    fn unknown_email_or_empty_store_is_unknown_account() {
        let storage = MemoryStorage::new();
        let store = LocalSessionStore::new(&storage);
        assert_eq!(
            sign_in(&store, "a@b.com", "longenough1").unwrap(),
            SignInOutcome::UnknownAccount
        );

        let store = registered(&storage);
        assert_eq!(
            sign_in(&store, "other@b.com", "longenough1").unwrap(),
            SignInOutcome::UnknownAccount
        );
    }

    #[test]
    fn sign_out_clears_only_the_marker() {
        let storage = MemoryStorage::new();
        let store = registered(&storage);
        sign_in(&store, "a@b.com", "longenough1").unwrap();

        sign_out(&store).unwrap();

        assert_eq!(store.current_user().unwrap(), None);
        assert!(store.registered_credential().unwrap().is_some());
    }
}

//! Registration controller behind the sign-up form. Field edits never validate;
//! a submit runs the password checks, writes the credential and current-user
//! marker, and requests navigation home. Validation failures stay on the form
//! as a single inline message. Storage failures are handed back to the caller.

use crate::features::auth::{
    store::{SessionStore, StoreError},
    types::Credential,
    validation::{ValidationError, validate},
};

/// Where the controller may send the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    Root,
    SignIn,
}

impl Destination {
    pub const fn path(self) -> &'static str {
        match self {
            Destination::Root => "/",
            Destination::SignIn => "/login",
        }
    }
}

/// Navigation capability supplied by the host router.
pub trait Navigator {
    fn navigate(&self, destination: Destination);
}

impl<F: Fn(Destination)> Navigator for F {
    fn navigate(&self, destination: Destination) {
        self(destination);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowState {
    Editing,
    Submitting,
    Navigated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
    ConfirmPassword,
}

/// Transient form values. Discarded once the flow navigates away.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub error_message: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Registered,
    Rejected(ValidationError),
    /// The flow already navigated away; nothing was done.
    Closed,
}

pub struct RegistrationFlow<S, N> {
    form: RegistrationForm,
    state: FlowState,
    store: S,
    navigator: N,
}

impl<S: SessionStore, N: Navigator> RegistrationFlow<S, N> {
    pub fn new(store: S, navigator: N) -> Self {
        Self {
            form: RegistrationForm::default(),
            state: FlowState::Editing,
            store,
            navigator,
        }
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn error_message(&self) -> Option<&str> {
        self.form.error_message.as_deref()
    }

    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        if self.state != FlowState::Editing {
            return;
        }
        let value = value.into();
        match field {
            Field::Email => self.form.email = value,
            Field::Password => self.form.password = value,
            Field::ConfirmPassword => self.form.confirm_password = value,
        }
    }

    /// Handles a submit event whose default navigation the host already prevented.
    ///
    /// # Errors
    /// Returns the `StoreError` if either storage write fails. The flow is then
    /// back in `Editing` and no navigation was requested.
    pub fn submit(&mut self) -> Result<SubmitOutcome, StoreError> {
        if self.state != FlowState::Editing {
            return Ok(SubmitOutcome::Closed);
        }
        self.state = FlowState::Submitting;

        if let Err(err) = validate(&self.form.password, &self.form.confirm_password) {
            self.form.error_message = Some(err.to_string());
            self.state = FlowState::Editing;
            return Ok(SubmitOutcome::Rejected(err));
        }

        if let Err(err) = self.persist() {
            self.state = FlowState::Editing;
            return Err(err);
        }

        self.form.error_message = None;
        self.state = FlowState::Navigated;
        tracing::info!(email = %self.form.email, "registered demo account");
        self.navigator.navigate(Destination::Root);
        Ok(SubmitOutcome::Registered)
    }

    /// Leaves for the sign-in page without validating or storing anything.
    pub fn go_to_sign_in(&mut self) {
        if self.state == FlowState::Navigated {
            return;
        }
        self.state = FlowState::Navigated;
        self.navigator.navigate(Destination::SignIn);
    }

    fn persist(&self) -> Result<(), StoreError> {
        let credential = Credential::new(self.form.email.clone(), self.form.password.clone());
        self.store.save_credential(&credential)?;
        self.store.set_current_user(&self.form.email)
    }
}

#[cfg(test)]
mod tests {
    use super::{Destination, Field, FlowState, RegistrationFlow, SubmitOutcome};
    use crate::features::auth::{
        store::{
            CURRENT_USER_KEY, LocalSessionStore, MemoryStorage, REGISTERED_KEY, SessionStore,
            StoreError,
        },
        types::Credential,
        validation::ValidationError,
    };
    use std::cell::RefCell;

    fn fill<S: SessionStore, N: super::Navigator>(
        flow: &mut RegistrationFlow<S, N>,
        email: &str,
        password: &str,
        confirm: &str,
    ) {
        flow.edit(Field::Email, email);
        flow.edit(Field::Password, password);
        flow.edit(Field::ConfirmPassword, confirm);
    }

    #[test]
    fn successful_submit_stores_credential_and_navigates_home_once() {
        let storage = MemoryStorage::new();
        let visited = RefCell::new(Vec::new());
        let mut flow = RegistrationFlow::new(LocalSessionStore::new(&storage), |destination: Destination| {
            visited.borrow_mut().push(destination);
        });

        fill(&mut flow, "a@b.com", "longenough1", "longenough1");
        let outcome = flow.submit().unwrap();

        assert_eq!(outcome, SubmitOutcome::Registered);
        assert_eq!(flow.state(), FlowState::Navigated);
        let store = LocalSessionStore::new(&storage);
        assert_eq!(
            store.registered_credential().unwrap(),
            Some(Credential::new("a@b.com", "longenough1"))
        );
        assert_eq!(store.current_user().unwrap().as_deref(), Some("a@b.com"));
        assert_eq!(*visited.borrow(), vec![Destination::Root]);
    }

    #[test]
    fn mismatch_sets_inline_error_and_leaves_store_untouched() {
        let storage = MemoryStorage::new();
        let visited = RefCell::new(Vec::new());
        let mut flow = RegistrationFlow::new(LocalSessionStore::new(&storage), |destination: Destination| {
            visited.borrow_mut().push(destination);
        });

        fill(&mut flow, "a@b.com", "short", "short2");
        let outcome = flow.submit().unwrap();

        assert_eq!(outcome, SubmitOutcome::Rejected(ValidationError::Mismatch));
        assert_eq!(flow.state(), FlowState::Editing);
        assert_eq!(flow.error_message(), Some("Passwords do not match."));
        assert_eq!(storage.write_count(), 0);
        assert!(visited.borrow().is_empty());
    }

    #[test]
    fn too_short_sets_inline_error() {
        let storage = MemoryStorage::new();
        let mut flow = RegistrationFlow::new(LocalSessionStore::new(&storage), |_: Destination| {});

        fill(&mut flow, "a@b.com", "short", "short");

        assert_eq!(
            flow.submit().unwrap(),
            SubmitOutcome::Rejected(ValidationError::TooShort)
        );
        assert_eq!(
            flow.error_message(),
            Some("Password must be at least 8 characters.")
        );
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn correcting_input_after_rejection_registers() {
        let storage = MemoryStorage::new();
        let mut flow = RegistrationFlow::new(LocalSessionStore::new(&storage), |_: Destination| {});

        fill(&mut flow, "a@b.com", "longenough1", "longenough2");
        assert!(matches!(flow.submit().unwrap(), SubmitOutcome::Rejected(_)));

        flow.edit(Field::ConfirmPassword, "longenough1");
        assert_eq!(flow.form().confirm_password, "longenough1");
        assert_eq!(flow.submit().unwrap(), SubmitOutcome::Registered);
        assert_eq!(flow.error_message(), None);
    }

    #[test]
    fn edits_do_not_validate() {
        let storage = MemoryStorage::new();
        let mut flow = RegistrationFlow::new(LocalSessionStore::new(&storage), |_: Destination| {});

        fill(&mut flow, "a@b.com", "x", "y");

        assert_eq!(flow.state(), FlowState::Editing);
        assert_eq!(flow.error_message(), None);
    }

    #[test]
    fn resubmission_in_a_new_flow_overwrites_prior_registration() {
        let storage = MemoryStorage::new();

        let mut first = RegistrationFlow::new(LocalSessionStore::new(&storage), |_: Destination| {});
        fill(&mut first, "first@b.com", "longenough1", "longenough1");
        first.submit().unwrap();

        let mut second = RegistrationFlow::new(LocalSessionStore::new(&storage), |_: Destination| {});
        fill(&mut second, "second@b.com", "different-pass", "different-pass");
        second.submit().unwrap();

        let store = LocalSessionStore::new(&storage);
        assert_eq!(
            store.registered_credential().unwrap(),
            Some(Credential::new("second@b.com", "different-pass"))
        );
        assert_eq!(store.current_user().unwrap().as_deref(), Some("second@b.com"));
    }

    #[test]
    fn submit_after_navigation_is_ignored() {
        let storage = MemoryStorage::new();
        let visited = RefCell::new(0_usize);
        let mut flow = RegistrationFlow::new(LocalSessionStore::new(&storage), |_: Destination| {
            *visited.borrow_mut() += 1;
        });

        fill(&mut flow, "a@b.com", "longenough1", "longenough1");
        flow.submit().unwrap();
        let writes = storage.write_count();

        flow.edit(Field::Email, "other@b.com");
        assert_eq!(flow.submit().unwrap(), SubmitOutcome::Closed);
        assert_eq!(flow.form().email, "a@b.com");
        assert_eq!(storage.write_count(), writes);
        assert_eq!(*visited.borrow(), 1);
    }

    #[test]
    fn storage_failure_propagates_and_keeps_editing() {
        let storage = MemoryStorage::new();
        storage.fail_writes(true);
        let visited = RefCell::new(Vec::new());
        let mut flow = RegistrationFlow::new(LocalSessionStore::new(&storage), |destination: Destination| {
            visited.borrow_mut().push(destination);
        });

        fill(&mut flow, "a@b.com", "longenough1", "longenough1");

        assert!(flow.submit().is_err());
        assert_eq!(flow.state(), FlowState::Editing);
        assert_eq!(flow.error_message(), None);
        assert!(visited.borrow().is_empty());
        assert_eq!(storage.raw(CURRENT_USER_KEY), None);
    }

    #[test]
    fn current_user_write_failure_leaves_saved_credential_in_place() {
        let storage = MemoryStorage::new();
        storage.fail_writes_after(1);
        let visited = RefCell::new(Vec::new());
        let mut flow = RegistrationFlow::new(LocalSessionStore::new(&storage), |destination: Destination| {
            visited.borrow_mut().push(destination);
        });

        fill(&mut flow, "a@b.com", "longenough1", "longenough1");

        assert!(matches!(
            flow.submit(),
            Err(StoreError::Write { ref key, .. }) if key == CURRENT_USER_KEY
        ));
        assert_eq!(flow.state(), FlowState::Editing);
        assert!(visited.borrow().is_empty());
        assert!(storage.raw(REGISTERED_KEY).is_some());
        assert_eq!(storage.raw(CURRENT_USER_KEY), None);
        assert_eq!(storage.write_count(), 1);
    }

    #[test]
    fn sign_in_link_navigates_without_touching_storage() {
        let storage = MemoryStorage::new();
        let visited = RefCell::new(Vec::new());
        let mut flow = RegistrationFlow::new(LocalSessionStore::new(&storage), |destination: Destination| {
            visited.borrow_mut().push(destination);
        });

        fill(&mut flow, "a@b.com", "short", "mismatch");
        flow.go_to_sign_in();

        assert_eq!(flow.state(), FlowState::Navigated);
        assert_eq!(*visited.borrow(), vec![Destination::SignIn]);
        assert_eq!(flow.error_message(), None);
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn destinations_map_to_router_paths() {
        assert_eq!(Destination::Root.path(), "/");
        assert_eq!(Destination::SignIn.path(), "/login");
    }
}

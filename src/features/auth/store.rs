//! Local session store: one registered credential and one current-user marker
//! kept in durable browser key-value storage. The backing storage is injected so
//! the same logic runs against `localStorage` in the browser and an in-memory
//! map in tests. Values are plaintext; nothing here is encrypted.

use crate::features::auth::types::Credential;
use thiserror::Error;

/// Slot holding the JSON-encoded registered credential.
pub const REGISTERED_KEY: &str = "pb_registered";
/// Slot holding the raw email of the active session.
pub const CURRENT_USER_KEY: &str = "pb_user";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to write {key}: {message}")]
    Write { key: String, message: String },
    #[error("failed to read {key}: {message}")]
    Read { key: String, message: String },
    #[error("invalid stored credential")]
    Serialization(#[from] serde_json::Error),
}

/// String-keyed durable storage, modelled on the Web Storage API.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove_item(key)
    }
}

/// Session operations used by the registration flow, sign-in, and the auth context.
pub trait SessionStore {
    /// Overwrites the registered slot unconditionally.
    fn save_credential(&self, credential: &Credential) -> Result<(), StoreError>;
    /// Overwrites the current-user marker.
    fn set_current_user(&self, email: &str) -> Result<(), StoreError>;
    fn registered_credential(&self) -> Result<Option<Credential>, StoreError>;
    fn current_user(&self) -> Result<Option<String>, StoreError>;
    /// Removes the current-user marker. The registered credential is kept.
    fn clear_current_user(&self) -> Result<(), StoreError>;
}

impl<T: SessionStore + ?Sized> SessionStore for &T {
    fn save_credential(&self, credential: &Credential) -> Result<(), StoreError> {
        (**self).save_credential(credential)
    }

    fn set_current_user(&self, email: &str) -> Result<(), StoreError> {
        (**self).set_current_user(email)
    }

    fn registered_credential(&self) -> Result<Option<Credential>, StoreError> {
        (**self).registered_credential()
    }

    fn current_user(&self) -> Result<Option<String>, StoreError> {
        (**self).current_user()
    }

    fn clear_current_user(&self) -> Result<(), StoreError> {
        (**self).clear_current_user()
    }
}

/// `SessionStore` over any `KeyValueStorage`, using the `pb_*` keys.
#[derive(Clone, Debug)]
pub struct LocalSessionStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> LocalSessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

impl<S: KeyValueStorage> SessionStore for LocalSessionStore<S> {
    fn save_credential(&self, credential: &Credential) -> Result<(), StoreError> {
        let payload = serde_json::to_string(credential)?;
        self.storage.set_item(REGISTERED_KEY, &payload)?;
        tracing::debug!(email = %credential.email, "saved registered credential");
        Ok(())
    }

    fn set_current_user(&self, email: &str) -> Result<(), StoreError> {
        self.storage.set_item(CURRENT_USER_KEY, email)?;
        tracing::debug!(email, "set current user");
        Ok(())
    }

    fn registered_credential(&self) -> Result<Option<Credential>, StoreError> {
        match self.storage.get_item(REGISTERED_KEY)? {
            Some(payload) => Ok(Some(serde_json::from_str(&payload)?)),
            None => Ok(None),
        }
    }

    fn current_user(&self) -> Result<Option<String>, StoreError> {
        self.storage.get_item(CURRENT_USER_KEY)
    }

    fn clear_current_user(&self) -> Result<(), StoreError> {
        self.storage.remove_item(CURRENT_USER_KEY)
    }
}

/// `window.localStorage`. Writes are synchronous and survive reloads within
/// the same browser profile.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug)]
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    pub fn open() -> Result<Self, StoreError> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|err| StoreError::Unavailable(js_message(&err)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".to_string()))?;
        Ok(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage.get_item(key).map_err(|err| StoreError::Read {
            key: key.to_string(),
            message: js_message(&err),
        })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage.set_item(key, value).map_err(|err| StoreError::Write {
            key: key.to_string(),
            message: js_message(&err),
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.storage.remove_item(key).map_err(|err| StoreError::Write {
            key: key.to_string(),
            message: js_message(&err),
        })
    }
}

#[cfg(target_arch = "wasm32")]
fn js_message(value: &wasm_bindgen::JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &wasm_bindgen::JsValue::from_str("name"))
                .ok()
                .and_then(|name| name.as_string())
        })
        .unwrap_or_else(|| "unknown storage error".to_string())
}

#[cfg(target_arch = "wasm32")]
pub type BrowserSessionStore = LocalSessionStore<BrowserStorage>;

/// Opens the session store backed by `window.localStorage`.
#[cfg(target_arch = "wasm32")]
pub fn browser_session_store() -> Result<BrowserSessionStore, StoreError> {
    BrowserStorage::open().map(LocalSessionStore::new)
}

/// In-memory storage. Writes can be made to fail to exercise error paths.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: std::cell::RefCell<std::collections::BTreeMap<String, String>>,
    fail_after: std::cell::Cell<Option<usize>>,
    writes: std::cell::Cell<usize>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_after.set(fail.then_some(self.writes.get()));
    }

    /// Lets `count` more writes succeed, then fails every write after them.
    pub fn fail_writes_after(&self, count: usize) {
        self.fail_after.set(Some(self.writes.get() + count));
    }

    fn write_fails(&self) -> bool {
        self.fail_after
            .get()
            .is_some_and(|limit| self.writes.get() >= limit)
    }

    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }
}

#[cfg(test)]
impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.write_fails() {
            return Err(StoreError::Write {
                key: key.to_string(),
                message: "QuotaExceededError".to_string(),
            });
        }
        self.writes.set(self.writes.get() + 1);
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        if self.write_fails() {
            return Err(StoreError::Write {
                key: key.to_string(),
                message: "SecurityError".to_string(),
            });
        }
        self.writes.set(self.writes.get() + 1);
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        CURRENT_USER_KEY, LocalSessionStore, MemoryStorage, REGISTERED_KEY, SessionStore,
        StoreError,
    };
    use crate::features::auth::types::Credential;

    #[test]
    fn save_credential_writes_json_to_registered_slot() {
        let storage = MemoryStorage::new();
        let store = LocalSessionStore::new(&storage);

        store
            .save_credential(&Credential::new("a@b.com", "longenough1"))
            .unwrap();

        let raw = storage.raw(REGISTERED_KEY).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["email"], "a@b.com");
        assert_eq!(value["password"], "longenough1");
        assert_eq!(storage.raw(CURRENT_USER_KEY), None);
    }

    #[test]
    fn save_credential_overwrites_without_merging() {
        let storage = MemoryStorage::new();
        let store = LocalSessionStore::new(&storage);

        store
            .save_credential(&Credential::new("first@b.com", "password-one"))
            .unwrap();
        store
            .save_credential(&Credential::new("second@b.com", "password-two"))
            .unwrap();

        assert_eq!(
            store.registered_credential().unwrap(),
            Some(Credential::new("second@b.com", "password-two"))
        );
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn current_user_is_stored_as_raw_email() {
        let storage = MemoryStorage::new();
        let store = LocalSessionStore::new(&storage);

        store.set_current_user("a@b.com").unwrap();
        store.set_current_user("c@d.com").unwrap();

        assert_eq!(storage.raw(CURRENT_USER_KEY).as_deref(), Some("c@d.com"));
        assert_eq!(store.current_user().unwrap().as_deref(), Some("c@d.com"));
    }

    #[test]
    fn special_characters_round_trip_losslessly() {
        let storage = MemoryStorage::new();
        let store = LocalSessionStore::new(&storage);
        let credential = Credential::new(
            "o'brien+\"quotes\"@example.com",
            "pa\\ss\nwörd 🔐 {\"json\":true}",
        );

        store.save_credential(&credential).unwrap();

        assert_eq!(store.registered_credential().unwrap(), Some(credential));
    }

    #[test]
    fn clear_current_user_keeps_registered_credential() {
        let storage = MemoryStorage::new();
        let store = LocalSessionStore::new(&storage);
        store
            .save_credential(&Credential::new("a@b.com", "longenough1"))
            .unwrap();
        store.set_current_user("a@b.com").unwrap();

        store.clear_current_user().unwrap();

        assert_eq!(store.current_user().unwrap(), None);
        assert!(store.registered_credential().unwrap().is_some());
    }

    #[test]
    fn empty_store_reads_nothing() {
        let storage = MemoryStorage::new();
        let store = LocalSessionStore::new(&storage);
        assert_eq!(store.registered_credential().unwrap(), None);
        assert_eq!(store.current_user().unwrap(), None);
    }

    #[test]
    fn corrupt_registered_slot_is_a_serialization_error() {
        use super::KeyValueStorage;

        let storage = MemoryStorage::new();
        storage.set_item(REGISTERED_KEY, "{not json").unwrap();
        let store = LocalSessionStore::new(&storage);

        assert!(matches!(
            store.registered_credential(),
            Err(StoreError::Serialization(_))
        ));
    }

    #[test]
    fn write_failures_propagate() {
        let storage = MemoryStorage::new();
        storage.fail_writes(true);
        let store = LocalSessionStore::new(&storage);

        let err = store.set_current_user("a@b.com").unwrap_err();
        assert!(matches!(err, StoreError::Write { ref key, .. } if key == CURRENT_USER_KEY));
        assert_eq!(storage.write_count(), 0);
    }
}

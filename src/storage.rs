//! Key/value persistence for session, theme and booking state.
//!
//! The browser build writes to `localStorage` (durable) and `sessionStorage`
//! (per tab). Native builds and tests use [`MemoryStore`]. Every value is a
//! string; structured values go through serde_json.
//!
//! Reads are fail-open: a missing key, an unavailable backend and a value
//! that no longer parses all read back as `None`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Storage keys used by the application.
pub mod keys {
    /// Serialized [`crate::session::Identity`] of the signed-in user
    pub const IDENTITY: &str = "salaozap-user";
    /// `"light"` or `"dark"`
    pub const THEME: &str = "salaozap-theme";
    /// Pending [`crate::relay::BookingSelection`], absent when none
    pub const BOOKING_SELECTION: &str = "salaozap-booking-selection";
    /// Tab-scoped marker set once the intro screen has been shown
    pub const INTRO_SHOWN: &str = "hasVisited";
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend unavailable")]
    Unavailable,

    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },

    #[error("failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// String key/value store with browser-storage semantics.
///
/// Methods take `&self`: the backing store is shared, like the browser's.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// In-memory store. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with raw string values
    pub fn seeded<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let store = Self::new();
        store.entries.borrow_mut().extend(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into())),
        );
        store
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Store that holds nothing and rejects every write, like a browser with
/// storage disabled.
#[cfg(test)]
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct FailingStore;

#[cfg(test)]
impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

/// Read and deserialize a JSON value. Corrupt data reads as `None`.
pub fn read_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Ignoring unreadable value under {}: {}", key, e);
            None
        }
    }
}

/// Serialize a value as JSON and store it.
pub fn write_json<T: Serialize>(
    store: &impl KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value)?;
    store.set(key, &json)
}

/// One-time intro flag, scoped to the browser tab session.
pub struct IntroFlag<S> {
    store: S,
}

impl<S: KeyValueStore> IntroFlag<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn was_shown(&self) -> bool {
        self.store.get(keys::INTRO_SHOWN).is_some()
    }

    /// Returns true exactly once per store: the first caller shows the intro.
    pub fn claim(&self) -> bool {
        if self.was_shown() {
            return false;
        }
        if let Err(e) = self.store.set(keys::INTRO_SHOWN, "true") {
            tracing::warn!("Failed to record intro flag: {}", e);
        }
        true
    }
}

// ============ Browser storage ============

/// Which browser storage area a [`WebStorage`] handle targets
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageArea {
    /// `localStorage`: survives restarts
    Local,
    /// `sessionStorage`: cleared when the tab closes
    Session,
}

/// Handle to browser storage. Looks up the storage object on every call.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug)]
pub struct WebStorage {
    area: StorageArea,
}

#[cfg(target_arch = "wasm32")]
impl WebStorage {
    pub fn new(area: StorageArea) -> Self {
        Self { area }
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        let storage = match self.area {
            StorageArea::Local => window.local_storage(),
            StorageArea::Session => window.session_storage(),
        };
        storage.ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for WebStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let storage = self.storage().ok_or(StorageError::Unavailable)?;
        storage.remove_item(key).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{e:?}"),
        })
    }
}

/// Store used by the running application
#[cfg(target_arch = "wasm32")]
pub type BrowserStore = WebStorage;

#[cfg(not(target_arch = "wasm32"))]
pub type BrowserStore = MemoryStore;

/// Open the application store for an area.
#[cfg(target_arch = "wasm32")]
pub fn browser_store(area: StorageArea) -> BrowserStore {
    WebStorage::new(area)
}

/// Open the application store for an area. Native builds keep it in memory.
#[cfg(not(target_arch = "wasm32"))]
pub fn browser_store(_area: StorageArea) -> BrowserStore {
    MemoryStore::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("k", "v").unwrap();
        assert_eq!(other.get("k").as_deref(), Some("v"));
        other.remove("k").unwrap();
        assert!(store.get("k").is_none());
    }

    #[test]
    fn json_helpers_store_structured_values() {
        let store = MemoryStore::new();
        let value = Sample {
            name: "corte".into(),
            count: 2,
        };
        write_json(&store, "sample", &value).unwrap();
        assert_eq!(read_json::<Sample>(&store, "sample"), Some(value));
    }

    #[test]
    fn corrupt_json_reads_as_absent() {
        let store = MemoryStore::seeded([("sample", "{not json")]);
        assert_eq!(read_json::<Sample>(&store, "sample"), None);
        assert_eq!(read_json::<Sample>(&store, "missing"), None);
    }

    #[test]
    fn intro_flag_is_claimed_once() {
        let flag = IntroFlag::new(MemoryStore::new());
        assert!(!flag.was_shown());
        assert!(flag.claim());
        assert!(flag.was_shown());
        assert!(!flag.claim());
    }

    #[test]
    fn intro_flag_respects_existing_marker() {
        let flag = IntroFlag::new(MemoryStore::seeded([(keys::INTRO_SHOWN, "true")]));
        assert!(!flag.claim());
    }
}

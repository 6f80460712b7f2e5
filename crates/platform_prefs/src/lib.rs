//! Lightweight preference storage port for the terminal site.
//!
//! Persistence here is a handful of scalar values (command history, theme name),
//! so the port is synchronous: `localStorage` at the browser boundary, an
//! in-memory store for tests and headless use, and a no-op fallback.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};

/// Preference key holding the JSON-encoded command history (newest first).
pub const HISTORY_PREF_KEY: &str = "commandHistory";

/// Preference key holding the plain-string theme identifier.
pub const THEME_PREF_KEY: &str = "theme";

/// Host service for lightweight preference values stored as text per key.
pub trait PrefsStore {
    /// Loads the raw string for a preference key.
    ///
    /// Returns `None` when the key is absent or the backing store is unavailable.
    fn load_raw(&self, key: &str) -> Option<String>;

    /// Saves a raw string for a preference key, overwriting any prior value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store is unavailable or the write fails.
    fn save_raw(&self, key: &str, value: &str) -> Result<(), String>;

    /// Deletes a preference key.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store is unavailable or the delete fails.
    fn delete(&self, key: &str) -> Result<(), String>;
}

/// Browser preference store backed by `window.localStorage`.
///
/// On non-wasm targets every load reports absence and writes succeed as no-ops,
/// which keeps native test builds of dependent crates inert.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebPrefsStore;

impl PrefsStore for WebPrefsStore {
    fn load_raw(&self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            storage.get_item(key).ok().flatten()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            None
        }
    }

    fn save_raw(&self, key: &str, value: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or_else(|| "localStorage unavailable".to_string())?;
            storage
                .set_item(key, value)
                .map_err(|e| format!("localStorage set_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn delete(&self, key: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or_else(|| "localStorage unavailable".to_string())?;
            storage
                .remove_item(key)
                .map_err(|e| format!("localStorage remove_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(())
        }
    }
}

/// In-memory preference store keyed by string.
#[derive(Debug, Clone, Default)]
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl PrefsStore for MemoryPrefsStore {
    fn load_raw(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }

    fn save_raw(&self, key: &str, value: &str) -> Result<(), String> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), String> {
        self.inner.borrow_mut().remove(key);
        Ok(())
    }
}

/// No-op preference store for unsupported targets and baseline tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_raw(&self, _key: &str) -> Option<String> {
        None
    }

    fn save_raw(&self, _key: &str, _value: &str) -> Result<(), String> {
        Ok(())
    }

    fn delete(&self, _key: &str) -> Result<(), String> {
        Ok(())
    }
}

/// Loads and deserializes a typed JSON preference value.
///
/// Returns `None` when the key is absent or the stored text does not parse.
pub fn load_json_with<S: PrefsStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Option<T> {
    let raw = store.load_raw(key)?;
    serde_json::from_str(&raw).ok()
}

/// Serializes and saves a typed JSON preference value.
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub fn save_json_with<S: PrefsStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    store.save_raw(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip_and_delete() {
        let store = MemoryPrefsStore::default();
        let store_obj: &dyn PrefsStore = &store;

        store_obj.save_raw("pref.key", "tokyonight").expect("save");
        assert_eq!(
            store_obj.load_raw("pref.key"),
            Some("tokyonight".to_string())
        );
        store_obj.delete("pref.key").expect("delete");
        assert_eq!(store_obj.load_raw("pref.key"), None);
    }

    #[test]
    fn typed_json_helpers_round_trip() {
        let store = MemoryPrefsStore::default();
        let history = vec!["help".to_string(), "whoami".to_string()];
        save_json_with(&store, HISTORY_PREF_KEY, &history).expect("save history");

        let loaded: Option<Vec<String>> = load_json_with(&store, HISTORY_PREF_KEY);
        assert_eq!(loaded, Some(history));
    }

    #[test]
    fn invalid_json_loads_as_none() {
        let store = MemoryPrefsStore::default();
        store.save_raw(HISTORY_PREF_KEY, "not json").expect("save");
        let loaded: Option<Vec<String>> = load_json_with(&store, HISTORY_PREF_KEY);
        assert_eq!(loaded, None);
    }

    #[test]
    fn noop_store_is_empty_and_successful() {
        let store = NoopPrefsStore;
        assert_eq!(store.load_raw("k"), None);
        store.save_raw("k", "v").expect("save");
        store.delete("k").expect("delete");
    }

    #[test]
    fn web_store_is_inert_off_wasm() {
        let store = WebPrefsStore;
        assert_eq!(store.load_raw(THEME_PREF_KEY), None);
        store.save_raw(THEME_PREF_KEY, "matrix").expect("save");
        store.delete(THEME_PREF_KEY).expect("delete");
    }
}

//! Browser `localStorage` backend for the session service

use mediclean::session::{KeyValueStore, SessionError, SessionResult};
use wasm_bindgen::JsValue;

/// Session storage in the browser's `localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> SessionResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| SessionError::StorageUnavailable("no window".to_string()))?;

        window
            .local_storage()
            .map_err(|e| SessionError::StorageUnavailable(describe(&e)))?
            .ok_or_else(|| SessionError::StorageUnavailable("localStorage disabled".to_string()))
    }
}

impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> SessionResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| SessionError::StorageUnavailable(describe(&e)))
    }

    fn set_item(&self, key: &str, value: &str) -> SessionResult<()> {
        // Throws QuotaExceededError when storage is full
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| SessionError::Write(describe(&e)))
    }

    fn remove_item(&self, key: &str) -> SessionResult<()> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| SessionError::Write(describe(&e)))
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediclean::session::SESSION_KEY;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn round_trips_through_local_storage() {
        let store = LocalStore;
        store.set_item(SESSION_KEY, "{}").unwrap();
        assert_eq!(store.get_item(SESSION_KEY).unwrap().as_deref(), Some("{}"));
        store.remove_item(SESSION_KEY).unwrap();
        assert_eq!(store.get_item(SESSION_KEY).unwrap(), None);
    }
}

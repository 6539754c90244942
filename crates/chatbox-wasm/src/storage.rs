use chatbox_store::{KeyValueStore, StoreError};

/// `window.localStorage` as a key-value namespace.
///
/// Private browsing modes and sandboxed frames may deny access entirely; the
/// store then reports every call as unavailable and the history layer falls
/// back to memory.
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let storage = crate::window()
            .ok()
            .and_then(|window| window.local_storage().ok().flatten());

        if storage.is_none() {
            log::warn!("localStorage is not available; chat history will not survive a reload");
        }

        Self { storage }
    }

    fn storage(&self) -> Result<&web_sys::Storage, StoreError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StoreError::Unavailable("localStorage is not available".to_string()))
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        self.storage()?
            .get_item(key)
            .map(|value| value.map(String::into_bytes))
            .map_err(|e| StoreError::Unavailable(format!("getItem('{}') failed: {:?}", key, e)))
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        // localStorage only holds strings; everything we store is UTF-8 text
        let text = std::str::from_utf8(value)
            .map_err(|e| StoreError::Unavailable(format!("value for '{}' is not text: {}", key, e)))?;

        self.storage()?
            .set_item(key, text)
            .map_err(|e| StoreError::Unavailable(format!("setItem('{}') failed: {:?}", key, e)))
    }
}

use chatbox_types::{Theme, THEME_KEY};

use crate::{KeyValueStore, StoreError};

/// Persisted light/dark preference
pub struct ThemeStore<S> {
    storage: S,
    current: Theme,
}

impl<S: KeyValueStore> ThemeStore<S> {
    /// Open the store and read the saved preference
    pub fn new(storage: S) -> Self {
        let mut store = Self {
            storage,
            current: Theme::default(),
        };
        store.load();
        store
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Re-read the saved preference. Missing or unrecognised values read as light.
    pub fn load(&mut self) -> Theme {
        self.current = match self.storage.get(THEME_KEY) {
            Ok(Some(bytes)) => String::from_utf8(bytes)
                .ok()
                .and_then(|value| Theme::parse(&value))
                .unwrap_or_default(),
            Ok(None) => Theme::default(),
            Err(e) => {
                log::warn!("Theme preference unreadable, using light: {}", e);
                Theme::default()
            }
        };
        self.current
    }

    /// Switch to `theme` and persist it
    pub fn save(&mut self, theme: Theme) -> Result<(), StoreError> {
        self.current = theme;
        self.storage.set(THEME_KEY, theme.as_str().as_bytes())
    }

    /// Flip the theme. A failed write is logged; the new theme still applies
    /// for this session.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        if let Err(e) = self.save(next) {
            log::warn!("Failed to persist theme '{}': {}", next, e);
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, StoreError> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &[u8]) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("read-only".to_string()))
        }
    }

    #[test]
    fn test_defaults_to_light() {
        let store = ThemeStore::new(MemoryStore::new());
        assert_eq!(store.current(), Theme::Light);
    }

    #[test]
    fn test_dark_survives_reload() {
        let storage = MemoryStore::new();
        ThemeStore::new(&storage).save(Theme::Dark).unwrap();

        let reloaded = ThemeStore::new(&storage);
        assert_eq!(reloaded.current(), Theme::Dark);
        assert_eq!(storage.get(THEME_KEY).unwrap(), Some(b"dark".to_vec()));
    }

    #[test]
    fn test_toggle_round_trip() {
        let storage = MemoryStore::new();
        let mut store = ThemeStore::new(&storage);

        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(ThemeStore::new(&storage).current(), Theme::Dark);

        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(ThemeStore::new(&storage).current(), Theme::Light);
    }

    #[test]
    fn test_unknown_value_reads_as_light() {
        let storage = MemoryStore::new();
        storage.set(THEME_KEY, b"solarized").unwrap();
        assert_eq!(ThemeStore::new(&storage).current(), Theme::Light);
    }

    #[test]
    fn test_toggle_without_storage_still_flips() {
        let mut store = ThemeStore::new(ReadOnlyStore);
        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(store.toggle(), Theme::Light);
    }
}

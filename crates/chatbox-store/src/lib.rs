//! Persistence for the chat widget
//!
//! Everything here sits on top of the [`KeyValueStore`] seam, so the same
//! history and theme logic runs against browser local storage, a directory
//! on disk, or plain memory in tests.

pub mod error;
pub mod file_store;
pub mod history;
pub mod kv;
pub mod theme;

pub use error::StoreError;
pub use file_store::FileStore;
pub use history::{Appended, HistoryStore, Persistence};
pub use kv::{KeyValueStore, MemoryStore};
pub use theme::ThemeStore;

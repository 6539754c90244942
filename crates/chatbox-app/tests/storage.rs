use std::rc::Rc;

use chatbox::app::open_storage;
use chatbox::AppConfig;
use chatbox_store::{HistoryStore, ThemeStore};
use chatbox_types::{Sender, Theme};
use tempfile::TempDir;

fn config_with_dir(dir: Option<std::path::PathBuf>) -> AppConfig {
    AppConfig {
        endpoint: "http://127.0.0.1:8000".to_string(),
        data_dir: dir,
        timeout: None,
    }
}

#[test]
fn test_history_and_theme_persist_in_data_dir() {
    let dir = TempDir::new().unwrap();
    let config = config_with_dir(Some(dir.path().join("chatbox")));

    {
        let storage = open_storage(&config);
        let mut history = HistoryStore::new(Rc::clone(&storage));
        history.append(Sender::User, "hello", false);
        history.append(Sender::Ai, "Network error. Please check your connection.", true);
        ThemeStore::new(storage).save(Theme::Dark).unwrap();
    }

    assert!(dir.path().join("chatbox").join("chatHistory").is_file());

    let storage = open_storage(&config);
    let turns = HistoryStore::new(Rc::clone(&storage)).turns();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0].message, "hello");
    assert!(turns[1].is_error);
    assert_eq!(ThemeStore::new(storage).current(), Theme::Dark);
}

#[test]
fn test_ephemeral_storage_starts_empty_every_time() {
    let config = config_with_dir(None);

    let storage = open_storage(&config);
    HistoryStore::new(Rc::clone(&storage)).append(Sender::User, "gone soon", false);

    assert!(HistoryStore::new(open_storage(&config)).turns().is_empty());
}

#[test]
fn test_unusable_data_dir_falls_back_to_memory() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"file in the way").unwrap();

    let storage = open_storage(&config_with_dir(Some(blocker.join("nested"))));
    let mut history = HistoryStore::new(storage);
    history.append(Sender::User, "still works", false);

    assert_eq!(history.turns().len(), 1);
}

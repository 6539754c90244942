// Application modes of the chatbox binary
pub mod repl;

use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Stdout};
use std::rc::Rc;

use chatbox_client::{ChatView, ConversationController, HttpBackend, SubmitOutcome};
use chatbox_store::{FileStore, HistoryStore, KeyValueStore, MemoryStore, ThemeStore};

use crate::cli::ThemeAction;
use crate::config::AppConfig;
use crate::terminal_view::TerminalView;

pub use repl::run_repl_mode;

/// Shared storage namespace for history and theme
pub type Storage = Rc<dyn KeyValueStore>;

pub type TerminalController = ConversationController<HttpBackend, Storage, TerminalView<Stdout>>;

/// Open the configured storage. A data directory that cannot be opened
/// falls back to memory so the session stays usable.
pub fn open_storage(config: &AppConfig) -> Storage {
    let Some(dir) = &config.data_dir else {
        log::info!("Running ephemeral; history is kept in memory only");
        return Rc::new(MemoryStore::new());
    };

    match FileStore::new(dir) {
        Ok(store) => {
            log::debug!("Using data directory {}", store.dir().display());
            Rc::new(store)
        }
        Err(e) => {
            log::warn!("Cannot open data directory {}, keeping history in memory: {}", dir.display(), e);
            eprintln!(
                "{}",
                format!("Warning: history will not be saved ({})", e).yellow()
            );
            Rc::new(MemoryStore::new())
        }
    }
}

/// Build the controller for the terminal front-end
pub fn build_controller(config: &AppConfig, storage: Storage) -> Result<TerminalController> {
    let backend = HttpBackend::with_timeout(&config.endpoint, config.timeout)
        .with_context(|| format!("Failed to set up backend for {}", config.endpoint))?;
    log::debug!("Chat endpoint: {}", backend.url());

    Ok(ConversationController::new(backend, storage, TerminalView::new(io::stdout())))
}

/// `chatbox send`: one exchange, then exit
pub async fn run_send(config: &AppConfig, words: &[String]) -> Result<()> {
    let storage = open_storage(config);
    let mut chat = build_controller(config, storage)?;
    let theme = chat.theme();
    chat.view_mut().apply_theme(theme);

    let message = words.join(" ");
    if chat.submit(&message).await == SubmitOutcome::Ignored {
        eprintln!("{}", "Nothing to send.".bright_black());
    }

    Ok(())
}

/// `chatbox history`: replay the stored log and exit
pub fn run_history(config: &AppConfig) -> Result<()> {
    let storage = open_storage(config);
    let theme = ThemeStore::new(Rc::clone(&storage)).current();

    let mut view = TerminalView::new(io::stdout());
    view.apply_theme(theme);

    let replayed = HistoryStore::new(storage).replay_all(&mut view);
    if replayed == 0 {
        println!("{}", "No conversation history yet.".bright_black());
    }

    Ok(())
}

/// `chatbox theme [light|dark|toggle]`
pub fn run_theme(config: &AppConfig, action: Option<ThemeAction>) -> Result<()> {
    let storage = open_storage(config);
    let mut themes = ThemeStore::new(storage);

    let theme = match action {
        None => themes.current(),
        Some(ThemeAction::Toggle) => themes.toggle(),
        Some(ThemeAction::Light) => {
            themes.save(chatbox_types::Theme::Light).context("Failed to save theme")?;
            themes.current()
        }
        Some(ThemeAction::Dark) => {
            themes.save(chatbox_types::Theme::Dark).context("Failed to save theme")?;
            themes.current()
        }
    };

    println!("Theme: {}", theme.to_string().bold());
    Ok(())
}

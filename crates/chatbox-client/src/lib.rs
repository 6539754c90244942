//! # chatbox-client
//!
//! The conversation side of the chat widget: the [`ChatBackend`] seam for the
//! single `POST /api/chat` exchange, the [`ChatView`] seam the widget renders
//! into, and the [`ConversationController`] that ties input, history and
//! backend together.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::rc::Rc;
//! use chatbox_client::{ConversationController, HttpBackend, ChatView};
//! use chatbox_store::MemoryStore;
//! use chatbox_types::{MessageBlock, Theme, TurnView};
//!
//! struct Stdout;
//!
//! impl TurnView for Stdout {
//!     fn append_block(&mut self, block: &MessageBlock) {
//!         println!("{}: {}", block.sender, block.lines().collect::<Vec<_>>().join("\n"));
//!     }
//! }
//!
//! impl ChatView for Stdout {
//!     fn show_loading(&mut self) {}
//!     fn hide_loading(&mut self) {}
//!     fn apply_theme(&mut self, _theme: Theme) {}
//! }
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = HttpBackend::new("http://127.0.0.1:8000")?;
//!     let mut chat = ConversationController::new(backend, Rc::new(MemoryStore::new()), Stdout);
//!     chat.load();
//!     chat.submit("Hello!").await;
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod controller;
pub mod error;
#[cfg(feature = "http")]
pub mod http;
pub mod view;

pub use backend::{decode_reply, ChatBackend};
pub use controller::{ControllerState, ConversationController, PendingExchange, SubmitOutcome, Submission};
pub use error::ExchangeError;
#[cfg(feature = "http")]
pub use http::HttpBackend;
pub use view::ChatView;

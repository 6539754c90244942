//! Terminal front-end for the chat widget
//!
//! The binary in `main.rs` is a thin dispatcher over the modes defined here.

pub mod app;
pub mod cli;
pub mod config;
pub mod terminal_view;

pub use cli::{Cli, Commands, ThemeAction};
pub use config::AppConfig;
pub use terminal_view::{Palette, TerminalView};

//! Core types shared by every chatbox crate
//!
//! This crate holds the persisted chat turn, the theme preference, the wire
//! types of the `/api/chat` exchange and the render form handed to views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Constants
// ============================================================================

/// Storage key holding the serialized conversation log
pub const HISTORY_KEY: &str = "chatHistory";

/// Storage key holding the theme preference
pub const THEME_KEY: &str = "theme";

/// Path of the chat endpoint, relative to the backend origin
pub const CHAT_ENDPOINT: &str = "/api/chat";

/// Text shown to the user for any transport-level failure
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection.";

/// Text of the transient indicator shown while a request is outstanding
pub const LOADING_TEXT: &str = "Typing...";

// ============================================================================
// Chat turns
// ============================================================================

/// Who produced a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Ai => "ai",
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded unit of the conversation.
///
/// Turns are created when the user submits (user turn) or when the backend
/// exchange settles (ai turn) and are never mutated afterwards. The timestamp
/// is informational; insertion order is what orders the log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub sender: Sender,
    pub message: String,
    #[serde(rename = "isError", default)]
    pub is_error: bool,
    pub timestamp: DateTime<Utc>,
}

impl ChatTurn {
    /// Create a turn stamped with the current time
    pub fn new(sender: Sender, message: impl Into<String>, is_error: bool) -> Self {
        Self {
            sender,
            message: message.into(),
            is_error,
            timestamp: Utc::now(),
        }
    }

    pub fn user(message: impl Into<String>) -> Self {
        Self::new(Sender::User, message, false)
    }

    pub fn ai(message: impl Into<String>) -> Self {
        Self::new(Sender::Ai, message, false)
    }

    /// An ai-side turn reporting a failure instead of real content
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Sender::Ai, message, true)
    }

    /// Render form of this turn
    pub fn to_block(&self) -> MessageBlock {
        MessageBlock::new(self.sender, &self.message, self.is_error)
    }
}

// ============================================================================
// Theme
// ============================================================================

/// Persisted colour scheme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored preference; anything unrecognised is `None`
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Piece of a rendered message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// One line of text, rendered inline and literally
    Text(String),
    /// Explicit break between two lines
    LineBreak,
}

/// Render form of a turn handed to views.
///
/// Plain text rendering collapses embedded newlines, so the message is split
/// into one `Text` fragment per line with a `LineBreak` between neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBlock {
    pub sender: Sender,
    pub is_error: bool,
    pub fragments: Vec<Fragment>,
}

impl MessageBlock {
    pub fn new(sender: Sender, message: &str, is_error: bool) -> Self {
        let mut fragments = Vec::new();
        for (index, line) in message.split('\n').enumerate() {
            if index > 0 {
                fragments.push(Fragment::LineBreak);
            }
            fragments.push(Fragment::Text(line.to_string()));
        }

        Self {
            sender,
            is_error,
            fragments,
        }
    }

    /// Style tags for the block, e.g. `chat-message ai-message error`
    pub fn class_name(&self) -> String {
        let mut class = format!("chat-message {}-message", self.sender);
        if self.is_error {
            class.push_str(" error");
        }
        class
    }

    /// The text lines of the block, in order
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.fragments.iter().filter_map(|fragment| match fragment {
            Fragment::Text(text) => Some(text.as_str()),
            Fragment::LineBreak => None,
        })
    }
}

/// Anything that can display message blocks in order
pub trait TurnView {
    fn append_block(&mut self, block: &MessageBlock);
}

impl<V: TurnView + ?Sized> TurnView for &mut V {
    fn append_block(&mut self, block: &MessageBlock) {
        (**self).append_block(block)
    }
}

// ============================================================================
// Wire types
// ============================================================================

/// Body of `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Raw reply body; the backend may fill either field, and sends
/// `"error": null` alongside successful messages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Settled meaning of a reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatReply {
    /// Real AI content
    Message(String),
    /// Application error reported by the backend
    Error(String),
}

impl ChatResponse {
    /// Resolve the reply. A non-empty `error` wins regardless of status;
    /// a `message` only counts on a successful status. `None` means the
    /// body had neither and the exchange is unusable.
    pub fn into_reply(self, success: bool) -> Option<ChatReply> {
        match (self.error, self.message) {
            (Some(error), _) if !error.is_empty() => Some(ChatReply::Error(error)),
            (_, Some(message)) if success => Some(ChatReply::Message(message)),
            _ => None,
        }
    }
}

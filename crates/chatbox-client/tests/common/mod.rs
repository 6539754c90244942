#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use chatbox_client::{ChatBackend, ChatView, ExchangeError};
use chatbox_types::{ChatReply, MessageBlock, Theme, TurnView};

/// Everything the controller did to the view, in order
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Block(MessageBlock),
    LoadingShown,
    LoadingHidden,
    Theme(Theme),
}

/// View that records calls instead of drawing
#[derive(Debug, Default)]
pub struct RecordingView {
    pub events: Vec<ViewEvent>,
    pub loading: bool,
}

impl RecordingView {
    pub fn blocks(&self) -> Vec<&MessageBlock> {
        self.events
            .iter()
            .filter_map(|event| match event {
                ViewEvent::Block(block) => Some(block),
                _ => None,
            })
            .collect()
    }
}

impl TurnView for RecordingView {
    fn append_block(&mut self, block: &MessageBlock) {
        self.events.push(ViewEvent::Block(block.clone()));
    }
}

impl ChatView for RecordingView {
    fn show_loading(&mut self) {
        self.loading = true;
        self.events.push(ViewEvent::LoadingShown);
    }

    fn hide_loading(&mut self) {
        self.loading = false;
        self.events.push(ViewEvent::LoadingHidden);
    }

    fn apply_theme(&mut self, theme: Theme) {
        self.events.push(ViewEvent::Theme(theme));
    }
}

/// Backend answering from a script and remembering what it was sent
#[derive(Default)]
pub struct ScriptedBackend {
    replies: RefCell<VecDeque<Result<ChatReply, ExchangeError>>>,
    pub sent: RefCell<Vec<String>>,
}

impl ScriptedBackend {
    pub fn new(replies: Vec<Result<ChatReply, ExchangeError>>) -> Self {
        Self {
            replies: RefCell::new(replies.into()),
            sent: RefCell::new(Vec::new()),
        }
    }

    pub fn answering(text: &str) -> Self {
        Self::new(vec![Ok(ChatReply::Message(text.to_string()))])
    }
}

#[async_trait(?Send)]
impl ChatBackend for ScriptedBackend {
    async fn send(&self, message: &str) -> Result<ChatReply, ExchangeError> {
        self.sent.borrow_mut().push(message.to_string());
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ExchangeError::Transport("script exhausted".to_string())))
    }
}

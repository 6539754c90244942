use chatbox_store::{HistoryStore, KeyValueStore, ThemeStore};
use chatbox_types::{ChatReply, ChatTurn, Sender, Theme, NETWORK_ERROR_MESSAGE};

use crate::{ChatBackend, ChatView, ExchangeError};

/// Whether a request is outstanding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Sending,
}

/// A user message accepted by [`ConversationController::begin`] and waiting
/// to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingExchange {
    /// Trimmed text to send
    pub message: String,
}

/// Result of [`ConversationController::begin`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Empty or whitespace-only input; nothing happened
    Ignored,
    /// Another request is still outstanding; nothing happened
    Busy,
    /// The user turn is recorded and the exchange may proceed
    Ready(PendingExchange),
}

/// How a submit settled
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Ignored,
    Busy,
    /// The backend answered with AI content
    Answered(ChatTurn),
    /// The backend reported an application error; the turn carries its text
    BackendError(ChatTurn),
    /// No usable reply; the turn carries the generic network error text
    TransportFailure(ChatTurn),
}

impl SubmitOutcome {
    /// The ai-side turn recorded for this submit, if any
    pub fn turn(&self) -> Option<&ChatTurn> {
        match self {
            SubmitOutcome::Answered(turn)
            | SubmitOutcome::BackendError(turn)
            | SubmitOutcome::TransportFailure(turn) => Some(turn),
            SubmitOutcome::Ignored | SubmitOutcome::Busy => None,
        }
    }
}

/// Ties user input, the history log, the backend exchange and the view
/// together.
///
/// One request at a time: the controller moves `Idle -> Sending` when a
/// submit is accepted and back to `Idle` once exactly one ai turn (real
/// content or error) has been rendered and recorded.
pub struct ConversationController<B, S, V> {
    backend: B,
    history: HistoryStore<S>,
    themes: ThemeStore<S>,
    view: V,
    state: ControllerState,
}

impl<B, S, V> ConversationController<B, S, V>
where
    B: ChatBackend,
    S: KeyValueStore + Clone,
    V: ChatView,
{
    /// `storage` backs both the history log and the theme preference
    pub fn new(backend: B, storage: S, view: V) -> Self {
        Self {
            backend,
            history: HistoryStore::new(storage.clone()),
            themes: ThemeStore::new(storage),
            view,
            state: ControllerState::Idle,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn history(&self) -> &HistoryStore<S> {
        &self.history
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn theme(&self) -> Theme {
        self.themes.current()
    }

    /// Page-load work: apply the saved theme and replay the stored log.
    /// Returns the number of turns replayed.
    pub fn load(&mut self) -> usize {
        let theme = self.themes.load();
        self.view.apply_theme(theme);

        let replayed = self.history.replay_all(&mut self.view);
        self.view.scroll_to_bottom();
        replayed
    }

    /// Re-render the stored log without touching the theme
    pub fn replay(&mut self) -> usize {
        let replayed = self.history.replay_all(&mut self.view);
        self.view.scroll_to_bottom();
        replayed
    }

    /// Flip and persist the theme, then apply it
    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.themes.toggle();
        self.view.apply_theme(theme);
        theme
    }

    /// Full exchange: record the user turn, call the backend, record the reply
    pub async fn submit(&mut self, input: &str) -> SubmitOutcome {
        let pending = match self.begin(input) {
            Submission::Ready(pending) => pending,
            Submission::Ignored => return SubmitOutcome::Ignored,
            Submission::Busy => return SubmitOutcome::Busy,
        };

        let result = self.backend.send(&pending.message).await;
        self.finish(result)
    }

    /// First half of [`submit`](Self::submit). Front-ends that share the
    /// controller across event handlers call this, perform the backend call
    /// without holding the controller, then call [`finish`](Self::finish).
    pub fn begin(&mut self, input: &str) -> Submission {
        let message = input.trim();
        if message.is_empty() {
            return Submission::Ignored;
        }

        if self.state == ControllerState::Sending {
            log::debug!("Rejecting submit while a request is outstanding");
            return Submission::Busy;
        }

        self.record(Sender::User, message, false);
        self.view.show_loading();
        self.view.scroll_to_bottom();
        self.state = ControllerState::Sending;

        Submission::Ready(PendingExchange {
            message: message.to_string(),
        })
    }

    /// Second half of [`submit`](Self::submit): drop the loading indicator,
    /// record exactly one ai turn and return to `Idle`.
    pub fn finish(&mut self, result: Result<ChatReply, ExchangeError>) -> SubmitOutcome {
        if self.state != ControllerState::Sending {
            log::warn!("Reply arrived while no request was outstanding");
        }

        self.view.hide_loading();

        let outcome = match result {
            Ok(ChatReply::Message(text)) => SubmitOutcome::Answered(self.record(Sender::Ai, text, false)),
            Ok(ChatReply::Error(text)) => {
                log::info!("Backend reported an error: {}", text);
                SubmitOutcome::BackendError(self.record(Sender::Ai, text, true))
            }
            Err(e) => {
                log::error!("Chat request failed: {}", e);
                SubmitOutcome::TransportFailure(self.record(Sender::Ai, NETWORK_ERROR_MESSAGE, true))
            }
        };

        self.view.scroll_to_bottom();
        self.state = ControllerState::Idle;
        outcome
    }

    fn record(&mut self, sender: Sender, message: impl Into<String>, is_error: bool) -> ChatTurn {
        let appended = self.history.append(sender, message, is_error);
        self.view.append_block(&appended.turn.to_block());
        appended.turn
    }
}

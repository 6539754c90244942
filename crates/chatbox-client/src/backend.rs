use std::rc::Rc;
use std::sync::Arc;

use async_trait::async_trait;
use chatbox_types::{ChatReply, ChatResponse};

use crate::ExchangeError;

/// The one network exchange of the widget: send the user's text, get back
/// either AI content or a backend-reported error.
///
/// Futures are not required to be `Send`; the browser backend runs on the
/// page's single thread.
#[async_trait(?Send)]
pub trait ChatBackend {
    async fn send(&self, message: &str) -> Result<ChatReply, ExchangeError>;
}

#[async_trait(?Send)]
impl<B: ChatBackend + ?Sized> ChatBackend for Rc<B> {
    async fn send(&self, message: &str) -> Result<ChatReply, ExchangeError> {
        (**self).send(message).await
    }
}

#[async_trait(?Send)]
impl<B: ChatBackend + ?Sized> ChatBackend for Arc<B> {
    async fn send(&self, message: &str) -> Result<ChatReply, ExchangeError> {
        (**self).send(message).await
    }
}

/// Interpret a reply from its HTTP status and raw body.
///
/// An `error` field is honoured whatever the status, since the backend sends
/// its error bodies with 5xx codes. A `message` counts only on 2xx.
pub fn decode_reply(status: u16, body: &[u8]) -> Result<ChatReply, ExchangeError> {
    let success = (200..300).contains(&status);

    match serde_json::from_slice::<ChatResponse>(body) {
        Ok(response) => response.into_reply(success).ok_or(if success {
            ExchangeError::Malformed("reply has neither message nor error".to_string())
        } else {
            ExchangeError::Status { status }
        }),
        Err(e) if success => Err(ExchangeError::Malformed(e.to_string())),
        Err(_) => Err(ExchangeError::Status { status }),
    }
}

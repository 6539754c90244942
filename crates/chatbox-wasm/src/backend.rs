use async_trait::async_trait;
use chatbox_client::{decode_reply, ChatBackend, ExchangeError};
use chatbox_types::{ChatReply, ChatRequest, CHAT_ENDPOINT};
use gloo_net::http::Request;

/// Backend using the page's `fetch`, posting to the same origin
pub struct FetchBackend {
    url: String,
}

impl FetchBackend {
    pub fn new() -> Self {
        Self::with_url(CHAT_ENDPOINT)
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for FetchBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl ChatBackend for FetchBackend {
    async fn send(&self, message: &str) -> Result<ChatReply, ExchangeError> {
        let request = Request::post(&self.url)
            .json(&ChatRequest {
                message: message.to_string(),
            })
            .map_err(|e| ExchangeError::Transport(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| ExchangeError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .binary()
            .await
            .map_err(|e| ExchangeError::Transport(format!("Failed to read reply: {}", e)))?;

        log::debug!("Chat reply: HTTP {} ({} bytes)", status, body.len());

        decode_reply(status, &body)
    }
}

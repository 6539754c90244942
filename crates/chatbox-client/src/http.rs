use std::time::Duration;

use async_trait::async_trait;
use chatbox_types::{ChatReply, ChatRequest, CHAT_ENDPOINT};

use crate::{decode_reply, ChatBackend, ExchangeError};

/// Native backend posting to `{base_url}/api/chat` with reqwest
pub struct HttpBackend {
    url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    /// Backend without a request timeout
    pub fn new(base_url: &str) -> Result<Self, ExchangeError> {
        Self::with_timeout(base_url, None)
    }

    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self, ExchangeError> {
        // Ensure base_url doesn't end with a slash
        let base_url = base_url.trim_end_matches('/');

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ExchangeError::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            url: format!("{}{}", base_url, CHAT_ENDPOINT),
            client,
        })
    }

    /// Full endpoint URL requests go to
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait(?Send)]
impl ChatBackend for HttpBackend {
    async fn send(&self, message: &str) -> Result<ChatReply, ExchangeError> {
        let request = ChatRequest {
            message: message.to_string(),
        };

        log::debug!("POST {} ({} bytes of input)", self.url, message.len());

        let response = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(ExchangeError::from)?;

        let status = response.status();
        let body = response.bytes().await.map_err(ExchangeError::from)?;

        log::debug!("Chat reply: HTTP {} ({} bytes)", status, body.len());

        decode_reply(status.as_u16(), &body)
    }
}

impl From<reqwest::Error> for ExchangeError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ExchangeError::Timeout
        } else {
            ExchangeError::Transport(e.to_string())
        }
    }
}

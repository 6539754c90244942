use thiserror::Error;

/// Ways the `/api/chat` exchange can fail without a usable reply.
///
/// Every variant ends up as the same generic error turn for the user; the
/// detail only reaches the log.
#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,

    #[error("backend returned HTTP {status} without an error message")]
    Status { status: u16 },

    #[error("unexpected reply body: {0}")]
    Malformed(String),
}

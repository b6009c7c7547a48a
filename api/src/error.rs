use thiserror::Error;

/// Everything that can go wrong talking to (or refusing to talk to) the
/// backend. All variants surface as an inline message in the UI; none are
/// retried and none are fatal — the form returns to an editable idle state.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Local pre-submit validation failed; the request was never sent.
    #[error("{0}")]
    Validation(String),

    /// The network round trip itself failed (unreachable host, non-2xx
    /// status with an unreadable body, malformed JSON).
    #[error("Something went wrong. Try again.")]
    Transport(#[source] TransportReason),

    /// The backend answered but reported `success: false`.
    #[error("{0}")]
    Application(String),
}

/// Underlying cause of a [`ApiError::Transport`], kept for diagnostics.
#[derive(Debug, Error)]
pub enum TransportReason {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed response body")]
    Decode(#[source] reqwest::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(TransportReason::Http(err))
    }
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    /// Backend failure message, with a fallback when the body carried none.
    pub fn application(message: Option<String>, fallback: &str) -> Self {
        ApiError::Application(message.unwrap_or_else(|| fallback.to_string()))
    }
}

use reqwest::StatusCode;
use thiserror::Error;

/// Per-request failure modes. None of these abort a run; each is recorded as
/// a failed outcome with its elapsed-to-failure latency.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("request timed out")]
    Timeout,

    #[error("transport failure: {0}")]
    Transport(reqwest::Error),

    #[error("gateway returned status {0}")]
    Status(StatusCode),
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RequestError::Timeout
        } else {
            RequestError::Transport(err)
        }
    }
}

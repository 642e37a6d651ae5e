use thiserror::Error;

/// Failure branches for a random-article fetch. Each maps deterministically
/// to the fallback article at the round-service boundary; keeping them
/// distinct lets tests exercise one branch at a time.
#[derive(Debug, Error)]
pub enum ArticleError {
    #[error("Request error: {0}")]
    Request(String),

    #[error("Unexpected status code: {0}")]
    Status(u16),

    #[error("Malformed response body: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ArticleError {
    fn from(error: reqwest::Error) -> Self {
        if let Some(status) = error.status() {
            ArticleError::Status(status.as_u16())
        } else if error.is_decode() {
            ArticleError::Parse(error.to_string())
        } else {
            // Timeouts, DNS failures, refused connections.
            ArticleError::Request(error.to_string())
        }
    }
}

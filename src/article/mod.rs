mod errors;
pub mod models;
pub mod query_source;
pub mod summary_source;

pub use errors::ArticleError;
pub use models::RandomArticle;
pub use query_source::QueryApiSource;
pub use summary_source::SummaryApiSource;

use async_trait::async_trait;
use std::time::Duration;

/// Identifying agent string sent with every Wikipedia request, as the API
/// etiquette guidelines ask of automated clients.
pub const USER_AGENT: &str = "wikihop/0.1 (local hyperlink game)";

/// Upper bound on any single article fetch.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(6);

/// Substitute article used whenever a fetch fails. The round must always be
/// playable, so network trouble degrades to this fixed pair member instead
/// of surfacing an error.
pub const FALLBACK_TITLE: &str = "Wikipedia";
pub const FALLBACK_URL: &str = "https://es.wikipedia.org/wiki/Wikipedia:Portada";

/// Supplier of one pseudo-random encyclopedia article per call.
///
/// Implementations wrap a remote endpoint; callers decide how to degrade
/// when a fetch fails (see `RoundService`).
#[async_trait]
pub trait ArticleSource: Send + Sync {
    async fn fetch_random(&self) -> Result<RandomArticle, ArticleError>;
}

/// Builds the shared HTTP client used by both source implementations.
pub fn http_client() -> Result<reqwest::Client, ArticleError> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| ArticleError::Request(e.to_string()))
}

use async_trait::async_trait;
use serde_json::Value;

use super::{ArticleError, ArticleSource, RandomArticle};

const SUMMARY_ENDPOINT: &str = "https://es.wikipedia.org/api/rest_v1/page/random/summary";

/// Article source backed by the REST v1 random-summary endpoint. One GET
/// returns both the title and the canonical desktop address.
pub struct SummaryApiSource {
    client: reqwest::Client,
    endpoint: String,
}

impl SummaryApiSource {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            endpoint: SUMMARY_ENDPOINT.to_string(),
        }
    }

    /// Override the endpoint, used by tests pointing at a local server.
    #[allow(dead_code)]
    pub fn with_endpoint(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl ArticleSource for SummaryApiSource {
    async fn fetch_random(&self) -> Result<RandomArticle, ArticleError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(ArticleError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ArticleError::Status(status.as_u16()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ArticleError::Parse(e.to_string()))?;

        parse_summary(&body)
    }
}

/// Extracts title and desktop page address from a summary response body.
fn parse_summary(body: &Value) -> Result<RandomArticle, ArticleError> {
    let title = body
        .get("title")
        .and_then(Value::as_str)
        .ok_or_else(|| ArticleError::Parse("missing title field".to_string()))?;

    let url = body
        .pointer("/content_urls/desktop/page")
        .and_then(Value::as_str)
        .ok_or_else(|| ArticleError::Parse("missing desktop page url".to_string()))?;

    Ok(RandomArticle::new(title, url))
}

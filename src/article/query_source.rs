use async_trait::async_trait;
use serde_json::Value;

use super::{ArticleError, ArticleSource, RandomArticle};

const QUERY_ENDPOINT: &str = "https://es.wikipedia.org/w/api.php";
const ARTICLE_BASE: &str = "https://es.wikipedia.org/wiki/";

/// Article source backed by the action API's random-page generator. The
/// response only carries a title, so the viewable address is built from it.
pub struct QueryApiSource {
    client: reqwest::Client,
    endpoint: String,
}

impl QueryApiSource {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            endpoint: QUERY_ENDPOINT.to_string(),
        }
    }

    #[allow(dead_code)]
    pub fn with_endpoint(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl ArticleSource for QueryApiSource {
    async fn fetch_random(&self) -> Result<RandomArticle, ArticleError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("action", "query"),
                ("format", "json"),
                ("list", "random"),
                // Main namespace only, one page per draw.
                ("rnnamespace", "0"),
                ("rnlimit", "1"),
            ])
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

        parse_query(&body)
    }
}

fn parse_query(body: &Value) -> Result<RandomArticle, ArticleError> {
    let title = body
        .pointer("/query/random/0/title")
        .and_then(Value::as_str)
        .ok_or_else(|| ArticleError::Parse("missing random page title".to_string()))?;

    Ok(RandomArticle::new(title, article_url(title)))
}

/// Canonical article address: spaces become underscores, the rest is
/// percent-escaped.
fn article_url(title: &str) -> String {
    let path = title.replace(' ', "_");
    format!("{}{}", ARTICLE_BASE, urlencoding::encode(&path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_random_page_title() {
        let body = json!({
            "batchcomplete": "",
            "query": {
                "random": [
                    { "id": 12345, "ns": 0, "title": "Pico Sacro" }
                ]
            }
        });

        let article = parse_query(&body).unwrap();
        assert_eq!(article.title, "Pico Sacro");
        assert_eq!(article.url, "https://es.wikipedia.org/wiki/Pico_Sacro");
    }

    #[test]
    fn escapes_non_ascii_titles() {
        let url = article_url("Camiño de Santiago");
        assert_eq!(
            url,
            "https://es.wikipedia.org/wiki/Cami%C3%B1o_de_Santiago"
        );
    }

    #[test]
    fn empty_random_list_is_a_parse_error() {
        let body = json!({ "query": { "random": [] } });
        assert!(matches!(parse_query(&body), Err(ArticleError::Parse(_))));
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::article::ArticleSource;
use crate::ledger::{LedgerError, LedgerRepository};
use crate::round::RoundSessionStore;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<dyn LedgerRepository>,
    pub articles: Arc<dyn ArticleSource>,
    pub rounds: RoundSessionStore,
}

impl AppState {
    pub fn new(
        ledger: Arc<dyn LedgerRepository>,
        articles: Arc<dyn ArticleSource>,
        rounds: RoundSessionStore,
    ) -> Self {
        Self {
            ledger,
            articles,
            rounds,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No round has been drawn for this session")]
    NoActiveRound,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal server error")]
    Internal,
}

impl From<LedgerError> for AppError {
    fn from(error: LedgerError) -> Self {
        AppError::Storage(error.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::NoActiveRound => (
                StatusCode::CONFLICT,
                "No round has been drawn for this session".to_string(),
            ),
            AppError::Storage(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Storage error: {}", msg),
            ),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
pub mod test_utils {
    use super::*;
    use crate::article::{ArticleError, RandomArticle};
    use crate::ledger::InMemoryLedgerRepository;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use tokio::sync::Mutex;

    /// Article source that replays a fixed script of responses. Once the
    /// script is exhausted every further fetch fails, which exercises the
    /// fallback path.
    pub struct ScriptedArticleSource {
        responses: Mutex<VecDeque<Result<RandomArticle, ArticleError>>>,
        fetches: Mutex<usize>,
    }

    impl ScriptedArticleSource {
        pub fn new(responses: Vec<Result<RandomArticle, ArticleError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                fetches: Mutex::new(0),
            }
        }

        /// Script of successful fetches, one article per title.
        pub fn of_titles(titles: &[&str]) -> Self {
            Self::new(
                titles
                    .iter()
                    .map(|title| {
                        Ok(RandomArticle::new(
                            *title,
                            format!("https://es.wikipedia.org/wiki/{title}"),
                        ))
                    })
                    .collect(),
            )
        }

        pub async fn fetch_count(&self) -> usize {
            *self.fetches.lock().await
        }
    }

    #[async_trait]
    impl ArticleSource for ScriptedArticleSource {
        async fn fetch_random(&self) -> Result<RandomArticle, ArticleError> {
            *self.fetches.lock().await += 1;
            self.responses
                .lock()
                .await
                .pop_front()
                .unwrap_or_else(|| Err(ArticleError::Request("script exhausted".to_string())))
        }
    }

    /// Builder for creating AppState with overrides for testing
    pub struct AppStateBuilder {
        ledger: Option<Arc<dyn LedgerRepository>>,
        articles: Option<Arc<dyn ArticleSource>>,
        rounds: Option<RoundSessionStore>,
    }

    impl AppStateBuilder {
        pub fn new() -> Self {
            Self {
                ledger: None,
                articles: None,
                rounds: None,
            }
        }

        pub fn with_ledger(mut self, ledger: Arc<dyn LedgerRepository>) -> Self {
            self.ledger = Some(ledger);
            self
        }

        pub fn with_articles(mut self, articles: Arc<dyn ArticleSource>) -> Self {
            self.articles = Some(articles);
            self
        }

        pub fn with_rounds(mut self, rounds: RoundSessionStore) -> Self {
            self.rounds = Some(rounds);
            self
        }

        pub fn build(self) -> AppState {
            AppState {
                ledger: self
                    .ledger
                    .unwrap_or_else(|| Arc::new(InMemoryLedgerRepository::new())),
                articles: self
                    .articles
                    .unwrap_or_else(|| Arc::new(ScriptedArticleSource::of_titles(&[]))),
                rounds: self.rounds.unwrap_or_default(),
            }
        }
    }

    impl Default for AppStateBuilder {
        fn default() -> Self {
            Self::new()
        }
    }
}

use std::sync::Arc;
use tracing::warn;

use crate::article::{ArticleSource, RandomArticle};

use super::models::RoundPair;

/// How many destination fetches a draw may spend avoiding an
/// origin/destination with the same title.
pub const DEDUP_RETRY_LIMIT: usize = 8;

/// Draws the article pair for a round. Every fetch failure degrades to the
/// fixed fallback article; a draw never fails.
pub struct RoundService {
    articles: Arc<dyn ArticleSource>,
}

impl RoundService {
    pub fn new(articles: Arc<dyn ArticleSource>) -> Self {
        Self { articles }
    }

    /// Fetches origin and destination independently, retrying the
    /// destination up to the budget when both titles match. An identical
    /// pair is still accepted once the budget runs out: an odd round beats
    /// a failed draw.
    pub async fn draw_new_pair(&self) -> RoundPair {
        let origin = self.fetch_or_fallback().await;

        let mut destination = self.fetch_or_fallback().await;
        let mut attempts = 1;
        while destination.title == origin.title && attempts < DEDUP_RETRY_LIMIT {
            destination = self.fetch_or_fallback().await;
            attempts += 1;
        }

        if destination.title == origin.title {
            warn!(
                title = %origin.title,
                attempts,
                "accepting identical pair after exhausting dedup retries"
            );
        }

        RoundPair {
            origin,
            destination,
        }
    }

    async fn fetch_or_fallback(&self) -> RandomArticle {
        match self.articles.fetch_random().await {
            Ok(article) => article,
            Err(error) => {
                warn!(%error, "article fetch failed, using fallback");
                RandomArticle::fallback()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_utils::ScriptedArticleSource;

    #[tokio::test]
    async fn draws_two_distinct_articles() {
        let source = Arc::new(ScriptedArticleSource::of_titles(&["Lugo", "Ourense"]));
        let service = RoundService::new(source);

        let pair = service.draw_new_pair().await;
        assert_eq!(pair.origin.title, "Lugo");
        assert_eq!(pair.destination.title, "Ourense");
    }

    #[tokio::test]
    async fn failed_fetches_yield_the_fallback_pair() {
        // Empty script: every fetch errors out.
        let source = Arc::new(ScriptedArticleSource::of_titles(&[]));
        let service = RoundService::new(source);

        let pair = service.draw_new_pair().await;
        assert_eq!(pair.origin, RandomArticle::fallback());
        assert_eq!(pair.destination, RandomArticle::fallback());
    }

    #[tokio::test]
    async fn retries_until_titles_differ() {
        let source = Arc::new(ScriptedArticleSource::of_titles(&[
            "Lugo", "Lugo", "Lugo", "Lugo", "Ourense",
        ]));
        let service = RoundService::new(source);

        let pair = service.draw_new_pair().await;
        assert_eq!(pair.origin.title, "Lugo");
        assert_eq!(pair.destination.title, "Ourense");
    }

    #[tokio::test]
    async fn accepts_identical_pair_after_retry_budget() {
        let titles = vec!["Lugo"; DEDUP_RETRY_LIMIT + 5];
        let source = Arc::new(ScriptedArticleSource::of_titles(&titles));
        let service = RoundService::new(source);

        let pair = service.draw_new_pair().await;
        assert_eq!(pair.origin.title, pair.destination.title);
    }

    #[tokio::test]
    async fn retry_budget_is_bounded() {
        let titles = vec!["Lugo"; 50];
        let source = Arc::new(ScriptedArticleSource::of_titles(&titles));
        let service = RoundService::new(Arc::clone(&source) as Arc<dyn ArticleSource>);

        service.draw_new_pair().await;
        // Origin plus at most the destination budget.
        assert!(source.fetch_count().await <= 1 + DEDUP_RETRY_LIMIT);
    }
}

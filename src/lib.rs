// Library crate for the wikihop game server
// This file exposes the public API for integration tests

pub mod article;
pub mod ledger;
pub mod round;
pub mod scoring;
pub mod shared;
pub mod stats;
pub mod web;

// Re-export commonly used types for easier access in tests
pub use article::{ArticleError, ArticleSource, RandomArticle};
pub use ledger::{GameResult, InMemoryLedgerRepository, LedgerRepository, Player};
pub use round::{RoundPair, RoundService, RoundSessionStore};
pub use shared::{AppError, AppState};
pub use stats::{PlayerSummary, SeriesPoint, StatsService};

mod errors;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod types;

pub use errors::LedgerError;
pub use models::{GameResult, Player};
pub use repository::{CsvLedgerRepository, InMemoryLedgerRepository, LedgerRepository};

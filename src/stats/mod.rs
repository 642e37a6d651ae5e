pub mod handlers;
pub mod models;
pub mod service;

pub use models::{PlayerSummary, SeriesPoint};
pub use service::StatsService;

/// Rows shown in the recent-activity table.
pub const RECENT_LIMIT: usize = 10;
/// Rows shown in the last-games podium snapshot.
pub const PODIUM_LIMIT: usize = 5;

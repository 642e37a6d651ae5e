use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One ranking row, recomputed from the ledger on demand and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub player: String,
    pub games_played: u32,
    pub total_points: u32,
    pub mean_points: f64,
    pub mean_jumps: f64,
}

/// One point of the points-over-time chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub timestamp: DateTime<Utc>,
    pub points: u32,
    pub player: String,
}

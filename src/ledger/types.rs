use serde::Deserialize;

use super::models::Player;

/// Request payload for saving a finished round. The round's articles come
/// from the session's drawn pair, not from the client.
#[derive(Debug, Deserialize)]
pub struct SaveScoreRequest {
    pub player: Player,
    pub jump_count: u32,
}

/// Query parameters for the recent-results table.
#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<usize>,
}

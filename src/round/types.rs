use serde::{Deserialize, Serialize};

use super::models::RoundPair;

/// Response for drawing or inspecting a round. `pair` is `null` when the
/// session has not drawn yet.
#[derive(Debug, Serialize, Deserialize)]
pub struct RoundResponse {
    pub session_id: String,
    pub pair: Option<RoundPair>,
}

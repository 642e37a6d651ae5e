use axum::{
    extract::{Query, State},
    http::HeaderMap,
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::models::{GameResult, Player};
use super::types::{RecentQuery, SaveScoreRequest};
use crate::round::session::session_id_from_headers;
use crate::scoring::compute_points;
use crate::shared::{AppError, AppState};
use crate::stats::{self, RECENT_LIMIT};

/// HTTP handler for saving a round result
///
/// POST /api/scores
/// Scores the reported jump count against the session's current pair and
/// appends a row to the ledger.
#[instrument(name = "save_score", skip(state, headers))]
pub async fn save_score(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<SaveScoreRequest>,
) -> Result<Json<GameResult>, AppError> {
    if request.jump_count < 1 {
        return Err(AppError::Validation(
            "jump_count must be at least 1".to_string(),
        ));
    }

    let session_id = session_id_from_headers(&headers)
        .ok_or_else(|| AppError::Validation("missing x-session-id header".to_string()))?;

    let pair = state
        .rounds
        .current(&session_id)
        .await
        .ok_or(AppError::NoActiveRound)?;

    let points = compute_points(request.jump_count);
    let result = GameResult::recorded_now(
        request.player,
        pair.origin.title,
        pair.destination.title,
        request.jump_count,
        points,
    );

    state.ledger.append(result.clone()).await?;

    info!(
        player = %result.player,
        jump_count = result.jump_count,
        points = result.points,
        "Score saved"
    );

    Ok(Json(result))
}

/// HTTP handler for the recent-results table
///
/// GET /api/scores/recent?limit=N (default 10)
#[instrument(name = "recent_scores", skip(state))]
pub async fn recent_scores(
    State(state): State<AppState>,
    Query(query): Query<RecentQuery>,
) -> Result<Json<Vec<GameResult>>, AppError> {
    let rows = state.ledger.read_all().await?;
    let limit = query.limit.unwrap_or(RECENT_LIMIT);
    Ok(Json(stats::service::recent(&rows, limit)))
}

/// HTTP handler for the fixed player roster
///
/// GET /api/players
#[instrument]
pub async fn roster() -> Json<Vec<String>> {
    Json(Player::roster())
}

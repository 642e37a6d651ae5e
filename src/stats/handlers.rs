use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::instrument;

use super::models::{PlayerSummary, SeriesPoint};
use super::service::StatsService;
use crate::ledger::GameResult;
use crate::shared::{AppError, AppState};

/// HTTP handler for the per-player ranking
///
/// GET /api/stats/summary
#[instrument(name = "stats_summary", skip(state))]
pub async fn summary(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlayerSummary>>, AppError> {
    let service = StatsService::new(Arc::clone(&state.ledger));
    Ok(Json(service.summary().await?))
}

/// HTTP handler for the points-over-time chart data
///
/// GET /api/stats/series
#[instrument(name = "stats_series", skip(state))]
pub async fn series(State(state): State<AppState>) -> Result<Json<Vec<SeriesPoint>>, AppError> {
    let service = StatsService::new(Arc::clone(&state.ledger));
    Ok(Json(service.series().await?))
}

/// HTTP handler for the most-recent-games podium snapshot
///
/// GET /api/stats/podium
#[instrument(name = "stats_podium", skip(state))]
pub async fn podium(State(state): State<AppState>) -> Result<Json<Vec<GameResult>>, AppError> {
    let service = StatsService::new(Arc::clone(&state.ledger));
    Ok(Json(service.podium().await?))
}

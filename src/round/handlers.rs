use axum::{extract::State, http::HeaderMap, Json};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    service::RoundService,
    session::{generate_session_id, session_id_from_headers},
    types::RoundResponse,
};
use crate::shared::{AppError, AppState};

/// HTTP handler for drawing a new article pair
///
/// POST /api/round/draw
/// Issues a session id when the page does not send one yet.
#[instrument(name = "draw_round", skip(state, headers))]
pub async fn draw_round(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<RoundResponse>, AppError> {
    let session_id = session_id_from_headers(&headers).unwrap_or_else(generate_session_id);

    let service = RoundService::new(Arc::clone(&state.articles));
    let pair = service.draw_new_pair().await;

    info!(
        session_id = %session_id,
        origin = %pair.origin.title,
        destination = %pair.destination.title,
        "Drew new round pair"
    );

    state.rounds.put(&session_id, pair.clone()).await;

    Ok(Json(RoundResponse {
        session_id,
        pair: Some(pair),
    }))
}

/// HTTP handler for the session's current pair, if any
///
/// GET /api/round
#[instrument(name = "current_round", skip(state, headers))]
pub async fn current_round(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<RoundResponse>, AppError> {
    let session_id = session_id_from_headers(&headers)
        .ok_or_else(|| AppError::Validation("missing x-session-id header".to_string()))?;

    let pair = state.rounds.current(&session_id).await;

    Ok(Json(RoundResponse { session_id, pair }))
}

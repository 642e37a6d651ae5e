use axum::{
    response::Html,
    routing::{get, post},
    Router,
};

use crate::shared::AppState;
use crate::{ledger, round, stats};

/// Serves the embedded two-tab page (Play / Statistics).
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

/// Full application router: the page plus the JSON API it consumes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/players", get(ledger::handlers::roster))
        .route("/api/round/draw", post(round::handlers::draw_round))
        .route("/api/round", get(round::handlers::current_round))
        .route("/api/scores", post(ledger::handlers::save_score))
        .route("/api/scores/recent", get(ledger::handlers::recent_scores))
        .route("/api/stats/summary", get(stats::handlers::summary))
        .route("/api/stats/series", get(stats::handlers::series))
        .route("/api/stats/podium", get(stats::handlers::podium))
        .with_state(state)
}

use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wikihop::article::{http_client, SummaryApiSource};
use wikihop::ledger::{CsvLedgerRepository, LedgerRepository};
use wikihop::round::RoundSessionStore;
use wikihop::shared::AppState;
use wikihop::web;

const LEDGER_FILE: &str = "scores.csv";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wikihop=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting wikihop game server");

    let ledger = Arc::new(CsvLedgerRepository::new(LEDGER_FILE));
    if let Err(error) = ledger.ensure_initialized().await {
        warn!(%error, "could not initialize ledger file");
    }

    // The query-style source (QueryApiSource) is a drop-in alternative here.
    let client = http_client().expect("failed to build http client");
    let articles = Arc::new(SummaryApiSource::new(client));

    let app_state = AppState::new(ledger, articles, RoundSessionStore::new());

    let app = web::router(app_state).layer(TraceLayer::new_for_http());

    // Local interactive tool: loopback only.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000")
        .await
        .unwrap();
    info!("Server running on http://localhost:3000");
    axum::serve(listener, app).await.unwrap();
}

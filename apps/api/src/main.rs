mod assessment;
mod config;
mod errors;
mod extract;
mod jobs;
mod routes;
mod sink;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extract::DocumentTextExtractor;
use crate::jobs::HttpJobBoardClient;
use crate::routes::build_router;
use crate::sink::CsvResultSink;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Risk API v{}", env!("CARGO_PKG_VERSION"));

    let extractor = Arc::new(DocumentTextExtractor);

    let job_board = Arc::new(HttpJobBoardClient::new(config.jobs_api_base_url.clone()));
    info!("Job board client initialized ({})", config.jobs_api_base_url);

    let sink = Arc::new(CsvResultSink::new(config.results_csv_path.clone()));
    info!("Result sink initialized ({})", config.results_csv_path);

    let state = AppState {
        config: config.clone(),
        extractor,
        job_board,
        sink,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

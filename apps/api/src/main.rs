mod analysis;
mod config;
mod errors;
mod insights;
mod jobs;
mod llm_client;
mod report;
mod resume;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::jobs::naukri::ACTOR_TIMEOUT;
use crate::jobs::{
    build_http_client, AdzunaSource, JobSource, NaukriSource, RemoteOkSource, BOARD_TIMEOUT,
};
use crate::llm_client::LlmClient;
use crate::report::ReportRenderer;
use crate::routes::build_router;
use crate::state::AppState;

/// Adzuna's free-text `where` filter.
const ADZUNA_LOCATION: &str = "india";

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Insight API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(config.llm_config()).context("Failed to build LLM client")?;
    info!("LLM client initialized (model: {})", llm.model());

    // Initialize job boards (unconfigured boards stay registered and report as such)
    let job_sources = build_job_sources(&config)?;
    info!(
        "Job boards: adzuna={} naukri={}",
        configured_label(config.adzuna_credentials().is_some()),
        configured_label(config.apify_api_token.is_some()),
    );

    let renderer = ReportRenderer::new(config.typst_bin.clone());

    // Build app state
    let state = AppState {
        llm: Arc::new(llm),
        job_sources: job_sources.into(),
        renderer,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn configured_label(configured: bool) -> &'static str {
    if configured {
        "configured"
    } else {
        "not configured"
    }
}

/// Boards in response order: RemoteOK, Adzuna, Naukri.
fn build_job_sources(config: &Config) -> Result<Vec<Arc<dyn JobSource>>> {
    let board_client =
        build_http_client(BOARD_TIMEOUT).context("Failed to build job board HTTP client")?;
    let actor_client =
        build_http_client(ACTOR_TIMEOUT).context("Failed to build Apify HTTP client")?;

    Ok(vec![
        Arc::new(RemoteOkSource::new(board_client.clone())),
        Arc::new(AdzunaSource::new(
            board_client,
            config.adzuna_credentials(),
            config.adzuna_country.clone(),
            ADZUNA_LOCATION,
        )),
        Arc::new(NaukriSource::new(
            actor_client,
            config.apify_api_token.clone(),
        )),
    ])
}

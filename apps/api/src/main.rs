mod analytics;
mod applications;
mod auth;
mod config;
mod db;
mod errors;
mod jobs;
mod models;
mod profiles;
mod resume;
mod routes;
mod state;
mod store;
#[cfg(test)]
mod testing;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::TokenKeys;
use crate::config::Config;
use crate::db::{create_pool, init_schema};
use crate::resume::analyzer::HttpResumeAnalyzer;
use crate::resume::storage::ResumeStorage;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{MemoryStore, PgStore, PlacementStore};

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

    info!("Starting Placement API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the store: PostgreSQL when configured, in-memory otherwise
    let store: Arc<dyn PlacementStore> = match &config.database_url {
        Some(url) => {
            let pool = create_pool(url).await?;
            init_schema(&pool).await?;
            Arc::new(PgStore::new(pool))
        }
        None => {
            warn!("DATABASE_URL not set; using the in-memory store (data is lost on exit)");
            Arc::new(MemoryStore::new())
        }
    };

    // Initialize the resume-analysis client
    let analyzer = HttpResumeAnalyzer::new(&config.ai_engine_url, config.analysis_timeout)?;
    match config.analysis_timeout {
        Some(timeout) => info!(
            "Resume analysis engine at {} (timeout {:?})",
            analyzer.endpoint(),
            timeout
        ),
        None => warn!(
            "Resume analysis engine at {} has no timeout; a hung engine blocks uploads",
            analyzer.endpoint()
        ),
    }

    let storage = ResumeStorage::new(&config.upload_dir);
    info!("Storing uploaded resumes under {}", storage.root().display());

    // Build app state
    let state = AppState {
        store,
        analyzer: Arc::new(analyzer),
        storage,
        tokens: TokenKeys::new(&config.jwt_secret, config.jwt_expiry_hours),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

use std::sync::Arc;

use crate::auth::TokenKeys;
use crate::config::Config;
use crate::resume::analyzer::ResumeAnalyzer;
use crate::resume::storage::ResumeStorage;
use crate::store::PlacementStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Repository backend. `PgStore` when DATABASE_URL is set, otherwise `MemoryStore`.
    pub store: Arc<dyn PlacementStore>,
    /// Client for the external resume-analysis engine.
    pub analyzer: Arc<dyn ResumeAnalyzer>,
    pub storage: ResumeStorage,
    pub tokens: TokenKeys,
    pub config: Config,
}

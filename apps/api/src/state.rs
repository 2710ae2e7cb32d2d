use std::sync::Arc;

use crate::catalog::Catalog;
use crate::recommendation::engine::RecommendationEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when the catalog failed to load at startup; recommendations are
    /// refused until the process is restarted with a readable catalog.
    pub catalog: Option<Arc<Catalog>>,
    pub engine: Arc<RecommendationEngine>,
}

mod catalog;
mod config;
mod errors;
mod recommendation;
mod resources;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::catalog::{loader, Catalog};
use crate::config::Config;
use crate::recommendation::engine::{EngineConfig, RecommendationEngine};
use crate::resources::ResourceCatalog;
use crate::routes::build_router;
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

    info!("Starting SkillSnap API v{}", env!("CARGO_PKG_VERSION"));

    // A missing or malformed catalog leaves the service up but unable to recommend
    let catalog = load_catalog(&config);

    let resources = match &config.resources_path {
        Some(path) => ResourceCatalog::from_json_file(path).with_context(|| {
            format!("Failed to load resource catalog from {}", path.display())
        })?,
        None => ResourceCatalog::builtin(),
    };
    info!("Resource catalog ready ({} entries)", resources.len());

    let mut engine_config = EngineConfig::default();
    if let Some(window) = config.candidate_window {
        engine_config.candidate_window = window;
    }
    info!(
        "Engine config: window={} threshold={} max_results={}",
        engine_config.candidate_window,
        engine_config.inclusion_threshold,
        engine_config.max_results
    );

    let state = AppState {
        catalog,
        engine: Arc::new(RecommendationEngine::new(resources, engine_config)),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn load_catalog(config: &Config) -> Option<Arc<Catalog>> {
    match loader::load(&config.catalog_path) {
        Ok(catalog) => {
            if catalog.is_empty() {
                warn!("Catalog {} contains no postings", catalog.source());
            }
            Some(Arc::new(catalog))
        }
        Err(e) => {
            error!("Catalog failed to load, recommendations unavailable: {e}");
            None
        }
    }
}

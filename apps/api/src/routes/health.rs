use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service version and catalog availability. Always 200: liveness is
/// reported separately from whether recommendations can be served.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let catalog = match &state.catalog {
        Some(catalog) => json!({
            "loaded": true,
            "postings": catalog.len(),
            "source": catalog.source(),
            "loaded_at": catalog.loaded_at(),
        }),
        None => json!({ "loaded": false }),
    };

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "skillsnap-api",
        "catalog": catalog
    }))
}

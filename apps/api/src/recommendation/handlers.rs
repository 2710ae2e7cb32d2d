//! Axum route handlers for the Recommendation API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;

use crate::errors::AppError;
use crate::recommendation::engine::Recommendation;
use crate::recommendation::profile::Profile;
use crate::state::AppState;

/// POST /api/v1/recommend
///
/// Returns up to four ranked internships for the submitted profile.
/// 503 when the catalog failed to load; an empty array means no matches.
pub async fn handle_recommend(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Vec<Recommendation>>, AppError> {
    let Json(body) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let profile = parse_profile(body)?;

    let recommendations = state
        .engine
        .recommend(state.catalog.as_deref(), &profile)?;

    Ok(Json(recommendations))
}

/// Only a JSON object is a profile; serde would otherwise read an array
/// positionally into the struct fields.
fn parse_profile(body: Value) -> Result<Profile, AppError> {
    if !body.is_object() {
        return Err(AppError::Validation(
            "Request body must be a JSON object".to_string(),
        ));
    }
    serde_json::from_value(body).map_err(|e| AppError::Validation(e.to_string()))
}

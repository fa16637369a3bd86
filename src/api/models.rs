use axum::Json;

use crate::prompts::CURATED_MODELS;
use crate::schema::ModelDescriptor;

/// Static curated model list; no failure path.
pub async fn list_models() -> Json<&'static [ModelDescriptor]> {
    Json(CURATED_MODELS)
}

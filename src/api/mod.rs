pub mod generate_batch;
pub mod models;
pub mod regenerate;

use std::sync::Arc;

use axum::Json;
use serde_json::{Value, json};

use crate::runware::RunwareClient;
use crate::store::BasePromptStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BasePromptStore>,
    pub runware: RunwareClient,
}

impl AppState {
    pub fn new(store: Arc<dyn BasePromptStore>, runware: RunwareClient) -> Self {
        Self { store, runware }
    }
}

pub async fn health() -> Json<Value> {
    Json(json!({
        "message": "Ad Image Studio API",
        "status": "healthy",
        "endpoints": {
            "generateBatch": "/api/images/generate-batch",
            "regenerate": "/api/images/regenerate",
            "models": "/api/images/models",
        }
    }))
}

pub use generate_batch::generate_batch;
pub use models::list_models;
pub use regenerate::regenerate;

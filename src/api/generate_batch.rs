use axum::Json;
use axum::extract::State;

use crate::api::AppState;
use crate::error::ApiError;
use crate::prompts::build_five_variants;
use crate::runware::TaskDescriptor;
use crate::schema::{AdInput, GeneratedImage};
use crate::shape::shape_batch;

/// Builds five prompt variants, runs them as one batched remote call, and
/// shapes the results. All-or-nothing: any upstream failure rejects the whole
/// batch.
pub async fn generate_batch(
    State(state): State<AppState>,
    Json(input): Json<AdInput>,
) -> Result<Json<Vec<GeneratedImage>>, ApiError> {
    input.validate()?;
    let variants = build_five_variants(&input, state.store.as_ref());
    let tasks: Vec<TaskDescriptor> = variants
        .iter()
        .map(|variant| {
            TaskDescriptor::new(variant.prompt.clone(), variant.aspect, variant.model.clone())
        })
        .collect();
    let results = state
        .runware
        .run_tasks(&tasks)
        .await
        .map_err(|err| ApiError::Generation(format!("Failed to generate images: {err}")))?;
    let images = shape_batch(&results, &variants)?;
    tracing::info!(count = images.len(), "generated ad image batch");
    Ok(Json(images))
}

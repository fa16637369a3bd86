use axum::Json;
use axum::extract::State;

use crate::api::AppState;
use crate::error::ApiError;
use crate::runware::TaskDescriptor;
use crate::schema::{GeneratedImage, TweakInput};
use crate::shape::shape_single;
use crate::tweak::apply_tweak;

/// Re-runs one image from its stored base prompt plus an optional tweak. The
/// store lookup happens before any remote call: an unknown base prompt id
/// fails fast with NotFound.
pub async fn regenerate(
    State(state): State<AppState>,
    Json(input): Json<TweakInput>,
) -> Result<Json<GeneratedImage>, ApiError> {
    input.validate()?;
    let base = state.store.get(&input.base_prompt_id)?;
    let prompt = apply_tweak(&base.base_prompt, &input.tweak_text);
    let task = TaskDescriptor::new(prompt.clone(), input.aspect, base.model.clone());
    let results = state
        .runware
        .run_tasks(&[task])
        .await
        .map_err(|err| ApiError::Generation(format!("Failed to regenerate image: {err}")))?;
    let result = results
        .first()
        .ok_or_else(|| ApiError::Format("empty result set".to_string()))?;
    tracing::info!(base_prompt_id = %input.base_prompt_id, "regenerated ad image");
    Ok(Json(shape_single(result, input.aspect, &base.model, &prompt)))
}

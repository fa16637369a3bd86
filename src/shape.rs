use uuid::Uuid;

use crate::error::ApiError;
use crate::prompts::Variant;
use crate::runware::{DEFAULT_CFG_SCALE, DEFAULT_STEPS, RemoteResult};
use crate::schema::{Aspect, GeneratedImage, ImageMeta};

fn shape_one(result: &RemoteResult, aspect: Aspect, model: &str, prompt: &str) -> GeneratedImage {
    let (width, height) = aspect.dimensions();
    GeneratedImage {
        id: Uuid::new_v4().to_string(),
        url: result.image_url.clone(),
        aspect,
        seed: result.seed,
        cost: result.cost,
        meta: ImageMeta {
            model: model.to_string(),
            steps: DEFAULT_STEPS,
            cfg: DEFAULT_CFG_SCALE,
            width,
            height,
            positive_prompt: prompt.to_string(),
        },
        base_prompt_id: None,
        style: None,
    }
}

/// Zips remote results against the variants that produced them. Batch images
/// keep the variant id as `base_prompt_id` so they can be regenerated later.
pub fn shape_batch(
    results: &[RemoteResult],
    variants: &[Variant],
) -> Result<Vec<GeneratedImage>, ApiError> {
    if results.len() != variants.len() {
        return Err(ApiError::Format(format!(
            "expected {} results, got {}",
            variants.len(),
            results.len()
        )));
    }
    Ok(results
        .iter()
        .zip(variants)
        .map(|(result, variant)| {
            let mut image = shape_one(result, variant.aspect, &variant.model, &variant.prompt);
            image.base_prompt_id = Some(variant.id.clone());
            image.style = Some(variant.style.clone());
            image
        })
        .collect())
}

/// Regenerated images carry no back-reference; a second-level regenerate must
/// resubmit the original base prompt id.
pub fn shape_single(
    result: &RemoteResult,
    aspect: Aspect,
    model: &str,
    prompt: &str,
) -> GeneratedImage {
    shape_one(result, aspect, model, prompt)
}

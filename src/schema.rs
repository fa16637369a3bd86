use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ApiError;

/// Ad parameters submitted by the studio form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdInput {
    pub company_url: String,
    #[serde(default)]
    pub product_name: String,
    pub business_value: String,
    /// Comma-separated audience roles, e.g. "CEO, CTO, VP Sales".
    pub audience: String,
    pub body_text: String,
    pub footer_text: String,
    #[serde(default)]
    pub render_cta_on_image: bool,
}

impl AdInput {
    pub fn validate(&self) -> Result<(), ApiError> {
        validate_http_url(&self.company_url)?;
        require_min_chars("businessValue", &self.business_value, 3)?;
        require_min_chars("audience", &self.audience, 3)?;
        require_min_chars("bodyText", &self.body_text, 3)?;
        require_min_chars("footerText", &self.footer_text, 2)?;
        Ok(())
    }
}

pub fn validate_http_url(raw: &str) -> Result<Url, ApiError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Validation("companyUrl must not be empty".to_string()));
    }
    let parsed = Url::parse(trimmed)
        .map_err(|err| ApiError::Validation(format!("companyUrl is not a valid URL: {err}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(ApiError::Validation(format!(
            "companyUrl must use http or https, got {scheme}"
        ))),
    }
}

fn require_min_chars(field: &str, value: &str, min: usize) -> Result<(), ApiError> {
    if value.chars().count() < min {
        return Err(ApiError::Validation(format!(
            "{field} must be at least {min} characters"
        )));
    }
    Ok(())
}

/// Fixed image ratios. Pixel dimensions are multiples of 64 as required by
/// the generation backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Aspect {
    /// 1.9:1 landscape.
    #[serde(rename = "HORIZONTAL_191_1")]
    Horizontal191,
    #[serde(rename = "SQUARE_1_1")]
    Square,
    /// 4:5 portrait.
    #[serde(rename = "VERTICAL_4_5")]
    Vertical45,
}

impl Aspect {
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Aspect::Horizontal191 => (1216, 640),
            Aspect::Square => (1088, 1088),
            Aspect::Vertical45 => (896, 1152),
        }
    }
}

/// Request to re-run a single image from a stored base prompt.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TweakInput {
    pub image_id: String,
    pub base_prompt_id: String,
    pub aspect: Aspect,
    #[serde(default)]
    pub tweak_text: String,
}

impl TweakInput {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.image_id.trim().is_empty() {
            return Err(ApiError::Validation("imageId must not be empty".to_string()));
        }
        if self.base_prompt_id.trim().is_empty() {
            return Err(ApiError::Validation("basePromptId must not be empty".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
    pub id: String,
    pub url: String,
    pub aspect: Aspect,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    pub meta: ImageMeta,
    /// Set only on batch results; regenerated images cannot be regenerated
    /// again, callers resubmit the original base prompt id instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_prompt_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageMeta {
    pub model: String,
    pub steps: u32,
    pub cfg: f64,
    pub width: u32,
    pub height: u32,
    pub positive_prompt: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

use std::env;
use std::time::Duration;

use anyhow::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;
use crate::schema::Aspect;

pub const RUNWARE_API_URL: &str = "https://api.runware.ai/v1/tasks";
pub const DEFAULT_MODEL: &str = "runware:101@1";
pub const DEFAULT_STEPS: u32 = 28;
pub const DEFAULT_CFG_SCALE: f64 = 7.0;
const DEFAULT_TIMEOUT_SECS: u64 = 120;

const NEGATIVE_PROMPT: &str = "anime, cartoon, illustration, artistic, fantasy, gaming, \
    casual, informal, low quality, blurry, distorted, watermark, text overlay, busy background";

/// One image-inference task in the outbound batch. Field names follow the
/// Runware wire format.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDescriptor {
    pub task_type: String,
    #[serde(rename = "taskUUID")]
    pub task_uuid: String,
    pub positive_prompt: String,
    pub negative_prompt: String,
    pub height: u32,
    pub width: u32,
    pub model: String,
    pub steps: u32,
    #[serde(rename = "CFGScale")]
    pub cfg_scale: f64,
    pub number_results: u32,
}

impl TaskDescriptor {
    pub fn new(positive_prompt: String, aspect: Aspect, model: String) -> Self {
        let (width, height) = aspect.dimensions();
        Self {
            task_type: "imageInference".to_string(),
            task_uuid: Uuid::new_v4().to_string(),
            positive_prompt,
            negative_prompt: NEGATIVE_PROMPT.to_string(),
            height,
            width,
            model,
            steps: DEFAULT_STEPS,
            cfg_scale: DEFAULT_CFG_SCALE,
            number_results: 1,
        }
    }
}

/// Per-task result record. Extra upstream fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteResult {
    #[serde(rename = "imageURL")]
    pub image_url: String,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub cost: Option<f64>,
}

/// The API answers either with a bare array or with the array wrapped in a
/// `data` field.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TaskResponse {
    Bare(Vec<RemoteResult>),
    Enveloped { data: Vec<RemoteResult> },
}

#[derive(Clone)]
pub struct RunwareClient {
    http: Client,
    endpoint: String,
    api_key: String,
}

impl RunwareClient {
    pub fn new(endpoint: String, api_key: String, timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, endpoint, api_key })
    }

    pub fn from_env() -> Result<Self> {
        let endpoint = env::var("RUNWARE_API_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| RUNWARE_API_URL.to_string());
        let api_key = env::var("RUNWARE_API_KEY").unwrap_or_default();
        let timeout_secs = env::var("RUNWARE_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self::new(endpoint, api_key, Duration::from_secs(timeout_secs))
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Issues one batched call. Results come back positionally aligned with
    /// the input tasks; callers must preserve that order.
    pub async fn run_tasks(&self, tasks: &[TaskDescriptor]) -> Result<Vec<RemoteResult>, ApiError> {
        tracing::debug!(task_count = tasks.len(), "dispatching runware tasks");
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(tasks)
            .send()
            .await
            .map_err(|err| ApiError::Generation(format!("Runware request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), %body, "runware call failed");
            return Err(ApiError::Remote { status: status.as_u16(), body });
        }

        let body = response
            .text()
            .await
            .map_err(|err| ApiError::Generation(format!("failed to read Runware response: {err}")))?;
        let parsed: TaskResponse =
            serde_json::from_str(&body).map_err(|_| ApiError::Format(body.clone()))?;
        let results = match parsed {
            TaskResponse::Bare(results) => results,
            TaskResponse::Enveloped { data } => data,
        };
        tracing::debug!(result_count = results.len(), "runware tasks completed");
        Ok(results)
    }
}

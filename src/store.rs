use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;

use crate::error::ApiError;
use crate::schema::AdInput;

/// Base prompt captured at generation time so a later tweak can start from
/// the exact same text. Entries live for the process lifetime only.
#[derive(Debug, Clone)]
pub struct StoredBasePrompt {
    pub base_prompt: String,
    pub original_input: AdInput,
    pub model: String,
    pub style: String,
    pub created_at: String,
}

impl StoredBasePrompt {
    pub fn new(base_prompt: String, original_input: AdInput, model: String, style: String) -> Self {
        Self {
            base_prompt,
            original_input,
            model,
            style,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

pub trait BasePromptStore: Send + Sync {
    /// Unconditional insert; last writer wins on an identical id.
    fn put(&self, id: &str, record: StoredBasePrompt);
    fn get(&self, id: &str) -> Result<StoredBasePrompt, ApiError>;
}

/// In-memory store. No eviction, no persistence across restarts.
#[derive(Debug, Default)]
pub struct MemoryPromptStore {
    entries: RwLock<HashMap<String, StoredBasePrompt>>,
}

impl BasePromptStore for MemoryPromptStore {
    fn put(&self, id: &str, record: StoredBasePrompt) {
        let mut entries = self.entries.write().unwrap_or_else(|err| err.into_inner());
        entries.insert(id.to_string(), record);
    }

    fn get(&self, id: &str) -> Result<StoredBasePrompt, ApiError> {
        let entries = self.entries.read().unwrap_or_else(|err| err.into_inner());
        entries
            .get(id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(id.to_string()))
    }
}

//! Embedding model configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Local models known to this crate, with their embedding dimensions.
pub const SUPPORTED_MODELS: &[(&str, usize)] = &[
    ("all-MiniLM-L6-v2", 384),
    ("all-MiniLM-L12-v2", 384),
    ("bge-small-en-v1.5", 384),
    ("bge-base-en-v1.5", 768),
    ("bge-large-en-v1.5", 1024),
];

/// Small, fast, and good enough for sentence-level answer comparison.
pub const DEFAULT_MODEL: &str = "all-MiniLM-L6-v2";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedderConfig {
    /// Model name, one of [`SUPPORTED_MODELS`].
    pub model: String,
    /// Where downloaded model files live. `None` uses the fastembed default.
    pub cache_dir: Option<PathBuf>,
    /// Show a progress bar on first download.
    pub show_download_progress: bool,
}

impl Default for EmbedderConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            cache_dir: None,
            show_download_progress: true,
        }
    }
}

impl EmbedderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_cache_dir(mut self, cache_dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = Some(cache_dir.into());
        self
    }

    pub fn with_download_progress(mut self, show: bool) -> Self {
        self.show_download_progress = show;
        self
    }

    /// Embedding dimension of the configured model, if supported.
    pub fn dimensions(&self) -> Option<usize> {
        SUPPORTED_MODELS
            .iter()
            .find(|(name, _)| *name == self.model)
            .map(|(_, dims)| *dims)
    }

    /// Validates the configuration without touching the model cache.
    pub fn validate(&self) -> Result<(), String> {
        if self.model.is_empty() {
            return Err("Model name cannot be empty".to_string());
        }
        if self.dimensions().is_none() {
            let supported: Vec<&str> = SUPPORTED_MODELS.iter().map(|(name, _)| *name).collect();
            return Err(format!(
                "Unsupported model '{}'. Supported models: {}",
                self.model,
                supported.join(", ")
            ));
        }
        Ok(())
    }
}

//! fastembed-backed embedder.
//!
//! Models download on first use into the cache directory; later runs load
//! from the cache.

use crate::config::EmbedderConfig;
use crate::embedder::{Embedder, ScoringError, ScoringResult};
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use std::sync::Mutex;
use tracing::info;

/// Embeds text with a locally-run ONNX model.
pub struct LocalEmbedder {
    // fastembed's embed takes &mut self; the benchmark is sequential, so a
    // plain mutex covers it.
    model: Mutex<TextEmbedding>,
    config: EmbedderConfig,
    dimensions: usize,
}

impl LocalEmbedder {
    /// Loads the configured model, downloading it on first use. This can
    /// take a while on a cold cache.
    pub fn new(config: EmbedderConfig) -> ScoringResult<Self> {
        config
            .validate()
            .map_err(|message| ScoringError::InvalidConfig { message })?;
        let dimensions = config
            .dimensions()
            .ok_or_else(|| ScoringError::InvalidConfig {
                message: format!("Unsupported model '{}'", config.model),
            })?;

        info!("Loading embedding model {}", config.model);

        let mut options = InitOptions::default();
        options.model_name = model_name_to_enum(&config.model)?;
        options.show_download_progress = config.show_download_progress;
        if let Some(dir) = &config.cache_dir {
            options.cache_dir = dir.clone();
        }

        let model = TextEmbedding::try_new(options).map_err(|e| ScoringError::ModelLoad {
            message: e.to_string(),
        })?;

        info!("Embedding model ready ({} dimensions)", dimensions);

        Ok(Self {
            model: Mutex::new(model),
            config,
            dimensions,
        })
    }
}

impl Embedder for LocalEmbedder {
    fn embed(&self, text: &str) -> ScoringResult<Vec<f32>> {
        let mut model = self.model.lock().map_err(|e| ScoringError::Embedding {
            message: format!("Model lock poisoned: {}", e),
        })?;

        let mut vectors = model
            .embed(vec![text.to_string()], None)
            .map_err(|e| ScoringError::Embedding {
                message: e.to_string(),
            })?;

        let vector = vectors.pop().ok_or_else(|| ScoringError::Embedding {
            message: "Model returned no embedding".to_string(),
        })?;

        if vector.len() != self.dimensions {
            return Err(ScoringError::Embedding {
                message: format!(
                    "Expected {} dimensions, got {}",
                    self.dimensions,
                    vector.len()
                ),
            });
        }

        Ok(vector)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

/// Maps a supported model name to fastembed's model enum.
fn model_name_to_enum(model_name: &str) -> ScoringResult<EmbeddingModel> {
    match model_name {
        "all-MiniLM-L6-v2" => Ok(EmbeddingModel::AllMiniLML6V2),
        "all-MiniLM-L12-v2" => Ok(EmbeddingModel::AllMiniLML12V2),
        "bge-small-en-v1.5" => Ok(EmbeddingModel::BGESmallENV15),
        "bge-base-en-v1.5" => Ok(EmbeddingModel::BGEBaseENV15),
        "bge-large-en-v1.5" => Ok(EmbeddingModel::BGELargeENV15),
        _ => Err(ScoringError::InvalidConfig {
            message: format!("Unsupported model '{}'", model_name),
        }),
    }
}

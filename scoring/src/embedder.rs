//! The embedding seam and its error taxonomy.

use thiserror::Error;

/// Errors from loading an embedding model or producing a vector.
///
/// Any of these aborts the whole benchmark run: a verdict computed against a
/// half-working model would be worse than no verdict.
#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("Failed to load embedding model: {message}")]
    ModelLoad { message: String },

    #[error("Embedding failed: {message}")]
    Embedding { message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

pub type ScoringResult<T> = Result<T, ScoringError>;

/// Turns text into a fixed-dimension vector.
///
/// Synchronous on purpose: the benchmark scores items one at a time against
/// a local model, and a plain trait keeps test doubles trivial.
pub trait Embedder: Send + Sync {
    fn embed(&self, text: &str) -> ScoringResult<Vec<f32>>;

    /// Dimension of every vector [`embed`](Embedder::embed) returns.
    fn dimensions(&self) -> usize;

    fn model_name(&self) -> &str;
}

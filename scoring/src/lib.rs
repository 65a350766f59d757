//! Semantic similarity scoring for the recall benchmark.
//!
//! Wraps a locally-run embedding model behind the [`embedder::Embedder`]
//! trait and reduces a pair of texts to a cosine similarity score with a
//! strict pass threshold.

pub mod config;
pub mod embedder;
pub mod local;
pub mod similarity;

pub use config::{EmbedderConfig, DEFAULT_MODEL, SUPPORTED_MODELS};
pub use embedder::{Embedder, ScoringError, ScoringResult};
pub use local::LocalEmbedder;
pub use similarity::{cosine_similarity, passes, SimilarityScorer, PASS_THRESHOLD};

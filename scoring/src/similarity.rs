//! Cosine similarity and the pass/fail verdict.

use crate::embedder::{Embedder, ScoringResult};

/// Verdict threshold. A score must be strictly greater to pass; exactly 0.6
/// fails.
pub const PASS_THRESHOLD: f64 = 0.6;

/// Whether `score` clears [`PASS_THRESHOLD`].
pub fn passes(score: f64) -> bool {
    score > PASS_THRESHOLD
}

/// Cosine similarity between two vectors, in `[-1.0, 1.0]`.
///
/// Returns 0.0 for mismatched lengths and zero-magnitude inputs rather than
/// NaN, so downstream verdicts stay well-defined.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let magnitude_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let magnitude_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return 0.0;
    }

    dot / (magnitude_a * magnitude_b)
}

/// Scores located answers against expected answers.
pub struct SimilarityScorer {
    embedder: Box<dyn Embedder>,
}

impl SimilarityScorer {
    pub fn new(embedder: Box<dyn Embedder>) -> Self {
        Self { embedder }
    }

    /// Semantic similarity of `actual` to `expected`.
    ///
    /// Symmetric in its arguments. Errors propagate; a failed embedding is
    /// never folded into a verdict.
    pub fn score(&self, expected: &str, actual: &str) -> ScoringResult<f64> {
        let expected_vec = self.embedder.embed(expected)?;
        let actual_vec = self.embedder.embed(actual)?;
        Ok(f64::from(cosine_similarity(&expected_vec, &actual_vec)))
    }

    pub fn model_name(&self) -> &str {
        self.embedder.model_name()
    }
}

//! The benchmark run loop.

use crate::golden::GoldenItem;
use crate::report::BenchReport;
use scoring::{passes, ScoringError, SimilarityScorer};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};
use transcript::{locate_answer, Message, TranscriptSource};

/// Outcome of one golden item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Pass,
    Fail,
    NotFound,
}

impl Status {
    /// Console rendering with a verdict symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Status::Pass => "✅ PASS",
            Status::Fail => "❌ FAIL",
            Status::NotFound => "⚠️ NOT FOUND",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Status::Pass => "PASS",
            Status::Fail => "FAIL",
            Status::NotFound => "NOT_FOUND",
        };
        write!(f, "{}", tag)
    }
}

/// One evaluated golden item.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationResult {
    pub category: String,
    pub question: String,
    /// `None` exactly when `status` is [`Status::NotFound`].
    pub score: Option<f64>,
    pub status: Status,
}

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("Scoring failed: {0}")]
    Scoring(#[from] ScoringError),
}

/// Drives one full benchmark pass: fetch the transcript once, evaluate every
/// golden item against it in order, aggregate into a report.
pub struct BenchmarkRunner {
    source: Box<dyn TranscriptSource>,
    scorer: SimilarityScorer,
}

impl BenchmarkRunner {
    pub fn new(source: Box<dyn TranscriptSource>, scorer: SimilarityScorer) -> Self {
        Self { source, scorer }
    }

    /// Runs the whole golden set.
    ///
    /// A fetch failure does not abort: it is logged, recorded on the report,
    /// and every item reads NOT_FOUND against the empty transcript. A
    /// scoring failure does abort; partial verdicts from a broken model are
    /// not worth reporting.
    pub async fn run(&self, golden: &[GoldenItem]) -> Result<BenchReport, BenchError> {
        let (messages, fetch_failure) = match self.source.fetch_transcript().await {
            Ok(messages) => (messages, None),
            Err(e) => {
                warn!(
                    "Transcript fetch from {} failed, every item will read NOT_FOUND: {}",
                    self.source.source_name(),
                    e
                );
                (Vec::new(), Some(e.to_string()))
            }
        };

        let mut results = Vec::with_capacity(golden.len());
        for item in golden {
            let result = self.evaluate(&messages, item)?;
            debug!("[{}] {} -> {}", item.category, item.question, result.status);
            results.push(result);
        }

        Ok(BenchReport::new(results, fetch_failure))
    }

    fn evaluate(
        &self,
        messages: &[Message],
        item: &GoldenItem,
    ) -> Result<EvaluationResult, BenchError> {
        let (score, status) = match locate_answer(messages, &item.question) {
            Some(answer) => {
                let score = self.scorer.score(&item.expected_answer, &answer)?;
                let status = if passes(score) {
                    Status::Pass
                } else {
                    Status::Fail
                };
                (Some(score), status)
            }
            None => (None, Status::NotFound),
        };

        Ok(EvaluationResult {
            category: item.category.clone(),
            question: item.question.clone(),
            score,
            status,
        })
    }
}

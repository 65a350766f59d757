//! The golden question set.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// One reference question with its known-good answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoldenItem {
    pub category: String,
    pub question: String,
    pub expected_answer: String,
}

impl GoldenItem {
    pub fn new(
        category: impl Into<String>,
        question: impl Into<String>,
        expected_answer: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            question: question.into(),
            expected_answer: expected_answer.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum GoldenError {
    #[error("Failed to read golden file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse golden file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Golden file contains no items")]
    Empty,
}

/// Loads golden items from a JSON array of objects with `category`,
/// `question`, and `expected_answer` fields. An empty array is an error;
/// a benchmark over nothing reports nothing.
pub fn load_golden_file(path: &Path) -> Result<Vec<GoldenItem>, GoldenError> {
    let raw = std::fs::read_to_string(path)?;
    let items: Vec<GoldenItem> = serde_json::from_str(&raw)?;
    if items.is_empty() {
        return Err(GoldenError::Empty);
    }
    Ok(items)
}

/// The stock interview-prep question set: twelve questions across four
/// categories, matching what the study agent is seeded with.
pub fn builtin_golden_set() -> Vec<GoldenItem> {
    vec![
        GoldenItem::new(
            "Behavioral",
            "Tell me about a time you handled a conflict.",
            "I resolved a git merge dispute during the Hackathon by setting up a daily standup. Result: We shipped on time.",
        ),
        GoldenItem::new(
            "Behavioral",
            "What is your greatest weakness?",
            "I sometimes focus too much on details. I am working on this by using time-boxing techniques to prioritize shipping.",
        ),
        GoldenItem::new(
            "Behavioral",
            "Describe a leadership experience.",
            "I led the frontend team for the Capstone project, organizing sprint planning and code reviews.",
        ),
        GoldenItem::new(
            "ML/AI",
            "Define Big O Notation.",
            "Big O measures algorithm performance relative to input size growth. O(1) is constant, O(n) is linear.",
        ),
        GoldenItem::new(
            "ML/AI",
            "What is Overfitting?",
            "Overfitting happens when a model learns the training data too well, including noise, and fails to generalize to new data.",
        ),
        GoldenItem::new(
            "ML/AI",
            "Explain Gradient Descent.",
            "Gradient Descent is an optimization algorithm used to minimize the loss function by iteratively moving in the direction of steepest descent.",
        ),
        GoldenItem::new(
            "Security",
            "Difference between TCP and UDP?",
            "TCP guarantees delivery via handshake (reliable), while UDP is connectionless and faster but unreliable (video streaming).",
        ),
        GoldenItem::new(
            "Security",
            "What is SQL Injection?",
            "SQL Injection is a vulnerability where an attacker interferes with the queries an application makes to its database, often to access unauthorized data.",
        ),
        GoldenItem::new(
            "Security",
            "Explain XSS (Cross-Site Scripting).",
            "XSS allows attackers to inject malicious scripts into web pages viewed by other users, often stealing cookies or session tokens.",
        ),
        GoldenItem::new(
            "Resume",
            "Where did you intern in Summer 2024?",
            "I interned at TCS Research from May to July 2024.",
        ),
        GoldenItem::new(
            "Resume",
            "What is TERRA-CD?",
            "TERRA-CD is a benchmark dataset for Semantic Change Detection I created for my final year project.",
        ),
        GoldenItem::new(
            "Resume",
            "What master's degree are you pursuing?",
            "I am pursuing a Master of Science in Computer Science (MS CS) at UMass Amherst.",
        ),
    ]
}

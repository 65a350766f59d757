//! Aggregation, console rendering, and export of benchmark results.

use crate::runner::EvaluationResult;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

/// Everything one benchmark pass produced.
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub results: Vec<EvaluationResult>,
    /// Set when the transcript fetch itself failed. Every item is then
    /// NOT_FOUND and this carries the cause.
    pub fetch_failure: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl BenchReport {
    pub fn new(results: Vec<EvaluationResult>, fetch_failure: Option<String>) -> Self {
        Self {
            results,
            fetch_failure,
            generated_at: Utc::now(),
        }
    }

    /// Mean score over located answers. `None` when nothing was located;
    /// NOT_FOUND items never count toward the mean, in either direction.
    pub fn overall_score(&self) -> Option<f64> {
        let scores: Vec<f64> = self.results.iter().filter_map(|r| r.score).collect();
        if scores.is_empty() {
            return None;
        }
        Some(scores.iter().sum::<f64>() / scores.len() as f64)
    }

    /// Per-category mean scores in first-appearance order. Categories where
    /// nothing was located are omitted entirely.
    pub fn category_scores(&self) -> Vec<(String, f64)> {
        let mut order: Vec<&str> = Vec::new();
        for result in &self.results {
            if !order.contains(&result.category.as_str()) {
                order.push(&result.category);
            }
        }

        order
            .into_iter()
            .filter_map(|category| {
                let scores: Vec<f64> = self
                    .results
                    .iter()
                    .filter(|r| r.category == category)
                    .filter_map(|r| r.score)
                    .collect();
                if scores.is_empty() {
                    None
                } else {
                    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
                    Some((category.to_string(), mean))
                }
            })
            .collect()
    }

    /// Prints the fixed-width per-item table.
    pub fn print_table(&self) {
        println!("{:-<75}", "");
        println!(
            "{:<12} | {:<30} | {:<6} | {}",
            "CATEGORY", "QUERY (truncated)", "SCORE", "STATUS"
        );
        println!("{:-<75}", "");
        for result in &self.results {
            let score_cell = match result.score {
                Some(score) => format!("{:.3}", score),
                None => "-".to_string(),
            };
            println!(
                "{:<12} | {:<30} | {:<6} | {}",
                result.category,
                truncate(&result.question, 28),
                score_cell,
                result.status.symbol()
            );
        }
        println!("{:-<75}", "");
    }

    /// Prints overall and per-category accuracy percentages, or the reason
    /// nothing could be scored.
    pub fn print_summary(&self) {
        match self.overall_score() {
            Some(overall) => {
                println!("🏆 OVERALL ACCURACY: {:.1}%", overall * 100.0);
                for (category, mean) in self.category_scores() {
                    println!("   🔹 {:<10}: {:.1}%", category, mean * 100.0);
                }
            }
            None => match &self.fetch_failure {
                Some(cause) => {
                    println!("❌ No answers found. Transcript fetch failed: {}", cause)
                }
                None => println!("❌ No answers found. Did you chat with the agent first?"),
            },
        }
    }

    /// Writes the CSV export: a header plus one row per golden item in run
    /// order. NOT_FOUND rows leave the score cell empty. Overwrites `path`.
    pub fn write_csv(&self, path: &Path) -> io::Result<()> {
        let mut output = String::new();
        output.push_str("Category,Question,Score,Status\n");
        for result in &self.results {
            let score_cell = result.score.map(|s| s.to_string()).unwrap_or_default();
            output.push_str(&format!(
                "{},{},{},{}\n",
                csv_field(&result.category),
                csv_field(&result.question),
                score_cell,
                result.status
            ));
        }
        fs::write(path, output)
    }

    /// Writes the full report as pretty-printed JSON. Overwrites `path`.
    pub fn write_json(&self, path: &Path) -> io::Result<()> {
        let payload = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, payload)
    }
}

/// Quotes a field when it contains a delimiter, quote, or newline.
fn csv_field(raw: &str) -> String {
    if raw.contains(',') || raw.contains('"') || raw.contains('\n') {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}

/// Truncates to `max` characters with a `..` tail for the fixed-width table.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max).collect();
        format!("{}..", head)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::Status;

    fn result(category: &str, question: &str, score: Option<f64>) -> EvaluationResult {
        let status = match score {
            Some(s) if scoring::passes(s) => Status::Pass,
            Some(_) => Status::Fail,
            None => Status::NotFound,
        };
        EvaluationResult {
            category: category.to_string(),
            question: question.to_string(),
            score,
            status,
        }
    }

    #[test]
    fn test_overall_excludes_not_found() {
        let report = BenchReport::new(
            vec![
                result("A", "q1", Some(0.9)),
                result("A", "q2", None),
                result("B", "q3", Some(0.3)),
            ],
            None,
        );
        let overall = report.overall_score().unwrap();
        assert!((overall - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_overall_is_none_when_nothing_located() {
        let report = BenchReport::new(vec![result("A", "q1", None)], None);
        assert_eq!(report.overall_score(), None);
    }

    #[test]
    fn test_category_means_in_first_appearance_order() {
        let report = BenchReport::new(
            vec![
                result("Security", "q1", Some(1.0)),
                result("Resume", "q2", Some(0.5)),
                result("Security", "q3", Some(0.0)),
            ],
            None,
        );
        let categories = report.category_scores();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].0, "Security");
        assert!((categories[0].1 - 0.5).abs() < 1e-9);
        assert_eq!(categories[1].0, "Resume");
        assert!((categories[1].1 - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_empty_categories_are_omitted() {
        let report = BenchReport::new(
            vec![
                result("Found", "q1", Some(0.8)),
                result("Missing", "q2", None),
            ],
            None,
        );
        let categories = report.category_scores();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].0, "Found");
    }

    #[test]
    fn test_csv_one_row_per_item() {
        let report = BenchReport::new(
            vec![
                result("A", "q1", Some(0.9)),
                result("A", "q2", None),
                result("B", "q3", Some(0.2)),
            ],
            None,
        );
        let file = tempfile::NamedTempFile::new().unwrap();
        report.write_csv(file.path()).unwrap();

        let written = fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Category,Question,Score,Status");
        assert_eq!(lines[2], "A,q2,,NOT_FOUND");
        assert!(lines[1].starts_with("A,q1,0.9"));
        assert!(lines[1].ends_with("PASS"));
    }

    #[test]
    fn test_csv_quotes_fields_with_commas_and_quotes() {
        let report = BenchReport::new(
            vec![result("A", r#"What is "Big, O" notation?"#, Some(0.7))],
            None,
        );
        let file = tempfile::NamedTempFile::new().unwrap();
        report.write_csv(file.path()).unwrap();

        let written = fs::read_to_string(file.path()).unwrap();
        assert!(written.contains(r#""What is ""Big, O"" notation?""#));
    }

    #[test]
    fn test_csv_overwrites_previous_export() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let first = BenchReport::new(
            vec![result("A", "q1", Some(0.9)), result("A", "q2", Some(0.9))],
            None,
        );
        first.write_csv(file.path()).unwrap();

        let second = BenchReport::new(vec![result("B", "q3", None)], None);
        second.write_csv(file.path()).unwrap();

        let written = fs::read_to_string(file.path()).unwrap();
        assert_eq!(written.lines().count(), 2);
        assert!(!written.contains("q1"));
    }

    #[test]
    fn test_json_round_trips_structure() {
        let report = BenchReport::new(
            vec![result("A", "q1", Some(0.9))],
            Some("Network error: refused".to_string()),
        );
        let file = tempfile::NamedTempFile::new().unwrap();
        report.write_json(file.path()).unwrap();

        let written = fs::read_to_string(file.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["results"][0]["status"], "PASS");
        assert_eq!(value["fetch_failure"], "Network error: refused");
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn test_truncate_is_char_aware() {
        assert_eq!(truncate("short", 28), "short");
        let long = "Tell me about a time you handled a conflict.";
        assert_eq!(truncate(long, 28), "Tell me about a time you han..");
        assert_eq!(truncate(&"é".repeat(30), 28), format!("{}..", "é".repeat(28)));
    }
}

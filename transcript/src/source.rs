//! The transcript source seam and its error taxonomy.

use crate::types::Message;
use async_trait::async_trait;
use thiserror::Error;

/// Errors from retrieving or decoding conversation history.
///
/// `Network` and `InvalidJson` mean the transcript never arrived;
/// `UnknownEnvelope` means it arrived in a shape this client does not
/// recognize. Per-message oddities are not errors at all: message conversion
/// is total and malformed turns simply extract to empty text.
#[derive(Error, Debug)]
pub enum TranscriptError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Response body is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Unrecognized history envelope: expected a message array, a `messages` field, or `result.messages`")]
    UnknownEnvelope,

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

pub type TranscriptResult<T> = Result<T, TranscriptError>;

/// Anything that can produce a conversation transcript.
///
/// The benchmark runner consumes this trait rather than a concrete client,
/// which keeps the HTTP layer swappable for a canned transcript in tests.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Retrieves the full transcript, oldest turn first.
    async fn fetch_transcript(&self) -> TranscriptResult<Vec<Message>>;

    /// Short name for logs describing where messages come from.
    fn source_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_failure() {
        let err = TranscriptError::UnknownEnvelope;
        assert!(err.to_string().contains("envelope"));

        let err = TranscriptError::InvalidConfig {
            message: "Endpoint cannot be empty".to_string(),
        };
        assert!(err.to_string().contains("Endpoint cannot be empty"));
    }

    #[test]
    fn test_json_errors_convert() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: TranscriptError = parse_err.into();
        assert!(matches!(err, TranscriptError::InvalidJson(_)));
    }
}

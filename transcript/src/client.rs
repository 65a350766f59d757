//! HTTP-backed transcript source.

use crate::config::HistoryConfig;
use crate::source::{TranscriptError, TranscriptResult, TranscriptSource};
use crate::types::Message;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

/// Fetches conversation history from a running agent service.
#[derive(Debug, Clone)]
pub struct HistoryClient {
    client: reqwest::Client,
    config: HistoryConfig,
}

impl HistoryClient {
    /// Builds a client for the configured endpoint.
    ///
    /// Fails fast on invalid configuration; no request happens here.
    pub fn new(config: HistoryConfig) -> TranscriptResult<Self> {
        config
            .validate()
            .map_err(|message| TranscriptError::InvalidConfig { message })?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self { client, config })
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// One GET against the history endpoint, decoded into raw elements.
    ///
    /// HTTP status is not gated: the original service returns its errors as
    /// JSON payloads, which fail envelope resolution here, while non-JSON
    /// error pages fail JSON parsing. Both surface with a precise cause.
    async fn fetch_raw(&self) -> TranscriptResult<Vec<Value>> {
        debug!("Fetching conversation history from {}", self.config.endpoint);
        let body = self
            .client
            .get(&self.config.endpoint)
            .send()
            .await?
            .text()
            .await?;

        let payload: Value = serde_json::from_str(&body)?;
        resolve_envelope(payload)
    }

    /// Fetches once and reports how many messages the endpoint holds.
    pub async fn health_check(&self) -> TranscriptResult<usize> {
        let raw = self.fetch_raw().await?;
        Ok(raw.len())
    }
}

#[async_trait]
impl TranscriptSource for HistoryClient {
    async fn fetch_transcript(&self) -> TranscriptResult<Vec<Message>> {
        let raw = self.fetch_raw().await?;
        let messages: Vec<Message> = raw.iter().map(Message::from_value).collect();
        info!("Fetched {} history messages", messages.len());
        Ok(messages)
    }

    fn source_name(&self) -> &'static str {
        "agent-history"
    }
}

/// Accepts the three envelope shapes agent deployments return: a bare
/// message array, `{"messages": [...]}`, and `{"result": {"messages":
/// [...]}}`. A present field of the wrong type is an envelope error, never a
/// fallthrough to the next shape.
fn resolve_envelope(payload: Value) -> TranscriptResult<Vec<Value>> {
    let mut fields = match payload {
        Value::Array(items) => return Ok(items),
        Value::Object(fields) => fields,
        _ => return Err(TranscriptError::UnknownEnvelope),
    };

    let nested = if let Some(messages) = fields.remove("messages") {
        messages
    } else if let Some(result) = fields.remove("result") {
        match result {
            Value::Object(mut inner) => inner
                .remove("messages")
                .ok_or(TranscriptError::UnknownEnvelope)?,
            _ => return Err(TranscriptError::UnknownEnvelope),
        }
    } else {
        return Err(TranscriptError::UnknownEnvelope);
    };

    match nested {
        Value::Array(items) => Ok(items),
        _ => Err(TranscriptError::UnknownEnvelope),
    }
}

//! Configuration for the agent history endpoint.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Where and how to fetch conversation history.
///
/// There is deliberately no `Default`: the endpoint has no sane fallback and
/// must be supplied by the caller, typically from `AGENT_URL`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Full URL of the history endpoint, e.g. `http://localhost:8080/history`.
    pub endpoint: String,
    /// Timeout for the single GET request, in seconds.
    pub timeout_seconds: u64,
}

impl HistoryConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_seconds: 30,
        }
    }

    pub fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Validates the configuration without making any request.
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.is_empty() {
            return Err("Endpoint cannot be empty".to_string());
        }
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err("Endpoint must start with http:// or https://".to_string());
        }
        if self.timeout_seconds == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = HistoryConfig::new("http://localhost:8080/history");
        assert!(config.validate().is_ok());
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_builder_timeout() {
        let config = HistoryConfig::new("https://agent.example/history").with_timeout_seconds(5);
        assert_eq!(config.timeout_seconds, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_endpoint_rejected() {
        let config = HistoryConfig::new("");
        assert!(config.validate().unwrap_err().contains("empty"));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let config = HistoryConfig::new("ftp://agent.example/history");
        assert!(config.validate().unwrap_err().contains("http"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = HistoryConfig::new("http://localhost:8080").with_timeout_seconds(0);
        assert!(config.validate().is_err());
    }
}

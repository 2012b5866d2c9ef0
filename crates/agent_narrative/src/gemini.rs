//! Gemini adapter for narrative generation
//!
//! Implements [`NarrativePort`] against the Gemini generate-content REST API.
//! The adapter holds a pooled reqwest client with a bounded request timeout;
//! HTTP failures are mapped onto the shared [`PortError`] taxonomy:
//!
//! - 401/403 -> `PortError::Unauthorized`
//! - 429 -> `PortError::RateLimited`
//! - 5xx -> `PortError::ServiceUnavailable`
//! - request timeout -> `PortError::Timeout`
//! - empty or malformed response body -> `PortError::Transformation`

use std::time::Instant;

use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;

use core_kernel::{
    AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, PortError,
};

use crate::ports::{NarrativePort, NarrativeRequest};
use crate::prompt::build_prompt;

/// Configuration for the Gemini adapter
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL of the generate-content API
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-2.0-flash-exp".to_string(),
            timeout_secs: 60,
        }
    }
}

impl GeminiConfig {
    /// Loads configuration from `GEMINI_*` environment variables
    ///
    /// Reads a `.env` file first when one is present.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();
        config::Config::builder()
            .add_source(config::Environment::with_prefix("GEMINI"))
            .set_default("base_url", GeminiConfig::default().base_url)?
            .set_default("model", GeminiConfig::default().model)?
            .set_default("timeout_secs", 60)?
            .build()?
            .try_deserialize()
    }
}

#[derive(serde::Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(serde::Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(serde::Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Adapter calling the Gemini generate-content endpoint
#[derive(Debug, Clone)]
pub struct GeminiAdapter {
    config: GeminiConfig,
    client: reqwest::Client,
}

impl GeminiAdapter {
    /// Creates an adapter with a pooled HTTP client and bounded timeout
    pub fn new(config: GeminiConfig) -> Result<Self, PortError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PortError::Connection {
                message: "failed to build HTTP client".to_string(),
                source: Some(Box::new(e)),
            })?;
        Ok(Self { config, client })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    fn map_status(&self, status: reqwest::StatusCode) -> PortError {
        match status.as_u16() {
            401 | 403 => PortError::Unauthorized {
                message: "Gemini API rejected the credentials".to_string(),
            },
            429 => PortError::RateLimited {
                retry_after_secs: 60,
            },
            500..=599 => PortError::ServiceUnavailable {
                service: "gemini".to_string(),
            },
            _ => PortError::internal(format!("unexpected status {status}")),
        }
    }

    fn map_transport(&self, error: reqwest::Error) -> PortError {
        if error.is_timeout() {
            PortError::Timeout {
                operation: "generate_narrative".to_string(),
                duration_ms: self.config.timeout_secs * 1000,
            }
        } else {
            PortError::Connection {
                message: "Gemini request failed".to_string(),
                source: Some(Box::new(error)),
            }
        }
    }
}

impl DomainPort for GeminiAdapter {}

#[async_trait]
impl HealthCheckable for GeminiAdapter {
    /// Reports configuration-level health
    ///
    /// A missing API key is the dominant failure mode in deployments, so it
    /// is surfaced here without spending a billable model call.
    async fn health_check(&self) -> HealthCheckResult {
        let start = Instant::now();
        let (status, message) = if self.config.api_key.is_empty() {
            (
                AdapterHealth::Unhealthy,
                Some("no API key configured".to_string()),
            )
        } else {
            (AdapterHealth::Healthy, None)
        };
        HealthCheckResult {
            adapter_id: "gemini-narrative-adapter".to_string(),
            status,
            latency_ms: start.elapsed().as_millis() as u64,
            message,
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl NarrativePort for GeminiAdapter {
    async fn generate(&self, request: &NarrativeRequest) -> Result<String, PortError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(request),
                }],
            }],
        };

        tracing::info!(model = %self.config.model, "requesting narrative generation");

        let response = self
            .client
            .post(self.generate_url())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.map_status(status));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| PortError::transformation(format!("malformed response: {e}")))?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| PortError::transformation("response contained no narrative text"))?;

        tracing::info!(chars = text.len(), "narrative generation completed");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_sixty_second_timeout() {
        let config = GeminiConfig::default();
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.model, "gemini-2.0-flash-exp");
    }

    #[test]
    fn test_generate_url_shape() {
        let adapter = GeminiAdapter::new(GeminiConfig {
            base_url: "https://example.test/v1beta/".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            adapter.generate_url(),
            "https://example.test/v1beta/models/gemini-2.0-flash-exp:generateContent"
        );
    }

    #[tokio::test]
    async fn test_health_check_flags_missing_api_key() {
        let adapter = GeminiAdapter::new(GeminiConfig::default()).unwrap();
        let health = adapter.health_check().await;
        assert_eq!(health.status, AdapterHealth::Unhealthy);
    }
}

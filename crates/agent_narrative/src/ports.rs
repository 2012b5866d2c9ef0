//! Narrative generation port
//!
//! Defines the interface the assessment pipeline needs from a language
//! model. Adapters implement this trait to talk to a real model service or,
//! in tests, to a canned in-memory mock.

use async_trait::async_trait;

use core_kernel::{DomainPort, HealthCheckable, PortError};
use domain_underwriting::{ClientProfile, RiskClassification, ScoringResult};

/// Everything the model needs to write a narrative for one client
#[derive(Debug, Clone)]
pub struct NarrativeRequest {
    pub profile: ClientProfile,
    pub scoring: ScoringResult,
    pub classification: RiskClassification,
}

impl NarrativeRequest {
    pub fn new(
        profile: ClientProfile,
        scoring: ScoringResult,
        classification: RiskClassification,
    ) -> Self {
        Self {
            profile,
            scoring,
            classification,
        }
    }
}

/// Port for narrative text generation
#[async_trait]
pub trait NarrativePort: DomainPort + HealthCheckable {
    /// Generates a narrative for the given assessment
    ///
    /// Implementations must bound the call with a timeout and map transport
    /// failures onto [`PortError`] variants.
    async fn generate(&self, request: &NarrativeRequest) -> Result<String, PortError>;
}

/// Mock implementation of NarrativePort for testing
///
/// Returns a canned response, or a configured error, without any network
/// dependency.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use chrono::Utc;
    use std::sync::atomic::{AtomicU64, Ordering};

    /// In-memory mock implementation of NarrativePort
    #[derive(Debug)]
    pub struct MockNarrativePort {
        response: Result<String, &'static str>,
        calls: AtomicU64,
    }

    impl MockNarrativePort {
        /// Creates a mock that answers every request with `text`
        pub fn with_response(text: impl Into<String>) -> Self {
            Self {
                response: Ok(text.into()),
                calls: AtomicU64::new(0),
            }
        }

        /// Creates a mock whose every request fails with an internal error
        pub fn failing(message: &'static str) -> Self {
            Self {
                response: Err(message),
                calls: AtomicU64::new(0),
            }
        }

        /// Number of generate calls made against this mock
        pub fn call_count(&self) -> u64 {
            self.calls.load(Ordering::Relaxed)
        }
    }

    impl Default for MockNarrativePort {
        fn default() -> Self {
            Self::with_response("Mock underwriting narrative")
        }
    }

    impl DomainPort for MockNarrativePort {}

    #[async_trait]
    impl HealthCheckable for MockNarrativePort {
        async fn health_check(&self) -> core_kernel::HealthCheckResult {
            core_kernel::HealthCheckResult {
                adapter_id: "mock-narrative-port".to_string(),
                status: core_kernel::AdapterHealth::Healthy,
                latency_ms: 0,
                message: Some("Mock adapter always healthy".to_string()),
                checked_at: Utc::now(),
            }
        }
    }

    #[async_trait]
    impl NarrativePort for MockNarrativePort {
        async fn generate(&self, _request: &NarrativeRequest) -> Result<String, PortError> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            match &self.response {
                Ok(text) => Ok(text.clone()),
                Err(message) => Err(PortError::internal(*message)),
            }
        }
    }
}

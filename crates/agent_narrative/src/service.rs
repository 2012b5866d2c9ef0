//! Narrative service with fallback
//!
//! Wraps a [`NarrativePort`] so that narrative generation can never fail an
//! assessment: any port error is logged and replaced with a fixed fallback
//! string. The scoring result is computed before this service runs and is
//! never affected by the outcome here.

use std::sync::Arc;

use core_kernel::{CoreError, PortError};

use crate::gemini::{GeminiAdapter, GeminiConfig};
use crate::ports::{NarrativePort, NarrativeRequest};

/// Application service for narrative generation
pub struct NarrativeService {
    port: Arc<dyn NarrativePort>,
}

impl NarrativeService {
    pub fn new(port: Arc<dyn NarrativePort>) -> Self {
        Self { port }
    }

    /// Builds the service against a Gemini adapter configured from the
    /// `GEMINI_*` environment variables
    pub fn from_env() -> Result<Self, CoreError> {
        let config = GeminiConfig::from_env()
            .map_err(|e| CoreError::configuration(e.to_string()))?;
        let adapter = GeminiAdapter::new(config)
            .map_err(|e| CoreError::configuration(e.to_string()))?;
        Ok(Self::new(Arc::new(adapter)))
    }

    /// Generates the narrative, degrading to the fallback text on any error
    pub async fn narrate(&self, request: &NarrativeRequest) -> String {
        match self.port.generate(request).await {
            Ok(text) => text,
            Err(error) => {
                tracing::warn!(%error, "narrative generation failed, using fallback");
                fallback_narrative(&error)
            }
        }
    }
}

/// The fixed text reports carry when the model is unreachable
pub fn fallback_narrative(error: &PortError) -> String {
    format!("AI analysis not available due to configuration issues: {error}")
}

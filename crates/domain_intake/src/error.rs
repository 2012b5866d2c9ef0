//! Error types for the intake domain

use thiserror::Error;

/// Errors that can occur during application intake
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("malformed application payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

impl IntakeError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

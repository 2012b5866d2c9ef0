//! Error types for the underwriting domain

use thiserror::Error;

/// Errors that can occur in underwriting operations
///
/// Scoring itself is total and never fails; errors arise only at the
/// serialization boundary of the assessment snapshot.
#[derive(Debug, Error)]
pub enum UnderwritingError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

impl UnderwritingError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

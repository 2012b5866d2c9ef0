//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! underwriting risk test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built profiles, raw applications, and narrative ports
//! - `builders`: Builder patterns for test data construction
//! - `assertions`: Custom assertion helpers for scoring types
//! - `generators`: Property-based test data generators

use once_cell::sync::Lazy;

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;

static TRACING: Lazy<()> = Lazy::new(|| {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .init();
});

/// Installs the test tracing subscriber once per process
///
/// Safe to call from every test; only the first call installs.
pub fn init_tracing() {
    Lazy::force(&TRACING);
}

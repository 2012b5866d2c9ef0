//! Narrative Generation
//!
//! Produces the advisor-facing natural-language risk narrative for a scored
//! assessment by calling an external language model behind a port trait.
//!
//! # Architecture
//!
//! The [`NarrativePort`] trait is the only asynchronous boundary in the
//! workspace. [`GeminiAdapter`] implements it against the Gemini
//! generate-content API; [`mock::MockNarrativePort`] implements it in memory
//! for tests. [`NarrativeService`] wraps whichever adapter is configured and
//! guarantees that narrative generation never fails the assessment: any port
//! error degrades to a fixed fallback string.

pub mod gemini;
pub mod ports;
pub mod prompt;
pub mod service;

pub use gemini::{GeminiAdapter, GeminiConfig};
pub use ports::{NarrativePort, NarrativeRequest};
pub use service::NarrativeService;

#[cfg(any(test, feature = "mock"))]
pub use ports::mock;

//! Core Kernel - Foundational types and utilities for the underwriting system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic and lakh conversions
//! - Common identifiers and value objects
//! - Port infrastructure for external-system adapters

pub mod money;
pub mod identifiers;
pub mod error;
pub mod ports;

pub use money::{Money, Currency, MoneyError};
pub use identifiers::{ApplicationId, ClientId, AssessmentId};
pub use error::CoreError;
pub use ports::{
    DomainPort, PortError, HealthCheckable, HealthCheckResult, AdapterHealth,
};

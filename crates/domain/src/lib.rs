//! # Service Clients Domain
//!
//! Value objects and error types shared by every service client.
//!
//! This crate contains:
//! - Credential settings (`ClientSettings`) and the per-service variants
//! - The settings file model used by the configuration loader
//! - Domain error types and Result definitions
//! - The record type returned by SOAP calls
//!
//! ## Architecture
//! - No dependencies on other service-client crates
//! - No I/O: settings are validated at construction and never mutated

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod secret;
pub mod settings;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use secret::Secret;
pub use settings::*;
pub use types::*;

//! Reduction database access

pub mod client;
pub mod entities;
pub mod errors;
pub mod reflection;

pub use client::SqlDatabaseClient;
pub use reflection::{ForeignKey, ReflectedEntity, ReflectedTable};

//! Infrastructure error conversions

pub mod conversions;

pub use conversions::InfraError;
pub(crate) use conversions::to_client_error;

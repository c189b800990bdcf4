//! # Service clients infrastructure
//!
//! Concrete clients and adapters behind the ports in
//! `serviceclients-core`.
//!
//! This crate contains:
//! - MySQL access through sea-orm with schema reflection
//! - SOAP transport and WSDL discovery over reqwest
//! - The Business Applications (facility scheduling) client
//! - The SFTP client and its russh adapter
//! - Settings loading from environment and files
//!
//! ## Architecture
//! - Implements traits defined in `serviceclients-core`
//! - Depends on `serviceclients-domain` and `serviceclients-core`
//! - Contains all I/O

pub mod config;
pub mod database;
pub mod errors;
pub mod http;
pub mod integrations;
pub mod observability;
pub mod soap;

// Re-export commonly used items
pub use database::SqlDatabaseClient;
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder, DEFAULT_USER_AGENT};
pub use integrations::business_applications::BusinessApplicationsClient;
pub use integrations::sftp::{RusshSftpConnector, SftpClient};
pub use observability::init_tracing;
pub use soap::{SoapService, WsdlServiceFactory};

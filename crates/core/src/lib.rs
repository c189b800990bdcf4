//! # Service Clients Core
//!
//! Port interfaces between the clients and the remote services they wrap.
//!
//! This crate contains:
//! - The `ServiceClient` lifecycle contract every client implements
//! - Remote-side ports for the SOAP services and the SFTP session
//!
//! ## Architecture Principles
//! - Only depends on `serviceclients-domain`
//! - No network, database or filesystem code
//! - Adapters live in `serviceclients-infra` and can be swapped in tests

pub mod business_applications_ports;
pub mod client;
pub mod sftp_ports;

pub use business_applications_ports::{SchedulerService, SoapServiceFactory, UserOfficeService};
pub use client::ServiceClient;
pub use sftp_ports::{SftpConnection, SftpConnector};

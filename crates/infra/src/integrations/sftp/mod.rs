//! SFTP file server integration.

pub mod client;
pub mod russh_connector;

pub use client::SftpClient;
pub use russh_connector::{RusshSftpConnection, RusshSftpConnector};

//! Ports for the SFTP session.
//!
//! Connection methods return `std::io::Result` so the client can tell a
//! missing local path from a directory target by `ErrorKind`.

use std::io;
use std::path::Path;

use async_trait::async_trait;
use serviceclients_domain::Result;

/// An open, authenticated SFTP session.
#[async_trait]
pub trait SftpConnection: Send + Sync {
    /// Remote working directory.
    async fn pwd(&self) -> io::Result<String>;

    /// Whether `remote_path` names an existing entry.
    async fn exists(&self, remote_path: &str) -> io::Result<bool>;

    /// Download `remote_path` to `local_path`, replacing any existing file.
    async fn get(&self, remote_path: &str, local_path: &Path) -> io::Result<()>;

    /// End the session.
    async fn close(&mut self) -> io::Result<()>;
}

/// Opens SFTP sessions.
#[async_trait]
pub trait SftpConnector: Send + Sync {
    /// Session type produced by [`open`](Self::open).
    type Connection: SftpConnection;

    /// Connect and authenticate with a password.
    async fn open(
        &self,
        host: &str,
        port: u16,
        username: &str,
        password: &str,
    ) -> Result<Self::Connection>;
}

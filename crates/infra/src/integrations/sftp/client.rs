//! Client for the SFTP file server

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serviceclients_core::{ServiceClient, SftpConnection, SftpConnector};
use serviceclients_domain::constants::SERVICE_SFTP;
use serviceclients_domain::{ClientError, Credentials, Result, SftpSettings};
use tracing::{debug, info, instrument, warn};

use super::russh_connector::RusshSftpConnector;

/// Holds one lazily opened SFTP session.
pub struct SftpClient<C: SftpConnector = RusshSftpConnector> {
    credentials: SftpSettings,
    connector: C,
    connection: Option<C::Connection>,
}

impl SftpClient<RusshSftpConnector> {
    /// Client using the russh connector.
    pub fn new(credentials: SftpSettings) -> Self {
        Self::with_connector(credentials, RusshSftpConnector)
    }
}

impl<C: SftpConnector> SftpClient<C> {
    /// Client opening sessions through `connector`.
    pub fn with_connector(credentials: SftpSettings, connector: C) -> Self {
        Self { credentials, connector, connection: None }
    }

    /// Settings the client was built from.
    pub fn credentials(&self) -> &SftpSettings {
        &self.credentials
    }

    /// The current session, if any. Never opens one.
    pub fn get_connection(&self) -> Option<&C::Connection> {
        self.connection.as_ref()
    }

    /// Download `server_path` and return where it was written.
    ///
    /// Without `local_path` the file lands in the current directory under its
    /// remote name. With `overwrite` false an existing local file is an error
    /// and nothing is transferred.
    #[instrument(skip(self))]
    pub async fn retrieve(
        &mut self,
        server_path: &str,
        local_path: Option<&Path>,
        overwrite: bool,
    ) -> Result<PathBuf> {
        self.connect().await?;
        let conn = self.connection.as_ref().ok_or_else(|| ClientError::connection(SERVICE_SFTP))?;

        let exists = conn
            .exists(server_path)
            .await
            .map_err(|err| ClientError::Transfer(err.to_string()))?;
        if !exists {
            return Err(ClientError::RemotePathMissing { path: server_path.to_string() });
        }

        let local = match local_path {
            Some(path) => path.to_path_buf(),
            None => default_local_path(server_path)?,
        };

        if !overwrite && local.is_file() {
            return Err(ClientError::LocalFileExists { path: local });
        }

        conn.get(server_path, &local).await.map_err(|err| transfer_error(err, &local))?;
        info!(server_path, local_path = %local.display(), "retrieved file");
        Ok(local)
    }
}

/// Current directory joined with the last component of `server_path`.
fn default_local_path(server_path: &str) -> Result<PathBuf> {
    let name = server_path.rsplit('/').next().filter(|name| !name.is_empty()).ok_or_else(|| {
        ClientError::RemotePathMissing { path: server_path.to_string() }
    })?;
    let cwd = std::env::current_dir()
        .map_err(|err| ClientError::Internal(format!("cannot read current directory: {}", err)))?;
    Ok(cwd.join(name))
}

fn transfer_error(err: io::Error, local: &Path) -> ClientError {
    if local.is_dir() {
        return ClientError::LocalPathIsDirectory { path: local.to_path_buf() };
    }
    match err.kind() {
        io::ErrorKind::NotFound => ClientError::LocalPathMissing { path: local.to_path_buf() },
        _ => ClientError::Transfer(err.to_string()),
    }
}

#[async_trait]
impl<C: SftpConnector> ServiceClient for SftpClient<C> {
    type Connection = C::Connection;

    fn service_name(&self) -> &'static str {
        SERVICE_SFTP
    }

    #[instrument(skip(self))]
    async fn connect(&mut self) -> Result<&C::Connection> {
        if self.connection.is_none() {
            let base = self.credentials.client_settings();
            let port = self.credentials.port_number()?;
            let conn = self
                .connector
                .open(base.host(), port, base.username(), base.password().expose())
                .await?;
            debug!(host = base.host(), port, "SFTP session opened");
            self.connection = Some(conn);
        }

        if let Err(err) = self.test_connection().await {
            warn!(error = %err, "SFTP liveness check failed, dropping session");
            if let Some(mut conn) = self.connection.take() {
                if let Err(close_err) = conn.close().await {
                    warn!(error = %close_err, "SFTP session did not close cleanly");
                }
            }
            return Err(err);
        }

        self.connection.as_ref().ok_or_else(|| ClientError::connection(SERVICE_SFTP))
    }

    #[instrument(skip(self))]
    async fn disconnect(&mut self) -> Result<()> {
        if let Some(mut conn) = self.connection.take() {
            match conn.close().await {
                Ok(()) => info!("SFTP session closed"),
                Err(err) => warn!(error = %err, "SFTP session did not close cleanly"),
            }
        }
        Ok(())
    }

    async fn test_connection(&self) -> Result<bool> {
        let conn = self.connection.as_ref().ok_or_else(|| ClientError::connection(SERVICE_SFTP))?;
        match conn.pwd().await {
            Ok(cwd) => {
                debug!(cwd = %cwd, "SFTP liveness check succeeded");
                Ok(true)
            }
            Err(err) => {
                debug!(error = %err, "SFTP liveness check failed");
                Err(ClientError::connection(SERVICE_SFTP))
            }
        }
    }
}

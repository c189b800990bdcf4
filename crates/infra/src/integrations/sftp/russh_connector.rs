//! SFTP sessions over russh.
//!
//! Host keys are not verified.

use std::io;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use russh::client::{self, Handle};
use russh::Disconnect;
use russh_keys::key::PublicKey;
use russh_sftp::client::SftpSession;
use serviceclients_core::{SftpConnection, SftpConnector};
use serviceclients_domain::constants::SERVICE_SFTP;
use serviceclients_domain::{ClientError, Result};
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::errors::to_client_error;

/// russh handler that accepts any server key.
pub struct AcceptAnyHostKey;

#[async_trait]
impl client::Handler for AcceptAnyHostKey {
    type Error = russh::Error;

    async fn check_server_key(
        &mut self,
        _server_public_key: &PublicKey,
    ) -> std::result::Result<bool, Self::Error> {
        Ok(true)
    }
}

/// Opens password-authenticated SFTP sessions.
#[derive(Debug, Clone, Default)]
pub struct RusshSftpConnector;

#[async_trait]
impl SftpConnector for RusshSftpConnector {
    type Connection = RusshSftpConnection;

    async fn open(
        &self,
        host: &str,
        port: u16,
        username: &str,
        password: &str,
    ) -> Result<RusshSftpConnection> {
        let config = Arc::new(client::Config::default());
        debug!(host, port, "opening SSH session");
        let mut session =
            client::connect(config, (host, port), AcceptAnyHostKey).await.map_err(to_client_error)?;

        let authenticated =
            session.authenticate_password(username, password).await.map_err(to_client_error)?;
        if !authenticated {
            return Err(ClientError::connection(SERVICE_SFTP));
        }

        let channel = session.channel_open_session().await.map_err(to_client_error)?;
        channel.request_subsystem(true, "sftp").await.map_err(to_client_error)?;
        let sftp = SftpSession::new(channel.into_stream())
            .await
            .map_err(|err| ClientError::Network(format!("SFTP subsystem failed to start: {}", err)))?;

        Ok(RusshSftpConnection { session, sftp })
    }
}

/// An authenticated SSH session with the SFTP subsystem started.
pub struct RusshSftpConnection {
    session: Handle<AcceptAnyHostKey>,
    sftp: SftpSession,
}

/// Remote failures never use `NotFound`, which is reserved for local paths.
fn remote_error(err: russh_sftp::client::error::Error) -> io::Error {
    io::Error::new(io::ErrorKind::Other, format!("remote: {}", err))
}

#[async_trait]
impl SftpConnection for RusshSftpConnection {
    async fn pwd(&self) -> io::Result<String> {
        self.sftp.canonicalize(".").await.map_err(remote_error)
    }

    async fn exists(&self, remote_path: &str) -> io::Result<bool> {
        self.sftp.try_exists(remote_path).await.map_err(remote_error)
    }

    async fn get(&self, remote_path: &str, local_path: &Path) -> io::Result<()> {
        let mut remote = Box::pin(self.sftp.open(remote_path).await.map_err(remote_error)?);
        let mut local = tokio::fs::File::create(local_path).await?;
        let bytes = tokio::io::copy(&mut remote, &mut local).await?;
        local.flush().await?;
        debug!(remote_path, bytes, "downloaded file");
        Ok(())
    }

    async fn close(&mut self) -> io::Result<()> {
        self.sftp.close().await.map_err(remote_error)?;
        self.session
            .disconnect(Disconnect::ByApplication, "", "en")
            .await
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))
    }
}

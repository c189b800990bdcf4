//! SFTP server settings.

use serde::Deserialize;
use serde_json::Value;

use super::client::ClientSettings;
use super::Credentials;
use crate::errors::{ClientError, Result};

/// Credentials for the SFTP server; no service-specific fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub struct SftpSettings {
    base: ClientSettings,
}

impl SftpSettings {
    /// SFTP takes no fields beyond the base credentials.
    pub const FIELDS: &'static [&'static str] = &[];

    /// Wrap the base credentials.
    pub fn new(base: ClientSettings) -> Self {
        Self { base }
    }

    /// Read the base fields.
    pub fn from_value(value: &Value) -> Result<Self> {
        ClientSettings::from_value(value).map(Self::new)
    }

    /// The configured port as a TCP port number.
    pub fn port_number(&self) -> Result<u16> {
        let port = self.base.port();
        port.trim().parse::<u16>().map_err(|_| {
            ClientError::Config(format!("SFTP port '{}' is not a valid port number", port))
        })
    }
}

impl Credentials for SftpSettings {
    fn client_settings(&self) -> &ClientSettings {
        &self.base
    }
}

impl TryFrom<Value> for SftpSettings {
    type Error = ClientError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(&value)
    }
}

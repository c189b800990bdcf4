//! Error types used throughout the service clients

use std::path::PathBuf;

use thiserror::Error;

/// Raised when a client cannot confirm that its connection is usable.
///
/// Always names the service so callers know which settings file to check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Unable to connect to {service} with provided credentials. Please check the {service} \
     settings files then try again."
)]
pub struct ConnectionError {
    service: String,
}

impl ConnectionError {
    /// Create a connection error for the named service.
    pub fn new(service: impl Into<String>) -> Self {
        Self { service: service.into() }
    }

    /// Name of the service that could not be reached.
    pub fn service(&self) -> &str {
        &self.service
    }
}

/// Main error type for the service clients
#[derive(Error, Debug)]
pub enum ClientError {
    /// A settings field had the wrong type.
    #[error("{value} of type {kind} is not a string")]
    InvalidSetting {
        /// Name of the offending field.
        field: String,
        /// The value as written in the source.
        value: String,
        /// JSON type name of the value.
        kind: &'static str,
    },

    /// Settings could not be found, read or matched.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The service rejected the credentials or could not be reached.
    #[error(transparent)]
    Connection(#[from] ConnectionError),

    /// A SOAP sub-client was used before it was created.
    #[error("The {0} client does not exist or has not been initialised properly")]
    Uninitialised(&'static str),

    /// SOAP fault returned by a remote call.
    #[error("Remote fault {code}: {message}")]
    Fault {
        /// `faultcode` of the response.
        code: String,
        /// `faultstring` of the response.
        message: String,
    },

    /// The remote side answered with something that could not be read.
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// The remote file to retrieve does not exist.
    #[error(
        "The server_path does not point to a file. Please provide a server_path which points to \
         a file. (server_path: {path})"
    )]
    RemotePathMissing {
        /// Remote path as requested.
        path: String,
    },

    /// The download target exists and overwriting was not requested.
    #[error(
        "The local_path points to a file which already exists. Please provide a different \
         filename in the local_path, or set the overwrite flag to true. (local_path: {})",
        .path.display()
    )]
    LocalFileExists {
        /// Resolved local path.
        path: PathBuf,
    },

    /// The directory of the download target does not exist.
    #[error("The local_path does not exist. (local_path: {})", .path.display())]
    LocalPathMissing {
        /// Resolved local path.
        path: PathBuf,
    },

    /// The download target is a directory.
    #[error(
        "The local_path is a directory. Please ensure the local_path includes a full filename. \
         (local_path: {})",
        .path.display()
    )]
    LocalPathIsDirectory {
        /// Resolved local path.
        path: PathBuf,
    },

    /// Any other file transfer failure.
    #[error("Transfer error: {0}")]
    Transfer(String),

    /// HTTP or SSH transport failure.
    #[error("Network error: {0}")]
    Network(String),

    /// Database failure that is not a connectivity problem; the driver error
    /// is kept as-is.
    #[error(transparent)]
    Database(Box<dyn std::error::Error + Send + Sync>),

    /// Local failure unrelated to any service.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ClientError {
    /// Shorthand for a [`ConnectionError`] naming `service`.
    pub fn connection(service: impl Into<String>) -> Self {
        Self::Connection(ConnectionError::new(service))
    }

    /// True when this is the typed connection failure.
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// True when the remote side answered with a fault.
    pub fn is_fault(&self) -> bool {
        matches!(self, Self::Fault { .. })
    }
}

/// Result type alias for service client operations
pub type Result<T> = std::result::Result<T, ClientError>;

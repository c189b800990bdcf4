//! Conversions from external infrastructure errors into domain errors.

use quick_xml::Error as XmlError;
use reqwest::Error as HttpError;
use sea_orm::DbErr;
use serviceclients_domain::constants::SERVICE_MYSQL;
use serviceclients_domain::ClientError;

use crate::database::errors::is_operational;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub ClientError);

impl From<InfraError> for ClientError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ClientError> for InfraError {
    fn from(value: ClientError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoClientError {
    fn into_client_error(self) -> ClientError;
}

/// Convert any supported infrastructure error straight into [`ClientError`].
pub(crate) fn to_client_error<E>(err: E) -> ClientError
where
    InfraError: From<E>,
{
    InfraError::from(err).into()
}

/* -------------------------------------------------------------------------- */
/* sea_orm::DbErr → ClientError */
/* -------------------------------------------------------------------------- */

impl IntoClientError for DbErr {
    fn into_client_error(self) -> ClientError {
        if is_operational(&self) {
            ClientError::connection(SERVICE_MYSQL)
        } else {
            ClientError::Database(Box::new(self))
        }
    }
}

impl From<DbErr> for InfraError {
    fn from(value: DbErr) -> Self {
        InfraError(value.into_client_error())
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → ClientError */
/* -------------------------------------------------------------------------- */

impl IntoClientError for HttpError {
    fn into_client_error(self) -> ClientError {
        if self.is_timeout() {
            return ClientError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return ClientError::Network(format!("HTTP connection failure: {}", self));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            return ClientError::Network(format!(
                "HTTP {} {}",
                code,
                status.canonical_reason().unwrap_or("unknown status")
            ));
        }

        if self.is_builder() {
            return ClientError::Config(format!("invalid HTTP request: {}", self));
        }

        ClientError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_client_error())
    }
}

/* -------------------------------------------------------------------------- */
/* quick_xml::Error → ClientError */
/* -------------------------------------------------------------------------- */

impl IntoClientError for XmlError {
    fn into_client_error(self) -> ClientError {
        ClientError::Protocol(format!("malformed XML: {}", self))
    }
}

impl From<XmlError> for InfraError {
    fn from(value: XmlError) -> Self {
        InfraError(value.into_client_error())
    }
}

impl From<quick_xml::events::attributes::AttrError> for InfraError {
    fn from(value: quick_xml::events::attributes::AttrError) -> Self {
        InfraError(XmlError::from(value).into_client_error())
    }
}

/* -------------------------------------------------------------------------- */
/* russh::Error → ClientError */
/* -------------------------------------------------------------------------- */

impl IntoClientError for russh::Error {
    fn into_client_error(self) -> ClientError {
        ClientError::Network(format!("SSH error: {}", self))
    }
}

impl From<russh::Error> for InfraError {
    fn from(value: russh::Error) -> Self {
        InfraError(value.into_client_error())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → ClientError */
/* -------------------------------------------------------------------------- */

impl IntoClientError for std::io::Error {
    fn into_client_error(self) -> ClientError {
        match self.kind() {
            std::io::ErrorKind::TimedOut => ClientError::Network("operation timed out".into()),
            _ => ClientError::Network(format!("I/O error: {}", self)),
        }
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        InfraError(value.into_client_error())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

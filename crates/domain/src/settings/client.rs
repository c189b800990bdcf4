//! Base credential settings shared by every service.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::errors::{ClientError, Result};
use crate::secret::Secret;

/// Field names of the base credentials, in validation order.
pub const BASE_FIELDS: [&str; 4] = ["username", "password", "host", "port"];

/// Username, password, host and port for a remote service.
///
/// All four values are strings. The typed constructor enforces that at
/// compile time; [`ClientSettings::from_value`] (and every `Deserialize`
/// path) checks it at runtime and reports the first offending field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub struct ClientSettings {
    username: String,
    password: Secret,
    host: String,
    port: String,
}

impl ClientSettings {
    /// Build from already typed values; no validation is needed.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        host: impl Into<String>,
        port: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: Secret::new(password),
            host: host.into(),
            port: port.into(),
        }
    }

    /// Build from an untyped object of keyword fields.
    pub fn from_value(value: &Value) -> Result<Self> {
        let fields = as_object(value)?;
        let username = required_string(fields, "username")?;
        let password = required_string(fields, "password")?;
        let host = required_string(fields, "host")?;
        let port = required_string(fields, "port")?;
        Ok(Self::new(username, password, host, port))
    }

    /// Account name.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Password; redacted when printed.
    pub fn password(&self) -> &Secret {
        &self.password
    }

    /// Host name or address.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Port as written in the settings; clients parse it when they need a number.
    pub fn port(&self) -> &str {
        &self.port
    }
}

impl TryFrom<Value> for ClientSettings {
    type Error = ClientError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(&value)
    }
}

/// Name of the JSON type of `value`, as used in validation messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn as_object(value: &Value) -> Result<&Map<String, Value>> {
    value.as_object().ok_or_else(|| {
        ClientError::Config(format!(
            "settings must be an object of keyword fields, got {}",
            value_kind(value)
        ))
    })
}

pub(crate) fn optional_string(fields: &Map<String, Value>, name: &str) -> Result<Option<String>> {
    match fields.get(name) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(ClientError::InvalidSetting {
            field: name.to_string(),
            value: other.to_string(),
            kind: value_kind(other),
        }),
    }
}

pub(crate) fn required_string(fields: &Map<String, Value>, name: &str) -> Result<String> {
    optional_string(fields, name)?
        .ok_or_else(|| ClientError::Config(format!("missing required setting '{}'", name)))
}

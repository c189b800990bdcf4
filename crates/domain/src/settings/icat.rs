//! ICAT catalogue settings.

use serde::Deserialize;
use serde_json::Value;

use super::client::{as_object, optional_string, ClientSettings};
use super::Credentials;
use crate::constants::DEFAULT_ICAT_AUTHENTICATION_TYPE;
use crate::errors::{ClientError, Result};

/// ICAT credentials and the authenticator plugin to log in with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub struct IcatSettings {
    base: ClientSettings,
    authentication_type: String,
}

impl IcatSettings {
    /// Keyword fields accepted on top of the base credentials.
    pub const FIELDS: &'static [&'static str] = &["authentication_type"];

    /// Settings using [`DEFAULT_ICAT_AUTHENTICATION_TYPE`].
    pub fn new(base: ClientSettings) -> Self {
        Self { base, authentication_type: DEFAULT_ICAT_AUTHENTICATION_TYPE.to_string() }
    }

    /// Log in through another authenticator plugin.
    pub fn with_authentication_type(mut self, authentication_type: impl Into<String>) -> Self {
        self.authentication_type = authentication_type.into();
        self
    }

    /// Read the base fields and an optional `authentication_type`.
    pub fn from_value(value: &Value) -> Result<Self> {
        let mut settings = Self::new(ClientSettings::from_value(value)?);
        if let Some(auth) = optional_string(as_object(value)?, "authentication_type")? {
            settings.authentication_type = auth;
        }
        Ok(settings)
    }

    /// Authenticator plugin name, e.g. `Simple`.
    pub fn authentication_type(&self) -> &str {
        &self.authentication_type
    }
}

impl Credentials for IcatSettings {
    fn client_settings(&self) -> &ClientSettings {
        &self.base
    }
}

impl TryFrom<Value> for IcatSettings {
    type Error = ClientError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_authentication_type() {
        let settings = IcatSettings::new(ClientSettings::new("u", "p", "icat", "443"));
        assert_eq!(settings.authentication_type(), "Simple");
        assert_eq!(settings.with_authentication_type("ldap").authentication_type(), "ldap");
    }
}

//! Settings for the facility scheduling (Business Applications) services.

use serde::Deserialize;
use serde_json::Value;

use super::client::{as_object, required_string, ClientSettings};
use super::Credentials;
use crate::errors::{ClientError, Result};

/// Credentials plus the WSDL locations of the UOWS and Scheduler services.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub struct BusinessApplicationsSettings {
    base: ClientSettings,
    uows_url: String,
    scheduler_url: String,
}

impl BusinessApplicationsSettings {
    /// Keyword fields accepted on top of the base credentials.
    pub const FIELDS: &'static [&'static str] = &["uows_url", "scheduler_url"];

    /// Settings for the two WSDL locations.
    pub fn new(
        base: ClientSettings,
        uows_url: impl Into<String>,
        scheduler_url: impl Into<String>,
    ) -> Self {
        Self { base, uows_url: uows_url.into(), scheduler_url: scheduler_url.into() }
    }

    /// Read the base fields plus both WSDL URLs, which are required.
    pub fn from_value(value: &Value) -> Result<Self> {
        let base = ClientSettings::from_value(value)?;
        let fields = as_object(value)?;
        let uows_url = required_string(fields, "uows_url")?;
        let scheduler_url = required_string(fields, "scheduler_url")?;
        Ok(Self::new(base, uows_url, scheduler_url))
    }

    /// WSDL location of the User Office Web Service.
    pub fn uows_url(&self) -> &str {
        &self.uows_url
    }

    /// WSDL location of the Scheduler service.
    pub fn scheduler_url(&self) -> &str {
        &self.scheduler_url
    }
}

impl Credentials for BusinessApplicationsSettings {
    fn client_settings(&self) -> &ClientSettings {
        &self.base
    }
}

impl TryFrom<Value> for BusinessApplicationsSettings {
    type Error = ClientError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(&value)
    }
}

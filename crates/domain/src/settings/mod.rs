//! Connection settings for each remote service.
//!
//! Every variant embeds a [`ClientSettings`] and exposes it through
//! [`Credentials`]. [`ServiceSettings`] is the closed set of variants, tagged
//! by `service` when read from configuration files.

mod activemq;
mod business_applications;
mod client;
mod icat;
mod sftp;
mod sql;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub use activemq::ActiveMqSettings;
pub use business_applications::BusinessApplicationsSettings;
pub use client::{value_kind, ClientSettings, BASE_FIELDS};
pub use icat::IcatSettings;
pub use sftp::SftpSettings;
pub use sql::SqlSettings;

use crate::errors::{ClientError, Result};
use crate::impl_named_enum_conversions;

/// Access to the base credentials of a settings variant.
pub trait Credentials {
    /// Username, password, host and port.
    fn client_settings(&self) -> &ClientSettings;
}

impl Credentials for ClientSettings {
    fn client_settings(&self) -> &ClientSettings {
        self
    }
}

/// Names of the supported services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ServiceKind {
    /// MySQL reduction database.
    Sql,
    /// SFTP file server.
    Sftp,
    /// Scheduling SOAP services.
    BusinessApplications,
    /// Message queue.
    ActiveMq,
    /// Data catalogue.
    Icat,
}

impl_named_enum_conversions!(ServiceKind {
    Sql => "sql" | "mysql",
    Sftp => "sftp",
    BusinessApplications => "business_applications" | "cycle",
    ActiveMq => "activemq",
    Icat => "icat",
});

impl ServiceKind {
    /// Every kind, in declaration order.
    pub const ALL: [ServiceKind; 5] = [
        ServiceKind::Sql,
        ServiceKind::Sftp,
        ServiceKind::BusinessApplications,
        ServiceKind::ActiveMq,
        ServiceKind::Icat,
    ];

    /// Keyword fields the variant accepts on top of the base credentials.
    pub fn extra_fields(self) -> &'static [&'static str] {
        match self {
            ServiceKind::Sql => SqlSettings::FIELDS,
            ServiceKind::Sftp => SftpSettings::FIELDS,
            ServiceKind::BusinessApplications => BusinessApplicationsSettings::FIELDS,
            ServiceKind::ActiveMq => ActiveMqSettings::FIELDS,
            ServiceKind::Icat => IcatSettings::FIELDS,
        }
    }
}

/// Settings for any one service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceSettings {
    /// MySQL credentials and schema.
    Sql(SqlSettings),
    /// SFTP credentials.
    Sftp(SftpSettings),
    /// Credentials plus UOWS and Scheduler WSDL URLs.
    BusinessApplications(BusinessApplicationsSettings),
    /// Broker credentials plus topic names.
    ActiveMq(ActiveMqSettings),
    /// ICAT credentials plus authenticator plugin.
    Icat(IcatSettings),
}

impl ServiceSettings {
    /// Build the variant named by `kind` from an object of keyword fields.
    pub fn create(kind: ServiceKind, fields: &Value) -> Result<Self> {
        Ok(match kind {
            ServiceKind::Sql => Self::Sql(SqlSettings::from_value(fields)?),
            ServiceKind::Sftp => Self::Sftp(SftpSettings::from_value(fields)?),
            ServiceKind::BusinessApplications => {
                Self::BusinessApplications(BusinessApplicationsSettings::from_value(fields)?)
            }
            ServiceKind::ActiveMq => Self::ActiveMq(ActiveMqSettings::from_value(fields)?),
            ServiceKind::Icat => Self::Icat(IcatSettings::from_value(fields)?),
        })
    }

    /// Build from an object carrying its own `service` tag.
    pub fn from_value(value: &Value) -> Result<Self> {
        let tag = value.get("service").ok_or_else(|| {
            ClientError::Config("settings entry is missing the 'service' tag".to_string())
        })?;
        let name = tag.as_str().ok_or_else(|| ClientError::InvalidSetting {
            field: "service".to_string(),
            value: tag.to_string(),
            kind: value_kind(tag),
        })?;
        let kind = name.parse::<ServiceKind>().map_err(ClientError::Config)?;
        Self::create(kind, value)
    }

    /// Kind of the held settings.
    pub fn kind(&self) -> ServiceKind {
        match self {
            Self::Sql(_) => ServiceKind::Sql,
            Self::Sftp(_) => ServiceKind::Sftp,
            Self::BusinessApplications(_) => ServiceKind::BusinessApplications,
            Self::ActiveMq(_) => ServiceKind::ActiveMq,
            Self::Icat(_) => ServiceKind::Icat,
        }
    }
}

impl Credentials for ServiceSettings {
    fn client_settings(&self) -> &ClientSettings {
        match self {
            Self::Sql(s) => s.client_settings(),
            Self::Sftp(s) => s.client_settings(),
            Self::BusinessApplications(s) => s.client_settings(),
            Self::ActiveMq(s) => s.client_settings(),
            Self::Icat(s) => s.client_settings(),
        }
    }
}

impl<'de> Deserialize<'de> for ServiceSettings {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_create_builds_requested_variant() {
        let fields = json!({"username": "u", "password": "p", "host": "h", "port": "22"});
        let settings = ServiceSettings::create(ServiceKind::Sftp, &fields).unwrap();
        assert_eq!(settings.kind(), ServiceKind::Sftp);
        assert_eq!(settings.client_settings().port(), "22");
    }

    #[test]
    fn test_create_validates_base_fields() {
        let fields = json!({"username": "u", "password": "p", "host": "h", "port": 22});
        let err = ServiceSettings::create(ServiceKind::Icat, &fields).unwrap_err();
        assert_eq!(err.to_string(), "22 of type integer is not a string");
    }

    #[test]
    fn test_tagged_deserialize_accepts_cycle_alias() {
        let settings: ServiceSettings = serde_json::from_value(json!({
            "service": "cycle",
            "username": "u", "password": "p", "host": "h", "port": "443",
            "uows_url": "https://uows", "scheduler_url": "https://scheduler"
        }))
        .unwrap();
        match settings {
            ServiceSettings::BusinessApplications(ba) => assert_eq!(ba.uows_url(), "https://uows"),
            other => panic!("unexpected variant {:?}", other),
        }
    }

    #[test]
    fn test_unknown_service_tag_is_rejected() {
        let err = ServiceSettings::from_value(&json!({"service": "ftp"})).unwrap_err();
        assert!(err.to_string().contains("Invalid ServiceKind: ftp"));
    }

    #[test]
    fn test_kind_round_trips_through_name() {
        for kind in ServiceKind::ALL {
            assert_eq!(kind.to_string().parse::<ServiceKind>().unwrap(), kind);
        }
    }
}

//! Settings file model read by the configuration loader.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::errors::{ClientError, Result};
use crate::settings::{
    ActiveMqSettings, BusinessApplicationsSettings, IcatSettings, ServiceKind, ServiceSettings,
    SftpSettings, SqlSettings,
};

/// Named service entries, e.g.
///
/// ```toml
/// [services.reduction_db]
/// service = "sql"
/// username = "user"
/// password = "pass"
/// host = "localhost"
/// port = "3306"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SettingsFile {
    /// Entries keyed by the name callers look them up by.
    #[serde(default)]
    pub services: BTreeMap<String, ServiceSettings>,
}

macro_rules! typed_getter {
    ($name:ident, $variant:ident, $ty:ty) => {
        /// Entry `name`, failing unless it holds settings of this kind.
        pub fn $name(&self, name: &str) -> Result<&$ty> {
            match self.get(name)? {
                ServiceSettings::$variant(settings) => Ok(settings),
                other => Err(wrong_kind(name, ServiceKind::$variant, other.kind())),
            }
        }
    };
}

impl SettingsFile {
    /// Entry `name` of any kind.
    pub fn get(&self, name: &str) -> Result<&ServiceSettings> {
        self.services
            .get(name)
            .ok_or_else(|| ClientError::Config(format!("no settings named '{}'", name)))
    }

    /// First entry of the given kind, for files holding one entry per service.
    pub fn first_of(&self, kind: ServiceKind) -> Option<&ServiceSettings> {
        self.services.values().find(|settings| settings.kind() == kind)
    }

    typed_getter!(sql, Sql, SqlSettings);
    typed_getter!(sftp, Sftp, SftpSettings);
    typed_getter!(business_applications, BusinessApplications, BusinessApplicationsSettings);
    typed_getter!(activemq, ActiveMq, ActiveMqSettings);
    typed_getter!(icat, Icat, IcatSettings);
}

fn wrong_kind(name: &str, expected: ServiceKind, found: ServiceKind) -> ClientError {
    ClientError::Config(format!("settings '{}' are {} settings, expected {}", name, found, expected))
}

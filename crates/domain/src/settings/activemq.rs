//! Message-queue settings. Only the topic names are modelled; there is no
//! queue client.

use serde::Deserialize;
use serde_json::Value;

use super::client::{as_object, optional_string, ClientSettings};
use super::Credentials;
use crate::constants::{
    QUEUE_DATA_READY, QUEUE_REDUCTION_COMPLETE, QUEUE_REDUCTION_ERROR, QUEUE_REDUCTION_PENDING,
    QUEUE_REDUCTION_SKIPPED, QUEUE_REDUCTION_STARTED,
};
use crate::errors::{ClientError, Result};

/// Credentials plus the six topic names used by the reduction pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub struct ActiveMqSettings {
    base: ClientSettings,
    reduction_pending: String,
    data_ready: String,
    reduction_started: String,
    reduction_complete: String,
    reduction_error: String,
    reduction_skipped: String,
}

macro_rules! topic_accessors {
    ($($field:ident, $with:ident);+ $(;)?) => {
        $(
            #[doc = concat!("Topic for `", stringify!($field), "` messages.")]
            pub fn $field(&self) -> &str {
                &self.$field
            }

            #[doc = concat!("Replace the `", stringify!($field), "` topic.")]
            pub fn $with(mut self, topic: impl Into<String>) -> Self {
                self.$field = topic.into();
                self
            }
        )+
    };
}

impl ActiveMqSettings {
    /// Topic fields that may override the defaults.
    pub const FIELDS: &'static [&'static str] = &[
        "reduction_pending",
        "data_ready",
        "reduction_started",
        "reduction_complete",
        "reduction_error",
        "reduction_skipped",
    ];

    /// Settings with the default topic names.
    pub fn new(base: ClientSettings) -> Self {
        Self {
            base,
            reduction_pending: QUEUE_REDUCTION_PENDING.to_string(),
            data_ready: QUEUE_DATA_READY.to_string(),
            reduction_started: QUEUE_REDUCTION_STARTED.to_string(),
            reduction_complete: QUEUE_REDUCTION_COMPLETE.to_string(),
            reduction_error: QUEUE_REDUCTION_ERROR.to_string(),
            reduction_skipped: QUEUE_REDUCTION_SKIPPED.to_string(),
        }
    }

    /// Read the base fields and any topic overrides.
    pub fn from_value(value: &Value) -> Result<Self> {
        let mut settings = Self::new(ClientSettings::from_value(value)?);
        let fields = as_object(value)?;
        let slots: [(&str, &mut String); 6] = [
            ("reduction_pending", &mut settings.reduction_pending),
            ("data_ready", &mut settings.data_ready),
            ("reduction_started", &mut settings.reduction_started),
            ("reduction_complete", &mut settings.reduction_complete),
            ("reduction_error", &mut settings.reduction_error),
            ("reduction_skipped", &mut settings.reduction_skipped),
        ];
        for (name, slot) in slots {
            if let Some(topic) = optional_string(fields, name)? {
                *slot = topic;
            }
        }
        Ok(settings)
    }

    topic_accessors! {
        reduction_pending, with_reduction_pending;
        data_ready, with_data_ready;
        reduction_started, with_reduction_started;
        reduction_complete, with_reduction_complete;
        reduction_error, with_reduction_error;
        reduction_skipped, with_reduction_skipped;
    }

    /// Topics a queue listener subscribes to. `reduction_pending` is excluded;
    /// it is only ever sent to.
    pub fn all_subscriptions(&self) -> Vec<&str> {
        vec![
            &self.data_ready,
            &self.reduction_started,
            &self.reduction_complete,
            &self.reduction_error,
            &self.reduction_skipped,
        ]
    }
}

impl Credentials for ActiveMqSettings {
    fn client_settings(&self) -> &ClientSettings {
        &self.base
    }
}

impl TryFrom<Value> for ActiveMqSettings {
    type Error = ClientError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(&value)
    }
}

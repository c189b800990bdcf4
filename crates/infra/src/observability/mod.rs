//! Logging setup
//!
//! Clients log through `tracing`; binaries and tests that want output call
//! [`init_tracing`] once. `RUST_LOG` selects levels (default `info`) and
//! `SERVICECLIENTS_LOG_FORMAT=json` switches to JSON lines.

use tracing_subscriber::EnvFilter;

/// Environment variable selecting the output format.
pub const LOG_FORMAT_ENV: &str = "SERVICECLIENTS_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

/// Output format of the fmt subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact human-readable lines.
    Text,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Read the format from [`LOG_FORMAT_ENV`]. Anything but `json` is text.
    pub fn from_env() -> Self {
        Self::parse(std::env::var(LOG_FORMAT_ENV).ok().as_deref())
    }

    fn parse(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Install the global subscriber.
///
/// Returns `false` when a subscriber was already installed, so repeated calls
/// from tests are harmless.
pub fn init_tracing() -> bool {
    init_tracing_with(LogFormat::from_env())
}

/// [`init_tracing`] with an explicit format.
pub fn init_tracing_with(format: LogFormat) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    let installed = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.compact().try_init(),
    };
    installed.is_ok()
}

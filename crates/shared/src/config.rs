//! Application configuration management.

use chrono::NaiveDateTime;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Fiscal calendar configuration.
    #[serde(default)]
    pub calendar: CalendarConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Fiscal calendar configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// IANA time zone used to read the wall clock (e.g. "Africa/Addis_Ababa").
    /// When unset the host's local time is used.
    #[serde(default)]
    pub timezone: Option<String>,
    /// Default quarter label style ("full" or "short").
    #[serde(default = "default_label_style")]
    pub label_style: String,
    /// Pins "now" to a fixed civil date-time.
    #[serde(default)]
    pub fixed_now: Option<NaiveDateTime>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            timezone: None,
            label_style: default_label_style(),
            fixed_now: None,
        }
    }
}

fn default_label_style() -> String {
    "full".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive, overridden by `RUST_LOG`.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

/// Covers the `fleet_*` library crates and the `fiscal_info` binary.
fn default_log_filter() -> String {
    "fleet=info,fiscal_info=info".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FLEET").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

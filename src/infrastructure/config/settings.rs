//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings.
//! Configuration is loaded from a TOML file; every field has a default, so
//! an empty file (or no file at all) is valid. Secrets are read from the
//! environment only.
//!
//! # Example
//!
//! ```no_run
//! use market_notifier::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::credentials::{Credentials, TelegramCredentials};
use super::logging::LoggingConfig;
use super::schedule::ScheduleSettings;
use super::sources::SourcesConfig;
use super::telegram::TelegramAppConfig;
use crate::error::{ConfigError, Result};

/// Config file used when none is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Main application configuration.
///
/// Built once at startup and treated as immutable afterwards.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub schedule: ScheduleSettings,

    #[serde(default)]
    pub sources: SourcesConfig,

    #[serde(default)]
    pub telegram: TelegramAppConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Populated from the environment after parsing.
    #[serde(skip)]
    pub credentials: Credentials,
}

impl Config {
    /// Parse configuration from TOML content, reading secrets from the
    /// process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_toml_with(content, Credentials::from_env())
    }

    /// Parse configuration from TOML content with explicit credentials.
    pub fn parse_toml_with(content: &str, credentials: Credentials) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.credentials = credentials;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed, or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Self::parse_toml("")
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !(1..=59).contains(&self.schedule.tick_interval_secs) {
            return Err(ConfigError::InvalidValue {
                field: "tick_interval_secs",
                reason: "must be between 1 and 59".to_string(),
            }
            .into());
        }
        if self.sources.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        let required = [
            ("koreaexim_url", &self.sources.koreaexim_url),
            ("exchangerate_url", &self.sources.exchangerate_url),
            ("opinet_url", &self.sources.opinet_url),
            ("yahoo_url", &self.sources.yahoo_url),
            ("user_agent", &self.sources.user_agent),
            ("api_url", &self.telegram.api_url),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingField { field }.into());
            }
        }

        let symbols = &self.sources.symbols;
        if [&symbols.wti, &symbols.brent, &symbols.gold]
            .iter()
            .any(|s| s.trim().is_empty())
        {
            return Err(ConfigError::MissingField { field: "symbols" }.into());
        }

        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("expected \"pretty\" or \"json\", got {:?}", self.logging.format),
            }
            .into());
        }
        Ok(())
    }

    /// Telegram credentials, required before anything is sent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] naming the first unset
    /// variable.
    pub fn require_telegram(&self) -> Result<TelegramCredentials> {
        self.credentials.telegram()
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn parse(content: &str) -> Result<Config> {
        Config::parse_toml_with(content, Credentials::default())
    }

    #[test]
    fn empty_file_gives_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config.schedule.open.to_string(), "09:00");
        assert_eq!(config.schedule.close.to_string(), "15:30");
        assert!(config.schedule.skip_weekends);
        assert_eq!(config.schedule.timezone, chrono_tz::Asia::Seoul);
        assert_eq!(config.schedule.tick_interval_secs, 30);
        assert_eq!(config.sources.timeout_secs, 15);
        assert_eq!(config.telegram.api_url, "https://api.telegram.org");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = parse(
            r#"
            [schedule]
            open = "08:45"
            timezone = "America/New_York"

            [sources.symbols]
            gold = "SI=F"
            "#,
        )
        .unwrap();
        assert_eq!(config.schedule.open.to_string(), "08:45");
        assert_eq!(config.schedule.close.to_string(), "15:30");
        assert_eq!(config.schedule.timezone, chrono_tz::America::New_York);
        assert_eq!(config.sources.symbols.gold, "SI=F");
        assert_eq!(config.sources.symbols.wti, "CL=F");
    }

    #[test]
    fn bad_time_is_a_parse_error() {
        let result = parse("[schedule]\nclose = \"25:00\"\n");
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }

    #[test]
    fn bad_timezone_is_a_parse_error() {
        let result = parse("[schedule]\ntimezone = \"Mars/Olympus\"\n");
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }

    #[test]
    fn tick_interval_bounds() {
        for bad in [0, 60, 300] {
            let result = parse(&format!("[schedule]\ntick_interval_secs = {bad}\n"));
            assert!(matches!(
                result,
                Err(Error::Config(ConfigError::InvalidValue {
                    field: "tick_interval_secs",
                    ..
                }))
            ));
        }
        assert!(parse("[schedule]\ntick_interval_secs = 59\n").is_ok());
        assert!(parse("[schedule]\ntick_interval_secs = 1\n").is_ok());
    }

    #[test]
    fn empty_url_is_missing_field() {
        let result = parse("[sources]\nyahoo_url = \"\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField { field: "yahoo_url" }))
        ));
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        let result = parse("[logging]\nformat = \"xml\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue { field: "format", .. }))
        ));
    }

    #[test]
    fn require_telegram_reports_missing_token() {
        let config = parse("").unwrap();
        assert!(matches!(
            config.require_telegram(),
            Err(Error::Config(ConfigError::MissingCredential { .. }))
        ));
    }
}

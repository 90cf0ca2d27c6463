//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Result};

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, CONFIG_TEMPLATE)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.init",
            "path": path.display().to_string(),
        }));
        return Ok(());
    }

    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your schedule", path.display()));
    output::note("2. Set TELEGRAM_BOT_TOKEN and TELEGRAM_CHAT_ID (environment or .env)");
    output::note("3. Optionally set KOREAEXIM_API_KEY and OPINET_API_KEY");
    output::note(&format!("4. Run: market-notifier check config -c {}", path.display()));
    output::note(&format!("5. Run: market-notifier run -c {}", path.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::credentials::Credentials;
    use crate::infrastructure::config::settings::Config;

    #[test]
    fn template_parses_to_defaults() {
        let config = Config::parse_toml_with(CONFIG_TEMPLATE, Credentials::default()).unwrap();
        let defaults = Config::parse_toml_with("", Credentials::default()).unwrap();
        assert_eq!(config.schedule.open, defaults.schedule.open);
        assert_eq!(config.schedule.close, defaults.schedule.close);
        assert_eq!(config.schedule.timezone, defaults.schedule.timezone);
        assert_eq!(config.schedule.tick_interval_secs, defaults.schedule.tick_interval_secs);
        assert_eq!(config.sources.koreaexim_url, defaults.sources.koreaexim_url);
        assert_eq!(config.sources.symbols, defaults.sources.symbols);
        assert_eq!(config.telegram.api_url, defaults.telegram.api_url);
    }

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "# mine\n").unwrap();

        assert!(execute_init(&path, false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine\n");

        execute_init(&path, true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), CONFIG_TEMPLATE);
    }
}

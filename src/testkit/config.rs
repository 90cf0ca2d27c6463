//! Canonical test configurations.

use crate::infrastructure::config::credentials::Credentials;
use crate::infrastructure::config::settings::Config;

/// Credentials with Telegram set and no provider keys.
pub fn telegram_credentials() -> Credentials {
    Credentials {
        telegram_bot_token: Some("123456:test-token-abcdef".into()),
        telegram_chat_id: Some("-1001234567890".into()),
        ..Credentials::default()
    }
}

/// Parse `toml` with the given credentials, panicking on invalid input.
pub fn config(toml: &str, credentials: Credentials) -> Config {
    Config::parse_toml_with(toml, credentials).expect("valid test config")
}

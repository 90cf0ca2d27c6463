//! Telegram delivery configuration.
//!
//! The bot token and chat id are secrets and come from the environment;
//! see [`super::credentials`].

use serde::Deserialize;

fn default_api_url() -> String {
    "https://api.telegram.org".into()
}

/// `[telegram]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramAppConfig {
    /// Bot API base URL (default: https://api.telegram.org).
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Default for TelegramAppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}

//! Secrets read from the environment.
//!
//! Values are never read from the config file. An empty value or one that
//! still carries a `YOUR_` template placeholder counts as unset.

use std::fmt;

use crate::error::{ConfigError, Result};

pub const TELEGRAM_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";
pub const KOREAEXIM_API_KEY: &str = "KOREAEXIM_API_KEY";
pub const OPINET_API_KEY: &str = "OPINET_API_KEY";

const PLACEHOLDER_PREFIX: &str = "YOUR_";

/// Provider and bot credentials.
#[derive(Clone, Default)]
pub struct Credentials {
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,
    pub koreaexim_api_key: Option<String>,
    pub opinet_api_key: Option<String>,
}

/// Bot token and chat id, both present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelegramCredentials {
    pub bot_token: String,
    pub chat_id: String,
}

impl Credentials {
    /// Read all credentials from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through `lookup`, applying placeholder filtering.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).and_then(configured);
        Self {
            telegram_bot_token: get(TELEGRAM_BOT_TOKEN),
            telegram_chat_id: get(TELEGRAM_CHAT_ID),
            koreaexim_api_key: get(KOREAEXIM_API_KEY),
            opinet_api_key: get(OPINET_API_KEY),
        }
    }

    /// Bot token and chat id, or the first one that is missing.
    pub fn telegram(&self) -> Result<TelegramCredentials> {
        let bot_token = self
            .telegram_bot_token
            .clone()
            .ok_or(ConfigError::MissingCredential {
                name: TELEGRAM_BOT_TOKEN,
            })?;
        let chat_id = self
            .telegram_chat_id
            .clone()
            .ok_or(ConfigError::MissingCredential {
                name: TELEGRAM_CHAT_ID,
            })?;
        Ok(TelegramCredentials { bot_token, chat_id })
    }
}

/// `Some(trimmed)` unless the value is blank or a template placeholder.
fn configured(value: String) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || value.starts_with(PLACEHOLDER_PREFIX) {
        return None;
    }
    Some(value.to_string())
}

fn redacted(value: &Option<String>) -> &'static str {
    if value.is_some() {
        "<set>"
    } else {
        "<unset>"
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("telegram_bot_token", &redacted(&self.telegram_bot_token))
            .field("telegram_chat_id", &redacted(&self.telegram_chat_id))
            .field("koreaexim_api_key", &redacted(&self.koreaexim_api_key))
            .field("opinet_api_key", &redacted(&self.opinet_api_key))
            .finish()
    }
}

//! Telegram notification delivery.
//!
//! Provides the [`TelegramNotifier`], which posts each report to a single
//! chat through the Bot API `sendMessage` method using HTML formatting.
//!
//! Requires the `telegram` feature to be enabled.

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use tracing::{debug, error, info};

use super::format::{mask_token, truncate, MAX_MESSAGE_CHARS};
use crate::error::{DeliveryError, Result};
use crate::port::outbound::notifier::Notifier;

/// Configuration for the Telegram notifier.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
    /// Target chat ID for notifications (numeric id or `@channel`).
    pub chat_id: String,
    /// Bot API base URL.
    pub api_url: String,
}

impl TelegramConfig {
    /// Full `sendMessage` endpoint for this bot.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.api_url.trim_end_matches('/'),
            self.bot_token
        )
    }
}

/// Telegram notifier that posts messages to one chat.
pub struct TelegramNotifier {
    http: HttpClient,
    config: TelegramConfig,
}

impl TelegramNotifier {
    #[must_use]
    pub fn new(http: HttpClient, config: TelegramConfig) -> Self {
        info!(
            token = %mask_token(&config.bot_token),
            chat_id = %config.chat_id,
            "Telegram notifier configured"
        );
        Self { http, config }
    }

    /// Form fields for one `sendMessage` call.
    fn form_fields(&self, text: &str) -> [(&'static str, String); 3] {
        [
            ("chat_id", self.config.chat_id.clone()),
            ("text", truncate(text, MAX_MESSAGE_CHARS)),
            ("parse_mode", "HTML".to_string()),
        ]
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    fn name(&self) -> &'static str {
        "telegram"
    }

    async fn send(&self, text: &str) -> Result<()> {
        // The endpoint embeds the bot token.
        let response = self
            .http
            .post(self.config.endpoint())
            .form(&self.form_fields(text))
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        if status == StatusCode::OK {
            debug!(chat_id = %self.config.chat_id, "Telegram message sent");
            return Ok(());
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        error!(status = status.as_u16(), body = %body, "Telegram rejected message");
        Err(DeliveryError::Rejected {
            status: status.as_u16(),
            body,
        }
        .into())
    }
}

//! Telegram Bot API notifier.

pub mod format;
mod notifier;

pub use notifier::{TelegramConfig, TelegramNotifier};

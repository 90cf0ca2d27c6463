//! Notification adapters.
//!
//! Implements the `port::outbound::notifier::Notifier` trait for Telegram.

#[cfg(feature = "telegram")]
pub mod telegram;

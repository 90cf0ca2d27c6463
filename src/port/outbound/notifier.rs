//! Notifier port for delivering reports.

use async_trait::async_trait;
use tracing::info;

use crate::error::Result;

/// Delivers a formatted text message to one fixed destination.
///
/// There are no retries: a call either succeeds or returns the delivery
/// error for the caller to log.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Deliver `text`.
    async fn send(&self, text: &str) -> Result<()>;
}

/// A logging notifier that writes each message through tracing.
///
/// Used for dry runs.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn send(&self, text: &str) -> Result<()> {
        info!(chars = text.chars().count(), "Report (dry run)\n{text}");
        Ok(())
    }
}

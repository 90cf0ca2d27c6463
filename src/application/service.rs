//! Report publishing: snapshot → compose → deliver.

use std::sync::Arc;

use tracing::{info, warn};

use super::report::{compose, shutdown_notice};
use crate::domain::ReportKind;
use crate::error::Result;
use crate::port::outbound::clock::Clock;
use crate::port::outbound::notifier::Notifier;
use crate::port::outbound::source::IndicatorSource;

/// Builds and delivers reports. Shared by the controller and the scheduler.
pub struct ReportService {
    indicators: Arc<dyn IndicatorSource>,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
}

impl ReportService {
    pub fn new(
        indicators: Arc<dyn IndicatorSource>,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            indicators,
            notifier,
            clock,
        }
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Fetch a fresh snapshot and compose the report text without sending it.
    pub async fn compose(&self, kind: ReportKind) -> String {
        let snapshot = self.indicators.snapshot(self.clock.now()).await;
        compose(kind, &snapshot)
    }

    /// Compose and deliver one report.
    pub async fn publish(&self, kind: ReportKind) -> Result<()> {
        let text = self.compose(kind).await;
        self.deliver(kind, &text).await
    }

    /// Deliver already composed report text.
    pub async fn deliver(&self, kind: ReportKind, text: &str) -> Result<()> {
        self.notifier.send(text).await?;
        info!(kind = %kind, notifier = self.notifier.name(), "Report sent");
        Ok(())
    }

    /// Deliver the shutdown notice. Failures are logged only.
    pub async fn publish_shutdown(&self) {
        match self.notifier.send(&shutdown_notice()).await {
            Ok(()) => info!("Shutdown notice sent"),
            Err(e) => warn!(error = %e, "Failed to send shutdown notice"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::clock::FixedClock;
    use crate::testkit::notifier::RecordingNotifier;
    use crate::testkit::sources::StubIndicatorSource;

    fn service(notifier: Arc<RecordingNotifier>) -> ReportService {
        ReportService::new(
            Arc::new(StubIndicatorSource::empty()),
            notifier,
            Arc::new(FixedClock::seoul(2026, 10, 19, 15, 30)),
        )
    }

    #[tokio::test]
    async fn publish_sends_composed_report() {
        let notifier = Arc::new(RecordingNotifier::new());
        service(notifier.clone())
            .publish(ReportKind::Close)
            .await
            .unwrap();

        let sent = notifier.messages();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].starts_with("🔔 <b>Market Close</b> 🔔\n📅 2026-10-19 15:30 (KST)"));
    }

    #[tokio::test]
    async fn publish_surfaces_delivery_errors() {
        let notifier = Arc::new(RecordingNotifier::failing());
        let result = service(notifier.clone()).publish(ReportKind::Open).await;

        assert!(result.is_err());
        assert_eq!(notifier.attempts(), 1);
    }

    #[tokio::test]
    async fn shutdown_notice_failure_is_swallowed() {
        let notifier = Arc::new(RecordingNotifier::failing());
        service(notifier.clone()).publish_shutdown().await;
        assert_eq!(notifier.attempts(), 1);
    }

    #[tokio::test]
    async fn compose_does_not_send() {
        let notifier = Arc::new(RecordingNotifier::new());
        let text = service(notifier.clone()).compose(ReportKind::Startup).await;

        assert!(text.contains("Market Notifier Started"));
        assert!(notifier.messages().is_empty());
    }
}

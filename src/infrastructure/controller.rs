//! Process lifecycle: startup report, scheduler, shutdown notice.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::signal;
use tokio::sync::watch;
use tracing::{error, info, warn};

use crate::application::scheduler::EventScheduler;
use crate::application::service::ReportService;
use crate::domain::{ReportKind, ScheduleConfig};
use crate::error::{Error, Result};

/// Owns the scheduler until the process is told to stop.
pub struct ProcessController {
    service: Arc<ReportService>,
    scheduler: EventScheduler,
    tick: Duration,
}

impl ProcessController {
    pub fn new(service: Arc<ReportService>, schedule: ScheduleConfig, tick: Duration) -> Self {
        Self {
            service,
            scheduler: EventScheduler::new(schedule),
            tick,
        }
    }

    /// Run until `signal` resolves.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StartupNotification`] if the startup report cannot be
    /// delivered; the scheduler is never started in that case.
    pub async fn run_until<F>(self, signal: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        self.service
            .publish(ReportKind::Startup)
            .await
            .map_err(|e| Error::StartupNotification(Box::new(e)))?;

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let _scheduler = tokio::spawn(self.scheduler.run(
            Arc::clone(&self.service),
            self.tick,
            shutdown_rx,
        ));
        info!("Market notifier running");

        signal.await;
        info!("Shutdown signal received");

        if shutdown_tx.send(true).is_err() {
            warn!("Scheduler already stopped");
        }
        self.service.publish_shutdown().await;

        info!("Market notifier stopped");
        Ok(())
    }
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}

//! Daily open/close trigger with duplicate-fire suppression.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeZone};
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info};

use super::service::ReportService;
use crate::domain::{FireRecord, MarketEvent, ScheduleConfig};

/// Decides on each tick which events are due and fires each at most once
/// per local calendar day.
#[derive(Debug, Clone)]
pub struct EventScheduler {
    schedule: ScheduleConfig,
    record: FireRecord,
}

impl EventScheduler {
    #[must_use]
    pub fn new(schedule: ScheduleConfig) -> Self {
        Self {
            schedule,
            record: FireRecord::new(),
        }
    }

    #[must_use]
    pub fn record(&self) -> &FireRecord {
        &self.record
    }

    /// Events due at `now`, marking each in the fire record.
    ///
    /// An event is due when the local hour and minute equal its target, it
    /// has not fired today, and today is not a skipped weekend day.
    pub fn due<Z: TimeZone>(&mut self, now: &DateTime<Z>) -> Vec<MarketEvent> {
        let today = now.date_naive();
        let mut due = Vec::new();

        for event in MarketEvent::ALL {
            if !self.schedule.target(event).matches(now) || self.record.fired_on(event, today) {
                continue;
            }
            if self.schedule.skips(today) {
                debug!(event = %event, date = %today, "Weekend, not firing");
                continue;
            }
            if self.record.mark(event, today) {
                due.push(event);
            }
        }
        due
    }

    /// Poll every `tick` until `shutdown` flips to true or its sender drops.
    ///
    /// Delivery failures are logged; the fire record is not rolled back.
    pub async fn run(
        mut self,
        service: Arc<ReportService>,
        tick: Duration,
        mut shutdown: watch::Receiver<bool>,
    ) {
        info!(
            open = %self.schedule.open,
            close = %self.schedule.close,
            skip_weekends = self.schedule.skip_weekends,
            tick_secs = tick.as_secs(),
            "Scheduler started"
        );

        let mut interval = tokio::time::interval(tick);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                result = shutdown.changed() => {
                    match result {
                        Ok(()) => {
                            if *shutdown.borrow() {
                                info!("Scheduler stopping");
                                break;
                            }
                        }
                        Err(_) => {
                            info!("Shutdown channel closed, scheduler stopping");
                            break;
                        }
                    }
                }
                _ = interval.tick() => {
                    let now = service.clock().now();
                    for event in self.due(&now) {
                        info!(
                            event = %event,
                            at = %now.format("%Y-%m-%d %H:%M:%S"),
                            "Firing scheduled report"
                        );
                        if let Err(e) = service.publish(event.into()).await {
                            error!(event = %event, error = %e, "Scheduled report failed");
                        }
                    }
                }
            }
        }
    }
}

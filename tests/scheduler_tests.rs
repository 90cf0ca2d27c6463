use std::sync::Arc;
use std::time::Duration;

use market_notifier::application::scheduler::EventScheduler;
use market_notifier::application::service::ReportService;
use market_notifier::domain::{MarketEvent, ScheduleConfig};
use market_notifier::testkit::clock::{seoul, ManualClock};
use market_notifier::testkit::notifier::RecordingNotifier;
use market_notifier::testkit::sources::StubIndicatorSource;
use tokio::sync::watch;
use tokio::task::JoinHandle;

const TICK: Duration = Duration::from_secs(30);

struct Harness {
    clock: Arc<ManualClock>,
    notifier: Arc<RecordingNotifier>,
    indicators: Arc<StubIndicatorSource>,
    shutdown: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl Harness {
    fn start(clock: ManualClock, notifier: RecordingNotifier) -> Self {
        let clock = Arc::new(clock);
        let notifier = Arc::new(notifier);
        let indicators = Arc::new(StubIndicatorSource::empty());
        let service = Arc::new(ReportService::new(
            indicators.clone(),
            notifier.clone(),
            clock.clone(),
        ));
        let (shutdown, rx) = watch::channel(false);
        let scheduler = EventScheduler::new(ScheduleConfig::default());
        let handle = tokio::spawn(scheduler.run(service, TICK, rx));
        Self {
            clock,
            notifier,
            indicators,
            shutdown,
            handle,
        }
    }

    fn at(now: chrono::DateTime<chrono_tz::Tz>) -> Self {
        Self::start(ManualClock::new(now), RecordingNotifier::new())
    }

    async fn stop(self) {
        self.shutdown.send(true).expect("scheduler listening");
        self.handle.await.expect("scheduler task");
    }
}

#[tokio::test(start_paused = true)]
async fn open_fires_once_across_ticks_in_the_same_minute() {
    // Monday 2026-10-19.
    let h = Harness::at(seoul(2026, 10, 19, 9, 0));

    tokio::time::sleep(Duration::from_secs(95)).await;

    let sent = h.notifier.messages();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].starts_with("🔔 <b>Market Open</b> 🔔"));
    assert_eq!(h.indicators.calls(), 1);
    h.stop().await;
}

#[tokio::test(start_paused = true)]
async fn open_then_close_on_the_same_day() {
    let h = Harness::at(seoul(2026, 10, 19, 9, 0));
    tokio::time::sleep(Duration::from_secs(35)).await;

    h.clock.set(seoul(2026, 10, 19, 15, 30));
    tokio::time::sleep(Duration::from_secs(65)).await;

    let sent = h.notifier.messages();
    assert_eq!(sent.len(), 2);
    assert!(sent[0].contains("Market Open"));
    assert!(sent[1].contains("Market Close"));
    h.stop().await;
}

#[tokio::test(start_paused = true)]
async fn open_fires_again_the_next_day() {
    let h = Harness::at(seoul(2026, 10, 19, 9, 0));
    tokio::time::sleep(Duration::from_secs(35)).await;

    h.clock.advance(chrono::Duration::days(1));
    tokio::time::sleep(Duration::from_secs(35)).await;

    assert_eq!(h.notifier.messages().len(), 2);
    h.stop().await;
}

#[tokio::test(start_paused = true)]
async fn saturday_open_is_skipped() {
    let h = Harness::at(seoul(2026, 10, 17, 9, 0));

    tokio::time::sleep(Duration::from_secs(95)).await;

    assert!(h.notifier.messages().is_empty());
    assert_eq!(h.indicators.calls(), 0);
    h.stop().await;
}

#[tokio::test(start_paused = true)]
async fn delivery_failure_is_not_retried() {
    let clock = ManualClock::new(seoul(2026, 10, 19, 9, 0));
    let h = Harness::start(clock, RecordingNotifier::failing());

    tokio::time::sleep(Duration::from_secs(95)).await;

    assert_eq!(h.notifier.attempts(), 1);
    h.stop().await;
}

#[tokio::test(start_paused = true)]
async fn dropping_the_shutdown_sender_stops_the_loop() {
    let h = Harness::at(seoul(2026, 10, 19, 12, 0));
    let Harness { shutdown, handle, .. } = h;

    drop(shutdown);
    handle.await.expect("scheduler task");
}

#[test]
fn due_marks_fire_record() {
    let mut scheduler = EventScheduler::new(ScheduleConfig::default());
    let now = seoul(2026, 10, 19, 15, 30);

    assert_eq!(scheduler.due(&now), vec![MarketEvent::Close]);
    assert!(scheduler.record().fired_on(MarketEvent::Close, now.date_naive()));
    assert!(!scheduler.record().fired_on(MarketEvent::Open, now.date_naive()));
    assert!(scheduler.due(&now).is_empty());
}

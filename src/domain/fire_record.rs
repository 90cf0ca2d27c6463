//! Last-fired dates for the scheduled events.

use chrono::NaiveDate;

use super::event::MarketEvent;

/// In-memory record of the local date each event last fired.
///
/// Dates only move forward. Nothing is persisted, so a restart inside a
/// target minute fires that event again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FireRecord {
    open: Option<NaiveDate>,
    close: Option<NaiveDate>,
}

impl FireRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Date the event last fired, `None` if never.
    #[must_use]
    pub const fn last_fired(&self, event: MarketEvent) -> Option<NaiveDate> {
        match event {
            MarketEvent::Open => self.open,
            MarketEvent::Close => self.close,
        }
    }

    /// True when the event already fired on `date`.
    #[must_use]
    pub fn fired_on(&self, event: MarketEvent, date: NaiveDate) -> bool {
        self.last_fired(event) == Some(date)
    }

    /// Record that the event fired on `date`.
    ///
    /// Returns `false` and leaves the record unchanged if `date` is not
    /// later than the recorded date.
    pub fn mark(&mut self, event: MarketEvent, date: NaiveDate) -> bool {
        let slot = match event {
            MarketEvent::Open => &mut self.open,
            MarketEvent::Close => &mut self.close,
        };
        match *slot {
            Some(last) if last >= date => false,
            _ => {
                *slot = Some(date);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn starts_empty() {
        let record = FireRecord::new();
        assert_eq!(record.last_fired(MarketEvent::Open), None);
        assert!(!record.fired_on(MarketEvent::Close, day(19)));
    }

    #[test]
    fn events_are_tracked_independently() {
        let mut record = FireRecord::new();
        assert!(record.mark(MarketEvent::Open, day(19)));
        assert!(record.fired_on(MarketEvent::Open, day(19)));
        assert!(!record.fired_on(MarketEvent::Close, day(19)));
    }

    #[test]
    fn only_moves_forward() {
        let mut record = FireRecord::new();
        assert!(record.mark(MarketEvent::Open, day(20)));
        assert!(!record.mark(MarketEvent::Open, day(20)));
        assert!(!record.mark(MarketEvent::Open, day(19)));
        assert_eq!(record.last_fired(MarketEvent::Open), Some(day(20)));

        assert!(record.mark(MarketEvent::Open, day(21)));
        assert_eq!(record.last_fired(MarketEvent::Open), Some(day(21)));
    }
}

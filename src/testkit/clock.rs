//! Deterministic clocks.

use std::sync::Mutex;

use chrono::{DateTime, Duration, TimeZone};
use chrono_tz::Tz;

use crate::port::outbound::clock::Clock;

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Tz>);

impl FixedClock {
    pub fn new(now: DateTime<Tz>) -> Self {
        Self(now)
    }

    /// `year-month-day hour:minute:00` in Asia/Seoul.
    pub fn seoul(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self(seoul(year, month, day, hour, minute))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Tz> {
        self.0
    }
}

/// A clock tests move by hand.
#[derive(Debug)]
pub struct ManualClock(Mutex<DateTime<Tz>>);

impl ManualClock {
    pub fn new(now: DateTime<Tz>) -> Self {
        Self(Mutex::new(now))
    }

    pub fn set(&self, now: DateTime<Tz>) {
        *self.0.lock().expect("lock manual clock") = now;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.0.lock().expect("lock manual clock");
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Tz> {
        *self.0.lock().expect("lock manual clock")
    }
}

/// Local time in Asia/Seoul. Panics on an invalid date.
pub fn seoul(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Tz> {
    chrono_tz::Asia::Seoul
        .with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid Seoul time")
}

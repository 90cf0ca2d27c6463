//! Daily notification schedule.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use super::event::MarketEvent;

/// A wall-clock time of day with minute resolution, written `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
}

impl TimeOfDay {
    /// Create a time of day, or `None` if out of range.
    #[must_use]
    pub const fn new(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    #[must_use]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    #[must_use]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    /// True when `now` falls inside this minute.
    pub fn matches<T: Timelike>(&self, now: &T) -> bool {
        now.hour() == self.hour && now.minute() == self.minute
    }
}

/// Error returned when parsing a [`TimeOfDay`] fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTimeOfDayError(String);

impl fmt::Display for ParseTimeOfDayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected HH:MM, got '{}'", self.0)
    }
}

impl std::error::Error for ParseTimeOfDayError {}

impl FromStr for TimeOfDay {
    type Err = ParseTimeOfDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseTimeOfDayError(s.to_string());
        let (hour, minute) = s.trim().split_once(':').ok_or_else(err)?;
        let hour: u32 = hour.parse().map_err(|_| err())?;
        let minute: u32 = minute.parse().map_err(|_| err())?;
        Self::new(hour, minute).ok_or_else(err)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ParseTimeOfDayError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// When the open and close reports fire.
///
/// Immutable for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleConfig {
    pub open: TimeOfDay,
    pub close: TimeOfDay,
    /// Suppress both events on Saturday and Sunday.
    pub skip_weekends: bool,
}

impl ScheduleConfig {
    /// Target time for a named event.
    #[must_use]
    pub const fn target(&self, event: MarketEvent) -> TimeOfDay {
        match event {
            MarketEvent::Open => self.open,
            MarketEvent::Close => self.close,
        }
    }

    /// True when `date` is excluded by the weekend rule.
    #[must_use]
    pub fn skips(&self, date: NaiveDate) -> bool {
        self.skip_weekends && is_weekend(date)
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            open: TimeOfDay { hour: 9, minute: 0 },
            close: TimeOfDay {
                hour: 15,
                minute: 30,
            },
            skip_weekends: true,
        }
    }
}

/// Saturday or Sunday.
#[must_use]
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

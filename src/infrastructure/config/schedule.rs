//! Schedule configuration.

use std::time::Duration;

use chrono_tz::Tz;
use serde::Deserialize;

use crate::domain::{ScheduleConfig, TimeOfDay};

fn default_open() -> TimeOfDay {
    ScheduleConfig::default().open
}

fn default_close() -> TimeOfDay {
    ScheduleConfig::default().close
}

const fn default_true() -> bool {
    true
}

const fn default_timezone() -> Tz {
    chrono_tz::Asia::Seoul
}

const fn default_tick_interval_secs() -> u64 {
    30
}

/// `[schedule]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleSettings {
    /// Market open report time, `"HH:MM"` local (default: 09:00).
    #[serde(default = "default_open")]
    pub open: TimeOfDay,
    /// Market close report time, `"HH:MM"` local (default: 15:30).
    #[serde(default = "default_close")]
    pub close: TimeOfDay,
    #[serde(default = "default_true")]
    pub skip_weekends: bool,
    /// IANA zone name (default: Asia/Seoul).
    #[serde(default = "default_timezone")]
    pub timezone: Tz,
    /// Polling interval in seconds, 1 to 59 (default: 30).
    #[serde(default = "default_tick_interval_secs")]
    pub tick_interval_secs: u64,
}

impl ScheduleSettings {
    #[must_use]
    pub fn schedule(&self) -> ScheduleConfig {
        ScheduleConfig {
            open: self.open,
            close: self.close,
            skip_weekends: self.skip_weekends,
        }
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(self.tick_interval_secs)
    }
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            open: default_open(),
            close: default_close(),
            skip_weekends: default_true(),
            timezone: default_timezone(),
            tick_interval_secs: default_tick_interval_secs(),
        }
    }
}

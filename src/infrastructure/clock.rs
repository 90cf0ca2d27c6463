//! System wall clock in the configured zone.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::port::outbound::clock::Clock;

#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    #[must_use]
    pub const fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.tz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_in_configured_zone() {
        let clock = SystemClock::new(chrono_tz::Asia::Seoul);
        assert_eq!(clock.now().timezone(), chrono_tz::Asia::Seoul);
    }
}

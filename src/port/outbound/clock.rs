//! Wall-clock port.

use chrono::DateTime;
use chrono_tz::Tz;

/// Source of the current local time.
///
/// The scheduler and report timestamps read time only through this trait.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Tz>;
}

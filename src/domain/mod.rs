//! Schedule, event, and indicator types. No I/O.

mod event;
mod fire_record;
mod schedule;
mod snapshot;

pub use event::{MarketEvent, ReportKind};
pub use fire_record::FireRecord;
pub use schedule::{is_weekend, ParseTimeOfDayError, ScheduleConfig, TimeOfDay};
pub use snapshot::{
    usable_price, Currency, Direction, FuelProduct, FuelQuote, FxQuote, FxRates,
    IndicatorSnapshot,
};

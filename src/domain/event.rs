//! Named events and report kinds.

use std::fmt;

/// A scheduled daily event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarketEvent {
    Open,
    Close,
}

impl MarketEvent {
    /// Both events, in the order they are checked on each tick.
    pub const ALL: [MarketEvent; 2] = [MarketEvent::Open, MarketEvent::Close];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Close => "close",
        }
    }
}

impl fmt::Display for MarketEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a report is being sent for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    /// Sent once when the process starts.
    Startup,
    Open,
    Close,
}

impl ReportKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Startup => "startup",
            Self::Open => "open",
            Self::Close => "close",
        }
    }
}

impl From<MarketEvent> for ReportKind {
    fn from(event: MarketEvent) -> Self {
        match event {
            MarketEvent::Open => Self::Open,
            MarketEvent::Close => Self::Close,
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Market notifier - scheduled market indicator reports over Telegram.
//!
//! Gathers FX rates, international oil, domestic fuel and gold prices from
//! public providers and posts a formatted summary to one Telegram chat at
//! market open and close, plus once at startup and a notice at shutdown.
//!
//! # Architecture
//!
//! The crate follows a ports-and-adapters layout:
//!
//! - [`domain`] - Schedule, fire record and indicator value types
//! - [`port`] - Traits at the seams: notifier, clock, data providers
//! - [`adapter`] - HTTP providers, the Telegram notifier and the CLI
//! - [`application`] - Report composition, FX fallback, indicator
//!   gathering and the event scheduler
//! - [`infrastructure`] - Configuration, wiring and process lifecycle
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `telegram` (default) - Deliver reports through the Telegram Bot API
//! - `testkit` - Expose test doubles to integration tests
//!
//! # Example
//!
//! ```no_run
//! use market_notifier::application::report::compose;
//! use market_notifier::domain::{IndicatorSnapshot, ReportKind};
//!
//! let now = chrono::Utc::now().with_timezone(&chrono_tz::Asia::Seoul);
//! let text = compose(ReportKind::Open, &IndicatorSnapshot::empty(now));
//! assert!(text.contains("unavailable"));
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;

//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`clock`] — `FixedClock` and the adjustable `ManualClock`.
//! - [`notifier`] — `RecordingNotifier`, optionally failing every send.
//! - [`sources`] — Stub providers and indicator sources.
//! - [`config`] — Canonical test configurations.
//! - [`http`] — One-shot HTTP stub server.

pub mod clock;
pub mod config;
pub mod http;
pub mod notifier;
pub mod sources;

//! Infrastructure layer.
//!
//! Provides technical concerns that support the application without containing
//! business logic: configuration, wiring, wall-clock time and process
//! lifecycle.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root for runtime wiring
//! - [`clock`] - System clock in the configured zone
//! - [`config`] - Configuration loading and validation
//! - [`controller`] - Startup report, scheduler task and shutdown notice

pub mod bootstrap;
pub mod clock;
pub mod config;
pub mod controller;

//! Infrastructure configuration modules.

pub mod credentials;
pub mod logging;
pub mod schedule;
pub mod settings;
pub mod sources;
pub mod telegram;

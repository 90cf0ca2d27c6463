//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate adapters
//! to implement the application's use cases.

pub mod fx;
pub mod indicators;
pub mod report;
pub mod scheduler;
pub mod service;

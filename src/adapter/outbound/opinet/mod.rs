//! Opinet national average fuel prices.

mod client;
pub mod dto;

pub use client::OpinetClient;

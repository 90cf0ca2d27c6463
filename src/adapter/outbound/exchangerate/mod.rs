//! ExchangeRate-API public endpoint (fallback FX provider).

mod client;
pub mod dto;

pub use client::ExchangeRateApiClient;

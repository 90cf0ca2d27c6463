//! Yahoo Finance chart endpoint for futures spot prices.

mod client;
pub mod dto;

pub use client::YahooChartClient;

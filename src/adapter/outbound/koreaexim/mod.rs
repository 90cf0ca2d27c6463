//! Korea Eximbank daily exchange rates (primary FX provider).

mod client;
pub mod dto;

pub use client::KoreaEximClient;

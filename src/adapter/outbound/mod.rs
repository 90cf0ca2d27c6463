//! Outbound adapters (driven side).

pub mod exchangerate;
pub mod http;
pub mod koreaexim;
pub mod notifier;
pub mod opinet;
pub mod yahoo;

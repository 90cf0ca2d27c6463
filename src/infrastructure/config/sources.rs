//! Upstream provider configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::application::indicators::MarketSymbols;

const fn default_timeout_secs() -> u64 {
    15
}

fn default_koreaexim_url() -> String {
    "https://www.koreaexim.go.kr/site/program/financial/exchangeJSON".into()
}

fn default_exchangerate_url() -> String {
    "https://api.exchangerate-api.com/v4/latest".into()
}

fn default_opinet_url() -> String {
    "https://www.opinet.co.kr/api/avgAllPrice.do".into()
}

fn default_yahoo_url() -> String {
    "https://query1.finance.yahoo.com/v8/finance/chart".into()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".into()
}

/// `[sources]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
    /// Per-request timeout in seconds (default: 15).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_koreaexim_url")]
    pub koreaexim_url: String,
    #[serde(default = "default_exchangerate_url")]
    pub exchangerate_url: String,
    #[serde(default = "default_opinet_url")]
    pub opinet_url: String,
    #[serde(default = "default_yahoo_url")]
    pub yahoo_url: String,
    /// Sent to the market-data endpoint, which rejects unknown clients.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default)]
    pub symbols: MarketSymbols,
}

impl SourcesConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            koreaexim_url: default_koreaexim_url(),
            exchangerate_url: default_exchangerate_url(),
            opinet_url: default_opinet_url(),
            yahoo_url: default_yahoo_url(),
            user_agent: default_user_agent(),
            symbols: MarketSymbols::default(),
        }
    }
}

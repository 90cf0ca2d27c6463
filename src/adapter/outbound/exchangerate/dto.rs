//! ExchangeRate-API response types.
//!
//! `GET /v4/latest/USD` returns the base currency and a rate table:
//! ```json
//! {"base":"USD","date":"2026-10-16","rates":{"USD":1,"KRW":1381.2,"JPY":149.8}}
//! ```

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct LatestRatesResponse {
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub rates: HashMap<String, Decimal>,
}

//! Upstream data-provider ports.
//!
//! Each indicator category has its own failure domain. Provider adapters
//! return errors; the indicator source set turns them into absent values.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use rust_decimal::Decimal;

use crate::domain::{FuelQuote, FxRates, IndicatorSnapshot};
use crate::error::Result;

/// A provider that returns a batch of KRW rates for one day.
#[async_trait]
pub trait FxRateProvider: Send + Sync {
    /// Provider name shown in reports.
    fn name(&self) -> &str;

    /// Rates published for `date`. An empty batch is an error.
    async fn fetch_rates(&self, date: NaiveDate) -> Result<FxRates>;
}

/// Per-currency KRW lookup against a public rates endpoint.
#[async_trait]
pub trait CurrencyLookup: Send + Sync {
    /// KRW per one unit of `currency` (ISO code).
    async fn krw_rate(&self, currency: &str) -> Result<Decimal>;
}

/// National average domestic fuel prices.
#[async_trait]
pub trait FuelPriceSource: Send + Sync {
    async fn national_averages(&self) -> Result<Vec<FuelQuote>>;
}

/// Latest spot price for a market-data ticker.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn spot_price(&self, symbol: &str) -> Result<Decimal>;
}

/// Assembles a best-effort snapshot of every indicator.
///
/// Never fails: anything that could not be fetched is absent.
#[async_trait]
pub trait IndicatorSource: Send + Sync {
    async fn snapshot(&self, taken_at: DateTime<Tz>) -> IndicatorSnapshot;
}

//! Stub upstream providers.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use rust_decimal::Decimal;

use crate::domain::{Currency, FuelQuote, FxRates, IndicatorSnapshot};
use crate::error::{Result, SourceError};
use crate::port::outbound::source::{
    CurrencyLookup, FuelPriceSource, FxRateProvider, IndicatorSource, QuoteSource,
};

/// FX provider returning a fixed batch, or always failing.
#[derive(Debug)]
pub struct StubFxProvider {
    name: String,
    rates: Option<FxRates>,
    calls: AtomicUsize,
}

impl StubFxProvider {
    pub fn ok(name: &str, rates: &[(Currency, Decimal)]) -> Self {
        Self {
            name: name.to_string(),
            rates: Some(rates.iter().copied().collect()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(name: &str) -> Self {
        Self {
            name: name.to_string(),
            rates: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FxRateProvider for StubFxProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_rates(&self, _date: NaiveDate) -> Result<FxRates> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.rates
            .clone()
            .ok_or_else(|| SourceError::Status { provider: "stub-fx", status: 503 }.into())
    }
}

/// Per-currency lookup that records the order of queries. Unknown
/// currencies fail.
#[derive(Debug, Default)]
pub struct RecordingLookup {
    rates: HashMap<String, Decimal>,
    queried: Mutex<Vec<String>>,
}

impl RecordingLookup {
    pub fn new(rates: &[(&str, Decimal)]) -> Self {
        Self {
            rates: rates.iter().map(|(c, r)| ((*c).to_string(), *r)).collect(),
            queried: Mutex::new(Vec::new()),
        }
    }

    pub fn queried(&self) -> Vec<String> {
        self.queried.lock().expect("lock lookup log").clone()
    }
}

#[async_trait]
impl CurrencyLookup for RecordingLookup {
    async fn krw_rate(&self, currency: &str) -> Result<Decimal> {
        self.queried
            .lock()
            .expect("lock lookup log")
            .push(currency.to_string());
        self.rates.get(currency).copied().ok_or_else(|| {
            SourceError::Malformed {
                provider: "stub-lookup",
                reason: format!("no KRW rate for {currency}"),
            }
            .into()
        })
    }
}

/// Fuel source returning fixed quotes, or always failing.
#[derive(Debug)]
pub struct StubFuelSource(Option<Vec<FuelQuote>>);

impl StubFuelSource {
    pub fn ok(quotes: Vec<FuelQuote>) -> Self {
        Self(Some(quotes))
    }

    pub fn failing() -> Self {
        Self(None)
    }
}

#[async_trait]
impl FuelPriceSource for StubFuelSource {
    async fn national_averages(&self) -> Result<Vec<FuelQuote>> {
        self.0
            .clone()
            .ok_or_else(|| SourceError::EmptyResult { provider: "stub-fuel" }.into())
    }
}

/// Quote source keyed by symbol. Unknown symbols fail.
#[derive(Debug, Default)]
pub struct StubQuoteSource(HashMap<String, Decimal>);

impl StubQuoteSource {
    pub fn new(prices: &[(&str, Decimal)]) -> Self {
        Self(prices.iter().map(|(s, p)| ((*s).to_string(), *p)).collect())
    }
}

#[async_trait]
impl QuoteSource for StubQuoteSource {
    async fn spot_price(&self, symbol: &str) -> Result<Decimal> {
        self.0
            .get(symbol)
            .copied()
            .ok_or_else(|| SourceError::EmptyResult { provider: "stub-quotes" }.into())
    }
}

/// Indicator source returning a template snapshot stamped with the
/// requested time.
#[derive(Debug)]
pub struct StubIndicatorSource {
    template: IndicatorSnapshot,
    calls: AtomicUsize,
}

impl StubIndicatorSource {
    pub fn new(template: IndicatorSnapshot) -> Self {
        Self {
            template,
            calls: AtomicUsize::new(0),
        }
    }

    /// Every indicator absent.
    pub fn empty() -> Self {
        Self::new(IndicatorSnapshot::empty(super::clock::seoul(2000, 1, 1, 0, 0)))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IndicatorSource for StubIndicatorSource {
    async fn snapshot(&self, taken_at: DateTime<Tz>) -> IndicatorSnapshot {
        self.calls.fetch_add(1, Ordering::SeqCst);
        IndicatorSnapshot {
            taken_at,
            ..self.template.clone()
        }
    }
}

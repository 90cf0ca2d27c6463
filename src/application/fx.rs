//! FX rates with a single primary → fallback hop.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::domain::{usable_price, Currency, FxQuote, FxRates};
use crate::error::{Result, SourceError};
use crate::port::outbound::source::{CurrencyLookup, FxRateProvider};

/// Currencies the fallback queries, with the multiplier applied to the
/// returned KRW rate. Yen is reported per 100 units.
pub const FALLBACK_CURRENCIES: [(&str, Currency, Decimal); 3] = [
    ("USD", Currency::Usd, Decimal::ONE),
    ("EUR", Currency::Eur, Decimal::ONE),
    ("JPY", Currency::Jpy100, Decimal::ONE_HUNDRED),
];

/// Builds a rate batch by querying a [`CurrencyLookup`] once per currency.
///
/// Individual lookup failures drop that currency; only a batch with no
/// rates at all is an error.
pub struct PerCurrencyFxProvider {
    name: String,
    lookup: Arc<dyn CurrencyLookup>,
}

impl PerCurrencyFxProvider {
    pub fn new(name: impl Into<String>, lookup: Arc<dyn CurrencyLookup>) -> Self {
        Self {
            name: name.into(),
            lookup,
        }
    }
}

#[async_trait]
impl FxRateProvider for PerCurrencyFxProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_rates(&self, _date: NaiveDate) -> Result<FxRates> {
        let mut rates = FxRates::new();

        for (code, currency, scale) in FALLBACK_CURRENCIES {
            match self.lookup.krw_rate(code).await {
                Ok(rate) => match rate.checked_mul(scale).and_then(usable_price) {
                    Some(rate) => {
                        rates.insert(currency, rate);
                    }
                    None => warn!(currency = code, rate = %rate, "Ignoring unusable fallback rate"),
                },
                Err(e) => warn!(currency = code, error = %e, "Fallback rate lookup failed"),
            }
        }

        if rates.is_empty() {
            return Err(SourceError::EmptyResult {
                provider: "fx-fallback",
            }
            .into());
        }
        Ok(rates)
    }
}

/// Primary provider (optional, needs a credential) with one fallback.
pub struct FxService {
    primary: Option<Arc<dyn FxRateProvider>>,
    fallback: Arc<dyn FxRateProvider>,
}

impl FxService {
    pub fn new(
        primary: Option<Arc<dyn FxRateProvider>>,
        fallback: Arc<dyn FxRateProvider>,
    ) -> Self {
        Self { primary, fallback }
    }

    /// Rates for `date`, never failing.
    ///
    /// Tries the primary provider when configured, then the fallback. A
    /// total failure yields an empty quote with no source.
    pub async fn fetch(&self, date: NaiveDate) -> FxQuote {
        if let Some(primary) = &self.primary {
            match primary.fetch_rates(date).await {
                Ok(rates) if !rates.is_empty() => {
                    return FxQuote {
                        rates,
                        source: Some(primary.name().to_string()),
                    };
                }
                Ok(_) => warn!(
                    provider = primary.name(),
                    "Primary FX provider returned no rates, using fallback"
                ),
                Err(e) => warn!(
                    provider = primary.name(),
                    error = %e,
                    "Primary FX provider failed, using fallback"
                ),
            }
        }

        match self.fallback.fetch_rates(date).await {
            Ok(rates) => {
                info!(
                    provider = self.fallback.name(),
                    count = rates.len(),
                    "FX rates from fallback"
                );
                let source = (!rates.is_empty()).then(|| self.fallback.name().to_string());
                FxQuote { rates, source }
            }
            Err(e) => {
                warn!(provider = self.fallback.name(), error = %e, "Fallback FX provider failed");
                FxQuote::default()
            }
        }
    }
}

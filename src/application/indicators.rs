//! Best-effort indicator snapshot assembly.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::DateTime;
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, warn};

use super::fx::FxService;
use crate::domain::{usable_price, FuelQuote, IndicatorSnapshot};
use crate::port::outbound::source::{FuelPriceSource, IndicatorSource, QuoteSource};

/// Market-data tickers for the international benchmarks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MarketSymbols {
    pub wti: String,
    pub brent: String,
    pub gold: String,
}

impl Default for MarketSymbols {
    fn default() -> Self {
        Self {
            wti: "CL=F".into(),
            brent: "BZ=F".into(),
            gold: "GC=F".into(),
        }
    }
}

/// The full set of upstream sources behind one snapshot.
///
/// FX, fuel and the three spot quotes are fetched concurrently. Each one
/// fails on its own: an error is logged and the value is left absent.
pub struct IndicatorSources {
    fx: FxService,
    fuel: Option<Arc<dyn FuelPriceSource>>,
    quotes: Arc<dyn QuoteSource>,
    symbols: MarketSymbols,
}

impl IndicatorSources {
    pub fn new(
        fx: FxService,
        fuel: Option<Arc<dyn FuelPriceSource>>,
        quotes: Arc<dyn QuoteSource>,
        symbols: MarketSymbols,
    ) -> Self {
        Self {
            fx,
            fuel,
            quotes,
            symbols,
        }
    }

    async fn fuel(&self) -> Vec<FuelQuote> {
        let Some(source) = &self.fuel else {
            debug!("No fuel price source configured");
            return Vec::new();
        };
        match source.national_averages().await {
            Ok(quotes) => quotes,
            Err(e) => {
                warn!(error = %e, "Fuel price fetch failed");
                Vec::new()
            }
        }
    }

    async fn spot(&self, label: &str, symbol: &str) -> Option<Decimal> {
        match self.quotes.spot_price(symbol).await {
            Ok(price) => {
                let price = usable_price(price);
                if price.is_none() {
                    warn!(label, symbol, "Discarding non-positive spot price");
                }
                price
            }
            Err(e) => {
                warn!(label, symbol, error = %e, "Spot price fetch failed");
                None
            }
        }
    }
}

#[async_trait]
impl IndicatorSource for IndicatorSources {
    async fn snapshot(&self, taken_at: DateTime<Tz>) -> IndicatorSnapshot {
        let (fx, fuel, wti, brent, gold) = tokio::join!(
            self.fx.fetch(taken_at.date_naive()),
            self.fuel(),
            self.spot("wti", &self.symbols.wti),
            self.spot("brent", &self.symbols.brent),
            self.spot("gold", &self.symbols.gold),
        );

        debug!(
            fx = fx.rates.len(),
            fuel = fuel.len(),
            wti = wti.is_some(),
            brent = brent.is_some(),
            gold = gold.is_some(),
            "Indicator snapshot assembled"
        );

        IndicatorSnapshot {
            taken_at,
            fx,
            fuel,
            wti,
            brent,
            gold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Currency, FuelProduct};
    use crate::testkit::sources::{StubFuelSource, StubFxProvider, StubQuoteSource};
    use chrono::TimeZone;
    use chrono_tz::Asia::Seoul;
    use rust_decimal_macros::dec;

    fn taken_at() -> DateTime<Tz> {
        Seoul.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap()
    }

    fn fx() -> FxService {
        FxService::new(
            None,
            Arc::new(StubFxProvider::ok(
                "ExchangeRate-API",
                &[(Currency::Usd, dec!(1381.2))],
            )),
        )
    }

    #[tokio::test]
    async fn zero_price_is_treated_as_absent() {
        let quotes = Arc::new(StubQuoteSource::new(&[
            ("CL=F", dec!(0)),
            ("BZ=F", dec!(75.1)),
            ("GC=F", dec!(2400)),
        ]));
        let sources = IndicatorSources::new(fx(), None, quotes, MarketSymbols::default());

        let snapshot = sources.snapshot(taken_at()).await;

        assert_eq!(snapshot.wti, None);
        assert_eq!(snapshot.brent, Some(dec!(75.1)));
        assert_eq!(snapshot.gold, Some(dec!(2400)));
    }

    #[tokio::test]
    async fn missing_fuel_source_yields_empty_list() {
        let quotes = Arc::new(StubQuoteSource::new(&[]));
        let sources = IndicatorSources::new(fx(), None, quotes, MarketSymbols::default());

        let snapshot = sources.snapshot(taken_at()).await;

        assert!(snapshot.fuel.is_empty());
        assert_eq!(snapshot.wti, None);
        assert_eq!(snapshot.gold, None);
        assert_eq!(snapshot.fx.rates[&Currency::Usd], dec!(1381.2));
        assert_eq!(snapshot.taken_at, taken_at());
    }

    #[tokio::test]
    async fn failing_fuel_source_does_not_affect_other_categories() {
        let quotes = Arc::new(StubQuoteSource::new(&[("GC=F", dec!(2400))]));
        let fuel: Arc<dyn FuelPriceSource> = Arc::new(StubFuelSource::failing());
        let sources = IndicatorSources::new(fx(), Some(fuel), quotes, MarketSymbols::default());

        let snapshot = sources.snapshot(taken_at()).await;

        assert!(snapshot.fuel.is_empty());
        assert_eq!(snapshot.gold, Some(dec!(2400)));
        assert!(!snapshot.fx.rates.is_empty());
    }

    #[tokio::test]
    async fn fuel_quotes_pass_through() {
        let quotes = Arc::new(StubQuoteSource::new(&[]));
        let fuel: Arc<dyn FuelPriceSource> = Arc::new(StubFuelSource::ok(vec![FuelQuote {
            product: FuelProduct::Diesel,
            price: "1521.37".into(),
            delta: "-0.5".into(),
        }]));
        let sources = IndicatorSources::new(fx(), Some(fuel), quotes, MarketSymbols::default());

        let snapshot = sources.snapshot(taken_at()).await;

        assert_eq!(snapshot.fuel.len(), 1);
        assert_eq!(snapshot.fuel[0].product, FuelProduct::Diesel);
    }

    #[test]
    fn default_symbols() {
        let symbols = MarketSymbols::default();
        assert_eq!(symbols.wti, "CL=F");
        assert_eq!(symbols.brent, "BZ=F");
        assert_eq!(symbols.gold, "GC=F");
    }
}

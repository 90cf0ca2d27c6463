use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client as HttpClient;
use tracing::{debug, info};

use super::dto::EximRateRecord;
use crate::adapter::outbound::http::{get_json, parse_grouped_decimal};
use crate::domain::{usable_price, Currency, FxRates};
use crate::error::{Result, SourceError};
use crate::port::outbound::source::FxRateProvider;

const PROVIDER: &str = "koreaexim";

/// HTTP client for the Korea Eximbank `exchangeJSON` endpoint.
pub struct KoreaEximClient {
    http: HttpClient,
    base_url: String,
    api_key: String,
}

impl KoreaEximClient {
    #[must_use]
    pub fn new(http: HttpClient, base_url: String, api_key: String) -> Self {
        Self {
            http,
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl FxRateProvider for KoreaEximClient {
    fn name(&self) -> &str {
        "Korea Eximbank"
    }

    async fn fetch_rates(&self, date: NaiveDate) -> Result<FxRates> {
        let search_date = date.format("%Y%m%d").to_string();
        info!(date = %search_date, "Fetching Korea Eximbank rates");

        let request = self.http.get(&self.base_url).query(&[
            ("authkey", self.api_key.as_str()),
            ("searchdate", search_date.as_str()),
            ("data", "AP01"),
        ]);
        let records: Vec<EximRateRecord> = get_json(request, PROVIDER).await?;
        debug!(count = records.len(), "Korea Eximbank records received");

        rates_from_records(&records)
    }
}

/// Map provider unit codes onto tracked currencies.
fn currency_for_unit(unit: &str) -> Option<Currency> {
    match unit.trim() {
        "USD" => Some(Currency::Usd),
        "EUR" => Some(Currency::Eur),
        "JPY(100)" => Some(Currency::Jpy100),
        "CNH" => Some(Currency::Cny),
        _ => None,
    }
}

/// Extract tracked currencies from a record batch.
///
/// Fails with [`SourceError::EmptyResult`] when no tracked currency has a
/// usable rate, which is what the endpoint returns for a bad key or a
/// non-publishing day.
pub(crate) fn rates_from_records(records: &[EximRateRecord]) -> Result<FxRates> {
    let rates: FxRates = records
        .iter()
        .filter(|record| record.is_ok())
        .filter_map(|record| {
            let currency = currency_for_unit(&record.cur_unit)?;
            let rate = parse_grouped_decimal(&record.deal_bas_r).and_then(usable_price)?;
            Some((currency, rate))
        })
        .collect();

    if rates.is_empty() {
        return Err(SourceError::EmptyResult { provider: PROVIDER }.into());
    }
    Ok(rates)
}

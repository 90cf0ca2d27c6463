use async_trait::async_trait;
use reqwest::Client as HttpClient;
use rust_decimal::Decimal;
use tracing::debug;

use super::dto::LatestRatesResponse;
use crate::adapter::outbound::http::get_json;
use crate::domain::usable_price;
use crate::error::{Result, SourceError};
use crate::port::outbound::source::CurrencyLookup;

const PROVIDER: &str = "exchangerate-api";

/// HTTP client for the keyless ExchangeRate-API `latest` endpoint.
pub struct ExchangeRateApiClient {
    http: HttpClient,
    base_url: String,
}

impl ExchangeRateApiClient {
    #[must_use]
    pub fn new(http: HttpClient, base_url: String) -> Self {
        Self { http, base_url }
    }
}

#[async_trait]
impl CurrencyLookup for ExchangeRateApiClient {
    async fn krw_rate(&self, currency: &str) -> Result<Decimal> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), currency);
        debug!(url = %url, "Fetching fallback rate");

        let response: LatestRatesResponse = get_json(self.http.get(&url), PROVIDER).await?;
        krw_from_response(&response)
    }
}

fn krw_from_response(response: &LatestRatesResponse) -> Result<Decimal> {
    response
        .rates
        .get("KRW")
        .copied()
        .and_then(usable_price)
        .ok_or_else(|| {
            SourceError::Malformed {
                provider: PROVIDER,
                reason: "no KRW rate in response".into(),
            }
            .into()
        })
}

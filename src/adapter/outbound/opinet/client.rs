use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, info};

use super::dto::AvgAllPriceResponse;
use crate::adapter::outbound::http::get_json;
use crate::domain::{FuelProduct, FuelQuote};
use crate::error::{Result, SourceError};
use crate::port::outbound::source::FuelPriceSource;

const PROVIDER: &str = "opinet";

/// HTTP client for the Opinet national average price endpoint.
pub struct OpinetClient {
    http: HttpClient,
    base_url: String,
    api_key: String,
}

impl OpinetClient {
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
impl FuelPriceSource for OpinetClient {
    async fn national_averages(&self) -> Result<Vec<FuelQuote>> {
        info!("Fetching Opinet national averages");

        let request = self
            .http
            .get(&self.base_url)
            .query(&[("out", "json"), ("code", self.api_key.as_str())]);
        let response: AvgAllPriceResponse = get_json(request, PROVIDER).await?;
        debug!(count = response.result.oil.len(), "Opinet products received");

        quotes_from_response(&response)
    }
}

/// Tracked products in [`FuelProduct`] order.
pub(crate) fn quotes_from_response(response: &AvgAllPriceResponse) -> Result<Vec<FuelQuote>> {
    let mut quotes: Vec<FuelQuote> = response
        .result
        .oil
        .iter()
        .filter(|oil| !oil.price.trim().is_empty())
        .filter_map(|oil| {
            Some(FuelQuote {
                product: FuelProduct::from_code(&oil.product_code)?,
                price: oil.price.trim().to_string(),
                delta: oil.diff.trim().to_string(),
            })
        })
        .collect();

    if quotes.is_empty() {
        return Err(SourceError::EmptyResult { provider: PROVIDER }.into());
    }

    quotes.sort_by_key(|q| q.product);
    quotes.dedup_by_key(|q| q.product);
    Ok(quotes)
}

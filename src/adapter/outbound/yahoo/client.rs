use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::Client as HttpClient;
use rust_decimal::Decimal;
use tracing::debug;

use super::dto::ChartResponse;
use crate::adapter::outbound::http::get_json;
use crate::error::{Result, SourceError};
use crate::port::outbound::source::QuoteSource;

const PROVIDER: &str = "yahoo";

/// HTTP client for the Yahoo Finance v8 chart endpoint.
///
/// Requests carry an explicit `User-Agent`; the endpoint rejects the
/// default one.
pub struct YahooChartClient {
    http: HttpClient,
    base_url: String,
    user_agent: String,
}

impl YahooChartClient {
    #[must_use]
    pub fn new(http: HttpClient, base_url: String, user_agent: String) -> Self {
        Self {
            http,
            base_url,
            user_agent,
        }
    }
}

#[async_trait]
impl QuoteSource for YahooChartClient {
    async fn spot_price(&self, symbol: &str) -> Result<Decimal> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), symbol);
        debug!(symbol, "Fetching chart quote");

        let request = self
            .http
            .get(&url)
            .query(&[("interval", "1d"), ("range", "1d")])
            .header(USER_AGENT, &self.user_agent);
        let response: ChartResponse = get_json(request, PROVIDER).await?;
        price_from_chart(&response)
    }
}

/// `regularMarketPrice` of the first result.
pub(crate) fn price_from_chart(response: &ChartResponse) -> Result<Decimal> {
    if let Some(error) = &response.chart.error {
        return Err(SourceError::Malformed {
            provider: PROVIDER,
            reason: error
                .description
                .clone()
                .or_else(|| error.code.clone())
                .unwrap_or_else(|| "unknown chart error".into()),
        }
        .into());
    }

    response
        .chart
        .result
        .as_deref()
        .and_then(|results| results.first())
        .and_then(|result| result.meta.regular_market_price)
        .ok_or_else(|| SourceError::EmptyResult { provider: PROVIDER }.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::http::decode;
    use crate::error::Error;
    use crate::testkit::http::StubServer;
    use rust_decimal_macros::dec;

    #[test]
    fn reads_regular_market_price() {
        let body = r#"{"chart":{"result":[{"meta":{"currency":"USD","symbol":"CL=F","regularMarketPrice":71.42}}],"error":null}}"#;
        let response: ChartResponse = decode(body, PROVIDER).unwrap();
        assert_eq!(price_from_chart(&response).unwrap(), dec!(71.42));
    }

    #[test]
    fn empty_result_is_an_error() {
        let response: ChartResponse =
            decode(r#"{"chart":{"result":[],"error":null}}"#, PROVIDER).unwrap();
        assert!(matches!(
            price_from_chart(&response),
            Err(Error::Source(SourceError::EmptyResult { .. }))
        ));
    }

    #[test]
    fn chart_error_is_reported() {
        let body = r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#;
        let response: ChartResponse = decode(body, PROVIDER).unwrap();
        let err = price_from_chart(&response).unwrap_err();
        assert!(err.to_string().contains("delisted"));
    }

    #[tokio::test]
    async fn request_sends_user_agent_and_daily_range() {
        let body = r#"{"chart":{"result":[{"meta":{"regularMarketPrice":2411.3}}],"error":null}}"#;
        let server = StubServer::respond(200, body).await;
        let client = YahooChartClient::new(
            HttpClient::new(),
            format!("{}/v8/finance/chart/", server.url()),
            "market-notifier-test/1.0".into(),
        );

        let price = client.spot_price("GC=F").await.unwrap();
        let request = server.request().await;

        assert_eq!(price, dec!(2411.3));
        assert_eq!(request.target, "/v8/finance/chart/GC=F?interval=1d&range=1d");
        assert_eq!(request.header("User-Agent"), Some("market-notifier-test/1.0"));
    }
}

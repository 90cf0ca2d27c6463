//! Shared HTTP plumbing for provider adapters.

use std::time::Duration;

use reqwest::{Client as HttpClient, RequestBuilder};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{Result, SourceError};

/// Build the HTTP client shared by every adapter.
///
/// Each request is bounded by `timeout`; there is no budget across a whole
/// report.
#[must_use]
pub fn build_client(timeout: Duration) -> HttpClient {
    HttpClient::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .build()
        .unwrap_or_else(|err| {
            warn!(error = %err, "Failed to build HTTP client, using defaults");
            HttpClient::new()
        })
}

/// Send a request and decode a JSON body.
///
/// Non-success statuses and undecodable bodies become [`SourceError`]s
/// tagged with `provider`. Transport errors are stripped of their URL, which
/// carries API keys for some providers.
pub async fn get_json<T>(request: RequestBuilder, provider: &'static str) -> Result<T>
where
    T: DeserializeOwned,
{
    let response = request.send().await.map_err(reqwest::Error::without_url)?;
    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status {
            provider,
            status: status.as_u16(),
        }
        .into());
    }

    let body = response.text().await.map_err(reqwest::Error::without_url)?;
    debug!(provider, bytes = body.len(), "Provider response received");
    decode(&body, provider)
}

/// Decode a provider body, mapping failures to [`SourceError::Malformed`].
pub fn decode<T>(body: &str, provider: &'static str) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str(body).map_err(|err| {
        SourceError::Malformed {
            provider,
            reason: err.to_string(),
        }
        .into()
    })
}

/// Parse a decimal that may carry thousands separators, e.g. `"1,380.50"`.
#[must_use]
pub fn parse_grouped_decimal(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw.chars().filter(|c| *c != ',' && !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rust_decimal_macros::dec;

    #[test]
    fn parse_grouped_decimal_strips_commas() {
        assert_eq!(parse_grouped_decimal("1,380.5"), Some(dec!(1380.5)));
        assert_eq!(parse_grouped_decimal("942.11"), Some(dec!(942.11)));
        assert_eq!(parse_grouped_decimal(" 1,000 "), Some(dec!(1000)));
        assert_eq!(parse_grouped_decimal(""), None);
        assert_eq!(parse_grouped_decimal("n/a"), None);
    }

    #[test]
    fn decode_reports_provider_on_failure() {
        let result: Result<Vec<u32>> = decode("{not json", "test");
        match result {
            Err(Error::Source(SourceError::Malformed { provider, .. })) => {
                assert_eq!(provider, "test");
            }
            other => panic!("expected malformed error, got {other:?}"),
        }
    }
}

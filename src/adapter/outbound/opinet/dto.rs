//! Opinet `avgAllPrice` response types.
//!
//! ```json
//! {"RESULT":{"OIL":[{"TRADE_DT":"20261016","PRODCD":"B027","PRODNM":"휘발유","PRICE":"1650.23","DIFF":"-1.05"}]}}
//! ```
//! Prices are usually strings but some deployments send bare numbers, so
//! both are accepted.

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Deserialize)]
pub struct AvgAllPriceResponse {
    #[serde(rename = "RESULT")]
    pub result: AvgAllPriceResult,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AvgAllPriceResult {
    #[serde(rename = "OIL", default)]
    pub oil: Vec<OilPrice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OilPrice {
    #[serde(rename = "PRODCD")]
    pub product_code: String,
    #[serde(rename = "PRODNM", default)]
    pub product_name: Option<String>,
    #[serde(rename = "PRICE", deserialize_with = "string_or_number")]
    pub price: String,
    #[serde(rename = "DIFF", default, deserialize_with = "string_or_number")]
    pub diff: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}

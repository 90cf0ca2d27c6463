//! Korea Eximbank response types.
//!
//! The endpoint returns a JSON array with one record per currency:
//! ```json
//! [{"result":1,"cur_unit":"USD","cur_nm":"미국 달러","ttb":"1,366.69","tts":"1,394.30","deal_bas_r":"1,380.5"}]
//! ```
//! Numeric fields are strings with thousands separators.

use serde::Deserialize;

/// Result code for a successful lookup.
pub const RESULT_OK: i32 = 1;

#[derive(Debug, Clone, Deserialize)]
pub struct EximRateRecord {
    /// 1 = success, 2 = data code error, 3 = auth code error, 4 = daily limit.
    #[serde(default)]
    pub result: Option<i32>,
    pub cur_unit: String,
    #[serde(default)]
    pub cur_nm: Option<String>,
    #[serde(default)]
    pub ttb: Option<String>,
    #[serde(default)]
    pub tts: Option<String>,
    /// Base trading rate.
    pub deal_bas_r: String,
}

impl EximRateRecord {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.result.map_or(true, |code| code == RESULT_OK)
    }
}

use serde::Deserialize;
use serde::Serialize;

use crate::serde_helpers::deserialize_timestamp;

/// Market listed on the exchange (`getmarkets`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Market {
    pub market_currency: String,
    pub base_currency: String,
    pub market_currency_long: String,
    pub base_currency_long: String,
    pub min_trade_size: f64,
    pub market_name: String,
    pub is_active: bool,
    /// Listing time in epoch seconds
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created: i64,
    #[serde(default)]
    pub notice: Option<String>,
    #[serde(default)]
    pub is_sponsored: Option<bool>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

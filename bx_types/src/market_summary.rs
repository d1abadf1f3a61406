use serde::Deserialize;
use serde::Serialize;

use crate::serde_helpers::deserialize_timestamp;

/// Last 24 hour summary of a market (`getmarketsummaries`, `getmarketsummary`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MarketSummary {
    pub market_name: String,
    pub high: f64,
    pub low: f64,
    pub volume: f64,
    pub last: f64,
    pub base_volume: f64,
    /// Snapshot time in epoch seconds
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub time_stamp: i64,
    pub bid: f64,
    pub ask: f64,
    pub open_buy_orders: u32,
    pub open_sell_orders: u32,
    pub prev_day: f64,
    /// Market creation time in epoch seconds
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created: i64,
}

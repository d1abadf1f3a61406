use serde::Deserialize;
use serde::Serialize;

use crate::serde_helpers::deserialize_timestamp;

/// Executed trade on a market (`getmarkethistory`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Trade {
    pub id: i64,
    /// Execution time in epoch seconds
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub time_stamp: i64,
    pub quantity: f64,
    pub price: f64,
    pub total: f64,
    pub fill_type: String,
    pub order_type: String,
}

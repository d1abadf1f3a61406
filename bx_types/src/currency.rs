use serde::Deserialize;
use serde::Serialize;

/// Currency supported by the exchange (`getcurrencies`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Currency {
    pub currency: String,
    pub currency_long: String,
    pub min_confirmation: u32,
    pub tx_fee: f64,
    pub is_active: bool,
    pub coin_type: String,
    pub base_address: Option<String>,
    pub notice: Option<String>,
}

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

/// Which side(s) of the book `getorderbook` should return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderBookType {
    Buy,
    Sell,
    #[default]
    Both,
}

impl OrderBookType {
    /// Query parameter value
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderBookType::Buy => "buy",
            OrderBookType::Sell => "sell",
            OrderBookType::Both => "both",
        }
    }
}

impl fmt::Display for OrderBookType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderBookType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "buy" => Ok(OrderBookType::Buy),
            "sell" => Ok(OrderBookType::Sell),
            "both" => Ok(OrderBookType::Both),
            other => Err(format!("unknown order book type {other:?} (expected buy, sell or both)")),
        }
    }
}

/// Order book snapshot (`getorderbook`)
///
/// A side not requested is left empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderBook {
    #[serde(default)]
    pub buy: Vec<Order>,
    #[serde(default)]
    pub sell: Vec<Order>,
}

/// Single price level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Order {
    pub quantity: f64,
    pub rate: f64,
}

use serde::Deserialize;
use serde::Serialize;

/// Current tick values for a market (`getticker`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tick {
    pub bid: f64,
    pub ask: f64,
    pub last: f64,
}

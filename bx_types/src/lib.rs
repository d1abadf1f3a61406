//! # bx_types
//!
//! Records returned by the public market-data endpoints and the decoding
//! rules they share.

pub mod currency;
pub mod errors;
pub mod market;
pub mod market_history;
pub mod market_summary;
pub mod order_book;
pub mod serde_helpers;
pub mod ticker;

pub use currency::Currency;
pub use errors::TimestampError;
pub use market::Market;
pub use market_history::Trade;
pub use market_summary::MarketSummary;
pub use order_book::Order;
pub use order_book::OrderBook;
pub use order_book::OrderBookType;
pub use serde_helpers::parse_timestamp;
pub use ticker::Tick;

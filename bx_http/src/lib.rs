//! # bx_http
//!
//! Rate-limited client for the exchange's public market-data endpoints.
//!
//! Every call goes through the same pipeline: build the URL, wait for a
//! throttle token, GET the body, unwrap the `{success, message, result}`
//! envelope, then decode `result` into the endpoint's record type.

pub mod bittrex;
pub mod client;
pub mod config;
pub mod envelope;
pub mod errors;

pub use bittrex::BittrexClient;
pub use bittrex::BittrexClientBuilder;
pub use bittrex::build_url;
pub use client::HttpClient;
pub use client::HttpClientConfig;
pub use config::PublicApiConfig;
pub use errors::HttpError;
pub use errors::Result;

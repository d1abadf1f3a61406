use std::sync::Arc;
use std::time::Duration;
use std::time::Instant;

use bx_ratelimit::RateLimiter;
use bx_ratelimit::Throttle;
use bx_types::Currency;
use bx_types::Market;
use bx_types::MarketSummary;
use bx_types::OrderBook;
use bx_types::OrderBookType;
use bx_types::Tick;
use bx_types::Trade;
use bytes::Bytes;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;
use url::form_urlencoded;

use crate::client::HttpClient;
use crate::client::HttpClientConfig;
use crate::config::DEFAULT_API_URL;
use crate::config::PublicApiConfig;
use crate::envelope;
use crate::errors::HttpError;
use crate::errors::Result;

const GET_CURRENCIES: &str = "getcurrencies";
const GET_MARKETS: &str = "getmarkets";
const GET_TICKER: &str = "getticker";
const GET_MARKET_SUMMARIES: &str = "getmarketsummaries";
const GET_MARKET_SUMMARY: &str = "getmarketsummary";
const GET_ORDER_BOOK: &str = "getorderbook";
const GET_MARKET_HISTORY: &str = "getmarkethistory";

/// Build `{base_url}/{endpoint}[?k1=v1&k2=v2...]`
///
/// Values are form-encoded (space becomes `+`); keys are sent as given.
pub fn build_url(base_url: &str, endpoint: &str, params: &[(&str, &str)]) -> String {
    let mut url = format!("{base_url}/{endpoint}");

    if !params.is_empty() {
        let query: Vec<String> = params
            .iter()
            .map(|(key, value)| {
                let encoded: String = form_urlencoded::byte_serialize(value.as_bytes()).collect();
                format!("{key}={encoded}")
            })
            .collect();
        url.push('?');
        url.push_str(&query.join("&"));
    }

    url
}

/// Bittrex public REST API client for market data
///
/// Cheap to clone; clones share the HTTP connection pool and the rate
/// limiter, so the request rate bound holds across all of them.
#[derive(Clone)]
pub struct BittrexClient {
    client: HttpClient,
    base_url: String,
    rate_limiter: Arc<dyn RateLimiter>,
}

impl BittrexClient {
    /// Create a new client builder
    pub fn builder() -> BittrexClientBuilder {
        BittrexClientBuilder::default()
    }

    /// Create a client from loaded settings, failing fast on invalid values
    pub fn from_config(config: &PublicApiConfig) -> Result<Self> {
        config.validate()?;

        Self::builder()
            .base_url(config.api_url.clone())
            .http_config(HttpClientConfig::with_timeout(Duration::from_secs(config.httpclient_timeout_sec)))
            .rate_limit(config.requests_per_second()?)
            .build()
    }

    /// Base URL every endpoint is appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one throttled GET to `endpoint` and return the raw body
    ///
    /// The body is read in full whatever the status, so a non-200 response
    /// still hands its bytes back inside [`HttpError::Status`].
    pub async fn invoke(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Bytes> {
        let url = build_url(&self.base_url, endpoint, params);

        self.rate_limiter.acquire().await;

        debug!(endpoint, %url, "Dispatching request");
        let started = Instant::now();

        let transport_error = |source: reqwest::Error| HttpError::Transport { endpoint: endpoint.to_string(), source };
        let response = self.client.get(&url).send().await.map_err(transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(transport_error)?;

        debug!(
            endpoint,
            status = status.as_u16(),
            bytes = body.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Response received"
        );

        if status != StatusCode::OK {
            return Err(HttpError::Status { endpoint: endpoint.to_string(), status: status.to_string(), body });
        }

        Ok(body)
    }

    /// Invoke `endpoint`, unwrap the envelope and decode `result` as `T`
    pub async fn call<T: DeserializeOwned>(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<T> {
        let body = self.invoke(endpoint, params).await?;
        let payload = envelope::decode(&body)?;
        envelope::decode_result(endpoint, payload)
    }

    /// Get all supported currencies
    pub async fn currencies(&self) -> Result<Vec<Currency>> {
        self.call(GET_CURRENCIES, &[]).await
    }

    /// Get all open markets
    pub async fn markets(&self) -> Result<Vec<Market>> {
        self.call(GET_MARKETS, &[]).await
    }

    /// Get the current tick values for a market (e.g. `BTC-LTC`)
    pub async fn ticker(&self, market: &str) -> Result<Tick> {
        self.call(GET_TICKER, &[("market", market)]).await
    }

    /// Get the last 24 hour summary of all active markets
    pub async fn market_summaries(&self) -> Result<Vec<MarketSummary>> {
        self.call(GET_MARKET_SUMMARIES, &[]).await
    }

    /// Get the last 24 hour summary of one market
    ///
    /// The endpoint answers with a one-element array; its first element is
    /// returned and an empty array is a decode error.
    pub async fn market_summary(&self, market: &str) -> Result<MarketSummary> {
        let summaries: Vec<MarketSummary> = self.call(GET_MARKET_SUMMARY, &[("market", market)]).await?;

        summaries.into_iter().next().ok_or_else(|| HttpError::Payload {
            endpoint: GET_MARKET_SUMMARY.to_string(),
            source: <serde_json::Error as serde::de::Error>::invalid_length(0, &"one market summary"),
        })
    }

    /// Get the order book of a market
    pub async fn order_book(&self, market: &str, book_type: OrderBookType) -> Result<OrderBook> {
        self.call(GET_ORDER_BOOK, &[("market", market), ("type", book_type.as_str())]).await
    }

    /// Get the latest trades of a market
    pub async fn market_history(&self, market: &str) -> Result<Vec<Trade>> {
        self.call(GET_MARKET_HISTORY, &[("market", market)]).await
    }
}

/// Builder for configuring Bittrex client
pub struct BittrexClientBuilder {
    http_config: HttpClientConfig,
    base_url: String,
    requests_per_second: u32,
    rate_limiter: Option<Arc<dyn RateLimiter>>,
}

impl Default for BittrexClientBuilder {
    fn default() -> Self {
        Self {
            http_config: HttpClientConfig::default(),
            base_url: DEFAULT_API_URL.to_string(),
            requests_per_second: 5,
            rate_limiter: None,
        }
    }
}

impl BittrexClientBuilder {
    /// Set custom base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Configure HTTP client settings
    pub fn http_config(mut self, config: HttpClientConfig) -> Self {
        self.http_config = config;
        self
    }

    /// Set rate limit (requests per second); zero is rejected by `build`
    pub fn rate_limit(mut self, requests_per_second: u32) -> Self {
        self.requests_per_second = requests_per_second;
        self
    }

    /// Share an existing limiter instead of creating a dedicated throttle
    pub fn rate_limiter(mut self, rate_limiter: Arc<dyn RateLimiter>) -> Self {
        self.rate_limiter = Some(rate_limiter);
        self
    }

    /// Build the Bittrex client
    pub fn build(self) -> Result<BittrexClient> {
        let base_url = self.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|err| HttpError::Config(format!("invalid base URL {base_url:?}: {err}")))?;

        let rate_limiter = match self.rate_limiter {
            Some(rate_limiter) => rate_limiter,
            None => Arc::new(Throttle::per_second(self.requests_per_second)?),
        };

        let client = HttpClient::with_config(self.http_config)?;

        Ok(BittrexClient { client, base_url, rate_limiter })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_build_url_without_params() {
        let url = build_url("https://bittrex.com/api/v1.1/public", "getmarkets", &[]);
        assert_eq!(url, "https://bittrex.com/api/v1.1/public/getmarkets");
    }

    #[test]
    fn test_build_url_with_params() {
        let url = build_url("http://host", "getorderbook", &[("market", "BTC-LTC"), ("type", "both")]);
        assert_eq!(url, "http://host/getorderbook?market=BTC-LTC&type=both");
    }

    #[test]
    fn test_build_url_encodes_values() {
        let url = build_url("http://host", "getticker", &[("market", "a b&c=d/é")]);
        assert_eq!(url, "http://host/getticker?market=a+b%26c%3Dd%2F%C3%A9");
    }

    #[test]
    fn test_builder_default() {
        let builder = BittrexClientBuilder::default();
        assert_eq!(builder.base_url, DEFAULT_API_URL);
        assert_eq!(builder.requests_per_second, 5);
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = BittrexClient::builder().base_url("http://localhost:8080/api/").build().unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/api");
    }

    #[test]
    fn test_builder_rejects_zero_rate() {
        let result = BittrexClient::builder().rate_limit(0).build();
        assert!(matches!(result, Err(HttpError::Config(_))));
    }

    #[test]
    fn test_builder_rejects_bad_url() {
        let result = BittrexClient::builder().base_url("not a url").build();
        assert!(matches!(result, Err(HttpError::Config(_))));
    }

    #[test]
    fn test_from_config_rejects_non_positive_rate() {
        for rate in [0, -1, i64::MIN] {
            let config = PublicApiConfig { max_requests_sec: rate, ..Default::default() };
            assert!(matches!(BittrexClient::from_config(&config), Err(HttpError::Config(_))));
        }
    }

    proptest! {
        #[test]
        fn prop_build_url_contains_every_pair(
            endpoint in "[a-z]{1,20}",
            params in proptest::collection::btree_map("[a-z]{1,8}", "\\PC{0,16}", 0..6),
        ) {
            let pairs: Vec<(&str, &str)> = params.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
            let url = build_url("http://host", &endpoint, &pairs);
            let prefix = format!("http://host/{endpoint}");

            if pairs.is_empty() {
                prop_assert_eq!(url, prefix);
            } else {
                let query = url.strip_prefix(&format!("{prefix}?")).expect("query prefix");
                let sent: Vec<&str> = query.split('&').collect();
                prop_assert_eq!(sent.len(), pairs.len());

                for (key, value) in &pairs {
                    let encoded = format!("{key}={}", form_urlencoded::byte_serialize(value.as_bytes()).collect::<String>());
                    prop_assert_eq!(sent.iter().filter(|pair| **pair == encoded).count(), 1);
                }

                let decoded: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes()).into_owned().collect();
                let expected: Vec<(String, String)> = params.into_iter().collect();
                prop_assert_eq!(decoded, expected);
            }
        }
    }
}

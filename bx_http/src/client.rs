use std::time::Duration;

use reqwest::Client;
use reqwest::ClientBuilder;
use reqwest::header::ACCEPT;
use reqwest::header::HeaderValue;

use crate::errors::HttpError;
use crate::errors::Result;

/// Configuration for HTTP client.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Total request timeout, covering the body read (default: 30s)
    pub request_timeout: Duration,

    /// Connection establishment timeout (default: 10s)
    pub connect_timeout: Duration,

    /// Enable TCP_NODELAY (default: true)
    pub tcp_nodelay: bool,

    /// Enable Hickory DNS for async resolution (default: true)
    pub hickory_dns: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            tcp_nodelay: true,
            hickory_dns: true,
        }
    }
}

impl HttpClientConfig {
    /// Configuration with the given total request timeout
    pub fn with_timeout(request_timeout: Duration) -> Self {
        Self { request_timeout, connect_timeout: request_timeout.min(Duration::from_secs(10)), ..Default::default() }
    }
}

/// Thin wrapper around a configured `reqwest::Client`
///
/// Every request carries `Accept: application/json`.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        if config.request_timeout.is_zero() {
            return Err(HttpError::Config("request timeout must be greater than 0".to_string()));
        }

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = ClientBuilder::new()
            .default_headers(headers)
            // TCP optimization
            .tcp_nodelay(config.tcp_nodelay)
            // Timeouts
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            // TLS with rustls
            .use_rustls_tls()
            .min_tls_version(reqwest::tls::Version::TLS_1_2)
            // Compression
            .gzip(true)
            .brotli(true);

        // Hickory DNS for async resolution
        if config.hickory_dns {
            builder = builder.hickory_dns(true);
        }

        let client = builder.build().map_err(|err| HttpError::Config(format!("failed to build HTTP client: {err}")))?;

        Ok(Self { client })
    }

    /// Create a GET request builder
    pub fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client.get(url)
    }
}

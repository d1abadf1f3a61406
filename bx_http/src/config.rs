use serde::Deserialize;
use serde::Serialize;
use url::Url;

use crate::errors::HttpError;
use crate::errors::Result;

pub const DEFAULT_API_URL: &str = "https://bittrex.com/api/v1.1/public";

/// Settings consumed by [`crate::BittrexClient::from_config`]
///
/// Loaded by the application from the `bittrex_public_api` section of its
/// configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicApiConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Total request timeout in seconds
    pub httpclient_timeout_sec: u64,

    /// Upper bound on requests sent per second
    pub max_requests_sec: i64,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for PublicApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            httpclient_timeout_sec: 10,
            max_requests_sec: 5,
            log_level: default_log_level(),
        }
    }
}

impl PublicApiConfig {
    /// Reject settings that would leave the client unable to throttle or time out
    pub fn validate(&self) -> Result<()> {
        self.requests_per_second()?;

        if self.httpclient_timeout_sec == 0 {
            return Err(HttpError::Config("httpclient_timeout_sec must be greater than 0".to_string()));
        }

        let url = Url::parse(&self.api_url)
            .map_err(|err| HttpError::Config(format!("invalid api_url {:?}: {err}", self.api_url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(HttpError::Config(format!("api_url must use http or https, got {:?}", self.api_url)));
        }

        Ok(())
    }

    /// `max_requests_sec` as a throttle rate
    pub fn requests_per_second(&self) -> Result<u32> {
        if self.max_requests_sec <= 0 {
            let message = format!("max_requests_sec must be greater than 0, got {}", self.max_requests_sec);
            return Err(HttpError::Config(message));
        }

        u32::try_from(self.max_requests_sec)
            .map_err(|_| HttpError::Config(format!("max_requests_sec {} is too large", self.max_requests_sec)))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(PublicApiConfig::default().validate().is_ok());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: PublicApiConfig = serde_json::from_str(r#"{"httpclient_timeout_sec": 5, "max_requests_sec": 2}"#).unwrap();

        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.requests_per_second().unwrap(), 2);
    }

    #[test]
    fn test_missing_rate_is_rejected_at_load() {
        assert!(serde_json::from_str::<PublicApiConfig>(r#"{"httpclient_timeout_sec": 5}"#).is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = PublicApiConfig { httpclient_timeout_sec: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(HttpError::Config(_))));
    }

    #[test]
    fn test_bad_url_rejected() {
        let config = PublicApiConfig { api_url: "bittrex.com/api".to_string(), ..Default::default() };
        assert!(matches!(config.validate(), Err(HttpError::Config(_))));

        let config = PublicApiConfig { api_url: "ftp://bittrex.com/api".to_string(), ..Default::default() };
        assert!(matches!(config.validate(), Err(HttpError::Config(_))));
    }

    #[test]
    fn test_oversized_rate_rejected() {
        let config = PublicApiConfig { max_requests_sec: i64::from(u32::MAX) + 1, ..Default::default() };
        assert!(matches!(config.validate(), Err(HttpError::Config(_))));
    }

    proptest! {
        #[test]
        fn prop_non_positive_rate_rejected(rate in i64::MIN..=0) {
            let config = PublicApiConfig { max_requests_sec: rate, ..Default::default() };
            prop_assert!(matches!(config.validate(), Err(HttpError::Config(_))));
        }
    }
}

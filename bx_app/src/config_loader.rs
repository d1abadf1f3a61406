use std::path::Path;

use bx_http::PublicApiConfig;
use config::Config;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;
use tracing::Level;

/// Layout of the configuration file; the client settings live in one section
#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub bittrex_public_api: PublicApiConfig,
}

/// Load the public API settings from `path` (format picked from the extension)
///
/// `BX_BITTREX_PUBLIC_API__<KEY>` environment variables override file values.
/// Values are only deserialized here; `BittrexClient::from_config` validates them.
pub fn load_public_api_config<P: AsRef<Path>>(path: P) -> Result<PublicApiConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path.as_ref()))
        .add_source(Environment::with_prefix("BX").prefix_separator("_").separator("__").try_parsing(true))
        .build()?;

    let file: ConfigFile = config.try_deserialize()?;
    Ok(file.bittrex_public_api)
}

/// Map a configured log level name to a tracing level
///
/// `fatal` and `panic` have no tracing counterpart and map to `ERROR`;
/// unknown names fall back to `WARN`.
pub fn parse_log_level(level: &str) -> Level {
    match level.to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" | "fatal" | "panic" => Level::ERROR,
        _ => Level::WARN,
    }
}

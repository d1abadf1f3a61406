use thiserror::Error;

/// Failure to normalise an API date string to epoch seconds
#[derive(Error, Debug)]
pub enum TimestampError {
    #[error("invalid fractional seconds in timestamp {0:?}")]
    InvalidFraction(String),

    #[error("invalid timestamp {input:?}: {source}")]
    Parse {
        input: String,
        #[source]
        source: time::error::Parse,
    },
}

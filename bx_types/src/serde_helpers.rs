use serde::Deserialize;
use serde::Deserializer;
use time::PrimitiveDateTime;
use time::macros::format_description;

use crate::errors::TimestampError;

/// Parse an API date string (`YYYY-MM-DDTHH:MM:SS[.fraction]`) to UTC epoch seconds
///
/// The fractional part is truncated, never rounded: `07:37:41.9` yields the
/// same value as `07:37:41`.
pub fn parse_timestamp(input: &str) -> Result<i64, TimestampError> {
    let whole_seconds = match input.split_once('.') {
        Some((whole, fraction)) => {
            if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
                return Err(TimestampError::InvalidFraction(input.to_string()));
            }
            whole
        }
        None => input,
    };

    let format = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    let datetime = PrimitiveDateTime::parse(whole_seconds, &format)
        .map_err(|source| TimestampError::Parse { input: input.to_string(), source })?;

    Ok(datetime.assume_utc().unix_timestamp())
}

/// Deserialize an API date string field to epoch seconds
///
/// Shared by every record carrying a timestamp so they all accept and reject
/// exactly the same inputs.
pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::value::RawValue;

use crate::errors::HttpError;
use crate::errors::Result;

/// Wrapper around every endpoint response
#[derive(Debug, Deserialize)]
struct Envelope<'a> {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(borrow, default)]
    result: Option<&'a RawValue>,
}

/// Unwrap the `{success, message, result}` envelope
///
/// Returns the `result` payload untouched (JSON `null` when absent). The
/// payload is never inspected here; on `success: false` it is not even
/// looked at and the server message becomes the error text.
pub fn decode(body: &[u8]) -> Result<&str> {
    let envelope: Envelope<'_> = serde_json::from_slice(body).map_err(HttpError::Envelope)?;

    if !envelope.success {
        return Err(HttpError::Api(envelope.message.unwrap_or_default()));
    }

    Ok(envelope.result.map_or("null", RawValue::get))
}

/// Decode a `result` payload into the record type expected for `endpoint`
pub fn decode_result<T: DeserializeOwned>(endpoint: &str, payload: &str) -> Result<T> {
    serde_json::from_str(payload).map_err(|source| HttpError::Payload { endpoint: endpoint.to_string(), source })
}

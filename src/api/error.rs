//! Normalization of API responses into [`BrickError`].

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{BrickError, Result};
use crate::http::HttpResponse;

/// HTTP 204, answered by some endpoints with an empty body.
const NO_CONTENT: u16 = 204;

/// Turn a raw API response into parsed JSON or the matching error.
///
/// * body not JSON -> [`BrickError::Protocol`] with the raw text
/// * failing status -> [`BrickError::Api`] with the `error` field
/// * otherwise the parsed body, unchanged
pub(crate) fn map_response(response: HttpResponse) -> Result<Value> {
    if response.status == NO_CONTENT && response.body.is_empty() {
        return Ok(Value::Null);
    }

    let value: Value = match serde_json::from_slice(&response.body) {
        Ok(value) => value,
        Err(e) => {
            return Err(BrickError::Protocol {
                status: response.status,
                message: format!("response is not valid JSON: {}", e),
                body: response.text(),
            });
        }
    };

    if !response.is_success() {
        return Err(BrickError::Api {
            status: response.status,
            message: api_error_message(&value),
        });
    }

    Ok(value)
}

/// Message carried by a failing response.
///
/// Uses the `error` field when present; a string is passed through as is.
/// Bodies without one are reported verbatim.
fn api_error_message(value: &Value) -> String {
    match value.get("error") {
        Some(Value::String(message)) => message.clone(),
        Some(other) => other.to_string(),
        None => value.to_string(),
    }
}

/// Decode a successful JSON body into a typed shape.
///
/// A body that parsed as JSON but lacks required fields is still a protocol
/// violation, so it maps to [`BrickError::Protocol`].
pub(crate) fn decode<D: DeserializeOwned>(value: Value, what: &str) -> Result<D> {
    let body = value.to_string();
    serde_json::from_value(value).map_err(|e| BrickError::Protocol {
        status: 200,
        message: format!("unexpected {} response: {}", what, e),
        body,
    })
}

//! Response shape normalization.
//!
//! The backend answers some endpoints with `{ "data": ... }` and others with the
//! payload itself. Everything past the gateway sees the payload only.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ArmsError, ArmsResult};

/// Strip a `data` envelope when present and non-null
pub fn unwrap_envelope(value: Value) -> Value {
    match value {
        Value::Object(mut map) => match map.remove("data") {
            Some(data) if !data.is_null() => data,
            Some(data) => {
                map.insert("data".to_string(), data);
                Value::Object(map)
            }
            None => Value::Object(map),
        },
        other => other,
    }
}

/// Unwrap and deserialize into the canonical type
pub fn decode<T: DeserializeOwned>(value: Value) -> ArmsResult<T> {
    serde_json::from_value(unwrap_envelope(value)).map_err(|e| ArmsError::decode(e.to_string()))
}

/// The server-provided error text, if the error body carries one
pub fn server_message(body: &Value) -> Option<String> {
    ["message", "error"]
        .iter()
        .filter_map(|key| body.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|msg| !msg.is_empty())
        .map(str::to_string)
}

//! Request and response envelopes
//!
//! Request bodies nest the payload under a `data` key:
//! `{ "data": { "name": "...", ... } }`. Success responses wrap the payload
//! the same way: `{ "data": <payload> }`.

use serde::Serialize;
use serde_json::{Map, Value};

/// Success response envelope: `{ "data": <payload> }`
#[derive(Debug, Serialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

impl<T> DataEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Extract the nested `data` object from a request body
///
/// A missing `data` key, or a `data` value that is not an object, behaves as
/// an empty object: every field-presence guard then fails with its own
/// message rather than a generic parse error.
pub fn data_object(body: &Value) -> Map<String, Value> {
    body.get("data")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default()
}

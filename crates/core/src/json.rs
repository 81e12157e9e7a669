//! Field extraction helpers for Graph API JSON objects
//!
//! Graph API responses omit fields freely, so every extractor maps a missing
//! key and an explicit JSON `null` to `None`. A value of the wrong shape is an
//! error rather than a silent `None`.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;

use crate::error::JsonError;

/// A JSON object as returned by the Graph API
pub type JsonObject = serde_json::Map<String, Value>;

/// Datetime layout used by the Graph API (`2012-08-14T05:41:23+0000`)
const GRAPH_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Parse a response body into a JSON object
pub fn parse_object(text: &str) -> Result<JsonObject, JsonError> {
    match serde_json::from_str::<Value>(text)? {
        Value::Object(map) => Ok(map),
        _ => Err(JsonError::NotAnObject),
    }
}

/// Returns true when the key is missing or holds JSON `null`
pub fn is_null(key: &str, json: &JsonObject) -> bool {
    matches!(json.get(key), None | Some(Value::Null))
}

/// Extract a string field, accepting scalars in their textual form
pub fn get_raw_string(key: &str, json: &JsonObject) -> Result<Option<String>, JsonError> {
    match json.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(_) => Err(mismatch(key, "a string")),
    }
}

/// Extract a boolean field
///
/// The Graph API occasionally encodes booleans as strings.
pub fn get_boolean(key: &str, json: &JsonObject) -> Result<Option<bool>, JsonError> {
    match json.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) if s.eq_ignore_ascii_case("true") => Ok(Some(true)),
        Some(Value::String(s)) if s.eq_ignore_ascii_case("false") => Ok(Some(false)),
        Some(_) => Err(mismatch(key, "a boolean")),
    }
}

/// Extract an integer field, accepting numeric strings
pub fn get_int(key: &str, json: &JsonObject) -> Result<Option<i64>, JsonError> {
    match json.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n.as_i64().map(Some).ok_or_else(|| mismatch(key, "an int")),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<i64>()
                .map(Some)
                .map_err(|_| mismatch(key, "an int"))
        }
        Some(_) => Err(mismatch(key, "an int")),
    }
}

/// Extract an ISO-8601 datetime field
///
/// Accepts the Graph API layout, RFC 3339, and integer Unix seconds (returned
/// when a request asks for `date_format=U`).
pub fn get_iso8601_datetime(
    key: &str,
    json: &JsonObject,
) -> Result<Option<DateTime<Utc>>, JsonError> {
    match json.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => parse_datetime(s)
            .map(Some)
            .map_err(|source| JsonError::InvalidDatetime {
                key: key.to_string(),
                value: s.clone(),
                source,
            }),
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
            .map(Some)
            .ok_or_else(|| mismatch(key, "a datetime")),
        Some(_) => Err(mismatch(key, "a datetime")),
    }
}

fn parse_datetime(text: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_str(text, GRAPH_DATETIME_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(text))
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|err| {
            // Some endpoints drop the offset entirely; those are UTC.
            NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S")
                .map(|naive| naive.and_utc())
                .map_err(|_| err)
        })
}

/// Extract a nested object field
pub fn get_object<'a>(key: &str, json: &'a JsonObject) -> Result<Option<&'a JsonObject>, JsonError> {
    match json.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(_) => Err(mismatch(key, "a JSONObject")),
    }
}

/// Extract a required array field
pub fn get_array<'a>(key: &str, json: &'a JsonObject) -> Result<&'a Vec<Value>, JsonError> {
    match json.get(key) {
        None => Err(JsonError::MissingKey(key.to_string())),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(mismatch(key, "a JSONArray")),
    }
}

/// View an array element as an object
pub fn element_as_object(index: usize, value: &Value) -> Result<&JsonObject, JsonError> {
    value.as_object().ok_or_else(|| JsonError::TypeMismatch {
        key: index.to_string(),
        expected: "a JSONObject",
    })
}

fn mismatch(key: &str, expected: &'static str) -> JsonError {
    JsonError::TypeMismatch {
        key: key.to_string(),
        expected,
    }
}

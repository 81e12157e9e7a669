//! HTTP response abstraction consumed by the mappers
//!
//! Transport lives outside this crate; anything that can hand over a status
//! code and a body can be mapped.

use serde_json::Value;

use crate::error::{FacebookError, JsonError};
use crate::json::{parse_object, JsonObject};

pub trait HttpResponse {
    fn status_code(&self) -> u16;

    fn body_text(&self) -> &str;

    /// Parse the body as a JSON object
    ///
    /// Non-2xx statuses and Graph API error envelopes (`{"error": {...}}`)
    /// fail with [`JsonError::ErrorResponse`] instead of mapping to an empty
    /// value.
    fn as_json_object(&self) -> Result<JsonObject, FacebookError> {
        let status = self.status_code();
        let parsed = parse_object(self.body_text());

        if !(200..300).contains(&status) {
            let message = parsed
                .ok()
                .and_then(|json| error_message(&json))
                .unwrap_or_else(|| "no error message in response body".to_string());
            return Err(JsonError::ErrorResponse { status, message }.into());
        }

        let json = parsed?;
        if let Some(message) = error_message(&json) {
            return Err(JsonError::ErrorResponse { status, message }.into());
        }

        Ok(json)
    }
}

/// Message of a Graph API error envelope, if the body is one
fn error_message(json: &JsonObject) -> Option<String> {
    match json.get("error")? {
        Value::Object(error) => Some(
            error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown error")
                .to_string(),
        ),
        Value::String(message) => Some(message.clone()),
        _ => None,
    }
}

/// A response already held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    status: u16,
    body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A `200 OK` response with the given body
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }
}

impl HttpResponse for RawResponse {
    fn status_code(&self) -> u16 {
        self.status
    }

    fn body_text(&self) -> &str {
        &self.body
    }
}

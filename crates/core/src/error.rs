//! Error types for response mapping
//!
//! Every mapping failure surfaces as a single [`FacebookError`], which wraps the
//! underlying [`JsonError`] and exposes it through `source()`.

/// Underlying failure that aborted a mapping
#[derive(thiserror::Error, Debug)]
pub enum JsonError {
    #[error("{0}")]
    Syntax(#[from] serde_json::Error),

    #[error("JSONObject[\"{key}\"] is not {expected}")]
    TypeMismatch { key: String, expected: &'static str },

    #[error("JSONObject[\"{0}\"] not found")]
    MissingKey(String),

    #[error("Unexpected datetime format for \"{key}\": {value}")]
    InvalidDatetime {
        key: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Response body is not a JSON object")]
    NotAnObject,

    #[error("Graph API returned an error (HTTP {status}): {message}")]
    ErrorResponse { status: u16, message: String },
}

/// Error raised by every mapper in this crate
///
/// Either a fully populated value is returned or this error is raised; there
/// is no partially mapped result. The underlying failure's text is available
/// from [`message`](Self::message) and through `source()`, so `Display` does
/// not repeat it.
#[derive(thiserror::Error, Debug)]
#[error("Failed to map Graph API response")]
pub struct FacebookError {
    message: String,
    #[source]
    cause: JsonError,
}

impl FacebookError {
    /// Message of the underlying JSON failure
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The underlying JSON failure
    pub fn cause(&self) -> &JsonError {
        &self.cause
    }
}

impl From<JsonError> for FacebookError {
    fn from(cause: JsonError) -> Self {
        Self {
            message: cause.to_string(),
            cause,
        }
    }
}

impl From<serde_json::Error> for FacebookError {
    fn from(err: serde_json::Error) -> Self {
        JsonError::from(err).into()
    }
}

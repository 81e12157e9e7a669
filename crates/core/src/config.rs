//! Mapping configuration
//!
//! Plain data built by the caller. The CLI fills it from flags and
//! environment variables.

/// Settings consulted by the response mappers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Configuration {
    json_store_enabled: bool,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable recording raw JSON in the caller's `JsonStore`
    pub fn with_json_store(mut self, enabled: bool) -> Self {
        self.json_store_enabled = enabled;
        self
    }

    pub fn is_json_store_enabled(&self) -> bool {
        self.json_store_enabled
    }
}

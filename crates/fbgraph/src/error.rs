#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to read response from {source_name}: {message}")]
    Input {
        source_name: String,
        message: String,
    },

    #[error("Raw JSON requested but the JSON store is disabled (pass --json-store)")]
    JsonStoreDisabled,

    #[error(transparent)]
    Mapping(#[from] fbgraph_core::FacebookError),
}

use thiserror::Error;

/// Errors surfaced by tools and the registry.
///
/// Tools never recover from these locally; they are returned to whoever
/// dispatched the call.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("API key for {service} is not configured")]
    MissingApiKey { service: &'static str },

    #[error("missing required argument '{0}'")]
    MissingArgument(&'static str),

    #[error("argument '{name}' must be an integer, got {value}")]
    InvalidArgument { name: &'static str, value: String },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),

    #[error("index {index} is out of range for a list of {len} items")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("item {index} has no '{field}' field")]
    MissingField { index: i64, field: &'static str },

    #[error("tool '{0}' not found")]
    NotFound(String),
}

//! SuperVia client error types.

/// Errors from the SuperVia HTTP endpoints.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP request failed (connection refused, DNS, body read, ...).
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("status: {status}\nbody: {body}")]
    BadStatus { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },
}

impl ApiError {
    /// Build a [`ApiError::Json`] keeping a bounded excerpt of the body.
    pub(crate) fn json(err: &serde_json::Error, body: &str) -> Self {
        ApiError::Json {
            message: err.to_string(),
            body: Some(body.chars().take(500).collect()),
        }
    }
}

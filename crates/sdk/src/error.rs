//! Error types for the Signaturit SDK.

/// Result type for SDK operations.
pub type SignaturitResult<T> = Result<T, SignaturitError>;

/// Longest body excerpt carried by a decoding error.
const EXCERPT_LEN: usize = 200;

/// Error types that can occur when calling the Signaturit API.
#[derive(Debug, thiserror::Error)]
pub enum SignaturitError {
    /// Network failure before a response arrived (DNS, connect, TLS, ...).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encoding(#[source] serde_json::Error),

    /// The API answered with a status outside the accepted set.
    #[error("unexpected status code: {status}, body: {body}")]
    Upstream { status: u16, body: String },

    /// The API answered with an accepted status but an unexpected body.
    #[error("failed to parse response: {message} (body: {excerpt})")]
    Decoding { message: String, excerpt: String },

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl SignaturitError {
    /// Build a decoding error, keeping a bounded excerpt of the body.
    pub fn decoding(error: &serde_json::Error, body: &str) -> Self {
        Self::Decoding {
            message: error.to_string(),
            excerpt: excerpt(body),
        }
    }

    /// Status code of an upstream error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn excerpt(body: &str) -> String {
    match body.char_indices().nth(EXCERPT_LEN) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

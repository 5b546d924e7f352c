// Errors produced while running a tool

use signaturit_sdk::SignaturitError;

/// Why an argument was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentReason {
    /// Required argument absent (or null)
    Missing,
    /// Present but of the wrong JSON type
    WrongType,
    /// A JSON-encoded string that does not parse
    InvalidJson,
    /// Right type, but not one of the accepted values or shapes
    InvalidValue,
    /// A list that is empty once blank entries are dropped
    Empty,
}

impl ArgumentReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::WrongType => "wrong_type",
            Self::InvalidJson => "invalid_json",
            Self::InvalidValue => "invalid_value",
            Self::Empty => "empty",
        }
    }
}

impl std::fmt::Display for ArgumentReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tool argument failed validation. Raised before any network call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid argument `{field}`: {reason}")]
pub struct ArgumentError {
    pub field: String,
    pub reason: ArgumentReason,
}

impl ArgumentError {
    pub fn new(field: impl Into<String>, reason: ArgumentReason) -> Self {
        Self {
            field: field.into(),
            reason,
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        Self::new(field, ArgumentReason::Missing)
    }

    pub fn wrong_type(field: impl Into<String>) -> Self {
        Self::new(field, ArgumentReason::WrongType)
    }
}

/// Failure of a single tool invocation
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error(transparent)]
    Api(#[from] SignaturitError),
}

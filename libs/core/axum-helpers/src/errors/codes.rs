//! Error codes attached to every logged error.
//!
//! Response bodies stay plain text; the codes exist for log search and
//! dashboards.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! assert_eq!(ErrorCode::Conflict.as_str(), "CONFLICT");
//! assert_eq!(ErrorCode::Conflict.code(), 1008);
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// A required field is missing or has an invalid value
    InvalidInput,

    /// Request body is not valid JSON for the endpoint
    InvalidJson,

    /// Query string could not be decoded
    InvalidQuery,

    /// Referenced document does not exist
    NotFound,

    /// Unique name already taken
    Conflict,

    /// Endpoint called with the wrong HTTP verb
    MethodNotAllowed,

    // Server errors
    /// Unexpected failure, usually from the document store
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::InvalidJson => "INVALID_JSON",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::NotFound => "NOT_FOUND",
            Self::Conflict => "CONFLICT",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Integer code for structured logs.
    ///
    /// - 1000-1999: client errors
    /// - 1500-1599: server errors
    pub fn code(&self) -> i32 {
        match self {
            Self::InvalidInput => 1001,
            Self::InvalidJson => 1003,
            Self::NotFound => 1004,
            Self::Conflict => 1008,
            Self::InvalidQuery => 1010,
            Self::MethodNotAllowed => 1012,
            Self::InternalError => 1500,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

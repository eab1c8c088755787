//! Error types for lakeFS API operations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during lakeFS API operations.
#[derive(Debug, Error)]
pub enum LakeError {
    /// A required argument was empty or out of range. No request was sent.
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// Configuration is missing or incomplete.
    #[error("lakeFS configuration required: {0}")]
    ConfigMissing(String),

    /// The server rejected the credentials (401).
    #[error("Unauthorized: {message}")]
    Unauthorized {
        message: String,
        code: Option<String>,
    },

    /// The credentials lack permission for the operation (403).
    #[error("Forbidden: {message}")]
    Forbidden {
        message: String,
        code: Option<String>,
    },

    /// The repository, run or hook run does not exist (404).
    #[error("Not found: {message}")]
    NotFound {
        message: String,
        code: Option<String>,
    },

    /// Rate limited (429).
    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    /// The server failed to handle the request (5xx).
    #[error("lakeFS server error ({status}): {message}")]
    ServerError {
        status: u16,
        message: String,
        code: Option<String>,
    },

    /// Any other non-success response.
    #[error("lakeFS API error ({status}): {message}")]
    ApiError {
        status: u16,
        message: String,
        code: Option<String>,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// Local I/O error while writing streamed output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LakeError {
    /// Build the error for a non-success HTTP status and its decoded body.
    pub(crate) fn from_status(status: u16, body: ApiErrorBody) -> Self {
        let ApiErrorBody { message, code } = body;
        match status {
            401 => Self::Unauthorized { message, code },
            403 => Self::Forbidden { message, code },
            404 => Self::NotFound { message, code },
            500..=599 => Self::ServerError {
                status,
                message,
                code,
            },
            _ => Self::ApiError {
                status,
                message,
                code,
            },
        }
    }

    /// Shorthand for an [`LakeError::InvalidArgument`].
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// The HTTP status code behind this error, if it came from a response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Forbidden { .. } => Some(403),
            Self::NotFound { .. } => Some(404),
            Self::RateLimited { .. } => Some(429),
            Self::ServerError { status, .. } | Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The server-provided message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { message, .. }
            | Self::Forbidden { message, .. }
            | Self::NotFound { message, .. }
            | Self::ServerError { message, .. }
            | Self::ApiError { message, .. } => Some(message),
            _ => None,
        }
    }

    /// The machine readable error code from the response body, if any.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { code, .. }
            | Self::Forbidden { code, .. }
            | Self::NotFound { code, .. }
            | Self::ServerError { code, .. }
            | Self::ApiError { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// Returns true for 404 responses.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true for network, decoding and local I/O failures.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::HttpError(_) | Self::ParseError(_) | Self::Io(_)
        )
    }
}

/// Structured error payload returned by lakeFS on non-2xx responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Human readable description.
    pub message: String,

    /// Optional machine readable code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ApiErrorBody {
    /// A body carrying only a message.
    pub(crate) fn from_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }
}

/// Result type alias for lakeFS operations.
pub type Result<T> = core::result::Result<T, LakeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            LakeError::from_status(401, ApiErrorBody::from_message("x")),
            LakeError::Unauthorized { .. }
        ));
        assert!(matches!(
            LakeError::from_status(403, ApiErrorBody::from_message("x")),
            LakeError::Forbidden { .. }
        ));
        assert!(LakeError::from_status(404, ApiErrorBody::from_message("x")).is_not_found());
        assert!(matches!(
            LakeError::from_status(503, ApiErrorBody::from_message("down")),
            LakeError::ServerError { status: 503, .. }
        ));
        assert!(matches!(
            LakeError::from_status(409, ApiErrorBody::from_message("conflict")),
            LakeError::ApiError { status: 409, .. }
        ));
    }

    #[test]
    fn test_status_code_and_message() {
        let err = LakeError::from_status(500, ApiErrorBody::from_message("boom"));
        assert_eq!(err.status_code(), Some(500));
        assert_eq!(err.message(), Some("boom"));

        let err = LakeError::invalid("repository", "must not be empty");
        assert_eq!(err.status_code(), None);
        assert_eq!(err.message(), None);
        assert!(!err.is_transport());
        assert_eq!(
            err.to_string(),
            "Invalid argument 'repository': must not be empty"
        );
    }

    #[test]
    fn test_code_is_kept_from_body() {
        let err = LakeError::from_status(
            404,
            ApiErrorBody {
                message: "run not found".into(),
                code: Some("run_not_found".into()),
            },
        );
        assert!(err.is_not_found());
        assert_eq!(err.message(), Some("run not found"));
        assert_eq!(err.code(), Some("run_not_found"));

        let err = LakeError::from_status(409, ApiErrorBody::from_message("conflict"));
        assert_eq!(err.code(), None);
        assert_eq!(LakeError::invalid("amount", "too large").code(), None);
    }

    #[test]
    fn test_error_body_code_is_optional() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"message":"not found"}"#).unwrap();
        assert_eq!(body.message, "not found");
        assert!(body.code.is_none());
    }
}

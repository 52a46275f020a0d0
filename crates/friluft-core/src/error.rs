//! Error taxonomy shared by the remote data providers.

use thiserror::Error;

/// Failure raised by a remote data source call.
///
/// Every provider maps HTTP statuses the same way: 401 and 403 become
/// credential failures, 404 a missing resource, 400 a malformed query,
/// 5xx a server-side failure, and any other non-success status falls
/// through to [`ApiError::Status`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or invalid credential (HTTP 401)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Credential valid but resource forbidden (HTTP 403)
    #[error("Access forbidden: {0}")]
    Authorization(String),

    /// Unknown endpoint or resource id (HTTP 404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Malformed query, e.g. an invalid coordinate or region id (HTTP 400)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Server-side failure (HTTP 5xx)
    #[error("Server error: {0}")]
    Server(String),

    /// Any other non-success response
    #[error("Unexpected status {status}: {message}")]
    Status { status: u16, message: String },

    /// Transport-level failure (DNS, TLS, timeout, connection reset)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body did not match the expected shape
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Map a non-success HTTP status to the shared taxonomy.
    pub fn from_status(status: reqwest::StatusCode, message: impl Into<String>) -> Self {
        let message = message.into();
        match status.as_u16() {
            401 => Self::Authentication(message),
            403 => Self::Authorization(message),
            404 => Self::NotFound(message),
            400 => Self::BadRequest(message),
            500..=599 => Self::Server(message),
            code => Self::Status {
                status: code,
                message,
            },
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Authentication(_) => "Authentication with the service failed.",
            Self::Authorization(_) => "Access to the service was denied.",
            Self::NotFound(_) => "The requested data was not found.",
            Self::BadRequest(_) => "The request was rejected as malformed.",
            Self::Server(_) => "The service reported an internal error. Try again later.",
            Self::Status { .. } => "The service returned an unexpected response.",
            Self::Network(_) => "Network error. Check your internet connection.",
            Self::Decode(_) => "The service response could not be understood.",
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            ApiError::from_status(StatusCode::UNAUTHORIZED, "x"),
            ApiError::Authentication(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::FORBIDDEN, "x"),
            ApiError::Authorization(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::NOT_FOUND, "x"),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::BAD_REQUEST, "x"),
            ApiError::BadRequest(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "x"),
            ApiError::Server(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::BAD_GATEWAY, "x"),
            ApiError::Server(_)
        ));
    }

    #[test]
    fn test_unlisted_status_falls_through() {
        let err = ApiError::from_status(StatusCode::IM_A_TEAPOT, "teapot");
        match err {
            ApiError::Status { status, message } => {
                assert_eq!(status, 418);
                assert_eq!(message, "teapot");
            }
            other => panic!("expected Status, got {:?}", other),
        }
    }

    #[test]
    fn test_display_includes_message() {
        let err = ApiError::NotFound("no such region".to_string());
        assert!(err.to_string().contains("no such region"));
    }

    #[test]
    fn test_user_messages_are_nonempty() {
        let errors = [
            ApiError::Authentication("a".into()),
            ApiError::Authorization("b".into()),
            ApiError::NotFound("c".into()),
            ApiError::BadRequest("d".into()),
            ApiError::Server("e".into()),
            ApiError::Status {
                status: 418,
                message: "f".into(),
            },
            ApiError::Decode("g".into()),
        ];
        for err in errors {
            assert!(!err.user_message().is_empty());
        }
    }
}

/// Error handling for the stock price service
///
/// Subsystems carry their own error enums (`QuoteError`, `StoreError`);
/// everything that can reach the HTTP boundary is folded into `ServiceError`,
/// which knows its status code and the opaque message shown to callers.
use crate::likes::StoreError;
use thiserror::Error;

/// Message returned for rejected request shapes
pub const INVALID_REQUEST_MESSAGE: &str = "Invalid request";

/// Message returned for every unexpected internal failure
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Invalid request: {reason}")] InvalidRequest {
        reason: String,
    },

    #[error("Store error: {0}")] Store(#[from] StoreError),

    #[error("Internal error: {0}")] Internal(String),
}

impl ServiceError {
    /// Create an invalid request error
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        ServiceError::InvalidRequest {
            reason: reason.into(),
        }
    }

    /// Create an internal error
    pub fn internal_error(message: impl Into<String>) -> Self {
        ServiceError::Internal(message.into())
    }

    /// True for errors caused by the caller rather than the service
    pub fn is_client_error(&self) -> bool {
        matches!(self, ServiceError::InvalidRequest { .. })
    }

    /// HTTP status code for this error (400 for client errors, 500 otherwise)
    pub fn status_code(&self) -> u16 {
        if self.is_client_error() {
            400
        } else {
            500
        }
    }

    /// Message safe to return to callers; never contains internal detail
    pub fn public_message(&self) -> &'static str {
        if self.is_client_error() {
            INVALID_REQUEST_MESSAGE
        } else {
            SERVER_ERROR_MESSAGE
        }
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_classification() {
        let err = ServiceError::invalid_request("3 symbols requested");
        assert!(err.is_client_error());
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.public_message(), "Invalid request");
    }

    #[test]
    fn test_internal_errors_are_opaque() {
        let err = ServiceError::from(StoreError::Database("disk I/O error at /var/lib".to_string()));
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.public_message(), "Server error");
        assert!(err.to_string().contains("disk I/O"));
        assert!(!err.public_message().contains("disk"));
    }
}

/// Response helpers shared by route handlers
use crate::errors::{ServiceError, SERVER_ERROR_MESSAGE};
use crate::logger::{self, LogTag};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use std::any::Any;

/// Error body, `{"error": "..."}`
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// 200 with a JSON body
pub fn success_response<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

/// JSON error body with the given status
pub fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// Map a pipeline error to its response, logging the detail that callers never see
pub fn service_error_response(err: &ServiceError) -> Response {
    if err.is_client_error() {
        logger::debug(LogTag::Webserver, &format!("Rejected request: {}", err));
    } else {
        logger::error(LogTag::Webserver, &format!("Request failed: {}", err));
    }

    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    error_response(status, err.public_message())
}

/// Response used when a handler panics
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    logger::error(LogTag::Webserver, &format!("Handler panicked: {}", detail));
    error_response(StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE)
}

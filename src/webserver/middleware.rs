/// Webserver middleware
///
/// Request logging for every route, gated by `--debug-webserver`.
use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

use crate::{
    arguments::is_debug_webserver_enabled,
    logger::{self, LogTag},
};

/// Log method, path, status, and latency of each request
pub async fn log_requests(request: Request, next: Next) -> Response {
    if !is_debug_webserver_enabled() {
        return next.run(request).await;
    }

    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    logger::debug(
        LogTag::Webserver,
        &format!(
            "{} {} -> {} ({} ms)",
            method,
            path,
            response.status().as_u16(),
            started.elapsed().as_millis()
        ),
    );
    response
}

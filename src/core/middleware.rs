//! HTTP middleware for request tracking and debug body logging.

use crate::api::AppState;
use crate::core::logging::{generate_request_id, REQUEST_ID};
use axum::{
    body::Body,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Instant;

/// Middleware that assigns each request a unique ID.
///
/// The ID is held in task-local storage for the duration of the request so
/// handler logs can include it, and is echoed back in an `x-request-id`
/// response header.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = generate_request_id();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let mut response = REQUEST_ID
        .scope(request_id.clone(), next.run(request))
        .await;

    let duration = start.elapsed().as_secs_f64();
    let status = response.status().as_u16();

    tracing::debug!(
        request_id = %request_id,
        "{} {} - status={} duration={:.3}s",
        method,
        path,
        status,
        duration
    );

    if let Ok(value) = request_id.parse() {
        response.headers_mut().insert("x-request-id", value);
    }

    response
}

/// Middleware that logs the full request body when debug logging is enabled.
///
/// The body is buffered, logged, and replayed into the handler unchanged.
/// With debug off, requests pass through untouched.
pub async fn log_request_body(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    if !state.config.debug {
        return next.run(request).await;
    }

    let (parts, body) = request.into_parts();
    match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => {
            tracing::debug!(
                request_id = %crate::core::logging::get_request_id(),
                "HTTP REQUEST BODY: {}",
                String::from_utf8_lossy(&bytes)
            );
            let request = Request::from_parts(parts, Body::from(bytes));
            next.run(request).await
        }
        Err(e) => {
            tracing::error!("Failed to buffer request body: {}", e);
            StatusCode::BAD_REQUEST.into_response()
        }
    }
}

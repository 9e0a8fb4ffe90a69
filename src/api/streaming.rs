//! Server-Sent Events (SSE) passthrough for chat completions.
//!
//! The gateway decides the response status, so the downstream response is
//! only assembled once the upstream status line has arrived; the body is
//! then relayed chunk by chunk without buffering or reordering. Chunks are
//! opaque bytes here, never parsed.

use axum::body::Body;
use axum::http::StatusCode;
use axum::response::Response as AxumResponse;
use bytes::Bytes;
use futures::stream::StreamExt;
use reqwest::Response;

/// Relay an upstream event stream downstream, preserving the status code.
///
/// Chunks pass through unmodified, in arrival order. A mid-stream upstream
/// error is logged and terminates the downstream body; bytes already sent
/// stand.
pub fn relay_event_stream(response: Response) -> AxumResponse {
    let status = response.status();

    let byte_stream = response
        .bytes_stream()
        .filter_map(|chunk_result| async move {
            match chunk_result {
                Ok(bytes) => Some(Ok::<Bytes, std::io::Error>(bytes)),
                Err(e) => {
                    tracing::error!("Stream error: {}", e);
                    None
                }
            }
        });

    let body = Body::from_stream(byte_stream);

    AxumResponse::builder()
        .status(StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY))
        .header("Content-Type", "text/event-stream")
        .header("Cache-Control", "no-cache")
        .header("Connection", "keep-alive")
        .body(body)
        .unwrap()
}

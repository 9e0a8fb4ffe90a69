//! HTTP request handlers for the gateway proxy.
//!
//! Three endpoints: a liveness acknowledgement, model listing, and streaming
//! chat completions. The latter two forward to the configured gateway with
//! the bearer token attached; responses come back to the caller with the
//! gateway's status preserved.

use crate::api::streaming::relay_event_stream;
use crate::core::config::ProxyConfig;
use crate::core::logging::get_request_id;
use crate::core::{ProxyError, Result};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

/// Upstream timeout for chat completions. Model generation can be slow, so
/// this is much longer than the client's default.
pub const CHAT_COMPLETION_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ProxyConfig,
    pub http_client: reqwest::Client,
}

/// Liveness probe. Answers without calling the gateway.
pub async fn root() -> Json<&'static str> {
    Json("ok")
}

/// List the models available behind the gateway.
///
/// Forwards `GET {gateway}/api/models` with the bearer token. A non-200
/// upstream status is surfaced to the caller unchanged, with an error
/// envelope carrying the upstream body text.
#[tracing::instrument(skip(state))]
pub async fn list_models(State(state): State<Arc<AppState>>) -> Result<Response> {
    let url = format!("{}/api/models", state.config.gateway_url);

    let response = state
        .http_client
        .get(&url)
        .header(
            "Authorization",
            format!("Bearer {}", state.config.gateway_api_key),
        )
        .send()
        .await
        .map_err(|e| {
            tracing::error!(
                request_id = %get_request_id(),
                url = %url,
                error = %e,
                error_source = ?e.source(),
                is_timeout = e.is_timeout(),
                is_connect = e.is_connect(),
                "Model listing request failed"
            );
            ProxyError::from(e)
        })?;

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        // Body read failures on this path degrade to an empty error text
        // rather than masking the upstream status.
        let error_text = response.text().await.unwrap_or_default();
        tracing::warn!(
            request_id = %get_request_id(),
            status = status.as_u16(),
            "Gateway rejected model listing"
        );
        return Ok((
            StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY),
            Json(json!({ "data": [], "error": error_text })),
        )
            .into_response());
    }

    let models: Value = response.json().await?;
    Ok(Json(models).into_response())
}

/// Forward a chat completion to the gateway and stream the answer back.
///
/// The caller's JSON payload is passed through untouched. The downstream
/// status line is not sent until the gateway's status line has arrived;
/// body chunks are then relayed in arrival order until the gateway closes
/// the stream.
#[tracing::instrument(skip(state, payload))]
pub async fn chat_completions(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> Result<Response> {
    let url = format!("{}/llm/chat/completions", state.config.gateway_url);

    let response = state
        .http_client
        .post(&url)
        .header(
            "Authorization",
            format!("Bearer {}", state.config.gateway_api_key),
        )
        .header("Accept", "text/event-stream")
        .header("Accept-Encoding", "gzip")
        .json(&payload)
        .timeout(CHAT_COMPLETION_TIMEOUT)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(
                request_id = %get_request_id(),
                url = %url,
                error = %e,
                error_source = ?e.source(),
                is_timeout = e.is_timeout(),
                is_connect = e.is_connect(),
                "Chat completion request failed"
            );
            ProxyError::from(e)
        })?;

    tracing::debug!(
        request_id = %get_request_id(),
        status = response.status().as_u16(),
        "Gateway opened completion stream"
    );

    Ok(relay_event_stream(response))
}

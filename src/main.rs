//! Gateway Proxy Server - Main entry point
//!
//! This binary creates and runs the HTTP server with all configured routes
//! and middleware. Configuration is loaded from the environment at startup;
//! the serve loop races the credential lifetime guard and the operator's
//! interrupt signal for shutdown.

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use chrono::Local;
use gateway_proxy::{
    api::{chat_completions, list_models, root, AppState},
    core::{log_request_body, request_id_middleware, shutdown_signal, LifetimeGuard, ProxyConfig},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Custom time formatter that uses local timezone (respects TZ environment variable)
struct LocalTime;

impl tracing_subscriber::fmt::time::FormatTime for LocalTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        let now = Local::now();
        write!(w, "{}", now.format("%Y-%m-%d %H:%M:%S"))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before reading any environment variables)
    dotenvy::dotenv().ok();

    let config = ProxyConfig::from_env()?;

    init_logging(config.debug);

    let port = config.port;
    let gateway_url = config.gateway_url.clone();
    let guard = LifetimeGuard::new(config.credential_expiration);

    let http_client = create_http_client();
    let state = Arc::new(AppState {
        config,
        http_client,
    });
    let app = build_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    tracing::info!("Starting gateway proxy on {}", addr);
    tracing::info!("Forwarding to gateway at {}", gateway_url);
    match guard.expires_at() {
        Some(instant) => tracing::info!("Gateway credential expires at {}", instant),
        None => tracing::debug!("No credential expiration configured"),
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(guard))
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Initialize logging with local timezone timestamps.
///
/// The base filter comes from `RUST_LOG` when set, otherwise from the debug
/// flag. Noisy HTTP library targets are always suppressed regardless of the
/// base filter, because a blanket "debug" would let their chunk-level trace
/// logs through.
fn init_logging(debug: bool) {
    // Check if NO_COLOR environment variable is set (for file logging without ANSI codes)
    let no_color = std::env::var("NO_COLOR").is_ok();

    let default_filter = if debug { "debug" } else { "info" };
    let base_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.to_string());

    let filter_str = format!("{},hyper=warn,h2=warn,reqwest=warn", base_filter);
    let filter = tracing_subscriber::EnvFilter::new(filter_str);

    if no_color {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_timer(LocalTime)
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_timer(LocalTime))
            .init();
    }
}

/// Build router with all endpoints
fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root).post(root))
        .route("/v1/models", get(list_models))
        .route("/v1/chat/completions", post(chat_completions))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            log_request_body,
        ))
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Create the shared outbound HTTP client with connection pooling.
///
/// The default timeout covers the model-listing call; chat completions
/// override it per request with a much longer one.
fn create_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(300))
        .pool_max_idle_per_host(100)
        .pool_idle_timeout(std::time::Duration::from_secs(90))
        .tcp_keepalive(std::time::Duration::from_secs(60))
        .build()
        .expect("Failed to build HTTP client")
}

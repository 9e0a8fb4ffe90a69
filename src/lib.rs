//! Gateway Proxy - a thin reverse proxy in front of an LLM gateway
//!
//! This library provides a small proxy server that forwards model listings
//! and chat completions to a configured gateway, injecting a bearer token,
//! and relays streamed Server-Sent Events back to the caller unmodified.
//! An optional lifetime guard shuts the process down once the gateway
//! credential expires.
//!
//! # Architecture
//!
//! The codebase is organized into two layers:
//!
//! - [`core`]: configuration, errors, logging context, middleware, and the
//!   credential lifetime guard
//! - [`api`]: HTTP handlers and the streaming passthrough
//!
//! # Configuration
//!
//! All configuration comes from environment variables:
//! - `GPTSCRIPT_GATEWAY_URL`: upstream base URL (default: http://localhost:8080)
//! - `GPTSCRIPT_GATEWAY_API_KEY`: bearer token attached to upstream calls
//! - `GPTSCRIPT_DEBUG`: enables debug log level and request-body logging
//! - `GPTSCRIPT_CREDENTIAL_EXPIRATION`: RFC 3339 instant after which the
//!   process shuts itself down; empty or absent disables the guard
//! - `PORT`: listen port (default: 8000)

pub mod api;
pub mod core;

// Re-export commonly used types for convenience
pub use api::{chat_completions, list_models, root, AppState};
pub use core::{shutdown_signal, LifetimeGuard, ProxyConfig, ProxyError, Result};

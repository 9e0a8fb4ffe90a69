//! Core functionality: configuration, error handling, logging context,
//! middleware, and the credential lifetime guard.

pub mod config;
pub mod error;
pub mod lifetime;
pub mod logging;
pub mod middleware;

pub use config::ProxyConfig;
pub use error::{ProxyError, Result};
pub use lifetime::{shutdown_signal, LifetimeGuard};
pub use middleware::{log_request_body, request_id_middleware};

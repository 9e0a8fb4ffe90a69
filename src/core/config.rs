//! Configuration management for the gateway proxy.
//!
//! All settings come from the process environment, read once at startup into
//! an immutable [`ProxyConfig`] that is passed into the components that need
//! it.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Enables debug log level and request-body logging
    pub debug: bool,

    /// Base URL of the upstream gateway
    pub gateway_url: String,

    /// Bearer token attached to every upstream call
    pub gateway_api_key: String,

    /// Port to listen on
    pub port: u16,

    /// Instant at which the gateway credential expires; `None` means never
    pub credential_expiration: Option<DateTime<Utc>>,
}

fn default_gateway_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_port() -> u16 {
    8000
}

impl ProxyConfig {
    /// Load configuration from environment variables.
    ///
    /// Recognized variables:
    /// - `GPTSCRIPT_DEBUG`: enable verbose logging (default: false)
    /// - `GPTSCRIPT_GATEWAY_URL`: upstream base URL (default: http://localhost:8080)
    /// - `GPTSCRIPT_GATEWAY_API_KEY`: bearer token for upstream calls (default: empty)
    /// - `PORT`: listen port (default: 8000)
    /// - `GPTSCRIPT_CREDENTIAL_EXPIRATION`: RFC 3339 instant after which the
    ///   process shuts itself down; empty or absent disables the lifetime guard
    ///
    /// A `PORT` or `GPTSCRIPT_CREDENTIAL_EXPIRATION` value that is present but
    /// unparsable is a startup error.
    pub fn from_env() -> Result<Self> {
        let debug = std::env::var("GPTSCRIPT_DEBUG")
            .map(|v| str_to_bool(&v))
            .unwrap_or(false);

        let gateway_url = std::env::var("GPTSCRIPT_GATEWAY_URL")
            .unwrap_or_else(|_| default_gateway_url())
            .trim_end_matches('/')
            .to_string();

        let gateway_api_key = std::env::var("GPTSCRIPT_GATEWAY_API_KEY").unwrap_or_default();

        let port = match std::env::var("PORT") {
            Ok(s) if !s.trim().is_empty() => s
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT value: {}", s))?,
            _ => default_port(),
        };

        let credential_expiration = match std::env::var("GPTSCRIPT_CREDENTIAL_EXPIRATION") {
            Ok(s) if !s.trim().is_empty() => Some(
                DateTime::parse_from_rfc3339(s.trim())
                    .map(|dt| dt.with_timezone(&Utc))
                    .with_context(|| {
                        format!("Invalid GPTSCRIPT_CREDENTIAL_EXPIRATION value: {}", s)
                    })?,
            ),
            _ => None,
        };

        Ok(Self {
            debug,
            gateway_url,
            gateway_api_key,
            port,
            credential_expiration,
        })
    }
}

/// Convert string to boolean.
///
/// Accepts: "true", "1", "yes", "on" (case-insensitive)
fn str_to_bool(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "yes" | "on")
}

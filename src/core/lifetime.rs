//! Process lifetime control tied to credential expiration.
//!
//! The gateway credential this proxy forwards may carry an expiration
//! instant. [`LifetimeGuard`] sleeps until that instant arrives and then
//! asks the server to shut down, racing the operator's interrupt signal.

use chrono::{DateTime, Utc};
use std::time::Duration;

/// Background timer bounding process lifetime to a credential's validity.
///
/// A guard without an expiration instant is a no-op: [`expired`](Self::expired)
/// never resolves and the server runs until interrupted.
#[derive(Debug, Clone)]
pub struct LifetimeGuard {
    expires_at: Option<DateTime<Utc>>,
}

impl LifetimeGuard {
    pub fn new(expires_at: Option<DateTime<Utc>>) -> Self {
        Self { expires_at }
    }

    /// The configured expiration instant, if any.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Time left until expiration, clamped to zero when the instant has
    /// already passed. `None` when no expiration is configured.
    pub fn remaining(&self) -> Option<Duration> {
        self.expires_at
            .map(|instant| (instant - Utc::now()).to_std().unwrap_or(Duration::ZERO))
    }

    /// Resolve once the credential has expired.
    ///
    /// Never resolves when no expiration is configured.
    pub async fn expired(&self) {
        match self.remaining() {
            Some(remaining) => tokio::time::sleep(remaining).await,
            None => std::future::pending().await,
        }
    }
}

/// Resolve when the server should stop: operator interrupt or credential
/// expiration, whichever comes first.
///
/// Intended for `axum::serve(..).with_graceful_shutdown(..)`: once this
/// future resolves the server stops accepting connections; in-flight
/// streams may be abandoned.
pub async fn shutdown_signal(guard: LifetimeGuard) {
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::error!("Failed to listen for interrupt signal: {}", e);
            }
            tracing::info!("Received interrupt, shutting down");
        }
        _ = guard.expired() => {
            if let Some(instant) = guard.expires_at() {
                tracing::info!(expires_at = %instant, "Gateway credential expired, shutting down");
            }
        }
    }
}

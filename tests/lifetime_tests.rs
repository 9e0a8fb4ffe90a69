//! Timing tests for the credential lifetime guard.

use chrono::{Duration as ChronoDuration, Utc};
use gateway_proxy::{shutdown_signal, LifetimeGuard};
use std::time::Duration;

#[tokio::test]
async fn test_past_expiration_fires_immediately() {
    let guard = LifetimeGuard::new(Some(Utc::now() - ChronoDuration::hours(1)));

    tokio::time::timeout(Duration::from_secs(1), guard.expired())
        .await
        .expect("guard should fire at once for an already-expired credential");
}

#[tokio::test]
async fn test_unconfigured_guard_never_fires() {
    let guard = LifetimeGuard::new(None);

    let result = tokio::time::timeout(Duration::from_millis(50), guard.expired()).await;
    assert!(result.is_err(), "guard without expiration must stay pending");
}

#[tokio::test(start_paused = true)]
async fn test_guard_fires_after_remaining_duration() {
    let guard = LifetimeGuard::new(Some(Utc::now() + ChronoDuration::seconds(300)));

    // Paused clock: the sleep auto-advances, so this returns without
    // actually waiting five minutes
    tokio::time::timeout(Duration::from_secs(600), guard.expired())
        .await
        .expect("guard should fire once the remaining duration elapses");
}

#[tokio::test]
async fn test_shutdown_signal_resolves_on_expiration() {
    let guard = LifetimeGuard::new(Some(Utc::now() - ChronoDuration::seconds(1)));

    tokio::time::timeout(Duration::from_secs(2), shutdown_signal(guard))
        .await
        .expect("shutdown signal should resolve for an expired credential");
}

#[test]
fn test_remaining_clamps_to_zero_when_past() {
    let guard = LifetimeGuard::new(Some(Utc::now() - ChronoDuration::seconds(10)));
    assert_eq!(guard.remaining(), Some(Duration::ZERO));
}

#[test]
fn test_remaining_none_when_unconfigured() {
    let guard = LifetimeGuard::new(None);
    assert_eq!(guard.remaining(), None);
    assert_eq!(guard.expires_at(), None);
}

#[test]
fn test_remaining_positive_for_future_instant() {
    let guard = LifetimeGuard::new(Some(Utc::now() + ChronoDuration::minutes(10)));
    let remaining = guard.remaining().unwrap();
    assert!(remaining > Duration::from_secs(9 * 60));
    assert!(remaining <= Duration::from_secs(10 * 60));
}

//! Logging utilities with request context support.
//!
//! This module provides context-aware logging that can include a unique
//! request ID in logs without passing it through every function call.

tokio::task_local! {
    /// Task-local storage for the current request ID.
    ///
    /// This allows logs to include a unique request ID for tracking all
    /// log lines related to a single request.
    pub static REQUEST_ID: String;
}

/// Get the current request ID from context, if set.
///
/// Returns an empty string if no request ID is set.
pub fn get_request_id() -> String {
    REQUEST_ID.try_with(|id| id.clone()).unwrap_or_default()
}

/// Generate a new unique request ID using UUID v4.
pub fn generate_request_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_id_is_unique() {
        let a = generate_request_id();
        let b = generate_request_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
    }

    #[test]
    fn test_get_request_id_outside_scope() {
        assert_eq!(get_request_id(), "");
    }

    #[tokio::test]
    async fn test_get_request_id_inside_scope() {
        let id = generate_request_id();
        REQUEST_ID
            .scope(id.clone(), async {
                assert_eq!(get_request_id(), id);
            })
            .await;
    }
}

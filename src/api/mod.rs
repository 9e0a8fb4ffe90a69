//! HTTP API layer: request handlers and the SSE relay.

pub mod handlers;
pub mod streaming;

pub use handlers::{chat_completions, list_models, root, AppState, CHAT_COMPLETION_TIMEOUT};
pub use streaming::relay_event_stream;

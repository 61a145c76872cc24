//! Handler modules for the HTTP endpoints.

pub mod health;
pub mod message;
pub mod participant;
pub mod status;

use axum::http::HeaderMap;

pub use health::health_check;
pub use message::{list_messages, post_message};
pub use participant::{list_participants, register_participant};
pub use status::heartbeat;

/// Header carrying the caller's participant name
pub const USER_HEADER: &str = "user";

/// The `user` header, if present and valid UTF-8
fn user_header(headers: &HeaderMap) -> Option<String> {
    headers
        .get(USER_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

//! Chat-room server library.
//!
//! Participants register a display name, post public, broadcast or private
//! messages, and are evicted by a background reaper after a period without
//! heartbeat.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

pub use config::ServerConfig;
pub use ui::run as run_server;

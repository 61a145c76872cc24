//! HTTP server and background tasks.

pub mod error;
mod handler;
pub mod reaper;
mod router;
mod runner;
mod signal;
pub mod state;

pub use router::build_router;
pub use runner::{ServerError, run};
pub use state::AppState;

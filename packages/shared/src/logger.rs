//! Logger bootstrap built on `tracing-subscriber`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when it is set; otherwise every target logs at
/// `default_level`. Calling this twice is harmless: the second call keeps the
/// subscriber that is already installed.
pub fn setup_logger(name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter_directive(default_level)));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(true).with_target(true))
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("Logger initialized for '{}' (default level: {})", name, default_level);
    }
}

fn default_filter_directive(default_level: &str) -> String {
    format!("{default_level},tower_http={default_level}")
}

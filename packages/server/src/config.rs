//! Server configuration from command-line flags and environment variables.

use std::time::Duration;

use clap::Parser;
use thiserror::Error;

/// Configuration errors detected before startup
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("reaper interval must be greater than zero")]
    ZeroReaperInterval,
}

/// Chat-room server configuration
#[derive(Debug, Clone, Parser)]
#[command(name = "parlor-server", version, about = "Chat-room server with inactivity eviction")]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "PARLOR_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Seconds between two presence reaper ticks
    #[arg(long, env = "PARLOR_REAPER_INTERVAL_SECS", default_value_t = 15)]
    pub reaper_interval_secs: u64,

    /// Seconds without heartbeat after which a participant is evicted
    #[arg(long, env = "PARLOR_INACTIVITY_THRESHOLD_SECS", default_value_t = 10)]
    pub inactivity_threshold_secs: u64,

    /// Log level used when RUST_LOG is not set
    #[arg(long, env = "PARLOR_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reaper_interval_secs == 0 {
            return Err(ConfigError::ZeroReaperInterval);
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn reaper_interval(&self) -> Duration {
        Duration::from_secs(self.reaper_interval_secs)
    }

    pub fn inactivity_threshold(&self) -> Duration {
        Duration::from_secs(self.inactivity_threshold_secs)
    }
}

//! Server configuration loaded from environment variables
//!
//! - `DATABASE_URI`: PostgreSQL URL (falls back to `DATABASE_URL`)
//! - `SECRET_KEY`: reserved for session signing
//! - `DEVFORUM_BIND`: bind address (default: 127.0.0.1:5000)
//! - `DEVFORUM_MAX_CONNECTIONS`: pool size (default: 5)

use std::net::SocketAddr;

use crate::db::pool::DEFAULT_MAX_CONNECTIONS;

/// Default bind address
pub const DEFAULT_BIND: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
    5000,
);

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("DATABASE_URI is not set (DATABASE_URL is accepted too)")]
    MissingDatabaseUrl,

    #[error("invalid value for {var}: '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Forum configuration
#[derive(Debug, Clone)]
pub struct ForumConfig {
    pub database_url: String,
    pub secret_key: Option<String>,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
}

impl ForumConfig {
    /// Create config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Create config from any variable source (for testing)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let database_url = non_empty("DATABASE_URI")
            .or_else(|| non_empty("DATABASE_URL"))
            .ok_or(ConfigError::MissingDatabaseUrl)?;

        let bind_addr = match non_empty("DEVFORUM_BIND") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                var: "DEVFORUM_BIND",
                value,
            })?,
            None => DEFAULT_BIND,
        };

        let max_connections = match non_empty("DEVFORUM_MAX_CONNECTIONS") {
            Some(value) => match value.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "DEVFORUM_MAX_CONNECTIONS",
                        value,
                    })
                }
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url,
            secret_key: non_empty("SECRET_KEY"),
            bind_addr,
            max_connections,
        })
    }
}

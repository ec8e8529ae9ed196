//! Configuration management for the Todo Master server.
//!
//! Loads configuration from environment variables with sensible defaults.
//! Unparseable values fall back to the default rather than aborting startup.

use serde::{Deserialize, Serialize};
use std::env;

/// Default tracing filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str =
    "info,todo_master_web=debug,todo_master_core=debug,tower_http=info";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application server configuration
    pub server: ServerConfig,
    /// Storage configuration
    pub storage: StorageConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Tracing filter directives (`RUST_LOG` syntax)
    pub log_filter: String,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Seed the two demo todos at startup
    pub seed_demo: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `HOST` | `0.0.0.0` |
    /// | `PORT` | `3000` |
    /// | `RUST_LOG` | [`DEFAULT_LOG_FILTER`] |
    /// | `TODO_SEED_DEMO` | `true` |
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Used by [`Config::from_env`]; tests pass a map instead of mutating the
    /// process environment.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            server: ServerConfig {
                host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port: lookup("PORT").and_then(|s| s.parse().ok()).unwrap_or(3000),
                log_filter: lookup("RUST_LOG")
                    .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            },
            storage: StorageConfig {
                seed_demo: lookup("TODO_SEED_DEMO")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(true),
            },
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for binding a listener
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

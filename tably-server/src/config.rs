//! Server configuration from the environment

use std::net::SocketAddr;

/// Default maximum connections for the pool.
/// Kept low; every request holds at most one connection at a time.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind to (default: 127.0.0.1:3030)
    pub bind_addr: SocketAddr,

    /// PostgreSQL connection string
    pub database_url: String,

    /// Maximum connections held by the pool
    pub max_connections: u32,

    /// Allow permissive CORS (default: false = localhost only)
    ///
    /// WARNING: Setting this to true allows any origin.
    /// Only use for development.
    pub cors_permissive: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3030)),
            database_url: "postgres://localhost/tably".to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            cors_permissive: false,
        }
    }
}

impl Config {
    /// Load configuration from the environment, falling back to defaults.
    ///
    /// Recognized variables: `DATABASE_URL`, `TABLY_BIND_ADDR`.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("DATABASE_URL") {
            config.database_url = url;
        }

        if let Ok(raw) = std::env::var("TABLY_BIND_ADDR") {
            match raw.parse() {
                Ok(addr) => config.bind_addr = addr,
                Err(_) => {
                    tracing::warn!("ignoring unparseable TABLY_BIND_ADDR '{}'", raw);
                }
            }
        }

        config
    }
}

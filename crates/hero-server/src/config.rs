//! Server configuration
//!
//! Resolved in three layers, later ones winning:
//! - Built-in defaults
//! - Environment (`HOST`, `SERVER_PORT`, `DATABASE_URL`, `HERO_SEED`)
//! - Command-line flags (applied by the binary through the `with_*` builders)

use serde::{Deserialize, Serialize};

/// Default listen port
pub const DEFAULT_PORT: u16 = 2022;

/// Default listen host
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default SQLite database URL
pub const DEFAULT_DATABASE_URL: &str = "sqlite://superheroes.db?mode=rwc";

/// Database value selecting the in-memory store
pub const MEMORY_DATABASE: &str = "memory";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Variable or flag could not be parsed
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue {
        /// Variable or flag name
        key: &'static str,
        /// Rejected value
        value: String,
    },
}

/// Record store selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatabaseConfig {
    /// Process-local store, lost on exit
    Memory,
    /// SQLite database at the given URL
    Sqlite(String),
}

impl DatabaseConfig {
    /// Parse a `DATABASE_URL`-style value
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case(MEMORY_DATABASE) {
            Self::Memory
        } else {
            Self::Sqlite(value.to_string())
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::Sqlite(DEFAULT_DATABASE_URL.to_string())
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// `tracing-subscriber` filter directive, overridden by `RUST_LOG`
    pub filter: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen host
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Record store
    pub database: DatabaseConfig,
    /// Fixed generator seed; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Logging
    pub log: LogConfig,
}

impl ServerConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overlaid with process environment
    ///
    /// # Errors
    /// - `ConfigError::InvalidValue` if `SERVER_PORT` or `HERO_SEED` is not a number
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values from `lookup`
    ///
    /// # Errors
    /// - `ConfigError::InvalidValue` if a numeric variable does not parse
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT") {
            config.port = parse_value("SERVER_PORT", &port)?;
        }
        if let Some(url) = lookup("DATABASE_URL") {
            config.database = DatabaseConfig::parse(&url);
        }
        if let Some(seed) = lookup("HERO_SEED") {
            config.seed = Some(parse_value("HERO_SEED", &seed)?);
        }
        Ok(config)
    }

    /// With listen host
    #[inline]
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// With listen port
    #[inline]
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// With record store
    #[inline]
    #[must_use]
    pub fn with_database(mut self, database: DatabaseConfig) -> Self {
        self.database = database;
        self
    }

    /// With fixed generator seed
    #[inline]
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// With logging configuration
    #[inline]
    #[must_use]
    pub fn with_log(mut self, log: LogConfig) -> Self {
        self.log = log;
        self
    }

    /// Host and port to bind; hostnames are resolved by the listener
    #[inline]
    #[must_use]
    pub fn bind_address(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database: DatabaseConfig::default(),
            seed: None,
            log: LogConfig::default(),
        }
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

//! Service configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                          | Default        |
//! |-----------------------------------|----------------|
//! | `PRODUKT_DATABASE_PATH`           | `./produkt.db` |
//! | `PRODUKT_DB_MAX_CONNECTIONS`      | `5`            |
//! | `PRODUKT_DB_CONNECT_TIMEOUT_SECS` | `30`           |
//! | `PRODUKT_LOG`                     | `info`         |

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use produkt_db::DbConfig;

/// Service configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    /// SQLite database file
    pub database_path: PathBuf,

    /// Pool size upper bound (at least 1)
    pub max_connections: u32,

    /// Connection acquire timeout in seconds
    pub connect_timeout_secs: u64,

    /// tracing filter directive, e.g. `info` or `produkt_db=debug`
    pub log_filter: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            database_path: PathBuf::from("./produkt.db"),
            max_connections: 5,
            connect_timeout_secs: 30,
            log_filter: "info".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServiceConfig::default();

        let config = ServiceConfig {
            database_path: lookup("PRODUKT_DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),

            max_connections: parse_or(
                &lookup,
                "PRODUKT_DB_MAX_CONNECTIONS",
                defaults.max_connections,
            )?,

            connect_timeout_secs: parse_or(
                &lookup,
                "PRODUKT_DB_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout_secs,
            )?,

            log_filter: lookup("PRODUKT_LOG").unwrap_or(defaults.log_filter),
        };

        if config.max_connections == 0 {
            return Err(ConfigError::InvalidValue(
                "PRODUKT_DB_MAX_CONNECTIONS".to_string(),
            ));
        }

        if config.database_path.as_os_str().is_empty() {
            return Err(ConfigError::MissingRequired(
                "PRODUKT_DATABASE_PATH".to_string(),
            ));
        }

        Ok(config)
    }

    /// Database pool settings derived from this configuration.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(self.database_path.clone())
            .max_connections(self.max_connections)
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}

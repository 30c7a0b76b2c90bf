use std::env;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Loads `.env.{RUST_ENV}` first, then falls back to `.env`.
pub fn load_env_files() -> String {
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    env_name
}

fn parse_or<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().map_err(|_| ConfigError::Invalid {
            key,
            value: raw,
        }),
        Err(_) => Ok(default),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
    pub sqlx_logging: bool,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let max_connections = parse_or("DB_MAX_CONNECTIONS", 50u32)?;
        let min_connections = parse_or("DB_MIN_CONNECTIONS", 10u32)?;
        if min_connections > max_connections {
            return Err(ConfigError::Invalid {
                key: "DB_MIN_CONNECTIONS",
                value: min_connections.to_string(),
            });
        }

        Ok(Self {
            url,
            max_connections,
            min_connections,
            connect_timeout: Duration::from_secs(parse_or("DB_CONNECT_TIMEOUT_SECS", 5u64)?),
            idle_timeout: Duration::from_secs(parse_or("DB_IDLE_TIMEOUT_SECS", 300u64)?),
            sqlx_logging: parse_or("DB_SQLX_LOGGING", false)?,
        })
    }

    /// Single-connection in-memory SQLite, used by the test suite.
    pub fn in_memory_sqlite() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            connect_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(300),
            sqlx_logging: false,
        }
    }
}

/// Optional superuser created on start-up when both variables are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapSuperuser {
    pub phone_number: String,
    pub password: String,
}

impl BootstrapSuperuser {
    pub fn from_env() -> Option<Self> {
        let phone_number = env::var("SUPERUSER_PHONE_NUMBER").ok()?;
        let password = env::var("SUPERUSER_PASSWORD").ok()?;

        if phone_number.trim().is_empty() {
            return None;
        }

        Some(Self {
            phone_number,
            password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_sqlite_uses_single_connection() {
        let config = DatabaseConfig::in_memory_sqlite();
        assert_eq!(config.url, "sqlite::memory:");
        assert_eq!(config.max_connections, 1);
        assert_eq!(config.min_connections, 1);
    }

    #[test]
    fn config_error_messages_name_the_key() {
        assert_eq!(
            ConfigError::Missing("DATABASE_URL").to_string(),
            "DATABASE_URL is not set"
        );
        assert_eq!(
            ConfigError::Invalid {
                key: "DB_MAX_CONNECTIONS",
                value: "lots".to_string()
            }
            .to_string(),
            "Invalid DB_MAX_CONNECTIONS value: lots"
        );
    }
}

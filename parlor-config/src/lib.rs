//! Environment-driven configuration for Parlor.
//!
//! A `.env` file is honored when present; process environment always wins.
//! `DATABASE_URL` and `JWT_SECRET` are required up front. Provider API keys
//! are optional by design: a missing key is not a startup error, it surfaces
//! as an upstream authentication failure at call time.

use std::env;
use std::time::Duration;

use tracing::debug;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:9000";

/// Default timeout applied to every upstream metadata/scrape call.
pub const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub providers: ProviderConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
}

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub tmdb_api_key: String,
    pub omdb_api_key: String,
    pub upstream_timeout: Duration,
}

impl Config {
    /// Load configuration from the process environment, honoring `.env`.
    pub fn load() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "loaded .env file"),
            Err(_) => debug!("no .env file found; using process environment"),
        }
        Self::from_env()
    }

    /// Build configuration from the already-populated environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig {
                bind_addr: env::var("BIND_ADDR")
                    .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            },
            database: DatabaseConfig {
                url: required("DATABASE_URL")?,
            },
            auth: AuthConfig {
                jwt_secret: required("JWT_SECRET")?,
            },
            providers: ProviderConfig {
                tmdb_api_key: env::var("TMDB_API_KEY").unwrap_or_default(),
                omdb_api_key: env::var("OMDB_API_KEY").unwrap_or_default(),
                upstream_timeout: DEFAULT_UPSTREAM_TIMEOUT,
            },
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_var_is_reported_by_name() {
        // SAFETY: test process owns its environment.
        unsafe {
            env::remove_var("DATABASE_URL");
            env::set_var("JWT_SECRET", "test-secret");
        }
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("DATABASE_URL")));
    }
}

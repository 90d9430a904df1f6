//! Server configuration read from environment variables.

use crate::logic::DEFAULT_MIN_RATING;
use actix_web::http::header::HeaderValue;
use std::path::PathBuf;

pub const ENV_HOST: &str = "HOST";
pub const ENV_PORT: &str = "PORT";
pub const ENV_CATALOG_PATH: &str = "TEAMS_CATALOG_PATH";
pub const ENV_ALLOW_ORIGIN: &str = "HTTP_HEADER_ACCESS_CONTROL_ALLOW_ORIGIN";
pub const ENV_MIN_RATING: &str = "TEAMS_MIN_RATING";

/// Errors while reading configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// A required variable is not set.
    Missing(&'static str),
    /// A variable is set but cannot be parsed.
    Invalid { var: &'static str, value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Missing(var) => write!(f, "required env var `{}` doesn't exist", var),
            ConfigError::Invalid { var, value } => {
                write!(f, "env var `{}` has invalid value `{}`", var, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Everything the web binary needs to start.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// CSV or JSON file the team catalog is loaded from.
    pub catalog_path: PathBuf,
    /// Value of the `Access-Control-Allow-Origin` response header.
    pub allow_origin: String,
    pub min_rating: f64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_allow_origin() -> String {
    "*".to_string()
}

impl Config {
    /// Read from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|var| std::env::var(var).ok())
    }

    /// Read through `lookup`, which returns the value of a variable if set.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(ENV_HOST).unwrap_or_else(default_host);
        let port = match lookup(ENV_PORT) {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: ENV_PORT, value })?,
            None => default_port(),
        };
        let catalog_path = lookup(ENV_CATALOG_PATH)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .ok_or(ConfigError::Missing(ENV_CATALOG_PATH))?;
        let allow_origin = match lookup(ENV_ALLOW_ORIGIN) {
            Some(value) if HeaderValue::from_str(&value).is_ok() => value,
            Some(value) => return Err(ConfigError::Invalid { var: ENV_ALLOW_ORIGIN, value }),
            None => default_allow_origin(),
        };
        let min_rating = match lookup(ENV_MIN_RATING) {
            Some(value) => match value.trim().parse::<f64>() {
                Ok(r) if r.is_finite() => r,
                _ => return Err(ConfigError::Invalid { var: ENV_MIN_RATING, value }),
            },
            None => DEFAULT_MIN_RATING,
        };

        Ok(Self {
            host,
            port,
            catalog_path,
            allow_origin,
            min_rating,
        })
    }
}

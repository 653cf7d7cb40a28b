//! Configuration management for the contact registry.
//!
//! This module loads configuration from environment variables, reading a
//! `.env` file first if one is present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Deployment environment the process runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Test,
    Prod,
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dev" => Ok(Self::Dev),
            "test" => Ok(Self::Test),
            "prod" => Ok(Self::Prod),
            other => Err(format!("Must be one of dev, test, prod, got: {}", other)),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dev => f.write_str("dev"),
            Self::Test => f.write_str("test"),
            Self::Prod => f.write_str("prod"),
        }
    }
}

/// How a registry built from configuration generates contact ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    /// Random v4 UUIDs
    #[default]
    Uuid,
    /// `contact-1`, `contact-2`, ...
    Sequential,
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uuid" => Ok(Self::Uuid),
            "sequential" => Ok(Self::Sequential),
            other => Err(format!("Must be uuid or sequential, got: {}", other)),
        }
    }
}

/// Configuration for the contact registry.
#[derive(Debug, Clone)]
pub struct Config {
    /// Deployment environment, if declared
    pub environment: Option<Environment>,

    /// Identifier strategy for registries built with `ContactRegistry::from_config`
    pub id_strategy: IdStrategy,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    pub const ENV_VAR: &'static str = "CONTACT_REGISTRY_ENV";
    pub const FALLBACK_ENV_VAR: &'static str = "ENV";
    pub const ID_STRATEGY_VAR: &'static str = "CONTACT_REGISTRY_ID_STRATEGY";
    pub const LOG_LEVEL_VAR: &'static str = "LOG_LEVEL";

    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_REGISTRY_ENV`: `dev`, `test` or `prod`
    /// - `ENV`: consulted only when `CONTACT_REGISTRY_ENV` is unset. Shells
    ///   use it for a startup file path, so unrecognized values are ignored.
    /// - `CONTACT_REGISTRY_ID_STRATEGY`: `uuid` or `sequential` (default: uuid)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set to an
    /// unrecognized value.
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env files are fine
        let _ = dotenvy::dotenv();

        let environment = match Self::read_var(Self::ENV_VAR) {
            Some(value) => Some(Self::parse_value(Self::ENV_VAR, &value)?),
            None => Self::read_var(Self::FALLBACK_ENV_VAR)
                .and_then(|value| value.parse::<Environment>().ok()),
        };

        let id_strategy = match Self::read_var(Self::ID_STRATEGY_VAR) {
            Some(value) => Self::parse_value(Self::ID_STRATEGY_VAR, &value)?,
            None => IdStrategy::default(),
        };

        let log_level = Self::read_var(Self::LOG_LEVEL_VAR).unwrap_or_else(|| "error".to_string());

        Ok(Config {
            environment,
            id_strategy,
            log_level,
        })
    }

    /// Whether the process declares itself a developer machine.
    pub fn is_dev(&self) -> bool {
        self.environment == Some(Environment::Dev)
    }

    /// Read a variable, treating blank values as unset.
    fn read_var(var_name: &str) -> Option<String> {
        env::var(var_name).ok().filter(|v| !v.trim().is_empty())
    }

    fn parse_value<T>(var_name: &str, value: &str) -> ConfigResult<T>
    where
        T: FromStr<Err = String>,
    {
        value.parse::<T>().map_err(|reason| ConfigError::InvalidValue {
            var: var_name.to_string(),
            reason,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            environment: None,
            id_strategy: IdStrategy::Uuid,
            log_level: "error".to_string(),
        }
    }
}

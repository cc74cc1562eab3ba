//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use serde::Deserialize;
use std::env;
use std::str::FromStr;

use crate::auth::MIN_SALT_LEN;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    /// `None` when `DATABASE_URL` is unset
    pub database: Option<DatabaseConfig>,
    pub kdf: KdfConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Key derivation settings
///
/// Argon2id cost parameters plus the salt and key sizes of the encoded secret.
/// Changing any of these makes previously stored secrets unverifiable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KdfConfig {
    #[serde(default = "default_memory_kib")]
    pub memory_kib: u32,
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
    #[serde(default = "default_salt_len")]
    pub salt_len: usize,
    #[serde(default = "default_key_len")]
    pub key_len: usize,
}

impl Default for KdfConfig {
    fn default() -> Self {
        Self {
            memory_kib: default_memory_kib(),
            iterations: default_iterations(),
            parallelism: default_parallelism(),
            salt_len: default_salt_len(),
            key_len: default_key_len(),
        }
    }
}

impl KdfConfig {
    /// Cheap parameters for tests and local development
    #[must_use]
    pub fn low_cost() -> Self {
        Self {
            memory_kib: 256,
            iterations: 1,
            parallelism: 1,
            ..Self::default()
        }
    }

    /// Load KDF settings from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable is set but cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            memory_kib: parse_var("KDF_MEMORY_KIB", default_memory_kib)?,
            iterations: parse_var("KDF_ITERATIONS", default_iterations)?,
            parallelism: parse_var("KDF_PARALLELISM", default_parallelism)?,
            salt_len: parse_var("KDF_SALT_LEN", default_salt_len)?,
            key_len: parse_var("KDF_KEY_LEN", default_key_len)?,
        })
    }

    /// Check the settings against the minimums the hasher relies on
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` naming the offending setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.salt_len < MIN_SALT_LEN {
            return Err(ConfigError::InvalidValue(
                "KDF_SALT_LEN",
                format!("{} (minimum is {MIN_SALT_LEN} bytes)", self.salt_len),
            ));
        }
        if self.key_len < MIN_KEY_LEN {
            return Err(ConfigError::InvalidValue(
                "KDF_KEY_LEN",
                format!("{} (minimum is {MIN_KEY_LEN} bytes)", self.key_len),
            ));
        }
        if self.iterations == 0 {
            return Err(ConfigError::InvalidValue("KDF_ITERATIONS", "0".to_string()));
        }
        if self.parallelism == 0 {
            return Err(ConfigError::InvalidValue("KDF_PARALLELISM", "0".to_string()));
        }
        Ok(())
    }
}

const MIN_KEY_LEN: usize = 16;

// Default value functions
fn default_app_name() -> String {
    "credential-service".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

// Argon2id defaults (19 MiB, 2 passes, 1 lane)
fn default_memory_kib() -> u32 {
    19 * 1024
}

fn default_iterations() -> u32 {
    2
}

fn default_parallelism() -> u32 {
    1
}

fn default_salt_len() -> usize {
    8
}

fn default_key_len() -> usize {
    32
}

fn parse_var<T: FromStr>(name: &'static str, default: fn() -> T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(name, raw)),
        Err(_) => Ok(default()),
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable is present but invalid
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database = match env::var("DATABASE_URL") {
            Ok(url) => Some(DatabaseConfig {
                url,
                max_connections: parse_var("DATABASE_MAX_CONNECTIONS", default_max_connections)?,
                min_connections: parse_var("DATABASE_MIN_CONNECTIONS", default_min_connections)?,
            }),
            Err(_) => None,
        };

        let env_name = match env::var("APP_ENV") {
            Ok(raw) => {
                Environment::parse(&raw).ok_or(ConfigError::InvalidValue("APP_ENV", raw))?
            }
            Err(_) => default_env(),
        };

        let kdf = KdfConfig::from_env()?;
        kdf.validate()?;

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env_name,
            },
            database,
            kdf,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

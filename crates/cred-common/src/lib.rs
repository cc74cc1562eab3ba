//! # cred-common
//!
//! Shared utilities including configuration, error handling, password hashing, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{constant_time_eq, generate_salt, PasswordService, MIN_SALT_LEN};
pub use config::{AppConfig, AppSettings, ConfigError, DatabaseConfig, Environment, KdfConfig};
pub use error::{AppError, AppResult, ErrorResponse};
pub use telemetry::{try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError};

//! Configuration error types

use thiserror::Error;

/// Errors while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Errors from semantic validation of loaded configuration.
#[derive(Debug, Clone, Copy, Error)]
pub enum ValidationError {
    #[error("Missing required configuration: GOAL_WIZARD__{0}")]
    MissingRequired(&'static str),

    #[error("Database URL must be a postgres:// or postgresql:// URL")]
    InvalidDatabaseUrl,

    #[error("Database pool size must be between 1 and 100")]
    InvalidPoolSize,
}

//! Application configuration module
//!
//! Type-safe configuration loading from environment variables via the
//! `config` and `dotenvy` crates. Variables use the `GOAL_WIZARD` prefix
//! with `__` separating nested values, e.g.
//! `GOAL_WIZARD__SERVER__PORT=3001` -> `server.port = 3001`.

mod admin;
mod database;
mod error;
mod server;

pub use admin::AdminConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::ServerConfig;

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (bind address, CORS, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    pub database: DatabaseConfig,

    /// Admin dashboard credentials
    pub admin: AdminConfig,
}

impl AppConfig {
    /// Load configuration from environment variables, reading a `.env`
    /// file first when present (development).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("GOAL_WIZARD")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Semantic validation of all sections; call before startup.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.database.validate()?;
        self.admin.validate()?;
        Ok(())
    }
}

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub server_addr: String,
}

impl Config {
    /// Reads configuration from environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - `DATABASE_URL` is set, `SERVER_ADDR` falls back to `0.0.0.0:8080`
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - `DATABASE_URL` is not set
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            server_addr: std::env::var("SERVER_ADDR")
                .unwrap_or_else(|_| DEFAULT_SERVER_ADDR.to_string()),
        })
    }
}

//! Server configuration loaded from the process environment.

use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "sqlite://music_library.db?mode=rwc";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The signing secret is a startup precondition: with no secret every
    /// token verification would fail, so the process refuses to start.
    #[error("JWT_SECRET is not set; refusing to start with unverifiable tokens")]
    MissingJwtSecret,
    #[error("SERVER_PORT is not a valid port: {0}")]
    InvalidPort(String),
}

/// Runtime configuration for the server process.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub port: u16,
}

impl ServerConfig {
    /// Read configuration from the environment.
    ///
    /// `JWT_SECRET` is required. `DATABASE_URL` defaults to a local SQLite
    /// file created on demand, `SERVER_PORT` defaults to 3000.
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = std::env::var("JWT_SECRET").map_err(|_| ConfigError::MissingJwtSecret)?;

        let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
            tracing::warn!("DATABASE_URL not set, using {}", DEFAULT_DATABASE_URL);
            DEFAULT_DATABASE_URL.to_string()
        });

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            port,
        })
    }
}

//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SHOPLYTIX_AUTH_ENDPOINT` - URL of the external login service
//!   (the mobile client used to hardcode this address; it is deployment
//!   configuration here)
//!
//! ## Optional
//! - `SHOPLYTIX_HOST` - Bind address (default: 127.0.0.1)
//! - `SHOPLYTIX_PORT` - Listen port (default: 3000)
//! - `SHOPLYTIX_OWNER_NAME` - Store owner display name for the dashboard
//!   (default: "John Doe")

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// External login endpoint (`POST {email, password}`)
    pub auth_endpoint: Url,
    /// Store owner display name shown on the dashboard
    pub owner_name: String,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("SHOPLYTIX_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("SHOPLYTIX_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("SHOPLYTIX_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("SHOPLYTIX_PORT".to_string(), e.to_string()))?;
        let auth_endpoint = get_required_env("SHOPLYTIX_AUTH_ENDPOINT")?
            .parse::<Url>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("SHOPLYTIX_AUTH_ENDPOINT".to_string(), e.to_string())
            })?;
        let owner_name = get_env_or_default("SHOPLYTIX_OWNER_NAME", "John Doe");

        Ok(Self {
            host,
            port,
            auth_endpoint,
            owner_name,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

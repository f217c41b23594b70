//! # API Configuration Module
//!
//! Loads the Registrar server configuration from environment variables,
//! falling back to defaults where a value is optional.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Per-request timeout (default: 30)
//! - `DB_MAX_CONNECTIONS`: Size of the database pool (default: 5)

use eyre::{eyre, Result, WrapErr};
use std::env;
use tracing::Level;

const DEFAULT_REQUEST_TIMEOUT: u64 = 30;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

/// Configuration for the Registrar API server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use registrar_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}", config.server_addr());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,

    pub port: u16,

    /// PostgreSQL database connection string
    pub database_url: String,

    pub log_level: Level,

    /// CORS allowed origins; cross-origin requests are refused when unset
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    pub db_max_connections: u32,
}

impl ApiConfig {
    /// Creates a new ApiConfig from the process environment
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The DATABASE_URL environment variable is not set
    /// - The API_PORT or DB_MAX_CONNECTIONS value is not a number
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, such as a map in tests.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Network settings
        let host = var("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = var("API_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Database settings
        let database_url = var("DATABASE_URL")
            .ok_or_else(|| eyre!("DATABASE_URL environment variable must be set"))?;
        let db_max_connections = match var("DB_MAX_CONNECTIONS") {
            Some(value) => value.parse().wrap_err("Invalid DB_MAX_CONNECTIONS value")?,
            None => DEFAULT_DB_MAX_CONNECTIONS,
        };

        let log_level = match var("LOG_LEVEL")
            .unwrap_or_else(|| "info".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        let cors_origins = var("API_CORS_ORIGINS").map(|origins| {
            origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        });

        let request_timeout = var("API_REQUEST_TIMEOUT_SECONDS")
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT);

        Ok(Self {
            host,
            port,
            database_url,
            log_level,
            cors_origins,
            request_timeout,
            db_max_connections,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

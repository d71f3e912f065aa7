//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Required Variables
//!
//! - `DATABASE_URL` - PostgreSQL connection string
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Public base URL used when rendering short links
//!   (default: `http://localhost:3000`)
//! - `CODE_LENGTH` - Short code length (default: 6, min: 4)
//! - `MAX_CODE_ATTEMPTS` - Allocation attempts before giving up (default: 10)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 10)
//! - `DB_CONNECT_TIMEOUT` - Pool acquire timeout in seconds (default: 30)

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    /// Public base URL used to render full short links in API responses.
    pub base_url: String,
    /// Length of generated short codes.
    pub code_length: usize,
    /// Maximum collision retries before a creation request fails.
    pub max_code_attempts: u32,
    pub log_level: String,
    pub log_format: String,

    // ── PgPool settings ─────────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 10).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is missing, or a numeric knob is
    /// malformed or outside its valid range.
    pub fn from_env() -> Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let code_length = numeric_knob("CODE_LENGTH", env::var("CODE_LENGTH").ok(), 6)?;
        anyhow::ensure!(code_length >= 4, "CODE_LENGTH must be at least 4");
        anyhow::ensure!(code_length <= 32, "CODE_LENGTH must be at most 32");

        let max_code_attempts =
            numeric_knob("MAX_CODE_ATTEMPTS", env::var("MAX_CODE_ATTEMPTS").ok(), 10)?;
        anyhow::ensure!(max_code_attempts >= 1, "MAX_CODE_ATTEMPTS must be at least 1");

        let db_max_connections =
            numeric_knob("DB_MAX_CONNECTIONS", env::var("DB_MAX_CONNECTIONS").ok(), 10)?;

        let db_connect_timeout =
            numeric_knob("DB_CONNECT_TIMEOUT", env::var("DB_CONNECT_TIMEOUT").ok(), 30)?;

        Ok(Self {
            database_url,
            listen_addr,
            base_url,
            code_length,
            max_code_attempts,
            log_level,
            log_format,
            db_max_connections,
            db_connect_timeout,
        })
    }
}

/// Parses a numeric environment value, falling back to `default` only when
/// the variable is absent. A present-but-unparseable value is a configuration
/// error, not a silent default.
fn numeric_knob<T>(name: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: std::str::FromStr,
{
    match raw {
        Some(value) => value
            .parse()
            .ok()
            .with_context(|| format!("{name} must be a number, got {value:?}")),
        None => Ok(default),
    }
}

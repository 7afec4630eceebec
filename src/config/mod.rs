//! Configuration module for the BrickHunt backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Default Rebrickable API base, without a trailing slash.
pub const DEFAULT_REBRICKABLE_URL: &str = "https://rebrickable.com/api/v3/lego";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Rebrickable API key, attached server-side so it never reaches clients
    pub rebrickable_api_key: Option<String>,
    /// Base URL of the Rebrickable API (overridable for tests)
    pub rebrickable_url: String,
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let rebrickable_api_key = env::var("REBRICKABLE_API_KEY").ok();

        let rebrickable_url = env::var("BRICKHUNT_REBRICKABLE_URL")
            .unwrap_or_else(|_| DEFAULT_REBRICKABLE_URL.to_string());

        let db_path = env::var("BRICKHUNT_DB_PATH")
            .unwrap_or_else(|_| "./data/brickhunt.sqlite".to_string())
            .into();

        let bind_addr = env::var("BRICKHUNT_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid BRICKHUNT_BIND_ADDR format");

        let log_level = env::var("BRICKHUNT_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            rebrickable_api_key,
            rebrickable_url,
            db_path,
            bind_addr,
            log_level,
        }
    }
}

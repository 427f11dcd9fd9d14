//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to deserialize environment variables into a type-safe struct.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `DATABASE_URL` (required): PostgreSQL connection string
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 8000
/// - `DATABASE_MAX_CONNECTIONS` (optional): pool size, defaults to 5
/// - `CORS_ALLOWED_ORIGIN` (optional): browser origin allowed to call the API,
///   defaults to `http://localhost:3000`
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,

    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default = "default_max_connections")]
    pub database_max_connections: u32,

    #[serde(default = "default_cors_allowed_origin")]
    pub cors_allowed_origin: String,
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    8000
}

fn default_max_connections() -> u32 {
    5
}

fn default_cors_allowed_origin() -> String {
    "http://localhost:3000".to_string()
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required environment variables are missing (e.g., DATABASE_URL)
    /// - Environment variable values cannot be parsed into expected types
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        Self::from_iter(std::env::vars())
    }

    /// Build a Config from an arbitrary set of `(KEY, value)` pairs.
    ///
    /// Field names are converted the same way as for the process environment:
    /// `database_url` <- `DATABASE_URL`.
    pub fn from_iter<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars)
    }
}

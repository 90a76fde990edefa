//! Application configuration loaded from the environment.

use serde::Deserialize;

/// Runtime configuration.
///
/// # Environment Variables
///
/// - `DATABASE_URL` (required): PostgreSQL connection string
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,

    #[serde(default = "default_port")]
    pub server_port: u16,
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables, reading an optional
    /// `.env` file first.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing (e.g. DATABASE_URL)
    /// or a value cannot be parsed into the expected type.
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();

        // Field names map to upper-case variables: database_url -> DATABASE_URL
        envy::from_env::<Config>()
    }
}

//! Application configuration from file and environment variables
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. Environment variables (prefixed with ALUMNI_)
//! 2. Config file (config.toml)
//! 3. Default values
//!
//! The database URL is a secret and should come from the environment
//! (ALUMNI_DATABASE_URL, or the conventional DATABASE_URL), not the file.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "AlumniConnect".to_string(),
            base_url: "http://localhost:8080".to_string(),
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Connection string (should be in env var ALUMNI_DATABASE_URL)
    #[serde(default)]
    pub url: String,
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub site: SiteConfig,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path("config.toml")
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&AppConfig::default())?)
            // Add config file (optional)
            .add_source(File::new(path, FileFormat::Toml).required(false))
            // Override with environment variables (ALUMNI_ prefix)
            // e.g., ALUMNI_DATABASE_URL, ALUMNI_SITE_NAME
            .add_source(Environment::with_prefix("ALUMNI").separator("_"))
            .build()?;

        config.try_deserialize()
    }

    /// Database URL, falling back to the conventional DATABASE_URL variable
    /// when neither the config file nor ALUMNI_DATABASE_URL set one.
    pub fn database_url(&self) -> Option<String> {
        if !self.database.url.is_empty() {
            return Some(self.database.url.clone());
        }
        std::env::var("DATABASE_URL").ok()
    }
}

//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON document backing the profile store.
    pub data_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `PROFILE_DATA_PATH` overrides the store location; everything else
    /// has a working default.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self {
            data_path: env::var("PROFILE_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/profiles.json")),
        }
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            data_path: PathBuf::from("data/test-profiles.json"),
        }
    }
}

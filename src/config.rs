//! Server configuration, built from environment variables.

use std::path::PathBuf;

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listening port (`PORT`, default 3000).
    pub port: u16,
    /// Directory holding the collection documents (`HOME_ASSIST_DATA_DIR`, default `./data`).
    pub data_dir: PathBuf,
    /// Directory the frontend is served from (`HOME_ASSIST_PUBLIC_DIR`, default `./public`).
    pub public_dir: PathBuf,
}

impl ServerConfig {
    /// Build config from environment variables, falling back to the default
    /// for anything unset or unparseable.
    pub fn from_env() -> Self {
        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let data_dir = std::env::var("HOME_ASSIST_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));

        let public_dir = std::env::var("HOME_ASSIST_PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./public"));

        Self {
            port,
            data_dir,
            public_dir,
        }
    }
}

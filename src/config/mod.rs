//! Application configuration, shared by the CLI and the server binary.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Credentials for HTTP basic authentication. When present, the server
/// guards every route and the remote client sends them on every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the SQLite database.
    pub database: String,

    /// When set, the CLI talks to a remote server instead of the local DB.
    #[serde(default)]
    pub server_url: Option<String>,

    /// Bind address for `doing-server`.
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default)]
    pub auth: Option<BasicAuth>,
}

fn default_listen() -> String {
    "127.0.0.1:3000".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            server_url: None,
            listen: default_listen(),
            auth: None,
        }
    }
}

impl Config {
    /// Standard configuration directory depending on the platform.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("doing")
    }

    /// Full path of the config file.
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("doing.conf")
    }

    /// Full path of the SQLite database.
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("doing.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Write the default config file and create an empty database file.
    pub fn init_all() -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Self::default();
        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| AppError::Config(e.to_string()))?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;

        let db_path = PathBuf::from(&config.database);
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(())
    }
}

//! Configuration file and environment overrides
//!
//! The config lives at `<config dir>/gala/config.toml`:
//!
//! ```toml
//! event_id = "evt-42"
//! data_dir = "/var/lib/gala"
//!
//! [api]
//! base_url = "https://guests.example.com/api"
//! token = "..."
//! ```

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;

use crate::error::{AppError, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

const TOKEN_ENV: &str = "GALA_API_TOKEN";
const EVENT_ENV: &str = "GALA_EVENT_ID";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    pub event_id: Option<String>,
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "gala", "gala")
}

pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load from `path`, or from the default location when `path` is `None`.
    ///
    /// A missing default file yields the default config; a missing explicit
    /// file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match default_config_path() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };

        match std::fs::read_to_string(&path) {
            Ok(content) => {
                tracing::debug!(path = %path.display(), "Loaded config file");
                Self::from_toml_str(&content)
            }
            Err(e) if !explicit && e.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Apply `GALA_API_TOKEN` / `GALA_EVENT_ID` from the process environment
    pub fn with_env(self) -> Self {
        self.with_overrides(
            std::env::var(TOKEN_ENV).ok(),
            std::env::var(EVENT_ENV).ok(),
        )
    }

    /// Non-empty values replace what the file said
    pub fn with_overrides(mut self, token: Option<String>, event_id: Option<String>) -> Self {
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            self.api.token = Some(token);
        }
        if let Some(event_id) = event_id.filter(|e| !e.is_empty()) {
            self.event_id = Some(event_id);
        }
        self
    }

    pub fn token(&self) -> Result<&str> {
        self.api
            .token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or(AppError::MissingToken)
    }

    /// Directory holding the local database
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        project_dirs()
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or(AppError::NoDataDir)
    }
}

//! Application configuration.
//!
//! One YAML file at `~/.stratus/config.yaml`:
//!
//! ```yaml
//! github_client_id: abc123
//! github_client_secret: s3cret
//! storage_addr: 127.0.0.1
//! storage_port: 8081
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use stratus_github::GitHubClient;
use stratus_storage::StorageClient;

use crate::error::{io_err, yaml_err, AppError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub github_client_id: String,
    pub github_client_secret: String,
    pub storage_addr: String,
    pub storage_port: u16,

    /// User-Agent sent to GitHub (their API rejects requests without one).
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Where the published-game catalog lives; defaults next to the
    /// config file.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

fn default_user_agent() -> String {
    "stratus".to_string()
}

/// `<home>/.stratus/config.yaml` — pure, no I/O.
pub fn config_path_at(home: &Path) -> PathBuf {
    home.join(".stratus").join("config.yaml")
}

/// `<home>/.stratus/catalog.yaml` — pure, no I/O.
pub fn catalog_path_at(home: &Path) -> PathBuf {
    home.join(".stratus").join("catalog.yaml")
}

impl AppConfig {
    /// Load from an explicit path. Used by tests and by `--config`.
    pub fn load_from(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Err(AppError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = std::fs::read_to_string(path).map_err(|err| io_err(path, err))?;
        serde_yaml::from_str(&contents).map_err(|err| yaml_err(path, err))
    }

    /// Load from the default location under the home directory.
    pub fn load() -> Result<Self, AppError> {
        let home = dirs::home_dir().ok_or(AppError::HomeNotFound)?;
        Self::load_from(&config_path_at(&home))
    }

    /// Storage gateway client for this config.
    pub fn storage_client(&self) -> StorageClient {
        StorageClient::connect(&self.storage_addr, self.storage_port)
    }

    /// Identity-provider client for this config.
    pub fn github_client(&self) -> GitHubClient {
        GitHubClient::new(
            self.github_client_id.clone(),
            self.github_client_secret.clone(),
            self.user_agent.clone(),
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

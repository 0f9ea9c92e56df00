//! Shared command context: config, clients, catalog and identity.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use stratus_app::config::catalog_path_at;
use stratus_app::{AppConfig, YamlCatalog};
use stratus_core::Owner;
use stratus_github::GitHubClient;
use stratus_storage::StorageClient;

/// Everything a command needs, resolved once in `main`.
pub struct Context {
    user: Option<String>,
    pub storage: StorageClient,
    pub github: GitHubClient,
    catalog_path: PathBuf,
}

impl Context {
    pub fn load(config_path: Option<&Path>, user: Option<&str>) -> Result<Self> {
        let config = match config_path {
            Some(path) => AppConfig::load_from(path),
            None => AppConfig::load(),
        }
        .context("failed to load configuration — create ~/.stratus/config.yaml or pass --config")?;

        let catalog_path = match &config.catalog_path {
            Some(path) => path.clone(),
            None => {
                let home = dirs::home_dir().context("could not determine home directory")?;
                catalog_path_at(&home)
            }
        };

        Ok(Self {
            storage: config.storage_client(),
            github: config.github_client(),
            user: user.map(str::to_owned),
            catalog_path,
        })
    }

    /// The acting user. Resolved lazily: catalog-only commands such as
    /// `games` work without `--user`.
    pub fn owner(&self) -> Result<Owner> {
        let user = self
            .user
            .as_deref()
            .context("provide --user: repositories live under a user's namespace")?;
        Ok(Owner::from(user))
    }

    /// Open the published-game catalog. Opened per command so two
    /// invocations never race on a stale in-memory copy.
    pub fn catalog(&self) -> Result<YamlCatalog> {
        YamlCatalog::open(&self.catalog_path).context("failed to open the published-game catalog")
    }
}

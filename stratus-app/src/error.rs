//! Error types for the application layer.

use std::path::PathBuf;

use thiserror::Error;

use stratus_core::RepoName;
use stratus_github::GitHubError;
use stratus_storage::GatewayError;

/// All errors the application flows can report.
#[derive(Debug, Error)]
pub enum AppError {
    /// Init or clone refused because the repository is already there.
    #[error("repository '{repo}' already exists")]
    RepoExists { repo: RepoName },

    /// Operation guard failed: the repository does not exist.
    #[error("no such repository '{repo}'")]
    NoSuchRepo { repo: RepoName },

    /// The remote rejected the push; it is probably ahead of local
    /// history.
    #[error("push rejected for '{repo}': the remote may be ahead, try pulling first")]
    PushRejected { repo: RepoName },

    /// An error from the storage gateway.
    #[error("storage error: {0}")]
    Storage(#[from] GatewayError),

    /// An error from the identity provider.
    #[error("GitHub error: {0}")]
    GitHub(#[from] GitHubError),

    /// `dirs::home_dir()` returned `None`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,

    /// The config file did not exist at the expected path.
    #[error("config not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// YAML parse or serialization error, with the file it concerns.
    #[error("YAML error at {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`AppError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> AppError {
    AppError::Io {
        path: path.into(),
        source,
    }
}

/// Convenience constructor for [`AppError::Yaml`].
pub(crate) fn yaml_err(path: impl Into<PathBuf>, source: serde_yaml::Error) -> AppError {
    AppError::Yaml {
        path: path.into(),
        source,
    }
}

//! Shared client over the storage backend's HTTP contract.

use std::time::Duration;

use stratus_core::{Owner, RepoName};

use crate::transport::{HttpTransport, Transport};

/// Gateway client. Every higher-level operation (repository lifecycle,
/// file store, tree assembly, origin sync) hangs off this one struct and
/// shares its transport as the single I/O path.
pub struct StorageClient<T: Transport = HttpTransport> {
    pub(crate) transport: T,
}

impl StorageClient<HttpTransport> {
    /// Connect to the storage backend at `addr:port` with the default
    /// per-call timeout.
    pub fn connect(addr: &str, port: u16) -> Self {
        Self {
            transport: HttpTransport::new(addr, port),
        }
    }

    pub fn connect_with_timeout(addr: &str, port: u16, timeout: Duration) -> Self {
        Self {
            transport: HttpTransport::with_timeout(addr, port, timeout),
        }
    }
}

impl<T: Transport> StorageClient<T> {
    /// Wrap an arbitrary transport. This is the seam tests use to script
    /// backend responses.
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// `/{owner}/{repo}`
    pub(crate) fn repo_route(owner: &Owner, repo: &RepoName) -> String {
        format!("/{owner}/{repo}")
    }

    /// `/{owner}/{repo}/{suffix}`
    pub(crate) fn sub_route(owner: &Owner, repo: &RepoName, suffix: &str) -> String {
        format!("/{owner}/{repo}/{suffix}")
    }
}

//! Push and pull against the upstream origin remote.

use stratus_core::{Owner, RepoName};

use crate::client::StorageClient;
use crate::error::GatewayError;
use crate::transport::{Method, Transport};

/// Name of the upstream remote every repository is bound to at init.
pub const ORIGIN: &str = "origin";

impl<T: Transport> StorageClient<T> {
    /// Pull from origin into the backend's working copy.
    pub fn pull_repo(&self, owner: &Owner, repo: &RepoName) -> Result<(), GatewayError> {
        let route = Self::sub_route(owner, repo, &format!("pull/{ORIGIN}"));
        let response = self.transport.call(Method::Post, &route, None)?;
        match response.status {
            200 => Ok(()),
            404 => Err(GatewayError::not_found(route)),
            status => Err(GatewayError::protocol(status, format!("pull {route}"))),
        }
    }

    /// Push to origin.
    ///
    /// A rejected push normally means the remote is ahead of local
    /// history. That comes back as [`GatewayError::Conflict`] so callers
    /// can suggest pulling first instead of treating it as fatal.
    pub fn push_repo(&self, owner: &Owner, repo: &RepoName) -> Result<(), GatewayError> {
        let route = Self::sub_route(owner, repo, &format!("push/{ORIGIN}"));
        let response = self.transport.call(Method::Post, &route, None)?;
        match response.status {
            200 => Ok(()),
            404 => Err(GatewayError::not_found(route)),
            _ => Err(GatewayError::conflict(route)),
        }
    }
}

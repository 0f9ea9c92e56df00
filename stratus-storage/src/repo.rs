//! Repository lifecycle: existence, init, delete, listing, status, commit.

use serde_json::json;

use stratus_core::{CommitRequest, Owner, RepoName, StatusReport};

use crate::client::StorageClient;
use crate::error::GatewayError;
use crate::transport::{Method, Transport};

impl<T: Transport> StorageClient<T> {
    /// True iff the repository resource answers 200.
    ///
    /// Any other HTTP status means "does not exist" here; only a transport
    /// failure is an error, so callers can still tell "absent" from
    /// "backend unreachable".
    pub fn repo_exists(&self, owner: &Owner, repo: &RepoName) -> Result<bool, GatewayError> {
        let response = self
            .transport
            .call(Method::Get, &Self::repo_route(owner, repo), None)?;
        Ok(response.status == 200)
    }

    /// Create a repository bound to the `origin` remote URL.
    ///
    /// Does not check pre-existence; call [`Self::repo_exists`] first when
    /// "already there" must be distinguished from "created".
    pub fn init_repo(
        &self,
        owner: &Owner,
        repo: &RepoName,
        origin: &str,
    ) -> Result<(), GatewayError> {
        let route = Self::repo_route(owner, repo);
        let body = json!({ "origin": origin });
        let response = self.transport.call(Method::Post, &route, Some(&body))?;
        match response.status {
            201 => Ok(()),
            409 => Err(GatewayError::conflict(route)),
            status => Err(GatewayError::protocol(status, format!("init {route}"))),
        }
    }

    /// Delete a repository and all its contents.
    ///
    /// 404 is a failure: deleting a repository that is not there reports
    /// [`GatewayError::NotFound`], unlike file deletion where 404 counts
    /// as success.
    pub fn delete_repo(&self, owner: &Owner, repo: &RepoName) -> Result<(), GatewayError> {
        let route = Self::repo_route(owner, repo);
        let response = self.transport.call(Method::Delete, &route, None)?;
        match response.status {
            200 => Ok(()),
            404 => Err(GatewayError::not_found(route)),
            status => Err(GatewayError::protocol(status, format!("delete {route}"))),
        }
    }

    /// Names of the owner's repositories on the backend.
    ///
    /// An unknown owner is [`GatewayError::NotFound`], never an empty
    /// listing; an empty listing always means "no repositories".
    pub fn list_repos(&self, owner: &Owner) -> Result<Vec<RepoName>, GatewayError> {
        let route = format!("/list/{owner}");
        let response = self.transport.call(Method::Get, &route, None)?;
        match response.status {
            200 => {
                let names: Vec<String> = response.json("repository listing")?;
                Ok(names.into_iter().map(RepoName::from).collect())
            }
            404 => Err(GatewayError::not_found(route)),
            status => Err(GatewayError::protocol(status, format!("list {route}"))),
        }
    }

    /// Working-tree status: untracked, modified and deleted entries.
    pub fn repo_status(&self, owner: &Owner, repo: &RepoName) -> Result<StatusReport, GatewayError> {
        let route = Self::sub_route(owner, repo, "status");
        let response = self.transport.call(Method::Get, &route, None)?;
        match response.status {
            200 => response.json("status report"),
            404 => Err(GatewayError::not_found(route)),
            status => Err(GatewayError::protocol(status, format!("status {route}"))),
        }
    }

    /// Record a commit on the backend. Build the request from a status
    /// report with `CommitRequest::from_status`.
    pub fn commit_repo(
        &self,
        owner: &Owner,
        repo: &RepoName,
        commit: &CommitRequest,
    ) -> Result<(), GatewayError> {
        let route = Self::sub_route(owner, repo, "commit");
        let body = serde_json::to_value(commit).map_err(|source| GatewayError::Decode {
            context: "commit request".to_string(),
            source,
        })?;
        let response = self.transport.call(Method::Post, &route, Some(&body))?;
        match response.status {
            200 => Ok(()),
            404 => Err(GatewayError::not_found(route)),
            status => Err(GatewayError::protocol(status, format!("commit {route}"))),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Single-file read/write/delete with implicit create-on-write.

use serde_json::{json, Value};

use stratus_core::{Owner, RepoName};

use crate::client::StorageClient;
use crate::error::GatewayError;
use crate::transport::{Method, Response, Transport};

impl<T: Transport> StorageClient<T> {
    /// Contents of `path`, or `None` when the file is absent.
    ///
    /// Absence (404) is not an error; only a transport failure or an
    /// out-of-contract status is.
    pub fn read_file(
        &self,
        owner: &Owner,
        repo: &RepoName,
        path: &str,
    ) -> Result<Option<String>, GatewayError> {
        let route = Self::sub_route(owner, repo, &format!("file/{path}"));
        let response = self.transport.call(Method::Get, &route, None)?;
        match response.status {
            200 => Ok(Some(decode_file_payload(&response, &route)?)),
            404 => Ok(None),
            status => Err(GatewayError::protocol(status, format!("read {route}"))),
        }
    }

    /// Create an empty file. Not public: [`Self::write_file`] drives
    /// creation, so the two-step dance stays behind one entry point.
    fn create_file(&self, owner: &Owner, repo: &RepoName, path: &str) -> Result<(), GatewayError> {
        let route = Self::sub_route(owner, repo, &format!("file/{path}"));
        let body = json!({ "data": "" });
        let response = self.transport.call(Method::Post, &route, Some(&body))?;
        match response.status {
            201 => Ok(()),
            409 => Err(GatewayError::conflict(route)),
            status => Err(GatewayError::protocol(status, format!("create {route}"))),
        }
    }

    /// Write `content` to `path`, creating the file first when absent.
    ///
    /// Flow: read, then create when the read came back absent, then PUT.
    /// If creation fails the write is abandoned before any PUT is
    /// attempted. A create that succeeded stays committed even when the
    /// PUT after it fails, so retrying `write_file` is always safe: the
    /// retry's read finds the file and goes straight to the PUT.
    pub fn write_file(
        &self,
        owner: &Owner,
        repo: &RepoName,
        path: &str,
        content: &str,
    ) -> Result<(), GatewayError> {
        if self.read_file(owner, repo, path)?.is_none() {
            self.create_file(owner, repo, path).map_err(|err| {
                log::warn!("create before write failed for {path}: {err}");
                err
            })?;
        }

        let route = Self::sub_route(owner, repo, &format!("file/{path}"));
        let body = json!({ "data": content });
        let response = self.transport.call(Method::Put, &route, Some(&body))?;
        match response.status {
            200 => Ok(()),
            status => Err(GatewayError::protocol(status, format!("write {route}"))),
        }
    }

    /// Delete `path`. Deleting a file that is already gone succeeds, so
    /// this is idempotent.
    pub fn delete_file(&self, owner: &Owner, repo: &RepoName, path: &str) -> Result<(), GatewayError> {
        let route = Self::sub_route(owner, repo, &format!("file/{path}"));
        let response = self.transport.call(Method::Delete, &route, None)?;
        match response.status {
            200 | 404 => Ok(()),
            status => Err(GatewayError::protocol(status, format!("delete {route}"))),
        }
    }
}

/// Unwrap the backend's `{"data": ...}` envelope. Older backend versions
/// return the payload bare; that is accepted as-is.
fn decode_file_payload(response: &Response, route: &str) -> Result<String, GatewayError> {
    let value: Value = response.json(route)?;
    match value {
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::String(data)) => Ok(data),
            Some(other) => Ok(other.to_string()),
            None => Ok(Value::Object(map).to_string()),
        },
        Value::String(data) => Ok(data),
        other => Ok(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

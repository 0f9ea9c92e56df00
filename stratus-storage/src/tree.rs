//! Tree listing and all-or-nothing game project assembly.

use serde_json::Value;

use stratus_core::{GameProject, Owner, RepoName, TreeListing, TreeNode, COMPONENTS_DIR, MANIFEST_FILE};

use crate::client::StorageClient;
use crate::error::GatewayError;
use crate::transport::{Method, Transport};

impl<T: Transport> StorageClient<T> {
    /// The repository's tree listing, in backend order.
    pub fn tree(&self, owner: &Owner, repo: &RepoName) -> Result<TreeListing, GatewayError> {
        let route = Self::sub_route(owner, repo, "tree");
        let response = self.transport.call(Method::Get, &route, None)?;
        match response.status {
            200 => response.json("tree listing"),
            404 => Err(GatewayError::not_found(route)),
            status => Err(GatewayError::protocol(status, format!("tree {route}"))),
        }
    }

    /// Assemble the game project: the parsed manifest plus every component
    /// source, in tree order.
    ///
    /// All-or-nothing: a listing without the manifest entry, an unreadable
    /// manifest, or any unreadable component fails the whole assembly. A
    /// missing `components` directory just means zero components.
    pub fn game_project(&self, owner: &Owner, repo: &RepoName) -> Result<GameProject, GatewayError> {
        let listing = self.tree(owner, repo)?;
        if !listing.contains(MANIFEST_FILE) {
            return Err(GatewayError::not_found(format!(
                "{owner}/{repo}/{MANIFEST_FILE}"
            )));
        }

        let component_paths: Vec<String> = listing
            .get(COMPONENTS_DIR)
            .and_then(TreeNode::as_dir)
            .map(|dir| {
                dir.keys()
                    .map(|name| format!("{COMPONENTS_DIR}/{name}"))
                    .collect()
            })
            .unwrap_or_default();

        let manifest_text = self
            .read_file(owner, repo, MANIFEST_FILE)?
            .ok_or_else(|| GatewayError::not_found(format!("{owner}/{repo}/{MANIFEST_FILE}")))?;
        let manifest: Value =
            serde_json::from_str(&manifest_text).map_err(|source| GatewayError::Decode {
                context: MANIFEST_FILE.to_string(),
                source,
            })?;

        let mut components = Vec::with_capacity(component_paths.len());
        for path in &component_paths {
            let source = self
                .read_file(owner, repo, path)?
                .ok_or_else(|| GatewayError::not_found(format!("{owner}/{repo}/{path}")))?;
            components.push(source);
        }

        Ok(GameProject { manifest, components })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

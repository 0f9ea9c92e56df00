//! Working-tree status and its translation into a commit request.
//!
//! Wire shapes match the storage backend exactly: a status report is
//! `{"U": [...], "M": [{"A": ...}], "D": [{"A": ...}]}` and a commit
//! request is `{"A": [...], "R": [...], "msg": ..., "name": ..., "email": ...}`.

use serde::{Deserialize, Serialize};

use crate::types::Author;

/// One modified or deleted entry in a status report.
///
/// The backend reports the relevant path under the key `A`: the
/// post-change path for a modified entry (renames report the new name),
/// the removed path for a deleted entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntry {
    #[serde(rename = "A")]
    pub path: String,
}

impl StatusEntry {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// Raw working-tree status for a repository.
///
/// The backend may omit the `M` and `D` categories entirely; both
/// deserialize to empty lists, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    #[serde(rename = "U", default)]
    pub untracked: Vec<String>,

    #[serde(rename = "M", default)]
    pub modified: Vec<StatusEntry>,

    #[serde(rename = "D", default)]
    pub deleted: Vec<StatusEntry>,
}

impl StatusReport {
    /// True when the working tree has no uncommitted changes.
    pub fn is_clean(&self) -> bool {
        self.untracked.is_empty() && self.modified.is_empty() && self.deleted.is_empty()
    }
}

/// A commit to record on the backend, built from a [`StatusReport`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRequest {
    /// Paths to add: every untracked path plus every modified entry's path.
    #[serde(rename = "A")]
    pub added: Vec<String>,

    /// Paths to remove: every deleted entry's path.
    #[serde(rename = "R")]
    pub removed: Vec<String>,

    #[serde(rename = "msg")]
    pub message: String,

    pub name: String,
    pub email: String,
}

impl CommitRequest {
    /// Translate a status report into a commit request.
    ///
    /// Message and author pass through unchanged, empty strings included.
    pub fn from_status(status: &StatusReport, message: impl Into<String>, author: &Author) -> Self {
        let mut added = status.untracked.clone();
        added.extend(status.modified.iter().map(|entry| entry.path.clone()));
        let removed = status.deleted.iter().map(|entry| entry.path.clone()).collect();

        Self {
            added,
            removed,
            message: message.into(),
            name: author.name.clone(),
            email: author.email.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

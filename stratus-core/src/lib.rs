//! Shared domain types for the Stratus game-project backend.
//!
//! Public API surface:
//! - [`types`] — newtypes, commit author, assembled game project
//! - [`status`] — working-tree status report and commit request
//! - [`tree`] — insertion-ordered repository tree listing

pub mod status;
pub mod tree;
pub mod types;

pub use status::{CommitRequest, StatusEntry, StatusReport};
pub use tree::{TreeListing, TreeNode};
pub use types::{Author, GameProject, Owner, RepoName, COMPONENTS_DIR, MANIFEST_FILE};

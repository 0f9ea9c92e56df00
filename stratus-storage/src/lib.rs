//! Storage gateway for the Stratus game-project backend.
//!
//! Turns the storage microservice's primitive HTTP contract (existence
//! check, tree listing, file read/write/delete, status, commit, push,
//! pull) into the higher-level operations the application needs:
//!
//! - repository lifecycle — [`StorageClient::repo_exists`],
//!   [`StorageClient::init_repo`], [`StorageClient::delete_repo`],
//!   [`StorageClient::list_repos`]
//! - file store with implicit create-on-write —
//!   [`StorageClient::read_file`], [`StorageClient::write_file`],
//!   [`StorageClient::delete_file`]
//! - all-or-nothing game project assembly —
//!   [`StorageClient::game_project`]
//! - status-to-commit translation — [`StorageClient::repo_status`] plus
//!   `CommitRequest::from_status`, then [`StorageClient::commit_repo`]
//! - origin synchronization — [`StorageClient::push_repo`],
//!   [`StorageClient::pull_repo`]
//!
//! Nothing is cached between calls; every operation independently queries
//! or mutates remote state through [`Transport`] round trips. No operation
//! retries internally — retry policy belongs to the caller, and the only
//! multi-step operation, `write_file`, is safe to retry.

pub mod client;
pub mod error;
pub mod transport;

mod file;
mod repo;
mod sync;
mod tree;

#[cfg(test)]
pub(crate) mod testutil;

pub use client::StorageClient;
pub use error::GatewayError;
pub use sync::ORIGIN;
pub use transport::{HttpTransport, Method, Response, Transport, TransportError};

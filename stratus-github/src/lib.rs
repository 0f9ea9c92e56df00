//! Boundary client for the identity provider (GitHub).
//!
//! Only the contract the application consumes: OAuth code exchange,
//! profile and primary-email lookup, listing and creating hosted
//! repositories. Nothing here is part of the storage gateway core.

pub mod client;
pub mod error;
pub mod types;

pub use client::GitHubClient;
pub use error::GitHubError;
pub use types::{AccessToken, Email, RemoteRepo, UserProfile};

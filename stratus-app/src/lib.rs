//! Application layer for the Stratus backend.
//!
//! Composes the storage gateway, the identity provider and the published
//! catalog into the user-facing flows: login, dashboard, repository
//! lifecycle, commit, publish, push/pull and project loading. No HTML,
//! no cookies; the web layer on top is plain glue.

pub mod catalog;
pub mod config;
pub mod error;
pub mod session;
pub mod workflows;

pub use catalog::{Catalog, MemoryCatalog, Published, YamlCatalog};
pub use config::AppConfig;
pub use error::AppError;
pub use session::{login, UserSession};
pub use workflows::{PublishOutcome, RepoOverview};

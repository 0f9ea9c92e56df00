//! Error types for the identity-provider client.

use thiserror::Error;

/// All errors the GitHub client can report.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Could not reach GitHub at all.
    #[error("could not reach GitHub: {0}")]
    Transport(String),

    /// GitHub answered with a non-success status.
    #[error("GitHub answered {status} for {context}")]
    Status { status: u16, context: String },

    /// A response payload did not have the documented shape.
    #[error("malformed GitHub payload ({context}): {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

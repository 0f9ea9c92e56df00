//! Error types for the storage gateway.

use thiserror::Error;

use crate::transport::TransportError;

/// All errors a gateway operation can report.
///
/// Every public operation returns exactly one of these kinds instead of a
/// bare boolean or an empty collection, so callers can always tell
/// "absent" from "unreachable" from "the backend answered something the
/// contract does not allow".
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Could not reach the backend at all. Never conflated with an HTTP
    /// status the backend returned.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The operation's target does not exist on the backend.
    #[error("not found: {resource}")]
    NotFound { resource: String },

    /// The backend refused: the resource already exists, or the remote is
    /// ahead of local history (push).
    #[error("conflict: {resource}")]
    Conflict { resource: String },

    /// The backend answered with a status the contract does not allow for
    /// this operation.
    #[error("unexpected status {status} from storage backend ({context})")]
    Protocol { status: u16, context: String },

    /// A JSON payload did not have the documented shape.
    #[error("malformed payload ({context}): {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl GatewayError {
    pub(crate) fn not_found(resource: impl Into<String>) -> Self {
        GatewayError::NotFound {
            resource: resource.into(),
        }
    }

    pub(crate) fn conflict(resource: impl Into<String>) -> Self {
        GatewayError::Conflict {
            resource: resource.into(),
        }
    }

    pub(crate) fn protocol(status: u16, context: impl Into<String>) -> Self {
        GatewayError::Protocol {
            status,
            context: context.into(),
        }
    }

    /// True when the error is the "target absent" case rather than a hard
    /// failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, GatewayError::NotFound { .. })
    }
}

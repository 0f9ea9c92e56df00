//! Wire types for the slice of the GitHub API the application consumes.

use serde::Deserialize;

/// Result of the OAuth code exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
}

/// The profile of the token's owner.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserProfile {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Public profile email; often absent, see the emails endpoint.
    #[serde(default)]
    pub email: Option<String>,
}

/// One entry from the user emails endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Email {
    pub email: String,
    #[serde(default)]
    pub primary: bool,
    #[serde(default)]
    pub verified: bool,
}

/// A hosted repository; only the name is consumed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteRepo {
    pub name: String,
}

//! HTTP client for the identity provider.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::error::GitHubError;
use crate::types::{AccessToken, Email, RemoteRepo, UserProfile};

const API_BASE: &str = "https://api.github.com";
const OAUTH_BASE: &str = "https://github.com";

/// Per-call timeout for GitHub requests.
const TIMEOUT: Duration = Duration::from_secs(15);

/// Client for the slice of the GitHub API the application consumes.
///
/// GitHub requires a User-Agent on every request; the agent string is
/// part of construction, not per call.
pub struct GitHubClient {
    agent: ureq::Agent,
    api_base: String,
    oauth_base: String,
    client_id: String,
    client_secret: String,
    user_agent: String,
}

impl GitHubClient {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Self {
        Self::with_bases(client_id, client_secret, user_agent, API_BASE, OAUTH_BASE)
    }

    /// Construct against alternative base URLs. This is the seam tests
    /// use to point the client at a local server.
    pub fn with_bases(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        user_agent: impl Into<String>,
        api_base: impl Into<String>,
        oauth_base: impl Into<String>,
    ) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().timeout(TIMEOUT).build(),
            api_base: api_base.into(),
            oauth_base: oauth_base.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            user_agent: user_agent.into(),
        }
    }

    /// OAuth: exchange a login `code` for an access token.
    pub fn exchange_code(&self, code: &str) -> Result<AccessToken, GitHubError> {
        let url = format!("{}/login/oauth/access_token", self.oauth_base);
        log::debug!("POST {url}");
        let result = self
            .agent
            .post(&url)
            .set("Accept", "application/json")
            .set("User-Agent", &self.user_agent)
            .send_json(json!({
                "client_id": self.client_id,
                "client_secret": self.client_secret,
                "code": code,
            }));
        let body = read_success(result, "oauth token exchange")?;
        decode(&body, "oauth token exchange")
    }

    /// Profile of the token's owner.
    pub fn user(&self, token: &str) -> Result<UserProfile, GitHubError> {
        let body = self.api_call("GET", "user", token, None, "user profile")?;
        decode(&body, "user profile")
    }

    /// The user's primary email address, when one is listed.
    pub fn primary_email(&self, token: &str) -> Result<Option<String>, GitHubError> {
        let body = self.api_call("GET", "user/emails", token, None, "user emails")?;
        let emails: Vec<Email> = decode(&body, "user emails")?;
        Ok(pick_primary(&emails))
    }

    /// Names of the user's hosted repositories.
    pub fn list_repos(&self, token: &str) -> Result<Vec<String>, GitHubError> {
        let body = self.api_call("GET", "user/repos", token, None, "repository listing")?;
        let repos: Vec<RemoteRepo> = decode(&body, "repository listing")?;
        Ok(repos.into_iter().map(|repo| repo.name).collect())
    }

    /// Create a hosted repository under the user's account.
    pub fn create_repo(&self, token: &str, name: &str) -> Result<(), GitHubError> {
        self.api_call(
            "POST",
            "user/repos",
            token,
            Some(json!({ "name": name })),
            "create repository",
        )
        .map(|_| ())
    }

    /// Clone URL for `owner/name` with the access token embedded, the
    /// form the storage backend expects for its origin remote.
    pub fn origin_url(&self, token: &str, owner: &str, name: &str) -> String {
        format!("https://{token}@github.com/{owner}/{name}.git")
    }

    fn api_call(
        &self,
        method: &str,
        path: &str,
        token: &str,
        body: Option<Value>,
        context: &str,
    ) -> Result<String, GitHubError> {
        let url = format!("{}/{path}", self.api_base);
        log::debug!("{method} {url}");
        let request = self
            .agent
            .request(method, &url)
            .set("User-Agent", &self.user_agent)
            .set("Accept", "application/vnd.github+json")
            .set("Authorization", &format!("token {token}"));
        let result = match body {
            Some(json) => request.send_json(json),
            None => request.call(),
        };
        read_success(result, context)
    }
}

/// First primary address wins; none listed means no primary.
pub(crate) fn pick_primary(emails: &[Email]) -> Option<String> {
    emails
        .iter()
        .find(|entry| entry.primary)
        .map(|entry| entry.email.clone())
}

fn read_success(
    result: Result<ureq::Response, ureq::Error>,
    context: &str,
) -> Result<String, GitHubError> {
    let response = match result {
        Ok(response) => response,
        Err(ureq::Error::Status(status, _)) => {
            return Err(GitHubError::Status {
                status,
                context: context.to_string(),
            })
        }
        Err(ureq::Error::Transport(err)) => return Err(GitHubError::Transport(err.to_string())),
    };
    response
        .into_string()
        .map_err(|err| GitHubError::Transport(err.to_string()))
}

fn decode<T: DeserializeOwned>(body: &str, context: &str) -> Result<T, GitHubError> {
    serde_json::from_str(body).map_err(|source| GitHubError::Decode {
        context: context.to_string(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

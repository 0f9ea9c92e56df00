//! OAuth login exchange and session assembly.

use stratus_core::Author;
use stratus_github::GitHubClient;

use crate::error::AppError;

/// Everything the web layer keeps for a logged-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSession {
    pub access_token: String,
    pub login: String,
    pub name: String,
    pub email: String,
    /// Names of the user's hosted repositories, for the clone picker.
    pub repos: Vec<String>,
}

impl UserSession {
    /// Commit author identity. Name and email may be empty; the backend
    /// accepts them as-is.
    pub fn author(&self) -> Author {
        Author::new(self.name.clone(), self.email.clone())
    }
}

/// Exchange an OAuth `code` and assemble the session: token, then
/// profile, then primary email, then hosted repository names.
///
/// A failed token exchange or profile fetch is fatal. Email and
/// repository listing failures are tolerated; the session keeps whatever
/// the profile already had.
pub fn login(github: &GitHubClient, code: &str) -> Result<UserSession, AppError> {
    let token = github.exchange_code(code)?;
    let profile = github.user(&token.access_token)?;

    let email = match github.primary_email(&token.access_token) {
        Ok(Some(email)) => email,
        Ok(None) => profile.email.clone().unwrap_or_default(),
        Err(err) => {
            log::warn!("email lookup failed for {}: {err}", profile.login);
            profile.email.clone().unwrap_or_default()
        }
    };

    let repos = match github.list_repos(&token.access_token) {
        Ok(repos) => repos,
        Err(err) => {
            log::warn!("repository listing failed for {}: {err}", profile.login);
            Vec::new()
        }
    };

    Ok(UserSession {
        access_token: token.access_token,
        login: profile.login,
        name: profile.name.unwrap_or_default(),
        email,
        repos,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_passes_fields_through() {
        let session = UserSession {
            access_token: "tok".to_string(),
            login: "dcrn".to_string(),
            name: "Dev".to_string(),
            email: "dev@example.com".to_string(),
            repos: vec![],
        };
        let author = session.author();
        assert_eq!(author.name, "Dev");
        assert_eq!(author.email, "dev@example.com");
    }
}

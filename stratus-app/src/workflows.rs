//! Dashboard and editor flows over the storage gateway.
//!
//! Each function is one user action. Guards mirror the original flows:
//! existence check first, then the gateway calls in order, first failure
//! wins. No flow retries anything; the gateway's operations are safe to
//! re-run by the caller.

use chrono::Utc;

use stratus_core::{Author, CommitRequest, GameProject, Owner, RepoName, MANIFEST_FILE};
use stratus_github::GitHubClient;
use stratus_storage::{GatewayError, StorageClient, Transport};

use crate::catalog::{Catalog, Published};
use crate::error::AppError;

/// What [`toggle_publish`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    Published,
    Unpublished,
}

/// One dashboard row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoOverview {
    pub name: RepoName,
    /// Uncommitted changes in the working tree.
    pub dirty: bool,
    pub published: bool,
}

/// Create a repository on the identity provider and on the storage
/// backend, then seed an empty manifest so the editor always finds one.
pub fn initialize_repository<T: Transport>(
    storage: &StorageClient<T>,
    github: &GitHubClient,
    token: &str,
    owner: &Owner,
    repo: &RepoName,
) -> Result<(), AppError> {
    ensure_absent(storage, owner, repo)?;
    github.create_repo(token, &repo.0)?;
    let origin = github.origin_url(token, &owner.0, &repo.0);
    storage.init_repo(owner, repo, &origin)?;
    storage.write_file(owner, repo, MANIFEST_FILE, "{}")?;
    Ok(())
}

/// Bind an existing hosted repository on the storage backend and pull
/// its contents.
pub fn clone_repository<T: Transport>(
    storage: &StorageClient<T>,
    github: &GitHubClient,
    token: &str,
    owner: &Owner,
    repo: &RepoName,
) -> Result<(), AppError> {
    ensure_absent(storage, owner, repo)?;
    let origin = github.origin_url(token, &owner.0, &repo.0);
    storage.init_repo(owner, repo, &origin)?;
    storage.pull_repo(owner, repo)?;
    Ok(())
}

/// Delete a repository, unpublishing it first when it was published.
pub fn delete_repository<T: Transport, C: Catalog>(
    storage: &StorageClient<T>,
    catalog: &mut C,
    owner: &Owner,
    repo: &RepoName,
) -> Result<(), AppError> {
    ensure_exists(storage, owner, repo)?;
    catalog.remove(&owner.0, &repo.0)?;
    storage.delete_repo(owner, repo)?;
    Ok(())
}

/// Translate the working-tree status into a commit and record it.
pub fn commit_changes<T: Transport>(
    storage: &StorageClient<T>,
    owner: &Owner,
    repo: &RepoName,
    message: &str,
    author: &Author,
) -> Result<(), AppError> {
    ensure_exists(storage, owner, repo)?;
    let status = storage.repo_status(owner, repo)?;
    let commit = CommitRequest::from_status(&status, message, author);
    storage.commit_repo(owner, repo, &commit)?;
    Ok(())
}

/// Push to origin. A rejected push is [`AppError::PushRejected`], which
/// carries the "try pulling first" hint; it is not fatal.
pub fn push_repository<T: Transport>(
    storage: &StorageClient<T>,
    owner: &Owner,
    repo: &RepoName,
) -> Result<(), AppError> {
    ensure_exists(storage, owner, repo)?;
    storage.push_repo(owner, repo).map_err(|err| match err {
        GatewayError::Conflict { .. } => AppError::PushRejected { repo: repo.clone() },
        other => AppError::from(other),
    })
}

/// Pull from origin.
pub fn pull_repository<T: Transport>(
    storage: &StorageClient<T>,
    owner: &Owner,
    repo: &RepoName,
) -> Result<(), AppError> {
    ensure_exists(storage, owner, repo)?;
    storage.pull_repo(owner, repo)?;
    Ok(())
}

/// Publish when unpublished, unpublish when published.
pub fn toggle_publish<T: Transport, C: Catalog>(
    storage: &StorageClient<T>,
    catalog: &mut C,
    owner: &Owner,
    repo: &RepoName,
) -> Result<PublishOutcome, AppError> {
    ensure_exists(storage, owner, repo)?;
    if catalog.remove(&owner.0, &repo.0)? {
        return Ok(PublishOutcome::Unpublished);
    }
    catalog.insert(Published {
        author: owner.0.clone(),
        repo: repo.0.clone(),
        timestamp: Utc::now(),
    })?;
    Ok(PublishOutcome::Published)
}

/// Assemble the project for the editor or the public game page.
pub fn load_project<T: Transport>(
    storage: &StorageClient<T>,
    owner: &Owner,
    repo: &RepoName,
) -> Result<GameProject, AppError> {
    ensure_exists(storage, owner, repo)?;
    Ok(storage.game_project(owner, repo)?)
}

/// Newest published games across all authors, for the front page.
pub fn front_page<C: Catalog>(catalog: &C, limit: usize) -> Result<Vec<Published>, AppError> {
    catalog.recent(limit)
}

/// Every published game, sorted by author then repo, for the games index.
pub fn games_index<C: Catalog>(catalog: &C) -> Result<Vec<Published>, AppError> {
    catalog.all()
}

/// Whether `viewer` may open `owner/repo`'s game page. Published games
/// are public; unpublished ones are visible only to their author.
pub fn may_view_game<C: Catalog>(
    catalog: &C,
    owner: &Owner,
    repo: &RepoName,
    viewer: Option<&str>,
) -> Result<bool, AppError> {
    if catalog.find(&owner.0, &repo.0)?.is_some() {
        return Ok(true);
    }
    Ok(viewer == Some(owner.0.as_str()))
}

/// Repository list with per-repo dirty flag and published marker.
///
/// An owner the backend does not know yet shows as an empty dashboard.
/// A repo whose status cannot be fetched is shown clean rather than
/// failing the whole page.
pub fn dashboard<T: Transport, C: Catalog>(
    storage: &StorageClient<T>,
    catalog: &C,
    owner: &Owner,
) -> Result<Vec<RepoOverview>, AppError> {
    let repos = match storage.list_repos(owner) {
        Ok(repos) => repos,
        Err(err) if err.is_not_found() => Vec::new(),
        Err(err) => return Err(err.into()),
    };

    let published = catalog.by_author(&owner.0)?;

    let mut rows = Vec::with_capacity(repos.len());
    for repo in repos {
        let dirty = match storage.repo_status(owner, &repo) {
            Ok(status) => !status.is_clean(),
            Err(err) => {
                log::warn!("status unavailable for {owner}/{repo}: {err}");
                false
            }
        };
        let is_published = published.iter().any(|entry| entry.repo == repo.0);
        rows.push(RepoOverview {
            name: repo,
            dirty,
            published: is_published,
        });
    }
    Ok(rows)
}

fn ensure_exists<T: Transport>(
    storage: &StorageClient<T>,
    owner: &Owner,
    repo: &RepoName,
) -> Result<(), AppError> {
    if storage.repo_exists(owner, repo)? {
        Ok(())
    } else {
        Err(AppError::NoSuchRepo { repo: repo.clone() })
    }
}

fn ensure_absent<T: Transport>(
    storage: &StorageClient<T>,
    owner: &Owner,
    repo: &RepoName,
) -> Result<(), AppError> {
    if storage.repo_exists(owner, repo)? {
        Err(AppError::RepoExists { repo: repo.clone() })
    } else {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests (pure pieces; the HTTP flows live in tests/editor_flows.rs)
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::catalog::MemoryCatalog;

    use super::*;

    #[test]
    fn published_games_are_public() {
        let mut catalog = MemoryCatalog::new();
        catalog
            .insert(Published {
                author: "dcrn".to_string(),
                repo: "mygame".to_string(),
                timestamp: Utc::now(),
            })
            .expect("insert");

        let owner = Owner::from("dcrn");
        let repo = RepoName::from("mygame");
        assert!(may_view_game(&catalog, &owner, &repo, None).expect("view"));
        assert!(may_view_game(&catalog, &owner, &repo, Some("stranger")).expect("view"));
    }

    #[test]
    fn front_page_and_index_expose_both_catalog_orders() {
        let mut catalog = MemoryCatalog::new();
        for (author, repo, hour) in [("b", "two", 3), ("a", "one", 1), ("c", "three", 2)] {
            catalog
                .insert(Published {
                    author: author.to_string(),
                    repo: repo.to_string(),
                    timestamp: Utc.with_ymd_and_hms(2015, 4, 1, hour, 0, 0).unwrap(),
                })
                .expect("insert");
        }

        let front = front_page(&catalog, 2).expect("front page");
        let repos: Vec<&str> = front.iter().map(|game| game.repo.as_str()).collect();
        assert_eq!(repos, vec!["two", "three"]);

        let index = games_index(&catalog).expect("index");
        let authors: Vec<&str> = index.iter().map(|game| game.author.as_str()).collect();
        assert_eq!(authors, vec!["a", "b", "c"]);
    }

    #[test]
    fn unpublished_games_are_author_only() {
        let catalog = MemoryCatalog::new();
        let owner = Owner::from("dcrn");
        let repo = RepoName::from("mygame");

        assert!(!may_view_game(&catalog, &owner, &repo, None).expect("view"));
        assert!(!may_view_game(&catalog, &owner, &repo, Some("stranger")).expect("view"));
        assert!(may_view_game(&catalog, &owner, &repo, Some("dcrn")).expect("view"));
    }
}

//! `stratus init|clone|delete` — repository lifecycle.

use anyhow::{Context as _, Result};
use clap::Args;
use colored::Colorize;

use stratus_app::workflows;
use stratus_core::RepoName;

use crate::context::Context;

/// Arguments for `stratus init`.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Name of the repository to create.
    pub repo: String,
}

impl InitArgs {
    pub fn run(self, ctx: &Context, token: Option<&str>) -> Result<()> {
        let token = require_token(token)?;
        let owner = ctx.owner()?;
        let repo = RepoName::from(self.repo);
        workflows::initialize_repository(&ctx.storage, &ctx.github, token, &owner, &repo)
            .with_context(|| format!("failed to initialize '{repo}'"))?;
        println!("{} '{repo}' initialized locally and remotely", "✓".green());
        Ok(())
    }
}

/// Arguments for `stratus clone`.
#[derive(Args, Debug)]
pub struct CloneArgs {
    /// Name of the hosted repository to clone.
    pub repo: String,
}

impl CloneArgs {
    pub fn run(self, ctx: &Context, token: Option<&str>) -> Result<()> {
        let token = require_token(token)?;
        let owner = ctx.owner()?;
        let repo = RepoName::from(self.repo);
        workflows::clone_repository(&ctx.storage, &ctx.github, token, &owner, &repo)
            .with_context(|| format!("failed to clone '{repo}'"))?;
        println!("{} '{repo}' cloned", "✓".green());
        Ok(())
    }
}

/// Arguments for `stratus delete`.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Name of the repository to delete.
    pub repo: String,
}

impl DeleteArgs {
    pub fn run(self, ctx: &Context) -> Result<()> {
        let owner = ctx.owner()?;
        let repo = RepoName::from(self.repo);
        let mut catalog = ctx.catalog()?;
        workflows::delete_repository(&ctx.storage, &mut catalog, &owner, &repo)
            .with_context(|| format!("failed to delete '{repo}'"))?;
        println!("{} '{repo}' deleted", "✓".green());
        Ok(())
    }
}

fn require_token(token: Option<&str>) -> Result<&str> {
    token.context("a GitHub access token is required; pass --token or set STRATUS_TOKEN")
}

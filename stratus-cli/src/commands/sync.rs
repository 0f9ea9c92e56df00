//! `stratus push|pull` — origin synchronization.

use anyhow::{bail, Context as _, Result};
use clap::Args;
use colored::Colorize;

use stratus_app::{workflows, AppError};
use stratus_core::RepoName;

use crate::context::Context;

/// Arguments for `stratus push`.
#[derive(Args, Debug)]
pub struct PushArgs {
    /// Name of the repository to push.
    pub repo: String,
}

impl PushArgs {
    pub fn run(self, ctx: &Context) -> Result<()> {
        let owner = ctx.owner()?;
        let repo = RepoName::from(self.repo);
        match workflows::push_repository(&ctx.storage, &owner, &repo) {
            Ok(()) => {
                println!("{} '{repo}' pushed to origin", "✓".green());
                Ok(())
            }
            Err(AppError::PushRejected { .. }) => {
                eprintln!("{} push rejected for '{repo}'", "✗".red());
                bail!("origin has newer commits; run `stratus pull {repo}` first");
            }
            Err(err) => Err(err).with_context(|| format!("failed to push '{repo}'")),
        }
    }
}

/// Arguments for `stratus pull`.
#[derive(Args, Debug)]
pub struct PullArgs {
    /// Name of the repository to pull.
    pub repo: String,
}

impl PullArgs {
    pub fn run(self, ctx: &Context) -> Result<()> {
        let owner = ctx.owner()?;
        let repo = RepoName::from(self.repo);
        workflows::pull_repository(&ctx.storage, &owner, &repo)
            .with_context(|| format!("failed to pull '{repo}'"))?;
        println!("{} '{repo}' pulled from origin", "✓".green());
        Ok(())
    }
}

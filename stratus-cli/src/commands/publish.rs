//! `stratus publish` — toggle a game's published state.

use anyhow::{Context as _, Result};
use clap::Args;
use colored::Colorize;

use stratus_app::{workflows, PublishOutcome};
use stratus_core::RepoName;

use crate::context::Context;

/// Arguments for `stratus publish`.
#[derive(Args, Debug)]
pub struct PublishArgs {
    /// Name of the repository whose game to publish or unpublish.
    pub repo: String,
}

impl PublishArgs {
    pub fn run(self, ctx: &Context) -> Result<()> {
        let owner = ctx.owner()?;
        let repo = RepoName::from(self.repo);
        let mut catalog = ctx.catalog()?;
        let outcome = workflows::toggle_publish(&ctx.storage, &mut catalog, &owner, &repo)
            .with_context(|| format!("failed to toggle publish state for '{repo}'"))?;
        match outcome {
            PublishOutcome::Published => println!("{} '{repo}' published", "✓".green()),
            PublishOutcome::Unpublished => println!("{} '{repo}' unpublished", "✓".green()),
        }
        Ok(())
    }
}

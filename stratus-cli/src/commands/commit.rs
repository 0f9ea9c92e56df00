//! `stratus commit` — record all working-tree changes.

use anyhow::{Context as _, Result};
use clap::Args;
use colored::Colorize;

use stratus_app::workflows;
use stratus_core::{Author, RepoName};

use crate::context::Context;

/// Arguments for `stratus commit`.
#[derive(Args, Debug)]
pub struct CommitArgs {
    /// Name of the repository to commit in.
    pub repo: String,

    /// Commit message.
    #[arg(short, long)]
    pub message: String,

    /// Author name recorded in the commit.
    #[arg(long, default_value = "")]
    pub name: String,

    /// Author email recorded in the commit.
    #[arg(long, default_value = "")]
    pub email: String,
}

impl CommitArgs {
    pub fn run(self, ctx: &Context) -> Result<()> {
        let owner = ctx.owner()?;
        let repo = RepoName::from(self.repo);
        let author = Author::new(self.name, self.email);
        workflows::commit_changes(&ctx.storage, &owner, &repo, &self.message, &author)
            .with_context(|| format!("failed to commit in '{repo}'"))?;
        println!("{} changes committed in '{repo}'", "✓".green());
        Ok(())
    }
}

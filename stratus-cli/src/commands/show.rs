//! `stratus show` — print a repository's assembled game project.

use anyhow::{Context as _, Result};
use clap::Args;
use colored::Colorize;
use serde_json::json;

use stratus_app::workflows;
use stratus_core::RepoName;

use crate::context::Context;

/// Arguments for `stratus show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Name of the repository to show.
    pub repo: String,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl ShowArgs {
    pub fn run(self, ctx: &Context) -> Result<()> {
        let owner = ctx.owner()?;
        let repo = RepoName::from(self.repo);
        let project = workflows::load_project(&ctx.storage, &owner, &repo)
            .with_context(|| format!("failed to load the game project for '{repo}'"))?;

        if self.json {
            let payload = json!({
                "manifest": project.manifest,
                "components": project.components,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
            return Ok(());
        }

        println!("{}", format!("{owner}/{repo}").bold());
        println!("manifest: {}", serde_json::to_string(&project.manifest)?);
        println!("components: {}", project.components.len());
        for (index, source) in project.components.iter().enumerate() {
            println!("  [{index}] {} bytes", source.len());
        }
        Ok(())
    }
}

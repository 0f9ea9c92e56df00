//! `stratus list` — the user's repositories at a glance.

use anyhow::{Context as _, Result};
use clap::Args;
use colored::Colorize;
use serde_json::json;

use stratus_app::workflows;

use crate::context::Context;

/// Arguments for `stratus list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    pub fn run(self, ctx: &Context) -> Result<()> {
        let owner = ctx.owner()?;
        let catalog = ctx.catalog()?;
        let rows = workflows::dashboard(&ctx.storage, &catalog, &owner)
            .with_context(|| format!("failed to list repositories for '{owner}'"))?;

        if self.json {
            let payload: Vec<_> = rows
                .iter()
                .map(|row| {
                    json!({
                        "name": row.name.0,
                        "dirty": row.dirty,
                        "published": row.published,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&payload)?);
            return Ok(());
        }

        if rows.is_empty() {
            println!("No repositories for '{owner}'.");
            return Ok(());
        }

        for row in rows {
            let dirty = if row.dirty {
                "modified".yellow().to_string()
            } else {
                "clean".green().to_string()
            };
            let published = if row.published {
                format!("  {}", "published".cyan())
            } else {
                String::new()
            };
            println!("{:<24} {dirty}{published}", row.name.0.bold());
        }
        Ok(())
    }
}

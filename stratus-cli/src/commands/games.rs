//! `stratus games` — published games across all authors.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde_json::json;

use stratus_app::workflows;

use crate::context::Context;

/// Arguments for `stratus games`.
#[derive(Args, Debug)]
pub struct GamesArgs {
    /// Show only the N most recently published games, newest first.
    #[arg(long, value_name = "N")]
    pub recent: Option<usize>,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl GamesArgs {
    pub fn run(self, ctx: &Context) -> Result<()> {
        let catalog = ctx.catalog()?;
        let games = match self.recent {
            Some(limit) => workflows::front_page(&catalog, limit)?,
            None => workflows::games_index(&catalog)?,
        };

        if self.json {
            let payload: Vec<_> = games
                .iter()
                .map(|game| {
                    json!({
                        "author": game.author,
                        "repo": game.repo,
                        "published_at": game.timestamp.to_rfc3339(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&payload)?);
            return Ok(());
        }

        if games.is_empty() {
            println!("No published games.");
            return Ok(());
        }

        for game in games {
            println!(
                "{:<32} {}",
                format!("{}/{}", game.author, game.repo).bold(),
                game.timestamp
                    .format("%Y-%m-%d %H:%M")
                    .to_string()
                    .bright_black()
            );
        }
        Ok(())
    }
}

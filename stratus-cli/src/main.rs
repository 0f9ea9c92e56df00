//! Stratus — browser-game backend CLI.
//!
//! # Usage
//!
//! ```text
//! stratus list [--json]
//! stratus init <repo>
//! stratus clone <repo>
//! stratus delete <repo>
//! stratus commit <repo> -m <message> [--name ...] [--email ...]
//! stratus push <repo>
//! stratus pull <repo>
//! stratus publish <repo>
//! stratus show <repo> [--json]
//! stratus games [--recent N] [--json]
//! ```
//!
//! Every command talks to the storage backend named in
//! `~/.stratus/config.yaml`; `init` and `clone` additionally need a
//! GitHub access token (`--token` or `STRATUS_TOKEN`).

mod commands;
mod context;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    commit::CommitArgs,
    games::GamesArgs,
    list::ListArgs,
    publish::PublishArgs,
    repo::{CloneArgs, DeleteArgs, InitArgs},
    show::ShowArgs,
    sync::{PullArgs, PushArgs},
};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "stratus",
    version,
    about = "Manage game repositories on a Stratus storage backend",
    long_about = None,
)]
struct Cli {
    /// Config file (default: ~/.stratus/config.yaml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Act as this user. Repositories live under the user's namespace.
    #[arg(long, global = true)]
    user: Option<String>,

    /// GitHub access token, needed by `init` and `clone`.
    #[arg(long, global = true, env = "STRATUS_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the user's repositories with dirty and published markers.
    List(ListArgs),

    /// Create a repository on GitHub and on the storage backend.
    Init(InitArgs),

    /// Bind an existing GitHub repository and pull its contents.
    Clone(CloneArgs),

    /// Delete a repository from the storage backend.
    Delete(DeleteArgs),

    /// Commit all working-tree changes.
    Commit(CommitArgs),

    /// Push committed changes to origin.
    Push(PushArgs),

    /// Pull from origin.
    Pull(PullArgs),

    /// Toggle the published state of a repository's game.
    Publish(PublishArgs),

    /// Print a repository's assembled game project.
    Show(ShowArgs),

    /// List published games across all authors.
    Games(GamesArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let ctx = context::Context::load(cli.config.as_deref(), cli.user.as_deref())?;
    match cli.command {
        Commands::List(args) => args.run(&ctx),
        Commands::Init(args) => args.run(&ctx, cli.token.as_deref()),
        Commands::Clone(args) => args.run(&ctx, cli.token.as_deref()),
        Commands::Delete(args) => args.run(&ctx),
        Commands::Commit(args) => args.run(&ctx),
        Commands::Push(args) => args.run(&ctx),
        Commands::Pull(args) => args.run(&ctx),
        Commands::Publish(args) => args.run(&ctx),
        Commands::Show(args) => args.run(&ctx),
        Commands::Games(args) => args.run(&ctx),
    }
}

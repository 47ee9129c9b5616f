//! modules CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use commands::{MakeMigrationCommand, StubsCommand};
use modules_cli_lib::{observability, MigrationRequest, ModulesConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "modules")]
#[command(version)]
#[command(about = "Scaffold database migrations for application modules", long_about = None)]
struct Cli {
    /// Project root directory
    #[arg(long, global = true, default_value = ".")]
    project: PathBuf,

    /// Configuration file (defaults to `<project>/modules.toml`)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new migration file for a module
    #[command(name = "make:migration")]
    MakeMigration {
        /// Module slug (e.g. `blog`)
        slug: String,
        /// Table name (e.g. `post`)
        table: String,
        /// Migration name (e.g. `add_author_to_posts`); selects the edit stub
        #[arg(long)]
        name: Option<String>,
        /// Skip the autoload refresh after writing the migration
        #[arg(long)]
        no_refresh: bool,
    },
    /// Manage migration stubs
    Stubs {
        #[command(subcommand)]
        command: StubsCommand,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    observability::init(cli.verbose, cli.log_json)?;

    let config = ModulesConfig::load(&cli.project, cli.config.as_deref())
        .context("Failed to load configuration")?;

    match cli.command {
        Commands::MakeMigration {
            slug,
            table,
            name,
            no_refresh,
        } => {
            let request = MigrationRequest::new(slug, table, name);
            let cmd = MakeMigrationCommand::new(request, cli.project, no_refresh);
            cmd.execute(&config)?;
        }
        Commands::Stubs { command } => {
            command.execute(&config, &cli.project)?;
        }
    }

    Ok(())
}

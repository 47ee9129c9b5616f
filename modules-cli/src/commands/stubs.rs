//! Stub management commands
//!
//! - `path` - Show where each migration stub is loaded from
//! - `publish` - Copy the built-in stubs into the user stub directory

use anyhow::Result;
use clap::Subcommand;
use console::{style, Emoji};
use std::path::{Path, PathBuf};

use modules_cli_lib::{ModulesConfig, StubKind, StubManager, TemplateSet};

static CHECK: Emoji<'_, '_> = Emoji("✓ ", "");
static SKIP: Emoji<'_, '_> = Emoji("- ", "");

/// Stub management subcommands
#[derive(Subcommand)]
pub enum StubsCommand {
    /// Show where each stub of the active template set resolves
    Path,
    /// Publish the built-in stubs for customization
    Publish {
        /// Target directory (defaults to the user stub directory of the active set)
        #[arg(long)]
        dir: Option<PathBuf>,
        /// Overwrite stubs that already exist
        #[arg(long)]
        force: bool,
    },
}

impl StubsCommand {
    pub fn execute(self, config: &ModulesConfig, project_root: &Path) -> Result<()> {
        match self {
            Self::Path => show_paths(config, project_root),
            Self::Publish { dir, force } => publish(config, dir, force),
        }
    }
}

fn show_paths(config: &ModulesConfig, project_root: &Path) -> Result<()> {
    let set = TemplateSet::from_settings(&config.stubs, project_root)?;

    println!("Template set: {}", style(set.name()).cyan().bold());
    for kind in StubKind::ALL {
        println!("  {:<20} {}", kind.file_name(), style(set.resolve(kind)).dim());
    }

    Ok(())
}

fn publish(config: &ModulesConfig, dir: Option<PathBuf>, force: bool) -> Result<()> {
    let manager = match dir {
        Some(dir) => StubManager::in_dir(dir),
        None => StubManager::for_set(&config.stubs.set)?,
    };

    println!(
        "Publishing stubs to {}",
        style(manager.stub_dir().display()).cyan()
    );

    for stub in manager.publish(force)? {
        if stub.written {
            println!("  {CHECK}{}", style(stub.kind).green());
        } else {
            println!(
                "  {SKIP}{} {}",
                style(stub.kind).dim(),
                style("(exists, use --force to overwrite)").dim()
            );
        }
    }

    Ok(())
}

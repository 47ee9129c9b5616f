//! `make:migration` command
//!
//! # Example
//!
//! ```bash
//! modules make:migration blog post
//! modules make:migration blog post --name add_author_to_posts
//! ```

use anyhow::{Context, Result};
use console::style;
use std::path::PathBuf;
use tracing::warn;

use modules_cli_lib::{
    CommandRebuilder, ConsoleOutput, DirectoryRegistry, GeneratorOptions, LocalFilesystem,
    MigrationRequest, MigrationScaffolder, ModulesConfig, ScaffoldOutcome, TemplateSet,
};

pub struct MakeMigrationCommand {
    request: MigrationRequest,
    project_root: PathBuf,
    no_refresh: bool,
}

impl MakeMigrationCommand {
    pub const fn new(request: MigrationRequest, project_root: PathBuf, no_refresh: bool) -> Self {
        Self {
            request,
            project_root,
            no_refresh,
        }
    }

    pub fn execute(&self, config: &ModulesConfig) -> Result<()> {
        let mut options = GeneratorOptions::from_config(config);
        if self.no_refresh {
            options.refresh = false;
        }

        let templates = TemplateSet::from_settings(&config.stubs, &self.project_root)
            .context("Failed to load migration stubs")?;

        let scaffolder = MigrationScaffolder::new(
            DirectoryRegistry::new(config.modules_root(&self.project_root)),
            LocalFilesystem,
            CommandRebuilder::from_settings(&config.refresh, &self.project_root),
            templates,
            options,
        );

        let outcome = scaffolder
            .generate(&self.request, &mut ConsoleOutput)
            .context("Failed to generate migration")?;

        if let ScaffoldOutcome::Created {
            path,
            refresh: Some(status),
            ..
        } = &outcome
        {
            if !status.success() {
                warn!(path = %path.display(), code = ?status.exit_code, "refresh exited unsuccessfully");
                println!(
                    "  {} {}",
                    style("!").yellow(),
                    style(format!(
                        "`{}` exited with {}",
                        config.refresh.program,
                        status
                            .exit_code
                            .map_or_else(|| "a signal".to_string(), |code| format!("code {code}"))
                    ))
                    .dim()
                );
            }
        }

        Ok(())
    }
}

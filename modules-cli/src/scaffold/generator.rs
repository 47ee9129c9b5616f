//! Migration scaffold generator
//!
//! Turns a [`MigrationRequest`] into a timestamped migration file inside the
//! target module, then refreshes the autoloader.

use chrono::{Local, NaiveDateTime};
use std::path::PathBuf;
use tracing::{debug, info};

use super::context::{Destination, MigrationRequest, ScaffoldContext};
use crate::config::ModulesConfig;
use crate::error::{Result, ScaffoldError};
use crate::filesystem::Filesystem;
use crate::output::OutputSink;
use crate::rebuild::{RefreshStatus, Rebuilder};
use crate::registry::ModuleRegistry;
use crate::templates::{render_stub, StubSource, TemplateSet};

/// Outcome of a scaffold request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    /// The migration file was written
    Created {
        /// Module the migration belongs to
        module_name: String,
        /// Generated filename
        filename: String,
        /// Full path of the written file
        path: PathBuf,
        /// Refresh status, `None` when refresh is disabled
        refresh: Option<RefreshStatus>,
    },
    /// The module does not exist; nothing was written
    ModuleMissing {
        /// Module that was looked up
        module_name: String,
    },
}

/// Settings the generator needs from configuration
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Migration directory inside a module
    pub migrations_dir: PathBuf,
    /// Generated file extension
    pub extension: String,
    /// Filename timestamp format
    pub timestamp_format: String,
    /// Run the refresh after writing
    pub refresh: bool,
}

impl GeneratorOptions {
    /// Options from configuration
    #[must_use]
    pub fn from_config(config: &ModulesConfig) -> Self {
        Self {
            migrations_dir: config.modules.migrations.clone(),
            extension: config.migrations.extension.clone(),
            timestamp_format: config.migrations.timestamp_format.clone(),
            refresh: config.refresh.enabled,
        }
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self::from_config(&ModulesConfig::default())
    }
}

/// Migration scaffold generator
pub struct MigrationScaffolder<R, F, B> {
    registry: R,
    filesystem: F,
    rebuilder: B,
    templates: TemplateSet,
    options: GeneratorOptions,
}

impl<R, F, B> MigrationScaffolder<R, F, B>
where
    R: ModuleRegistry,
    F: Filesystem,
    B: Rebuilder,
{
    /// Create a new scaffold generator
    pub fn new(
        registry: R,
        filesystem: F,
        rebuilder: B,
        templates: TemplateSet,
        options: GeneratorOptions,
    ) -> Self {
        Self {
            registry,
            filesystem,
            rebuilder,
            templates,
            options,
        }
    }

    /// Generate a migration stamped with the current local time
    ///
    /// # Errors
    ///
    /// See [`Self::generate_at`].
    pub fn generate(
        &self,
        request: &MigrationRequest,
        output: &mut dyn OutputSink,
    ) -> Result<ScaffoldOutcome> {
        self.generate_at(request, Local::now().naive_local(), output)
    }

    /// Generate a migration stamped with `now`
    ///
    /// A missing module is reported through `output` and returned as
    /// [`ScaffoldOutcome::ModuleMissing`]; nothing is written and the refresh
    /// does not run.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the stub cannot be read
    /// - the migration cannot be written (the directory is not created)
    /// - the refresh command cannot be started; the migration is already
    ///   written at that point
    pub fn generate_at(
        &self,
        request: &MigrationRequest,
        now: NaiveDateTime,
        output: &mut dyn OutputSink,
    ) -> Result<ScaffoldOutcome> {
        let ctx = ScaffoldContext::from_request(request);
        debug!(
            module = %ctx.module_name,
            table = %ctx.table,
            migration = %ctx.migration_name,
            class = %ctx.class_name,
            "resolved migration names"
        );

        if !self.registry.exists(&ctx.module_name) {
            info!(module = %ctx.module_name, "module not found");
            output.info(&format!("Module [{}] does not exist.", ctx.module_name));
            return Ok(ScaffoldOutcome::ModuleMissing {
                module_name: ctx.module_name,
            });
        }

        let destination = Destination::new(
            &self.registry.module_path(&ctx.module_name),
            &self.options.migrations_dir,
            ctx.filename(now, &self.options.timestamp_format, &self.options.extension)?,
        );

        let stub = self.load_stub(&ctx)?;
        let content = render_stub(&stub, &ctx.class_name, &ctx.table);

        let path = destination.path();
        let bytes = self
            .filesystem
            .write(&path, &content)
            .map_err(|source| ScaffoldError::Write {
                path: path.clone(),
                source,
            })?;
        info!(path = %path.display(), bytes, "migration written");

        output.info(&format!(
            "Created Module Migration: [{}] {}",
            ctx.module_name, destination.filename
        ));

        let refresh = if self.options.refresh {
            Some(self.rebuilder.refresh()?)
        } else {
            None
        };

        Ok(ScaffoldOutcome::Created {
            module_name: ctx.module_name,
            filename: destination.filename,
            path,
            refresh,
        })
    }

    fn load_stub(&self, ctx: &ScaffoldContext) -> Result<String> {
        let source = self.templates.resolve(ctx.stub);
        debug!(stub = %ctx.stub, set = self.templates.name(), source = %source, "loading stub");

        match source {
            StubSource::Embedded(content) => Ok(content.to_string()),
            StubSource::File(path) => self
                .filesystem
                .read(&path)
                .map_err(|source| ScaffoldError::ReadStub { path, source }),
        }
    }
}

//! Request and derived naming context for a migration

use super::helpers::TemplateHelpers;
use crate::error::{Result, ScaffoldError};
use crate::templates::StubKind;
use chrono::NaiveDateTime;
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// A request to scaffold a migration for a module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationRequest {
    /// Module slug, any casing (e.g. `blog`)
    pub module_slug: String,
    /// Table name, singular or plural (e.g. `post`)
    pub table: String,
    /// Explicit migration name (e.g. `add_author_to_posts`)
    pub migration_name: Option<String>,
}

impl MigrationRequest {
    /// Create a new request
    pub fn new(
        module_slug: impl Into<String>,
        table: impl Into<String>,
        migration_name: Option<String>,
    ) -> Self {
        Self {
            module_slug: module_slug.into(),
            table: table.into(),
            migration_name,
        }
    }
}

/// Names derived from a [`MigrationRequest`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldContext {
    /// Module name in `StudlyCase`
    pub module_name: String,
    /// Lowercase plural table name
    pub table: String,
    /// Migration name in `snake_case`
    pub migration_name: String,
    /// Migration class name in `StudlyCase`
    pub class_name: String,
    /// Stub used to render the migration
    pub stub: StubKind,
}

impl ScaffoldContext {
    /// Derive the naming context for a request
    ///
    /// The edit stub is chosen exactly when the request names the migration.
    #[must_use]
    pub fn from_request(request: &MigrationRequest) -> Self {
        let module_name = TemplateHelpers::to_studly_case(&request.module_slug);
        let table = TemplateHelpers::to_table_name(&request.table);
        let migration_name = request.migration_name.as_deref().map_or_else(
            || TemplateHelpers::default_migration_name(&table),
            TemplateHelpers::to_snake_case,
        );
        let class_name = TemplateHelpers::to_class_name(&migration_name);
        let stub = if request.migration_name.is_some() {
            StubKind::Edit
        } else {
            StubKind::Create
        };

        Self {
            module_name,
            table,
            migration_name,
            class_name,
            stub,
        }
    }

    /// Timestamp-prefixed migration filename
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::TimestampFormat`] if `timestamp_format` is not
    /// a valid `chrono` format string.
    pub fn filename(
        &self,
        now: NaiveDateTime,
        timestamp_format: &str,
        extension: &str,
    ) -> Result<String> {
        let mut filename = String::new();
        write!(
            filename,
            "{}_{}.{extension}",
            now.format(timestamp_format),
            self.migration_name
        )
        .map_err(|_| ScaffoldError::TimestampFormat(timestamp_format.to_string()))?;
        Ok(filename)
    }
}

/// Where a migration is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    /// Migration directory of the module
    pub directory: PathBuf,
    /// Migration filename
    pub filename: String,
}

impl Destination {
    /// Create a destination inside a module's migration directory
    #[must_use]
    pub fn new(module_path: &Path, migrations_dir: &Path, filename: String) -> Self {
        Self {
            directory: module_path.join(migrations_dir),
            filename,
        }
    }

    /// Full path of the migration file
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }
}

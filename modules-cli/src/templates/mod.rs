//! Migration stubs and placeholder substitution
//!
//! A migration is rendered from one of two stubs: the plain "create" stub used
//! for default `create_<table>_table` migrations, and the "edit" stub used
//! whenever a migration name is given explicitly. Both stubs belong to a named
//! template set selected through configuration.
//!
//! Each stub resolves, in order, to:
//! 1. the configured stub directory, when one is set
//! 2. the user override directory for the set, when the file exists there
//! 3. the stub compiled into the binary

use regex::Regex;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::config::StubSettings;
use crate::error::{Result, ScaffoldError};

pub mod manager;
pub mod stubs;

pub use manager::StubManager;

/// Placeholder replaced by the migration class name
pub const CLASS_NAME_PLACEHOLDER: &str = "{{migrationName}}";

/// Placeholder replaced by the table name
pub const TABLE_PLACEHOLDER: &str = "{{table}}";

/// Name of the template set compiled into the binary
pub const DEFAULT_SET: &str = "default";

static PLACEHOLDERS: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        "{}|{}",
        regex::escape(CLASS_NAME_PLACEHOLDER),
        regex::escape(TABLE_PLACEHOLDER)
    );
    Regex::new(&pattern).expect("placeholder pattern is a valid regex")
});

/// Which of the two migration stubs to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubKind {
    /// Creates a new table
    Create,
    /// Alters an existing table
    Edit,
}

impl StubKind {
    /// All stub kinds
    pub const ALL: [Self; 2] = [Self::Create, Self::Edit];

    /// File name of the stub inside a template set
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Create => "migration.stub",
            Self::Edit => "migrationedit.stub",
        }
    }

    /// Built-in content for this stub
    #[must_use]
    pub const fn embedded(self) -> &'static str {
        match self {
            Self::Create => stubs::MIGRATION_CREATE,
            Self::Edit => stubs::MIGRATION_EDIT,
        }
    }
}

impl fmt::Display for StubKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Where a stub's text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StubSource {
    /// Compiled into the binary
    Embedded(&'static str),
    /// Read from disk when rendering
    File(PathBuf),
}

impl fmt::Display for StubSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded(_) => f.write_str("<built-in>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A named pair of migration stubs
#[derive(Debug, Clone)]
pub struct TemplateSet {
    name: String,
    stub_dir: Option<PathBuf>,
    user_dir: Option<PathBuf>,
}

impl TemplateSet {
    /// Create a template set
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::UnknownTemplateSet`] if the set is not built in
    /// and neither `stub_dir` nor `user_dir` exists on disk.
    pub fn new(name: &str, stub_dir: Option<PathBuf>, user_dir: Option<PathBuf>) -> Result<Self> {
        let has_dir = stub_dir.is_some() || user_dir.as_deref().is_some_and(Path::is_dir);
        if name != DEFAULT_SET && !has_dir {
            return Err(ScaffoldError::UnknownTemplateSet(name.to_string()));
        }

        Ok(Self {
            name: name.to_string(),
            stub_dir,
            user_dir,
        })
    }

    /// Build the template set described by configuration
    ///
    /// A relative `stubs.path` is resolved against `project_root`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured set is unknown.
    pub fn from_settings(settings: &StubSettings, project_root: &Path) -> Result<Self> {
        let stub_dir = settings.path.as_ref().map(|path| project_root.join(path));
        let user_dir = StubManager::user_dir(&settings.set).ok();
        Self::new(&settings.set, stub_dir, user_dir)
    }

    /// Set name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolve where a stub is loaded from
    #[must_use]
    pub fn resolve(&self, kind: StubKind) -> StubSource {
        if let Some(dir) = &self.stub_dir {
            return StubSource::File(dir.join(kind.file_name()));
        }

        if let Some(dir) = &self.user_dir {
            let path = dir.join(kind.file_name());
            if path.is_file() || self.name != DEFAULT_SET {
                return StubSource::File(path);
            }
        }

        StubSource::Embedded(kind.embedded())
    }
}

/// Replace both placeholders in a stub
///
/// Every occurrence of [`CLASS_NAME_PLACEHOLDER`] becomes `class_name` and
/// every occurrence of [`TABLE_PLACEHOLDER`] becomes `table`, in a single
/// left-to-right pass. Substituted text is never rescanned.
///
/// # Examples
///
/// ```
/// # use modules_cli_lib::templates::render_stub;
/// let out = render_stub("class {{migrationName}} on {{table}}", "CreatePostsTable", "posts");
/// assert_eq!(out, "class CreatePostsTable on posts");
/// ```
#[must_use]
pub fn render_stub(template: &str, class_name: &str, table: &str) -> String {
    PLACEHOLDERS
        .replace_all(template, |caps: &regex::Captures<'_>| {
            if &caps[0] == CLASS_NAME_PLACEHOLDER {
                class_name
            } else {
                table
            }
        })
        .into_owned()
}

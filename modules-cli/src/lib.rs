//! Module migration scaffolding library
//!
//! Generates timestamped database migrations inside an application's modules
//! from a pair of stub templates, then refreshes the dependency autoloader.
//!
//! # Example
//!
//! ```rust,no_run
//! use modules_cli_lib::{
//!     CommandRebuilder, ConsoleOutput, DirectoryRegistry, GeneratorOptions, LocalFilesystem,
//!     MigrationRequest, MigrationScaffolder, ModulesConfig, TemplateSet,
//! };
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let root = Path::new(".");
//! let config = ModulesConfig::load(root, None)?;
//! let scaffolder = MigrationScaffolder::new(
//!     DirectoryRegistry::new(config.modules_root(root)),
//!     LocalFilesystem,
//!     CommandRebuilder::from_settings(&config.refresh, root),
//!     TemplateSet::from_settings(&config.stubs, root)?,
//!     GeneratorOptions::from_config(&config),
//! );
//! scaffolder.generate(&MigrationRequest::new("blog", "post", None), &mut ConsoleOutput)?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod filesystem;
pub mod observability;
pub mod output;
pub mod rebuild;
pub mod registry;
pub mod scaffold;
pub mod templates;

pub use config::ModulesConfig;
pub use error::{Result, ScaffoldError};
pub use filesystem::{Filesystem, LocalFilesystem};
pub use output::{ConsoleOutput, OutputSink, RecordingOutput};
pub use rebuild::{CommandRebuilder, Rebuilder, RefreshStatus};
pub use registry::{DirectoryRegistry, ModuleRegistry};
pub use scaffold::{
    GeneratorOptions, MigrationRequest, MigrationScaffolder, ScaffoldContext, ScaffoldOutcome,
    TemplateHelpers,
};
pub use templates::{StubKind, StubManager, TemplateSet};

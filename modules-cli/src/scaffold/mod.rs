//! Migration scaffolding
//!
//! Derives names from a request, renders the chosen stub and writes the
//! migration into the module's migration directory.

pub mod context;
pub mod generator;
pub mod helpers;

pub use context::{Destination, MigrationRequest, ScaffoldContext};
pub use generator::{GeneratorOptions, MigrationScaffolder, ScaffoldOutcome};
pub use helpers::TemplateHelpers;

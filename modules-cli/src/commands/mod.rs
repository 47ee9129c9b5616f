//! CLI command implementations

pub mod make_migration;
pub mod stubs;

pub use make_migration::MakeMigrationCommand;
pub use stubs::StubsCommand;

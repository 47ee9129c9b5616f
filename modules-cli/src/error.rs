//! Error types for migration scaffolding

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Scaffolding error type
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// A stub file could not be read
    #[error("Failed to read stub {}: {source}", .path.display())]
    ReadStub {
        /// Path of the stub that was requested
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The generated migration could not be written
    #[error("Failed to write migration {}: {source}", .path.display())]
    Write {
        /// Destination path of the migration
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The autoload refresh command could not be started
    #[error("Failed to run refresh command `{command}`: {source}")]
    Refresh {
        /// Command line that was attempted
        command: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The filename timestamp format is not a valid `chrono` format
    #[error("Invalid timestamp format: '{0}'")]
    TimestampFormat(String),

    /// The configured template set is not known
    #[error("Unknown template set: '{0}'")]
    UnknownTemplateSet(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// Built-in defaults could not be serialized
    #[error("Failed to serialize default configuration: {0}")]
    Defaults(#[from] toml::ser::Error),
}

impl From<figment::Error> for ScaffoldError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

/// Result alias for scaffolding operations
pub type Result<T> = std::result::Result<T, ScaffoldError>;

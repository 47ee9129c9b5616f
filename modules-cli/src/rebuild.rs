//! Autoload refresh after a migration is written

use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, info};

use crate::config::RefreshSettings;
use crate::error::{Result, ScaffoldError};

/// Exit status of a refresh run, passed through uninterpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshStatus {
    /// Process exit code, `None` if terminated by a signal
    pub exit_code: Option<i32>,
}

impl RefreshStatus {
    /// Whether the process exited with code 0
    #[must_use]
    pub const fn success(&self) -> bool {
        matches!(self.exit_code, Some(0))
    }
}

/// Refreshes the dependency autoloader
#[cfg_attr(test, mockall::automock)]
pub trait Rebuilder {
    /// Run the refresh, blocking until it finishes
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Refresh`] if the refresh cannot be started.
    fn refresh(&self) -> Result<RefreshStatus>;
}

impl<T: Rebuilder + ?Sized> Rebuilder for &T {
    fn refresh(&self) -> Result<RefreshStatus> {
        (**self).refresh()
    }
}

/// [`Rebuilder`] that runs an external command
///
/// The child inherits stdout and stderr, so its output reaches the terminal
/// unchanged.
#[derive(Debug, Clone)]
pub struct CommandRebuilder {
    program: String,
    args: Vec<String>,
    working_dir: PathBuf,
}

impl CommandRebuilder {
    /// Create a rebuilder running `program args...` in `working_dir`
    pub fn new(program: impl Into<String>, args: Vec<String>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args,
            working_dir: working_dir.into(),
        }
    }

    /// Create a rebuilder from configuration
    pub fn from_settings(settings: &RefreshSettings, working_dir: impl Into<PathBuf>) -> Self {
        Self::new(settings.program.clone(), settings.args.clone(), working_dir)
    }

    /// Command line as shown to users
    #[must_use]
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Rebuilder for CommandRebuilder {
    fn refresh(&self) -> Result<RefreshStatus> {
        let command_line = self.command_line();
        debug!(command = %command_line, dir = %self.working_dir.display(), "running refresh");

        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(&self.working_dir)
            .status()
            .map_err(|source| ScaffoldError::Refresh {
                command: command_line.clone(),
                source,
            })?;

        info!(command = %command_line, code = ?status.code(), "refresh finished");
        Ok(RefreshStatus {
            exit_code: status.code(),
        })
    }
}

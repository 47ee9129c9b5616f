//! Module lookup

use std::path::PathBuf;

/// Registry of the application's modules
#[cfg_attr(test, mockall::automock)]
pub trait ModuleRegistry {
    /// Whether a module with this `StudlyCase` name exists
    fn exists(&self, module_name: &str) -> bool;

    /// Root directory of a module
    fn module_path(&self, module_name: &str) -> PathBuf;
}

/// Registry backed by a directory holding one sub-directory per module
#[derive(Debug, Clone)]
pub struct DirectoryRegistry {
    root: PathBuf,
}

impl DirectoryRegistry {
    /// Create a registry over `root` (e.g. `app/Modules`)
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory containing the modules
    #[must_use]
    pub fn root(&self) -> &PathBuf {
        &self.root
    }
}

impl ModuleRegistry for DirectoryRegistry {
    fn exists(&self, module_name: &str) -> bool {
        !module_name.is_empty() && self.module_path(module_name).is_dir()
    }

    fn module_path(&self, module_name: &str) -> PathBuf {
        self.root.join(module_name)
    }
}

//! File access used by the scaffolder

use std::fs;
use std::io;
use std::path::Path;

/// Reads stubs and writes generated files
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem {
    /// Read a whole file as UTF-8; fails if the path does not exist
    fn read(&self, path: &Path) -> io::Result<String>;

    /// Create or truncate `path` and write `contents`, returning bytes written
    ///
    /// Parent directories are not created.
    fn write(&self, path: &Path, contents: &str) -> io::Result<usize>;
}

/// [`Filesystem`] over the local disk
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl Filesystem for LocalFilesystem {
    fn read(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<usize> {
        fs::write(path, contents)?;
        Ok(contents.len())
    }
}

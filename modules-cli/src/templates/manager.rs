//! User stub directory management
//!
//! Stubs can be customized per user by placing them in the XDG config
//! directory. This module locates that directory and publishes the built-in
//! stubs into it as a starting point.

use super::StubKind;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Result of publishing a single stub
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedStub {
    /// Stub that was considered
    pub kind: StubKind,
    /// Destination path
    pub path: PathBuf,
    /// Whether the file was written (false when it already existed)
    pub written: bool,
}

/// Manager for a directory of user-editable stubs
pub struct StubManager {
    stub_dir: PathBuf,
}

impl StubManager {
    /// Create a manager for the user override directory of a template set
    ///
    /// Stubs live in `$XDG_CONFIG_HOME/modules/stubs/<set>/` or
    /// `~/.config/modules/stubs/<set>/` if `XDG_CONFIG_HOME` is not set.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined.
    pub fn for_set(set: &str) -> Result<Self> {
        Ok(Self {
            stub_dir: Self::user_dir(set)?,
        })
    }

    /// Create a manager for an explicit directory
    #[must_use]
    pub fn in_dir(stub_dir: impl Into<PathBuf>) -> Self {
        Self {
            stub_dir: stub_dir.into(),
        }
    }

    /// Get the XDG config directory for a template set
    ///
    /// # Errors
    ///
    /// Returns an error if `XDG_CONFIG_HOME` is unset and the home directory
    /// cannot be determined.
    pub fn user_dir(set: &str) -> Result<PathBuf> {
        let config_dir = if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            PathBuf::from(xdg_config)
        } else {
            dirs::home_dir()
                .context("Could not determine home directory")?
                .join(".config")
        };

        Ok(config_dir.join("modules").join("stubs").join(set))
    }

    /// Stub directory managed by this instance
    #[must_use]
    pub fn stub_dir(&self) -> &Path {
        &self.stub_dir
    }

    /// Stubs not yet present in the directory
    #[must_use]
    pub fn missing_stubs(&self) -> Vec<StubKind> {
        StubKind::ALL
            .into_iter()
            .filter(|kind| !self.stub_dir.join(kind.file_name()).exists())
            .collect()
    }

    /// Write the built-in stubs into the directory
    ///
    /// Existing files are kept unless `force` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or a stub cannot be
    /// written.
    pub fn publish(&self, force: bool) -> Result<Vec<PublishedStub>> {
        fs::create_dir_all(&self.stub_dir).with_context(|| {
            format!("Failed to create stub directory: {}", self.stub_dir.display())
        })?;

        StubKind::ALL
            .into_iter()
            .map(|kind| -> Result<PublishedStub> {
                let path = self.stub_dir.join(kind.file_name());
                let written = force || !path.exists();
                if written {
                    fs::write(&path, kind.embedded())
                        .with_context(|| format!("Failed to write stub: {}", path.display()))?;
                    debug!(stub = %kind, path = %path.display(), "published stub");
                }
                Ok(PublishedStub {
                    kind,
                    path,
                    written,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use tempfile::TempDir;

    #[test]
    fn test_user_dir_prefers_xdg_config_home() {
        Jail::expect_with(|jail| {
            jail.set_env("XDG_CONFIG_HOME", "/tmp/xdg");
            assert_eq!(
                StubManager::user_dir("default").unwrap(),
                PathBuf::from("/tmp/xdg/modules/stubs/default")
            );
            Ok(())
        });
    }

    #[test]
    fn test_publish_writes_missing_stubs() {
        let temp = TempDir::new().unwrap();
        let manager = StubManager::in_dir(temp.path().join("stubs"));
        assert_eq!(manager.missing_stubs(), StubKind::ALL.to_vec());

        let published = manager.publish(false).unwrap();
        assert!(published.iter().all(|stub| stub.written));
        assert!(manager.missing_stubs().is_empty());

        let content = fs::read_to_string(manager.stub_dir().join("migration.stub")).unwrap();
        assert_eq!(content, StubKind::Create.embedded());
    }

    #[test]
    fn test_publish_keeps_existing_without_force() {
        let temp = TempDir::new().unwrap();
        let manager = StubManager::in_dir(temp.path());
        fs::write(temp.path().join("migration.stub"), "custom").unwrap();

        let published = manager.publish(false).unwrap();
        let create = published.iter().find(|s| s.kind == StubKind::Create).unwrap();
        let edit = published.iter().find(|s| s.kind == StubKind::Edit).unwrap();
        assert!(!create.written);
        assert!(edit.written);
        assert_eq!(
            fs::read_to_string(temp.path().join("migration.stub")).unwrap(),
            "custom"
        );
    }

    #[test]
    fn test_publish_force_overwrites() {
        let temp = TempDir::new().unwrap();
        let manager = StubManager::in_dir(temp.path());
        fs::write(temp.path().join("migration.stub"), "custom").unwrap();

        manager.publish(true).unwrap();
        assert_eq!(
            fs::read_to_string(temp.path().join("migration.stub")).unwrap(),
            StubKind::Create.embedded()
        );
    }
}

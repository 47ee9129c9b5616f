//! Configuration management
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `MODULES_` prefix, `__` for nesting)
//! 2. `./modules.toml` in the project root, or an explicit file
//! 3. `~/.config/modules/config.toml` (user config, XDG)
//! 4. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # modules.toml
//! [modules]
//! path = "app/Modules"
//! migrations = "Database/Migrations"
//!
//! [migrations]
//! extension = "php"
//! timestamp_format = "%Y%m%d%H%M%S"
//!
//! [stubs]
//! set = "default"
//! path = "resources/stubs"
//!
//! [refresh]
//! enabled = true
//! program = "composer"
//! args = ["dump-autoload"]
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Name of the project-local configuration file
pub const PROJECT_CONFIG_FILE: &str = "modules.toml";

/// Module layout settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleSettings {
    /// Directory containing all modules, relative to the project root
    pub path: PathBuf,

    /// Migration directory inside each module
    pub migrations: PathBuf,
}

impl Default for ModuleSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("app/Modules"),
            migrations: PathBuf::from("Database/Migrations"),
        }
    }
}

/// Generated migration file settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrationSettings {
    /// File extension of generated migrations
    pub extension: String,

    /// `chrono` format string for the filename prefix
    pub timestamp_format: String,
}

impl Default for MigrationSettings {
    fn default() -> Self {
        Self {
            extension: "php".to_string(),
            timestamp_format: "%Y%m%d%H%M%S".to_string(),
        }
    }
}

/// Stub template settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StubSettings {
    /// Template set identifier
    pub set: String,

    /// Directory holding `migration.stub` and `migrationedit.stub`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Default for StubSettings {
    fn default() -> Self {
        Self {
            set: crate::templates::DEFAULT_SET.to_string(),
            path: None,
        }
    }
}

/// Autoload refresh settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshSettings {
    /// Run the refresh command after a migration is written
    pub enabled: bool,

    /// Program to run
    pub program: String,

    /// Arguments passed to the program
    pub args: Vec<String>,
}

impl Default for RefreshSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            program: "composer".to_string(),
            args: vec!["dump-autoload".to_string()],
        }
    }
}

/// Complete tool configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModulesConfig {
    /// Module layout
    pub modules: ModuleSettings,

    /// Generated migration files
    pub migrations: MigrationSettings,

    /// Stub templates
    pub stubs: StubSettings,

    /// Autoload refresh
    pub refresh: RefreshSettings,
}

impl ModulesConfig {
    /// Load configuration for a project
    ///
    /// Reads the user config, then `config_file` if given or
    /// `<project_root>/modules.toml` otherwise, then `MODULES_*` environment
    /// variables. Missing files are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be parsed or a value has
    /// the wrong type.
    pub fn load(project_root: &Path, config_file: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?));

        if let Some(user_config) = Self::user_config_path() {
            if user_config.exists() {
                figment = figment.merge(Toml::file(&user_config));
            }
        }

        let project_config =
            config_file.map_or_else(|| project_root.join(PROJECT_CONFIG_FILE), Path::to_path_buf);
        figment = figment.merge(Toml::file(&project_config));

        Self::extract(figment.merge(Env::prefixed("MODULES_").split("__").lowercase(true)))
    }

    /// Load configuration from a single TOML file on top of defaults
    ///
    /// Environment variables are not consulted.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let figment = Figment::new()
            .merge(Toml::string(&toml::to_string(&Self::default())?))
            .merge(Toml::file(path));
        Self::extract(figment)
    }

    fn extract(figment: Figment) -> Result<Self> {
        Ok(figment.extract()?)
    }

    /// Path of the user-level configuration file
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("modules").join("config.toml"))
    }

    /// Directory containing a module, relative to the project root
    #[must_use]
    pub fn modules_root(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.modules.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use std::fs;
    use tempfile::TempDir;

    /// Point the user config at an empty directory inside the jail
    fn isolate_user_config(jail: &mut Jail) {
        let xdg = jail.directory().join("xdg");
        jail.set_env("XDG_CONFIG_HOME", xdg.display());
    }

    #[test]
    fn test_defaults() {
        let config = ModulesConfig::default();
        assert_eq!(config.modules.path, PathBuf::from("app/Modules"));
        assert_eq!(config.modules.migrations, PathBuf::from("Database/Migrations"));
        assert_eq!(config.migrations.extension, "php");
        assert_eq!(config.migrations.timestamp_format, "%Y%m%d%H%M%S");
        assert_eq!(config.stubs.set, "default");
        assert!(config.stubs.path.is_none());
        assert!(config.refresh.enabled);
        assert_eq!(config.refresh.program, "composer");
        assert_eq!(config.refresh.args, vec!["dump-autoload".to_string()]);
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = ModulesConfig::load_from(&temp.path().join("missing.toml")).unwrap();
        assert_eq!(config, ModulesConfig::default());
    }

    #[test]
    fn test_load_from_overrides_some_values() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(PROJECT_CONFIG_FILE);
        std::fs::write(
            &path,
            r#"
[modules]
path = "modules"

[migrations]
timestamp_format = "%Y_%m_%d_%H%M%S"

[stubs]
path = "stubs"

[refresh]
enabled = false
"#,
        )
        .unwrap();

        let config = ModulesConfig::load_from(&path).unwrap();
        assert_eq!(config.modules.path, PathBuf::from("modules"));
        assert_eq!(config.modules.migrations, PathBuf::from("Database/Migrations"));
        assert_eq!(config.migrations.timestamp_format, "%Y_%m_%d_%H%M%S");
        assert_eq!(config.migrations.extension, "php");
        assert_eq!(config.stubs.path, Some(PathBuf::from("stubs")));
        assert!(!config.refresh.enabled);
        assert_eq!(config.refresh.program, "composer");
    }

    #[test]
    fn test_load_from_rejects_wrong_types() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(PROJECT_CONFIG_FILE);
        std::fs::write(&path, "[refresh]\nenabled = \"sometimes\"\n").unwrap();

        assert!(ModulesConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_load_without_files_uses_defaults() {
        Jail::expect_with(|jail| {
            isolate_user_config(jail);
            let config = ModulesConfig::load(jail.directory(), None).unwrap();
            assert_eq!(config, ModulesConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_load_reads_project_file() {
        Jail::expect_with(|jail| {
            isolate_user_config(jail);
            fs::write(
                jail.directory().join(PROJECT_CONFIG_FILE),
                "[migrations]\nextension = \"sql\"\n",
            )
            .unwrap();

            let config = ModulesConfig::load(jail.directory(), None).unwrap();
            assert_eq!(config.migrations.extension, "sql");
            assert_eq!(config.migrations.timestamp_format, "%Y%m%d%H%M%S");
            Ok(())
        });
    }

    #[test]
    fn test_load_explicit_file_replaces_project_file() {
        Jail::expect_with(|jail| {
            isolate_user_config(jail);
            fs::write(
                jail.directory().join(PROJECT_CONFIG_FILE),
                "[migrations]\nextension = \"sql\"\n",
            )
            .unwrap();
            let explicit = jail.directory().join("custom.toml");
            fs::write(&explicit, "[modules]\npath = \"modules\"\n").unwrap();

            let config = ModulesConfig::load(jail.directory(), Some(&explicit)).unwrap();
            assert_eq!(config.modules.path, PathBuf::from("modules"));
            assert_eq!(config.migrations.extension, "php");
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_project_file() {
        Jail::expect_with(|jail| {
            isolate_user_config(jail);
            fs::write(
                jail.directory().join(PROJECT_CONFIG_FILE),
                "[refresh]\nenabled = true\nprogram = \"make\"\n",
            )
            .unwrap();
            jail.set_env("MODULES_REFRESH__ENABLED", "false");

            let config = ModulesConfig::load(jail.directory(), None).unwrap();
            assert!(!config.refresh.enabled);
            assert_eq!(config.refresh.program, "make");
            Ok(())
        });
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_project_file_overrides_user_file() {
        Jail::expect_with(|jail| {
            isolate_user_config(jail);
            let user_dir = jail.directory().join("xdg").join("modules");
            fs::create_dir_all(&user_dir).unwrap();
            fs::write(
                user_dir.join("config.toml"),
                "[migrations]\nextension = \"sql\"\ntimestamp_format = \"%Y\"\n",
            )
            .unwrap();
            fs::write(
                jail.directory().join(PROJECT_CONFIG_FILE),
                "[migrations]\nextension = \"php\"\n",
            )
            .unwrap();

            let config = ModulesConfig::load(jail.directory(), None).unwrap();
            assert_eq!(config.migrations.extension, "php");
            assert_eq!(config.migrations.timestamp_format, "%Y");
            Ok(())
        });
    }

    #[test]
    fn test_modules_root() {
        let config = ModulesConfig::default();
        assert_eq!(
            config.modules_root(Path::new("/srv/app")),
            PathBuf::from("/srv/app/app/Modules")
        );
    }
}

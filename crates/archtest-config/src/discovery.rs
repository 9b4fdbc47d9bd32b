//! File-based config discovery and loading.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format as _, Serialized, Toml};
use tracing::debug;

use crate::config::ArchConfig;
use crate::error::{ConfigError, Result};
use crate::{CONFIG_FILE, ENV_PREFIX};

/// A loaded rules file and where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub path: PathBuf,
    pub config: ArchConfig,
}

impl LoadedConfig {
    /// Directory containing the config file.
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    /// Module root resolved against the config file's directory.
    pub fn module_root(&self) -> PathBuf {
        self.config.resolved_module_root(self.dir())
    }
}

/// Finds `archtest.toml` and loads it.
///
/// Sources are merged in priority order: defaults, then the file, then
/// environment variables carrying the `ARCHTEST_` prefix
/// (`ARCHTEST_MODULE_ROOT=../svc`).
///
/// # Example
///
/// ```no_run
/// use archtest_config::ConfigDiscovery;
///
/// let loaded = ConfigDiscovery::new(".").load().unwrap();
/// println!("{} rules from {}", loaded.config.rules.len(), loaded.path.display());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigDiscovery {
    root: PathBuf,
    env_prefix: String,
}

impl ConfigDiscovery {
    /// Discover starting at `root` and walking up through its parents.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            env_prefix: ENV_PREFIX.to_string(),
        }
    }

    /// Override the environment variable prefix.
    pub fn env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Nearest `archtest.toml` at or above the root.
    pub fn find(&self) -> Option<PathBuf> {
        self.root
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILE))
            .find(|candidate| candidate.is_file())
    }

    /// Load the discovered config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if no config file exists at or above
    /// the root.
    pub fn load(&self) -> Result<LoadedConfig> {
        let path = self
            .find()
            .ok_or_else(|| ConfigError::NotFound(self.root.clone()))?;
        self.load_from(&path)
    }

    /// Load a specific config file.
    pub fn load_from(&self, path: &Path) -> Result<LoadedConfig> {
        if !path.is_file() {
            return Err(ConfigError::MissingFile(path.to_path_buf()));
        }
        debug!(path = %path.display(), "loading config");

        let config: ArchConfig = Figment::new()
            .merge(Serialized::defaults(ArchConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(&self.env_prefix))
            .extract()?;

        debug!(rules = config.rules.len(), "config loaded");
        Ok(LoadedConfig {
            path: path.to_path_buf(),
            config,
        })
    }
}

/// Parse rules from a TOML string, without file or environment sources.
pub fn from_toml_str(content: &str) -> Result<ArchConfig> {
    toml::from_str(content).map_err(|err| ConfigError::InvalidValue {
        field: "toml".to_string(),
        message: err.message().to_string(),
        hint: Some(format!("Invalid TOML syntax in {CONFIG_FILE}")),
    })
}

/// Discover and load config from the current directory.
pub fn discover() -> Result<LoadedConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(root).load()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn find_returns_none_without_config() {
        let dir = TempDir::new().unwrap();
        let discovery = ConfigDiscovery::new(dir.path().join("nested"));
        // The temp dir's ancestors must not carry a stray config either.
        if let Some(found) = discovery.find() {
            assert!(!found.starts_with(dir.path()));
        }
    }

    #[test]
    fn from_toml_str_reads_rules() {
        let config = from_toml_str(
            r#"
[[rule]]
packages = ["a/..."]
forbidden = ["b"]
"#,
        )
        .unwrap();
        assert_eq!(config.rules.len(), 1);
        assert_eq!(config.rules[0].forbidden, vec!["b"]);
        assert!(!config.rules[0].include_tests);
    }

    #[test]
    fn from_toml_str_reports_syntax_errors() {
        let err = from_toml_str("[[rule]\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        assert!(err.hint().is_some());
    }

    #[test]
    fn load_from_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = ConfigDiscovery::new(dir.path())
            .load_from(&dir.path().join("nope.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile(_)));
    }

    #[test]
    fn loaded_config_resolves_module_root() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "module_root = \"svc\"\n").unwrap();

        let loaded = ConfigDiscovery::new(dir.path())
            .env_prefix("ARCHTEST_UNIT_RESOLVE_")
            .load()
            .unwrap();
        assert_eq!(loaded.module_root(), dir.path().join("svc"));
    }
}

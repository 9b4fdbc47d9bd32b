//! Rules file model.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Contents of `archtest.toml`.
///
/// ```toml
/// module_root = "."
///
/// [[rule]]
/// name = "domain stays pure"
/// packages = ["example.com/app/domain/..."]
/// forbidden = ["example.com/app/infra/..."]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchConfig {
    /// Directory holding `go.mod`, relative to the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_root: Option<PathBuf>,

    #[serde(default, rename = "rule")]
    pub rules: Vec<RuleConfig>,
}

impl ArchConfig {
    /// Module root resolved against the directory the config was loaded from.
    pub fn resolved_module_root(&self, config_dir: &Path) -> PathBuf {
        match &self.module_root {
            Some(root) if root.is_absolute() => root.clone(),
            Some(root) => config_dir.join(root),
            None => config_dir.to_path_buf(),
        }
    }
}

/// One `[[rule]]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Root package patterns.
    #[serde(default)]
    pub packages: Vec<String>,

    #[serde(default)]
    pub include_tests: bool,

    /// Packages the roots must never reach.
    #[serde(default)]
    pub forbidden: Vec<String>,
}

impl RuleConfig {
    /// Name used in messages: the configured name, or `rule #<n>` (1-based).
    pub fn display_name(&self, index: usize) -> String {
        match &self.name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => format!("rule #{}", index + 1),
        }
    }
}

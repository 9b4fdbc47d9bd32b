//! # archtest-config
//!
//! The `archtest.toml` rules file: model, discovery, loading and validation.
//!
//! ```toml
//! module_root = "."          # optional, relative to this file
//!
//! [[rule]]
//! name = "domain stays pure" # optional
//! packages = ["example.com/app/domain/..."]
//! include_tests = false      # optional
//! forbidden = ["example.com/app/infra/..."]
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod validation;

pub use config::{ArchConfig, RuleConfig};
pub use discovery::{ConfigDiscovery, LoadedConfig, discover, from_toml_str};
pub use error::{ConfigError, Result};
pub use validation::{Rule, validate};

/// Rules file name looked up by discovery.
pub const CONFIG_FILE: &str = "archtest.toml";

/// Prefix of environment variables that override file values.
pub const ENV_PREFIX: &str = "ARCHTEST_";

//! Package identifiers and the patterns that select them.
//!
//! A [`PackageId`] is the canonical import path of a package, e.g.
//! `example.com/app/domain`. A [`PackagePattern`] is what users write: either
//! an exact identifier, or an identifier followed by `/...` meaning "this
//! package and everything nested under it".

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Recursive wildcard marker accepted at the end of a pattern.
pub const WILDCARD: &str = "...";

/// Suffix naming the external test package that lives next to a package.
pub const EXTERNAL_TEST_SUFFIX: &str = "_test";

/// Errors produced while parsing identifiers and patterns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("package identifier is empty")]
    Empty,

    #[error("package identifier '{0}' contains whitespace")]
    Whitespace(String),

    #[error("wildcard '...' is only allowed as the final path segment: '{0}'")]
    MisplacedWildcard(String),

    #[error("package identifier '{0}' contains an empty path segment")]
    EmptySegment(String),
}

/// Canonical, immutable identifier of a package.
///
/// Cloning is cheap: the string is shared behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PackageId(Arc<str>);

impl PackageId {
    /// Parse and validate a package identifier.
    ///
    /// Existence is not checked here; an identifier that no provider knows
    /// about simply has no imports.
    pub fn new(id: impl AsRef<str>) -> Result<Self, PatternError> {
        let id = id.as_ref().trim();
        if id.is_empty() {
            return Err(PatternError::Empty);
        }
        if id.chars().any(char::is_whitespace) {
            return Err(PatternError::Whitespace(id.to_string()));
        }
        if id.contains(WILDCARD) {
            return Err(PatternError::MisplacedWildcard(id.to_string()));
        }
        if id.split('/').any(str::is_empty) {
            return Err(PatternError::EmptySegment(id.to_string()));
        }
        Ok(Self(Arc::from(id)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if `self` is `prefix` or nested below it (`prefix/...`).
    pub fn is_within(&self, prefix: &PackageId) -> bool {
        match self.0.strip_prefix(prefix.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }

    /// Identifier of the external test package in the same directory.
    pub fn external_test(&self) -> PackageId {
        Self(Arc::from(format!("{}{}", self.0, EXTERNAL_TEST_SUFFIX)))
    }

    /// Inverse of [`PackageId::external_test`]: `a/b_test` -> `a/b`.
    pub fn external_test_base(&self) -> Option<PackageId> {
        let base = self.0.strip_suffix(EXTERNAL_TEST_SUFFIX)?;
        if base.is_empty() || base.ends_with('/') {
            return None;
        }
        Some(Self(Arc::from(base)))
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PackageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for PackageId {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PackageId {
    type Error = PatternError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PackageId> for String {
    fn from(id: PackageId) -> Self {
        id.0.to_string()
    }
}

/// A user-supplied selector for packages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PackagePattern {
    /// Exactly one package.
    Exact(PackageId),
    /// A package and everything nested under it. `None` selects every package.
    Recursive(Option<PackageId>),
}

impl PackagePattern {
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let pattern = pattern.trim();
        if pattern == WILDCARD {
            return Ok(Self::Recursive(None));
        }
        match pattern.strip_suffix(WILDCARD) {
            Some(prefix) => {
                let prefix = prefix
                    .strip_suffix('/')
                    .ok_or_else(|| PatternError::MisplacedWildcard(pattern.to_string()))?;
                Ok(Self::Recursive(Some(PackageId::new(prefix)?)))
            }
            None => Ok(Self::Exact(PackageId::new(pattern)?)),
        }
    }

    /// Does `id` fall under this pattern?
    pub fn matches(&self, id: &PackageId) -> bool {
        match self {
            Self::Exact(exact) => exact == id,
            Self::Recursive(Some(prefix)) => id.is_within(prefix),
            Self::Recursive(None) => true,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Recursive(_))
    }
}

impl fmt::Display for PackagePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(id) => write!(f, "{id}"),
            Self::Recursive(Some(prefix)) => write!(f, "{prefix}/{WILDCARD}"),
            Self::Recursive(None) => f.write_str(WILDCARD),
        }
    }
}

impl FromStr for PackagePattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PackagePattern {
    type Error = PatternError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PackagePattern> for String {
    fn from(pattern: PackagePattern) -> Self {
        pattern.to_string()
    }
}

impl From<PackageId> for PackagePattern {
    fn from(id: PackageId) -> Self {
        Self::Exact(id)
    }
}

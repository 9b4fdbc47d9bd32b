//! One architecture check as a plain value.

use archtest_graph::{
    DependencyPath, GraphSearch, PackagePattern, PackageProvider, PackageResolver, PatternError,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Roots, test inclusion and the forbidden target of a single check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckConfiguration {
    pub roots: Vec<PackagePattern>,
    #[serde(default)]
    pub include_tests: bool,
    pub forbidden: PackagePattern,
}

impl CheckConfiguration {
    pub fn new(roots: Vec<PackagePattern>, forbidden: PackagePattern) -> Self {
        Self {
            roots,
            include_tests: false,
            forbidden,
        }
    }

    /// Parse roots and forbidden target from strings.
    ///
    /// A root that does not parse contributes no packages, the same as a
    /// wildcard that matches nothing; it is logged and dropped. Only an
    /// unparsable forbidden target is an error.
    pub fn parse<I, S>(roots: I, forbidden: &str) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let forbidden = PackagePattern::parse(forbidden)?;
        let roots = roots
            .into_iter()
            .filter_map(|raw| {
                let raw = raw.as_ref();
                match PackagePattern::parse(raw) {
                    Ok(pattern) => Some(pattern),
                    Err(err) => {
                        warn!(pattern = %raw, error = %err, "ignoring invalid root pattern");
                        None
                    }
                }
            })
            .collect();
        Ok(Self::new(roots, forbidden))
    }

    pub fn include_tests(mut self, include: bool) -> Self {
        self.include_tests = include;
        self
    }

    /// Witness path from the first violating root.
    pub fn find_path(&self, provider: &dyn PackageProvider) -> Option<DependencyPath> {
        let roots = self.resolver(provider).resolve(&self.roots);
        GraphSearch::new(provider, self.include_tests).find_path(&roots, &self.forbidden)
    }

    /// Witness paths from every violating root.
    pub fn violations(&self, provider: &dyn PackageProvider) -> Vec<DependencyPath> {
        let roots = self.resolver(provider).resolve(&self.roots);
        GraphSearch::new(provider, self.include_tests).violations(&roots, &self.forbidden)
    }

    fn resolver<'a>(&self, provider: &'a dyn PackageProvider) -> PackageResolver<'a> {
        PackageResolver::new(provider).include_tests(self.include_tests)
    }
}

/// Result of [`Package::should_not_depend_on`](crate::Package::should_not_depend_on).
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum CheckOutcome {
    /// No root reaches the forbidden package.
    Passed,
    /// A root reaches the forbidden package through this path.
    Violated(DependencyPath),
}

impl CheckOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    pub fn is_violated(&self) -> bool {
        matches!(self, Self::Violated(_))
    }

    pub fn path(&self) -> Option<&DependencyPath> {
        match self {
            Self::Violated(path) => Some(path),
            Self::Passed => None,
        }
    }
}

impl From<Option<DependencyPath>> for CheckOutcome {
    fn from(path: Option<DependencyPath>) -> Self {
        path.map_or(Self::Passed, Self::Violated)
    }
}

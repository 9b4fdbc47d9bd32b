//! Fluent entry point for architecture tests.

use archtest_graph::{FailureSink, PackageProvider, PatternError, report};
use tracing::{debug, warn};

use crate::check::{CheckConfiguration, CheckOutcome};

/// Start a check over one or more root package patterns.
///
/// Patterns are exact package ids or recursive `prefix/...` patterns.
/// Violations are rendered as an indented trace and passed to `sink`.
///
/// ```rust
/// use archtest::provider::memory::MemoryProvider;
/// use archtest::{PanicSink, RecordingSink, package};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = MemoryProvider::builder()
///     .package("app/domain", ["app/domain/model"])
///     .package("app/domain/model", Vec::<String>::new())
///     .package("app/web", ["app/domain"])
///     .build()?;
///
/// // Passes silently.
/// let _ = package(&provider, &PanicSink, ["app/domain/..."]).should_not_depend_on("app/web");
///
/// let sink = RecordingSink::new();
/// let outcome = package(&provider, &sink, ["app/web"]).should_not_depend_on("app/domain/model");
/// assert!(outcome.is_violated());
/// assert_eq!(sink.messages(), vec!["Error:\napp/web\n\tapp/domain\n\t\tapp/domain/model\n"]);
/// # Ok(())
/// # }
/// ```
pub fn package<'a, P, S, I>(provider: &'a P, sink: &'a S, patterns: I) -> Package<'a>
where
    P: PackageProvider,
    S: FailureSink,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Package {
        provider,
        sink,
        patterns: patterns
            .into_iter()
            .map(|p| p.as_ref().to_string())
            .collect(),
        include_tests: false,
    }
}

/// Root packages of a check, plus where to report violations.
///
/// Chain methods consume and return the value; checks borrow it, so one
/// `Package` can run any number of independent checks.
#[derive(Clone)]
pub struct Package<'a> {
    provider: &'a dyn PackageProvider,
    sink: &'a dyn FailureSink,
    patterns: Vec<String>,
    include_tests: bool,
}

impl<'a> Package<'a> {
    /// Also follow imports from test files, including the external test
    /// package of each root.
    pub fn include_tests(mut self) -> Self {
        self.include_tests = true;
        self
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn includes_tests(&self) -> bool {
        self.include_tests
    }

    /// Check that no root reaches `forbidden`.
    ///
    /// On violation the sink receives the witness trace of the first
    /// violating root, and is not called otherwise. Roots that do not parse
    /// contribute no packages; a forbidden target that does not parse can
    /// never be reached.
    pub fn should_not_depend_on(&self, forbidden: &str) -> CheckOutcome {
        let check = match self.configuration(forbidden) {
            Ok(check) => check,
            Err(err) => {
                warn!(forbidden, error = %err, "invalid forbidden pattern matches nothing");
                return CheckOutcome::Passed;
            }
        };

        debug!(roots = ?self.patterns, forbidden = %check.forbidden, "running check");
        match check.find_path(self.provider) {
            Some(path) => {
                report(&path, self.sink);
                CheckOutcome::Violated(path)
            }
            None => CheckOutcome::Passed,
        }
    }

    /// Run [`should_not_depend_on`](Self::should_not_depend_on) once per
    /// forbidden target, in order.
    pub fn should_not_depend_on_any<I>(&self, forbidden: I) -> Vec<CheckOutcome>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        forbidden
            .into_iter()
            .map(|target| self.should_not_depend_on(target.as_ref()))
            .collect()
    }

    /// The check this value would run against `forbidden`.
    pub fn configuration(&self, forbidden: &str) -> Result<CheckConfiguration, PatternError> {
        let check = CheckConfiguration::parse(&self.patterns, forbidden)?;
        Ok(check.include_tests(self.include_tests))
    }
}

impl std::fmt::Debug for Package<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Package")
            .field("provider", &self.provider)
            .field("patterns", &self.patterns)
            .field("include_tests", &self.include_tests)
            .finish_non_exhaustive()
    }
}


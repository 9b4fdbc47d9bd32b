//! Check command implementation.
//!
//! Loads `archtest.toml`, opens the Go module and evaluates every rule,
//! printing the import chain behind each violation.

use std::path::Path;
use std::time::Instant;

use archtest::CheckConfiguration;
use archtest_config::{ConfigDiscovery, LoadedConfig, Rule, validate};
use archtest_graph::{DependencyPath, PackagePattern, PackageProvider, render_trace};
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::{CliError, Result};
use crate::ui;

/// One root package reaching one forbidden target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Position of the rule in the rules file.
    #[serde(skip)]
    pub rule_index: usize,
    pub rule: String,
    pub forbidden: PackagePattern,
    /// Import chain, root first.
    #[serde(serialize_with = "serialize_chain")]
    pub path: DependencyPath,
}

fn serialize_chain<S: serde::Serializer>(path: &DependencyPath, s: S) -> Result<S::Ok, S::Error> {
    s.collect_seq(path.iter())
}

/// Execute the check command.
///
/// # Errors
///
/// Returns [`CliError::RulesViolated`] when any rule is broken, and
/// configuration or module errors when the check cannot run.
pub fn execute(args: CheckArgs) -> Result<()> {
    let started = Instant::now();

    let loaded = load_config(args.config.as_deref())?;
    let rules = validate(&loaded.config)?;
    let root = match &args.root {
        Some(root) => root.clone(),
        None => loaded.module_root(),
    };
    let module = utils::open_module(Some(&root))?;

    ui::info(&format!(
        "Checking {} against {}",
        ui::plural(rules.len(), "rule", "rules"),
        module.module_path()
    ));

    let violations = evaluate(&module, &rules, args.include_tests);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&violations)?);
    } else {
        print_violations(&violations);
    }

    let elapsed = ui::format_duration(started.elapsed());
    if violations.is_empty() {
        ui::success(&format!("All rules passed in {elapsed}"));
        return Ok(());
    }

    let mut violated_rules: Vec<usize> = violations.iter().map(|v| v.rule_index).collect();
    violated_rules.dedup();
    ui::error(&format!(
        "{} of {} violated in {elapsed}",
        ui::plural(violated_rules.len(), "rule", "rules"),
        rules.len()
    ));
    Err(CliError::RulesViolated {
        violations: violations.len(),
        rules: violated_rules.len(),
    })
}

/// Evaluate rules in file order, one check per forbidden target.
///
/// Every violating root is reported, not only the first one.
pub fn evaluate(
    provider: &dyn PackageProvider,
    rules: &[Rule],
    include_tests: bool,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (rule_index, rule) in rules.iter().enumerate() {
        let include_tests = include_tests || rule.include_tests;
        for forbidden in &rule.forbidden {
            let check = CheckConfiguration::new(rule.packages.clone(), forbidden.clone())
                .include_tests(include_tests);
            let found = check.violations(provider);
            debug!(rule = %rule.name, %forbidden, violations = found.len(), "rule evaluated");

            violations.extend(found.into_iter().map(|path| Violation {
                rule_index,
                rule: rule.name.clone(),
                forbidden: forbidden.clone(),
                path,
            }));
        }
    }

    info!(count = violations.len(), "check finished");
    violations
}

fn print_violations(violations: &[Violation]) {
    let mut last: Option<(usize, &PackagePattern)> = None;
    for violation in violations {
        let key = (violation.rule_index, &violation.forbidden);
        if last != Some(key) {
            println!(
                "{}",
                ui::rule_heading(&violation.rule, &violation.forbidden.to_string())
            );
            last = Some(key);
        }
        print!("{}", render_trace(&violation.path));
    }
}

fn load_config(path: Option<&Path>) -> Result<LoadedConfig> {
    let cwd = std::env::current_dir()?;
    let discovery = ConfigDiscovery::new(&cwd);
    let loaded = match path {
        Some(path) => discovery.load_from(&cwd.join(path))?,
        None => discovery.load()?,
    };
    debug!(path = %loaded.path.display(), "rules file loaded");
    Ok(loaded)
}

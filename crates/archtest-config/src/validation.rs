//! Rule validation.
//!
//! Turns the loosely typed rules file into rules with parsed patterns.
//! Everything that can be checked without touching the module is checked
//! here, so a bad rules file fails before any package is read.

use archtest_graph::PackagePattern;

use crate::config::{ArchConfig, RuleConfig};
use crate::error::{ConfigError, Result};

/// A validated rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub name: String,
    pub packages: Vec<PackagePattern>,
    pub include_tests: bool,
    pub forbidden: Vec<PackagePattern>,
}

/// Validate every rule, in file order.
///
/// # Example
///
/// ```
/// use archtest_config::{from_toml_str, validate};
///
/// let config = from_toml_str(r#"
/// [[rule]]
/// name = "no web in domain"
/// packages = ["app/domain/..."]
/// forbidden = ["app/web"]
/// "#).unwrap();
///
/// let rules = validate(&config).unwrap();
/// assert_eq!(rules[0].name, "no web in domain");
/// ```
pub fn validate(config: &ArchConfig) -> Result<Vec<Rule>> {
    if config.rules.is_empty() {
        return Err(ConfigError::NoRules);
    }
    config
        .rules
        .iter()
        .enumerate()
        .map(|(index, rule)| validate_rule(rule, index))
        .collect()
}

fn validate_rule(rule: &RuleConfig, index: usize) -> Result<Rule> {
    let name = rule.display_name(index);

    if rule.packages.is_empty() {
        return Err(ConfigError::InvalidRule {
            rule: name,
            message: "no packages listed".to_string(),
            hint: Some("Set packages = [\"<module>/<dir>/...\"]".to_string()),
        });
    }
    if rule.forbidden.is_empty() {
        return Err(ConfigError::InvalidRule {
            rule: name,
            message: "no forbidden packages listed".to_string(),
            hint: Some("Set forbidden = [\"<package>\"]".to_string()),
        });
    }

    let packages = parse_all(&name, &rule.packages)?;
    let forbidden = parse_all(&name, &rule.forbidden)?;

    Ok(Rule {
        name,
        packages,
        include_tests: rule.include_tests,
        forbidden,
    })
}

fn parse_all(rule: &str, patterns: &[String]) -> Result<Vec<PackagePattern>> {
    patterns
        .iter()
        .map(|pattern| {
            PackagePattern::parse(pattern).map_err(|source| ConfigError::InvalidPattern {
                rule: rule.to_string(),
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}

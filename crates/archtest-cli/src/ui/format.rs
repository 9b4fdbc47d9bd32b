//! Formatting utilities for check summaries.

use std::time::Duration;

use owo_colors::{OwoColorize, Style};

use super::colors_enabled;

/// Format duration in human-readable format.
///
/// ```
/// use std::time::Duration;
/// use archtest_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// `1 rule`, `2 rules`.
///
/// ```
/// use archtest_cli::ui::plural;
///
/// assert_eq!(plural(1, "rule", "rules"), "1 rule");
/// assert_eq!(plural(0, "rule", "rules"), "0 rules");
/// ```
pub fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{count} {}", if count == 1 { one } else { many })
}

/// Heading printed above the traces of a violated rule.
pub fn rule_heading(rule: &str, forbidden: &str) -> String {
    let style = if colors_enabled() {
        Style::new().bold()
    } else {
        Style::new()
    };
    format!(
        "{} must not depend on {}",
        rule.style(style),
        forbidden.style(style)
    )
}

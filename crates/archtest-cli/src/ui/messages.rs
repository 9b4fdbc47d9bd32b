//! Status message functions for terminal output.

use owo_colors::{OwoColorize, Style};

use super::colors_enabled;

fn style(style: Style) -> Style {
    if colors_enabled() { style } else { Style::new() }
}

/// Print a success message to stderr.
pub fn success(message: &str) {
    eprintln!(
        "{} {}",
        "✓".style(style(Style::new().green().bold())),
        message
    );
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    eprintln!("{} {}", "ℹ".style(style(Style::new().blue().bold())), message);
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    eprintln!(
        "{} {}",
        "⚠".style(style(Style::new().yellow().bold())),
        message.style(style(Style::new().yellow()))
    );
}

/// Print an error message to stderr.
pub fn error(message: &str) {
    eprintln!(
        "{} {}",
        "✗".style(style(Style::new().red().bold())),
        message.style(style(Style::new().red()))
    );
}

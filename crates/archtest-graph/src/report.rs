//! Rendering witness paths and handing them to the host test runner.

use std::fmt::Write as _;

use crate::DependencyPath;

/// First line of every rendered trace.
pub const TRACE_HEADER: &str = "Error:\n";

/// Receives the rendered failure message of a violated check.
///
/// Host test runners integrate by implementing this one method. Any
/// `Fn(&str)` closure is a sink.
pub trait FailureSink {
    fn fail(&self, message: &str);
}

impl<F> FailureSink for F
where
    F: Fn(&str),
{
    fn fail(&self, message: &str) {
        self(message)
    }
}

/// Render a path as an indented trace.
///
/// Each package gets its own line, indented by one tab per position:
///
/// ```text
/// Error:
/// app/a
/// 	app/c
/// 		app/b
/// ```
pub fn render_trace(path: &DependencyPath) -> String {
    let mut out = String::from(TRACE_HEADER);
    for (depth, package) in path.iter().enumerate() {
        for _ in 0..depth {
            out.push('\t');
        }
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{package}");
    }
    out
}

/// Report a violation: render `path` and call the sink exactly once.
pub fn report<S>(path: &DependencyPath, sink: &S)
where
    S: FailureSink + ?Sized,
{
    sink.fail(&render_trace(path));
}

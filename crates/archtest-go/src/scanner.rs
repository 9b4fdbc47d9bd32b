//! Header scanner for Go source files.
//!
//! Only the part of a file that precedes the first top-level declaration is
//! inspected: the package clause and the import declarations. Comments are
//! blanked out first so commented-out imports never count.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static PACKAGE_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*package\s+([A-Za-z_][A-Za-z0-9_]*)").expect("valid package regex")
});

static FIRST_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*(?:func|type|var|const)\b").expect("valid declaration regex")
});

static IMPORT_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bimport\s*(?:\(([^)]*)\)|([^\n;]*))").expect("valid import regex")
});

static IMPORT_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""((?:[^"\\\n]|\\.)*)"|`([^`]*)`"#).expect("valid import path regex")
});

static BUILD_IGNORE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^//\s*(?:go:build|\+build)\s+ignore\s*$").expect("valid constraint regex")
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    #[error("missing package clause")]
    MissingPackageClause,
}

/// What the header of one `.go` file declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoSource {
    /// Name from the `package` clause.
    pub package: String,
    /// Import paths in declaration order, duplicates kept.
    pub imports: Vec<String>,
    /// The file carries an `ignore` build constraint and is never compiled.
    pub build_ignored: bool,
}

impl GoSource {
    /// True for `package foo_test` files.
    pub fn is_external_test(&self) -> bool {
        self.package.ends_with("_test")
    }
}

/// Scan the header of a Go source file.
pub fn scan(source: &str) -> Result<GoSource, ScanError> {
    let build_ignored = constraint_block(source)
        .map(|block| BUILD_IGNORE.is_match(block))
        .unwrap_or(false);

    let code = strip_comments(source);
    let clause = PACKAGE_CLAUSE
        .captures(&code)
        .ok_or(ScanError::MissingPackageClause)?;
    let package = clause[1].to_string();

    let header_start = clause.get(0).map_or(0, |m| m.end());
    let header_end = FIRST_DECL
        .find_at(&code, header_start)
        .map_or(code.len(), |m| m.start());
    let header = &code[header_start..header_end];

    let mut imports = Vec::new();
    for decl in IMPORT_DECL.captures_iter(header) {
        let Some(specs) = decl.get(1).or_else(|| decl.get(2)) else {
            continue;
        };
        for path in IMPORT_PATH.captures_iter(specs.as_str()) {
            if let Some(m) = path.get(1).or_else(|| path.get(2)) {
                imports.push(m.as_str().to_string());
            }
        }
    }

    Ok(GoSource {
        package,
        imports,
        build_ignored,
    })
}

/// Lines before the package clause, where build constraints live.
fn constraint_block(source: &str) -> Option<&str> {
    let mut end = 0;
    for line in source.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("package ") || trimmed == "package" {
            return Some(&source[..end]);
        }
        end += line.len() + 1;
        if end > source.len() {
            end = source.len();
        }
    }
    None
}

/// Replace comments with whitespace, leaving string and rune literals intact.
///
/// Newlines inside block comments survive so `^`-anchored patterns keep
/// working on the result.
fn strip_comments(source: &str) -> String {
    #[derive(Clone, Copy, PartialEq)]
    enum State {
        Code,
        LineComment,
        BlockComment,
        Interpreted,
        Raw,
        Rune,
    }

    let mut out = String::with_capacity(source.len());
    let mut state = State::Code;
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            State::Code => match c {
                '/' if chars.peek() == Some(&'/') => {
                    chars.next();
                    out.push(' ');
                    state = State::LineComment;
                }
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    out.push(' ');
                    state = State::BlockComment;
                }
                '"' => {
                    out.push(c);
                    state = State::Interpreted;
                }
                '`' => {
                    out.push(c);
                    state = State::Raw;
                }
                '\'' => {
                    out.push(c);
                    state = State::Rune;
                }
                _ => out.push(c),
            },
            State::LineComment => {
                if c == '\n' {
                    out.push('\n');
                    state = State::Code;
                }
            }
            State::BlockComment => {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    state = State::Code;
                } else if c == '\n' {
                    out.push('\n');
                }
            }
            State::Interpreted | State::Rune => {
                out.push(c);
                let close = if state == State::Interpreted { '"' } else { '\'' };
                if c == '\\' {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                } else if c == close || c == '\n' {
                    state = State::Code;
                }
            }
            State::Raw => {
                out.push(c);
                if c == '`' {
                    state = State::Code;
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_and_grouped_imports() {
        let src = r#"package app

import "fmt"

import (
	"os"
	str "strings"
	_ "example.com/app/driver"
	. "example.com/app/dsl"
	`example.com/app/raw`
)

func main() {}
"#;
        let scanned = scan(src).unwrap();
        assert_eq!(scanned.package, "app");
        assert_eq!(
            scanned.imports,
            vec![
                "fmt",
                "os",
                "strings",
                "example.com/app/driver",
                "example.com/app/dsl",
                "example.com/app/raw",
            ]
        );
        assert!(!scanned.build_ignored);
    }

    #[test]
    fn comments_do_not_count() {
        let src = r#"// Package app does things.
package app

import (
	"fmt" // trailing comment
	// "example.com/app/commented"
	/* "example.com/app/blocked" */
	"os"
)
/*
import "example.com/app/also-blocked"
*/
"#;
        let scanned = scan(src).unwrap();
        assert_eq!(scanned.imports, vec!["fmt", "os"]);
    }

    #[test]
    fn stops_at_first_declaration() {
        let src = r#"package app

import "fmt"

func helper() string {
	return "import \"example.com/app/not-an-import\""
}
"#;
        assert_eq!(scan(src).unwrap().imports, vec!["fmt"]);
    }

    #[test]
    fn semicolon_separated_imports() {
        let src = "package app; import \"fmt\"; import \"os\"\n";
        assert_eq!(scan(src).unwrap().imports, vec!["fmt", "os"]);
    }

    #[test]
    fn slashes_inside_strings_are_not_comments() {
        let src = "package app\n\nimport \"example.com//odd\"\n";
        assert_eq!(scan(src).unwrap().imports, vec!["example.com//odd"]);
    }

    #[test]
    fn external_test_package() {
        let scanned = scan("package app_test\n\nimport \"testing\"\n").unwrap();
        assert!(scanned.is_external_test());

        let internal = scan("package app\n\nimport \"testing\"\n").unwrap();
        assert!(!internal.is_external_test());
    }

    #[test]
    fn build_ignore_constraint() {
        let src = "//go:build ignore\n\npackage main\n\nimport \"fmt\"\n";
        assert!(scan(src).unwrap().build_ignored);

        let legacy = "// +build ignore\n\npackage main\n";
        assert!(scan(legacy).unwrap().build_ignored);

        let other = "//go:build linux\n\npackage main\n";
        assert!(!scan(other).unwrap().build_ignored);
    }

    #[test]
    fn missing_package_clause() {
        assert_eq!(
            scan("import \"fmt\"\n"),
            Err(ScanError::MissingPackageClause)
        );
    }
}

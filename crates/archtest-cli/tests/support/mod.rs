//! Shared fixture: a Go module with one layering violation.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

pub fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// `example.com/shop` with `domain -> domain/order -> infra/db`.
pub fn shop_module() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    write(root, "go.mod", "module example.com/shop\n\ngo 1.22\n");
    write(
        root,
        "domain/domain.go",
        "package domain\n\nimport \"example.com/shop/domain/order\"\n",
    );
    write(
        root,
        "domain/order/order.go",
        "package order\n\nimport (\n\t\"fmt\"\n\t\"example.com/shop/infra/db\"\n)\n",
    );
    write(
        root,
        "domain/order/order_test.go",
        "package order_test\n\nimport (\n\t\"testing\"\n\t\"example.com/shop/web\"\n)\n",
    );
    write(root, "infra/db/db.go", "package db\n\nimport \"database/sql\"\n");
    write(root, "web/web.go", "package web\n\nimport \"net/http\"\n");

    temp
}

pub const PASSING_RULES: &str = r#"
[[rule]]
name = "web stays out of infra"
packages = ["example.com/shop/web/..."]
forbidden = ["example.com/shop/infra/..."]
"#;

pub const FAILING_RULES: &str = r#"
[[rule]]
name = "domain stays pure"
packages = ["example.com/shop/domain/..."]
forbidden = ["example.com/shop/infra/..."]
"#;

pub const TEST_ONLY_RULES: &str = r#"
[[rule]]
name = "domain ignores web"
packages = ["example.com/shop/domain/..."]
forbidden = ["example.com/shop/web"]
"#;

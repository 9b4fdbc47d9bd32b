//! End-to-end tests running the `archtest` binary.

mod support;

use assert_cmd::Command;
use archtest_config::CONFIG_FILE;
use predicates::prelude::*;
use support::{FAILING_RULES, PASSING_RULES, shop_module, write};

fn archtest() -> Command {
    let mut cmd = Command::cargo_bin("archtest").unwrap();
    cmd.env_remove("RUST_LOG").arg("--no-color");
    cmd
}

#[test]
fn check_passes_with_zero_exit() {
    let temp = shop_module();
    write(temp.path(), CONFIG_FILE, PASSING_RULES);

    archtest()
        .current_dir(temp.path())
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains("All rules passed"));
}

#[test]
fn check_prints_trace_and_fails() {
    let temp = shop_module();
    write(temp.path(), CONFIG_FILE, FAILING_RULES);

    archtest()
        .current_dir(temp.path())
        .arg("check")
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Error:\nexample.com/shop/domain\n\texample.com/shop/domain/order\n\t\texample.com/shop/infra/db\n",
        ))
        .stdout(predicate::str::contains("domain stays pure must not depend on"))
        .stderr(predicate::str::contains("forbidden dependencies found in 1 rule"));
}

#[test]
fn check_json_output() {
    let temp = shop_module();
    write(temp.path(), CONFIG_FILE, FAILING_RULES);

    archtest()
        .current_dir(temp.path())
        .args(["check", "--json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"rule\": \"domain stays pure\""))
        .stdout(predicate::str::contains("\"example.com/shop/infra/db\""));
}

#[test]
fn check_without_config_explains_how_to_fix() {
    let temp = shop_module();

    archtest()
        .current_dir(temp.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("archtest.toml"));
}

#[test]
fn list_prints_packages_in_walk_order() {
    let temp = shop_module();

    archtest()
        .current_dir(temp.path().join("domain"))
        .args(["list", "example.com/shop/..."])
        .assert()
        .success()
        .stdout(
            "example.com/shop/domain\n\
             example.com/shop/domain/order\n\
             example.com/shop/infra/db\n\
             example.com/shop/web\n",
        );
}

#[test]
fn imports_prints_direct_imports() {
    let temp = shop_module();

    archtest()
        .args(["imports", "example.com/shop/domain/order", "--root"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout("fmt\nexample.com/shop/infra/db\n");
}

#[test]
fn invalid_pattern_is_a_usage_error() {
    archtest()
        .args(["list", "a/.../b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("wildcard"));
}

use crate::common::CommandTestcacheExt;
use assert_cmd::prelude::*;
use predicates::str::contains;
use std::process::Command;

#[test]
fn test_good_manifest() {
    Command::testcache()
        .args(["check-manifest", "tests/check_manifest/good.json5"])
        .assert()
        .success()
        .stdout(concat!(
            "GET game/1c5e0d8a.html\n",
            "GET game/9f02b7e4.html\n",
            "2 of 4 islets have a page to download\n",
        ));
}

#[test]
fn test_bad_manifest_syntax() {
    Command::testcache()
        .args(["check-manifest", "tests/check_manifest/bad-syntax.json5"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(contains("failed to parse manifest"))
        .stderr(contains("tests/check_manifest/bad-syntax.json5"));
}

#[test]
fn test_bad_manifest_identifier() {
    Command::testcache()
        .args(["check-manifest", "tests/check_manifest/bad-identifier.json5"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("failed to parse manifest"));
}

#[test]
fn test_missing_manifest() {
    Command::testcache()
        .args(["check-manifest", "tests/check_manifest/missing.json5"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("failed to read manifest"));
}

use crate::common::CommandTestcacheExt;
use assert_cmd::prelude::*;
use predicates::str::contains;
use std::process::Command;

#[test]
fn test_good_config() {
    Command::testcache()
        .args(["check-config", "tests/check_config/good.toml"])
        .assert()
        .success();
}

#[test]
fn test_bad_config_nested_work_dir() {
    Command::testcache()
        .args(["check-config", "tests/check_config/bad-nested-work-dir.toml"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains(
            "`fixture.work-dir` must be a single directory name, got `build/test-www`",
        ));
}

#[test]
fn test_check_config_follows_config_flag() {
    Command::testcache()
        .args([
            "--config",
            "tests/check_config/bad-nested-work-dir.toml",
            "check-config",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("must be a single directory name, got `build/test-www`"));

    Command::testcache()
        .args(["--config", "tests/check_config/good.toml", "check-config"])
        .assert()
        .success();
}

#[test]
fn test_check_config_argument_wins_over_flag() {
    Command::testcache()
        .args([
            "--config",
            "tests/check_config/bad-remote.toml",
            "check-config",
            "tests/check_config/good.toml",
        ])
        .assert()
        .success();
}

#[test]
fn test_bad_config_remote() {
    Command::testcache()
        .args(["check-config", "tests/check_config/bad-remote.toml"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("invalid remote base url `si.bitcrafter.net`"));
}

#[test]
fn test_bad_config_syntax() {
    Command::testcache()
        .args(["check-config", "tests/check_config/bad-syntax.toml"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("failed to parse config"));
}

#[test]
fn test_missing_config() {
    Command::testcache()
        .args(["check-config", "tests/check_config/missing.toml"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("failed to read config"));
}

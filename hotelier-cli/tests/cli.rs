//! Tests for global behavior: help, init, exit codes and completions.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let env = TestEnv::new();
    env.command_bare()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("book"))
        .stdout(predicate::str::contains("regulars"))
        .stdout(predicate::str::contains("--data-dir"));
}

#[test]
fn test_version() {
    let env = TestEnv::new();
    env.command_bare()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_init_creates_database() {
    let env = TestEnv::new();
    env.command()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created database"));
    assert!(env.data_dir.join("hotelier.db").exists());

    env.command()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn test_init_with_config() {
    let env = TestEnv::new();
    env.command()
        .args(["init", "--with-config"])
        .assert()
        .success();

    let contents = std::fs::read_to_string(env.data_dir.join("config.yaml")).unwrap();
    assert!(contents.contains("search_radius"));

    // The commented template is a valid (empty) configuration.
    env.command()
        .args(["hotels", "--lat", "0", "--lon", "0"])
        .assert()
        .success();
}

#[test]
fn test_data_dir_from_environment() {
    let env = TestEnv::new();
    env.command_bare()
        .env("HOTELIER_DATA_DIR", &env.data_dir)
        .arg("init")
        .assert()
        .success();
    assert!(env.data_dir.join("hotelier.db").exists());
}

#[test]
fn test_missing_database_exit_code() {
    let env = TestEnv::new();
    env.command()
        .args(["rooms", "--hotel", "1", "--date", "2024-06-01"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("hotelier init"));
}

#[test]
fn test_usage_error_exit_code() {
    let env = TestEnv::initialized();
    env.command()
        .args(["rooms", "--hotel", "0", "--date", "2024-06-01"])
        .assert()
        .code(4);
    env.command()
        .args(["rooms", "--hotel", "1", "--date", "June 1st"])
        .assert()
        .code(4);
}

#[test]
fn test_invalid_config_exit_code() {
    let env = TestEnv::initialized();
    std::fs::write(env.data_dir.join("config.yaml"), "recent_limit: 0\n").unwrap();
    env.command()
        .args(["hotels", "--lat", "0", "--lon", "0"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("recent_limit"));
}

#[test]
fn test_completions_bash() {
    let env = TestEnv::new();
    env.command_bare()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hotelier"));
}

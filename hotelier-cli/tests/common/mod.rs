//! Common test utilities for CLI integration tests.
//!
//! This module provides an isolated data directory per test and helpers
//! that run the seeding commands and return the ids they print.

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Password used for every account created by the helpers.
pub const PASSWORD: &str = "s3cret";

/// Variables that would leak the caller's setup into a test.
const HOTELIER_ENV: [&str; 7] = [
    "HOTELIER_DATA_DIR",
    "HOTELIER_PASSWORD",
    "HOTELIER_LOG_MODE",
    "HOTELIER_BUSY_TIMEOUT",
    "HOTELIER_SEARCH_RADIUS",
    "HOTELIER_RECENT_LIMIT",
    "HOTELIER_UPDATES_SCOPE",
];

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the hotelier data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory is not created; `init` creates it.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("hotelier-data");
        Self { temp_dir, data_dir }
    }

    /// Create a test environment with an initialized database.
    pub fn initialized() -> Self {
        let env = Self::new();
        env.command().arg("init").assert().success();
        env
    }

    /// Get a command builder without `--data-dir`.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("hotelier").expect("Failed to find hotelier binary");
        for name in HOTELIER_ENV {
            cmd.env_remove(name);
        }
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get a command builder acting as `user`.
    pub fn command_as(&self, subcommand: &str, user: i64) -> Command {
        let mut cmd = self.command();
        cmd.arg(subcommand)
            .args(["--user", &user.to_string(), "--password", PASSWORD]);
        cmd
    }

    /// Run a command that prints a single id and return it.
    pub fn run_for_id(&self, args: &[&str]) -> i64 {
        let output = self.command().args(args).output().expect("Failed to run");
        assert!(
            output.status.success(),
            "{args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim()
            .parse()
            .expect("Output is not an id")
    }

    /// Create a manager and return its id.
    pub fn seed_manager(&self, name: &str) -> i64 {
        self.run_for_id(&["seed-manager", "--name", name, "--password", PASSWORD])
    }

    /// Register a customer and return its id.
    pub fn register(&self, name: &str) -> i64 {
        self.run_for_id(&["register", "--name", name, "--password", PASSWORD])
    }

    /// Create a hotel and return its id.
    pub fn add_hotel(&self, manager: i64, lat: f64, lon: f64) -> i64 {
        self.run_for_id(&[
            "add-hotel",
            "--manager",
            &manager.to_string(),
            "--name",
            "Test Hotel",
            "--lat",
            &lat.to_string(),
            "--lon",
            &lon.to_string(),
        ])
    }

    /// Add a room to a hotel.
    pub fn add_room(&self, hotel: i64, room: i64, price: f64) {
        self.command()
            .args([
                "add-room",
                "--hotel",
                &hotel.to_string(),
                "--room",
                &room.to_string(),
                "--price",
                &price.to_string(),
            ])
            .assert()
            .success();
    }

    /// Register a maintenance company and return its id.
    pub fn add_company(&self, name: &str) -> i64 {
        self.run_for_id(&["add-company", "--name", name])
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

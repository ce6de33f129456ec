//! Test environment for isolated PyGrid CLI runs.
//!
//! Provides `TestEnv` - a temporary home directory (exported to the binary
//! as `PYGRID_TEST_HOME`) plus helpers to run `pygrid` and inspect what it
//! wrote under `~/.pygrid/cli`.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Result of running the `pygrid` binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with a temp home directory.
pub struct TestEnv {
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home_dir: TempDir::new().expect("Failed to create temp home"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_pygrid")),
        }
    }

    /// Path relative to the home directory
    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(relative)
    }

    /// `~/.pygrid/cli`
    pub fn root_path(&self) -> PathBuf {
        self.home_path(".pygrid/cli")
    }

    /// Path of an output file under `~/.pygrid/cli`
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.root_path().join(name)
    }

    /// Read and parse a written configuration file
    pub fn read_output(&self, name: &str) -> serde_json::Value {
        let content = std::fs::read_to_string(self.output_path(name))
            .unwrap_or_else(|e| panic!("Failed to read output file {}: {}", name, e));
        serde_json::from_str(&content).expect("output file is JSON")
    }

    /// Write `<home>/.<provider>/credentials.json`
    pub fn write_credentials(&self, provider: &str, content: &str) -> PathBuf {
        let dir = self.home_path(&format!(".{}", provider));
        std::fs::create_dir_all(&dir).expect("Failed to create credentials dir");
        let path = dir.join("credentials.json");
        std::fs::write(&path, content).expect("Failed to write credentials");
        path
    }

    /// Run `pygrid` with stdin closed
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run `pygrid` with stdin closed and extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.args(args)
            .env("PYGRID_TEST_HOME", self.home_dir.path())
            .env("NO_COLOR", "1")
            .env_remove("PYGRID_API_URL")
            .env_remove("PYGRID_PAYLOAD")
            .env_remove("PYGRID_COLOR")
            .env_remove("RUST_LOG")
            .stdin(Stdio::null());

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute pygrid");
        output_to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

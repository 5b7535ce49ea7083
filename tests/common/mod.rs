#![allow(dead_code)]

pub mod mock_data;

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Helper struct to run popcorn commands against an isolated config file
pub struct PopcornTest {
    pub temp_dir: TempDir,
    binary_path: String,
}

impl PopcornTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        PopcornTest {
            temp_dir,
            binary_path: env!("CARGO_BIN_EXE_popcorn").to_string(),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config.yaml")
    }

    fn log_path(&self) -> PathBuf {
        self.temp_dir.path().join("popcorn.log")
    }

    /// Run with no API key in the environment
    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .env_remove("OMDB_API_KEY")
            .output()
            .expect("Failed to execute popcorn command")
    }

    /// Run with an API key supplied through the environment
    pub fn run_with_env_key(&self, key: &str, args: &[&str]) -> Output {
        self.command(args)
            .env("OMDB_API_KEY", key)
            .output()
            .expect("Failed to execute popcorn command")
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.binary_path);
        cmd.args(args)
            .arg("--log-file")
            .arg(self.log_path())
            .current_dir(self.temp_dir.path())
            .env("POPCORN_CONFIG", self.config_path())
            .env("NO_COLOR", "1");
        cmd
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    pub fn read_config(&self) -> String {
        fs::read_to_string(self.config_path()).expect("Failed to read config file")
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.config_path(), content).expect("Failed to write config file");
    }
}

impl Default for PopcornTest {
    fn default() -> Self {
        Self::new()
    }
}

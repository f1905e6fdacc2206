//! TestWorld pattern for running the `zdash` binary in isolation.
//!
//! Every world gets its own temp directory, its own config path and a
//! scrubbed environment, so the developer's real token and config file can
//! never leak into a test run.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zdash_client::ConfigFile;

/// Variables removed from the child environment unless a test sets them
const SCRUBBED_ENV: &[&str] = &[
    "ZEPLIN_ACCESS_TOKEN",
    "ZEPLIN_WORKSPACE_ID",
    "ZEPLIN_API_URL",
    "ZDASH_CONFIG",
    "RUST_LOG",
];

/// Address nothing listens on; connections are refused immediately
pub const UNREACHABLE_API_URL: &str = "http://127.0.0.1:9/v1";

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use zdash_testing::TestWorld;
///
/// let world = TestWorld::new().with_env("ZEPLIN_WORKSPACE_ID", "ws");
/// world.run(&["types"]).unwrap().failure();
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("zdash").join("config.toml");

        Self {
            temp_dir,
            config_path,
            env_vars: HashMap::new(),
        }
    }

    /// Path the binary is pointed at through `--config`
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env_vars.insert(key.to_string(), value.to_string());
        self
    }

    /// Token and workspace set through the environment
    pub fn configured(self) -> Self {
        self.with_env("ZEPLIN_ACCESS_TOKEN", "test-token-0000")
            .with_env("ZEPLIN_WORKSPACE_ID", "test-workspace")
    }

    /// Configured, but pointed at an API that refuses connections
    pub fn offline(self) -> Self {
        self.configured()
            .with_env("ZEPLIN_API_URL", UNREACHABLE_API_URL)
    }

    /// Write a config file at [`Self::config_path`].
    pub fn with_config_file(self, file: &ConfigFile) -> Self {
        file.save_to(&self.config_path)
            .expect("Failed to write config file");
        self
    }

    /// Apply the isolated environment to a command built by the caller.
    ///
    /// Use with `assert_cmd::cargo::cargo_bin_cmd!("zdash")` from the
    /// binary's own integration tests.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        for key in SCRUBBED_ENV {
            cmd.env_remove(key);
        }
        cmd.env("HOME", self.temp_dir.path())
            .env("XDG_CONFIG_HOME", self.temp_dir.path())
            .env("NO_COLOR", "1")
            .envs(&self.env_vars)
            .current_dir(self.temp_dir.path())
            .arg("--config")
            .arg(&self.config_path)
    }

    /// Build a command for the `zdash` binary with the isolated environment.
    #[allow(deprecated)]
    pub fn command(&self, args: &[&str]) -> Result<Command> {
        let mut cmd = Command::cargo_bin("zdash")?;
        self.configure_command(&mut cmd).args(args);
        Ok(cmd)
    }

    /// Run the binary and return the assertion handle.
    pub fn run(&self, args: &[&str]) -> Result<assert_cmd::assert::Assert> {
        Ok(self.command(args)?.assert())
    }
}

//! Common test utilities for CLI integration tests.
//!
//! This module provides an isolated host layout for the `addon-config`
//! binary: a temporary configuration directory and an add-on install
//! directory, plus helpers to seed and read the INI files.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Add-on name passed to every command.
pub const ADDON_NAME: &str = "demo";

/// Test environment with isolated host directories.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Host configuration directory (not created; the CLI creates it)
    pub config_dir: PathBuf,
    /// Add-on install directory (created)
    pub install_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let config_dir = temp_path.join("host-config");
        let install_dir = temp_path.join("addons").join(ADDON_NAME);
        fs::create_dir_all(&install_dir).expect("Failed to create install dir");

        Self {
            temp_dir,
            temp_path,
            config_dir,
            install_dir,
        }
    }

    /// A command with only the binary and no inherited `ADDON_*` variables.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("addon-config").expect("Failed to find addon-config binary");
        for var in [
            "ADDON_CONFIG_DIR",
            "ADDON_INSTALL_DIR",
            "ADDON_NAME",
            "ADDON_CONFIG_LOG_MODE",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }

    /// A command bound to this environment's host layout.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config-dir")
            .arg(&self.config_dir)
            .arg("--install-dir")
            .arg(&self.install_dir)
            .arg("--addon-name")
            .arg(ADDON_NAME)
            .arg("--summary")
            .arg("Demo add-on");
        cmd
    }

    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// `<config_dir>/demoAddon.ini`.
    pub fn target(&self) -> PathBuf {
        self.config_dir.join("demoAddon.ini")
    }

    /// `<install_dir>/demoAddon.ini`.
    pub fn legacy(&self) -> PathBuf {
        self.install_dir.join("demoAddon.ini")
    }

    pub fn write_target(&self, content: &str) {
        fs::create_dir_all(&self.config_dir).expect("Failed to create config dir");
        fs::write(self.target(), content).expect("Failed to write target file");
    }

    pub fn write_legacy(&self, content: &str) {
        fs::write(self.legacy(), content).expect("Failed to write legacy file");
    }

    pub fn read_target(&self) -> String {
        fs::read_to_string(self.target()).expect("Failed to read target file")
    }

    /// Write `content` to a file under the temp directory and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

//! Common test utilities for integration tests.
//!
//! This module provides an isolated host layout (a writable configuration
//! directory and an add-on install directory) plus a notifier that records
//! what it was asked to show.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

use addon_config::{AddonInfo, ConfigManager, Notifier, StaticHost};
use tempfile::TempDir;

/// Add-on name used by every fixture.
pub const ADDON_NAME: &str = "demo";

/// Add-on summary used by every fixture.
pub const ADDON_SUMMARY: &str = "Demo add-on";

/// One warning captured by [`RecordingNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub text: String,
    pub title: String,
    pub delay: Duration,
}

/// Notifier that stores every warning in a shared list.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    warnings: Rc<RefCell<Vec<Warning>>>,
}

#[allow(dead_code)]
impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Warnings shown so far.
    pub fn warnings(&self) -> Vec<Warning> {
        self.warnings.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn show_warning(&self, text: &str, title: &str, delay: Duration) {
        self.warnings.borrow_mut().push(Warning {
            text: text.to_string(),
            title: title.to_string(),
            delay,
        });
    }
}

/// Isolated host layout.
///
/// The temporary directory is removed when the environment is dropped.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Host configuration directory (created).
    pub config_dir: PathBuf,
    /// Add-on install directory (created).
    pub install_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config_dir = temp_dir.path().join("host-config");
        let install_dir = temp_dir.path().join("addons").join(ADDON_NAME);
        fs::create_dir_all(&config_dir).expect("Failed to create config dir");
        fs::create_dir_all(&install_dir).expect("Failed to create install dir");

        Self {
            temp_dir,
            config_dir,
            install_dir,
        }
    }

    pub fn addon(&self) -> AddonInfo {
        AddonInfo::new(ADDON_NAME, ADDON_SUMMARY, &self.install_dir)
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
        fs::write(self.target(), content).expect("Failed to write target file");
    }

    pub fn write_legacy(&self, content: &str) {
        fs::write(self.legacy(), content).expect("Failed to write legacy file");
    }

    pub fn read_target(&self) -> String {
        fs::read_to_string(self.target()).expect("Failed to read target file")
    }

    /// Load with a default host and a recording notifier.
    pub fn load(&self) -> (ConfigManager, RecordingNotifier) {
        self.load_with_host(StaticHost::new(&self.config_dir))
    }

    pub fn load_with_host(&self, host: StaticHost) -> (ConfigManager, RecordingNotifier) {
        let notifier = RecordingNotifier::new();
        let manager = ConfigManager::load(self.addon(), Box::new(host), Box::new(notifier.clone()));
        (manager, notifier)
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

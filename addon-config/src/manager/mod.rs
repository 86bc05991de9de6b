//! Startup migration, reset and persistence of the add-on configuration.
//!
//! [`ConfigManager::load`] is the add-on's load hook. It decides whether the
//! file on disk can be kept, must be reset, or should be replaced by the
//! current version merged with a legacy file shipped in the add-on package:
//!
//! 1. No file at `<config_dir>/<name>Addon.ini`: start from defaults.
//! 2. A file that whose version cannot be read: delete it, warn the user,
//!    start from defaults.
//! 3. A file from another version: delete it, start from defaults.
//! 4. A file from the current version: keep it if it validates, otherwise
//!    treat it as corrupt. No legacy merge happens in this case.
//! 5. Merge keys from `<install_dir>/<name>Addon.ini` if allowed, then delete
//!    that file so the merge never repeats.
//! 6. Write the result if the target file does not exist.
//!
//! Nothing here panics or returns an error to the host for bad files or
//! failed writes; problems are logged and reported in [`LoadReport`] and
//! [`SaveOutcome`].
//!
//! # Examples
//!
//! ```no_run
//! use addon_config::{AddonInfo, ConfigManager, LogNotifier, StaticHost};
//!
//! let addon = AddonInfo::new("demo", "Demo add-on", "/addons/demo");
//! let mut manager = ConfigManager::load(
//!     addon,
//!     Box::new(StaticHost::new("/home/user/.host")),
//!     Box::new(LogNotifier),
//! );
//!
//! let enabled = manager.toggle_auto_update_check(false).unwrap();
//! println!("auto update check: {enabled}");
//! manager.on_terminate();
//! ```

mod report;

pub use report::{LoadReport, LoadState, MergeOutcome, SaveOutcome, SkipReason};

use crate::document::ConfigDocument;
use crate::error::{Error, Result};
use crate::host::{AddonInfo, HostEnvironment, Notifier, RESET_NOTICE_DELAY, RESET_NOTICE_TEXT};
use crate::schema::{
    is_reserved, schema_for, SchemaKind, Value, CURRENT_VERSION, KEY_AUTO_UPDATE_CHECK,
    KEY_UPDATE_RELEASE_VERSIONS_TO_DEV_VERSIONS, SECTION_GENERAL,
};
use std::fs;
use std::path::{Path, PathBuf};

/// Owns the active configuration document of one add-on.
///
/// Consumers receive the manager (or a reference to it) from the host; there
/// is no global instance.
pub struct ConfigManager {
    addon: AddonInfo,
    host: Box<dyn HostEnvironment>,
    notifier: Box<dyn Notifier>,
    config_path: PathBuf,
    document: ConfigDocument,
    report: LoadReport,
}

impl ConfigManager {
    /// Run the startup workflow and return the manager holding the result.
    #[must_use]
    pub fn load(
        addon: AddonInfo,
        host: Box<dyn HostEnvironment>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        let config_path = addon.config_path(&host.config_dir());
        let mut document = ConfigDocument::defaults(SchemaKind::current());
        document.set_path(&config_path);

        let mut manager = Self {
            addon,
            host,
            notifier,
            config_path,
            document,
            report: LoadReport::default(),
        };
        manager.report = manager.run_startup();
        manager
    }

    fn run_startup(&mut self) -> LoadReport {
        let mut report = LoadReport::default();
        let mut do_merge = true;
        // Set when the target file should be gone but could not be deleted.
        let mut stale_target = false;

        if self.config_path.exists() {
            match read_version(&self.config_path) {
                Err(e) => {
                    report.enter(LoadState::CorruptFile);
                    if e.is_corruption() {
                        log::warn!("{e}");
                    } else {
                        log::warn!(
                            "{}: cannot read {}: {e}",
                            self.addon.name,
                            self.config_path.display()
                        );
                    }
                    stale_target = !self.reset_to_defaults(&mut report);
                }
                Ok(version) if version != CURRENT_VERSION => {
                    report.enter(LoadState::OldVersionFound);
                    stale_target = !self.remove_file(&self.config_path, &mut report);
                    log::warn!(
                        "{}: Old configuration version found. Config file is removed: {}",
                        self.addon.name,
                        self.config_path.display()
                    );
                }
                Ok(_) => {
                    report.enter(LoadState::SameVersion);
                    do_merge = false;
                    match ConfigDocument::open(Some(&self.config_path), SchemaKind::current()) {
                        Ok(doc) if doc.is_valid() => self.document = doc,
                        Ok(doc) => {
                            log::warn!("{}", doc.errors().join("\n"));
                            stale_target = !self.reset_to_defaults(&mut report);
                        }
                        Err(e) => {
                            log::warn!("{e}");
                            stale_target = !self.reset_to_defaults(&mut report);
                        }
                    }
                }
            }
        } else {
            report.enter(LoadState::NoFileFound);
        }

        let legacy_path = self.addon.legacy_config_path();
        if legacy_path == self.config_path {
            log::debug!("legacy configuration path is the active path; nothing to merge");
        } else if legacy_path.exists() {
            if do_merge {
                report.enter(LoadState::MergePending);
                report.merge = self.merge_settings(&legacy_path);
            } else {
                report.merge = MergeOutcome::Skipped;
            }
            report.legacy_removed = self.remove_file(&legacy_path, &mut report);
        }

        if (stale_target || !self.config_path.exists()) && self.save(true).is_written() {
            report.enter(LoadState::Persisted);
        }

        report
    }

    /// Delete the target file, warn the user and reset to defaults.
    ///
    /// Returns whether the file was deleted.
    fn reset_to_defaults(&mut self, report: &mut LoadReport) -> bool {
        let path = self.config_path.clone();
        let removed = self.remove_file(&path, report);

        self.notifier.show_warning(
            RESET_NOTICE_TEXT,
            &self.addon.warning_title(),
            RESET_NOTICE_DELAY,
        );
        report.notified = true;
        log::warn!(
            "{} Addon configuration file error: configuration reset to factory defaults",
            self.addon.name
        );

        let mut document = ConfigDocument::defaults(SchemaKind::current());
        document.set_path(&path);
        self.document = document;
        report.enter(LoadState::Reset);
        removed
    }

    /// Delete `path`, logging instead of failing.
    fn remove_file(&self, path: &Path, report: &mut LoadReport) -> bool {
        match fs::remove_file(path) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("{}: cannot remove {}: {e}", self.addon.name, path.display());
                report.removal_failures.push(path.to_path_buf());
                false
            }
        }
    }

    /// Copy keys known to the current schema from a legacy file.
    fn merge_settings(&mut self, legacy_path: &Path) -> MergeOutcome {
        log::warn!("Merge settings with old configuration");

        let legacy = match read_version(legacy_path)
            .and_then(|version| schema_for(&version))
            .and_then(|kind| ConfigDocument::open(Some(legacy_path), kind))
        {
            Ok(doc) => doc,
            Err(e @ Error::UnknownVersion { .. }) => {
                log::warn!("Configuration merge error: unknown configuration version");
                return MergeOutcome::Aborted {
                    reason: e.to_string(),
                };
            }
            Err(e) => {
                log::warn!("Configuration merge error: {e}");
                return MergeOutcome::Aborted {
                    reason: e.to_string(),
                };
            }
        };
        if !legacy.is_valid() {
            log::warn!("{}", legacy.errors().join("\n"));
        }

        let mut merged = Vec::new();
        for (section, spec) in self.document.schema().entries() {
            if is_reserved(section, spec.name) {
                continue;
            }
            let Some(value) = legacy.get(section, spec.name) else {
                continue;
            };
            match self.document.set(section, spec.name, value.clone()) {
                Ok(()) => merged.push(format!("{section}.{}", spec.name)),
                Err(e) => log::warn!("Configuration merge skipped {section}.{}: {e}", spec.name),
            }
        }
        MergeOutcome::Merged { keys: merged }
    }

    /// Validate and write the configuration.
    ///
    /// Does nothing in secure mode, or when the host does not save on exit
    /// and `force` is false. Write failures are logged, never returned.
    pub fn save(&mut self, force: bool) -> SaveOutcome {
        if self.host.is_secure() {
            return SaveOutcome::Skipped {
                reason: SkipReason::SecureMode,
            };
        }
        if !force && !self.host.save_configuration_on_exit() {
            return SaveOutcome::Skipped {
                reason: SkipReason::SaveOnExitDisabled,
            };
        }

        if !self.document.revalidate() {
            log::warn!("{}", self.document.errors().join("\n"));
        }
        match self.document.write() {
            Ok(()) => {
                log::info!("{}: configuration saved", self.addon.name);
                SaveOutcome::Written
            }
            Err(e) => {
                log::warn!(
                    "{}: Could not save configuration - probably read only file system: {e}",
                    self.addon.name
                );
                SaveOutcome::Failed {
                    message: e.to_string(),
                }
            }
        }
    }

    /// Flip (when `apply`) and return the boolean `General.<key>`.
    ///
    /// Flipping triggers a non-forced [`save`](Self::save). With `apply`
    /// false this only reads the value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReservedKey`] for the version key,
    /// [`Error::UnknownKey`] for undeclared keys and [`Error::TypeMismatch`]
    /// for keys that are not booleans.
    pub fn toggle_boolean_option(&mut self, key: &str, apply: bool) -> Result<bool> {
        if is_reserved(SECTION_GENERAL, key) {
            return Err(Error::ReservedKey { key: key.into() });
        }
        let current = match self.document.get(SECTION_GENERAL, key) {
            Some(Value::Boolean(b)) => *b,
            Some(_) => {
                return Err(Error::TypeMismatch {
                    section: SECTION_GENERAL.into(),
                    key: key.into(),
                    expected: "boolean",
                })
            }
            None => {
                return Err(Error::UnknownKey {
                    section: SECTION_GENERAL.into(),
                    key: key.into(),
                })
            }
        };

        if !apply {
            return Ok(current);
        }
        self.document.set(SECTION_GENERAL, key, !current)?;
        self.save(false);
        Ok(!current)
    }

    /// Toggle or read `General.AutoUpdateCheck`.
    ///
    /// # Errors
    ///
    /// See [`toggle_boolean_option`](Self::toggle_boolean_option).
    pub fn toggle_auto_update_check(&mut self, apply: bool) -> Result<bool> {
        self.toggle_boolean_option(KEY_AUTO_UPDATE_CHECK, apply)
    }

    /// Toggle or read `General.UpdateReleaseVersionsToDevVersions`.
    ///
    /// # Errors
    ///
    /// See [`toggle_boolean_option`](Self::toggle_boolean_option).
    pub fn toggle_update_release_versions_to_dev_versions(&mut self, apply: bool) -> Result<bool> {
        self.toggle_boolean_option(KEY_UPDATE_RELEASE_VERSIONS_TO_DEV_VERSIONS, apply)
    }

    /// Set a value in the active document (not saved until the next save).
    ///
    /// # Errors
    ///
    /// See [`ConfigDocument::set`].
    pub fn set(&mut self, section: &str, key: &str, value: impl Into<Value>) -> Result<()> {
        self.document.set(section, key, value)
    }

    /// Host hook: the host saved its own configuration.
    pub fn on_config_save_requested(&mut self) -> SaveOutcome {
        self.save(true)
    }

    /// Host hook: the host is shutting down.
    pub fn on_terminate(&mut self) -> SaveOutcome {
        self.save(false)
    }

    /// The active document.
    #[must_use]
    pub fn document(&self) -> &ConfigDocument {
        &self.document
    }

    /// The target configuration file.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// The managed add-on.
    #[must_use]
    pub fn addon(&self) -> &AddonInfo {
        &self.addon
    }

    /// What the startup workflow did.
    #[must_use]
    pub fn report(&self) -> &LoadReport {
        &self.report
    }
}

/// Read only the version field of a file, using the base schema.
///
/// # Errors
///
/// Returns [`Error::Parse`] or [`Error::Io`] if the file cannot be read, and
/// [`Error::Validation`] if the version field fails validation.
pub fn read_version(path: &Path) -> Result<String> {
    let doc = ConfigDocument::open(Some(path), SchemaKind::Base)?;
    if let Some(err) = doc.validation_errors().first() {
        return Err(err.clone().into());
    }
    Ok(doc.version().to_string())
}

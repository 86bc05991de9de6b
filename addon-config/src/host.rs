//! Host application collaborators.
//!
//! The configuration manager never talks to the host application directly.
//! It receives these narrow interfaces at construction instead: where the
//! writable configuration directory is, whether saving is allowed, how to
//! show a warning, and which add-on it is managing.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Delay before the reset warning is shown, so the caller that detected the
/// corruption is not blocked by it.
pub const RESET_NOTICE_DELAY: Duration = Duration::from_millis(100);

/// Text of the warning shown after a configuration reset.
pub const RESET_NOTICE_TEXT: &str = "The configuration file of the add-on contains errors. \
     The configuration has been reset to factory defaults";

/// Shows user-facing warnings.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    /// Show `text` in a warning dialog titled `title` once `delay` has passed.
    fn show_warning(&self, text: &str, title: &str, delay: Duration);
}

/// Host application state the manager depends on.
#[cfg_attr(test, mockall::automock)]
pub trait HostEnvironment {
    /// Writable directory holding the host's configuration files.
    fn config_dir(&self) -> PathBuf;

    /// Whether the host runs in secure mode, where nothing may be written.
    fn is_secure(&self) -> bool;

    /// The host's "save configuration on exit" preference.
    fn save_configuration_on_exit(&self) -> bool;
}

/// Metadata of the add-on whose configuration is managed.
///
/// # Examples
///
/// ```
/// use addon_config::AddonInfo;
///
/// let addon = AddonInfo::new("recuva", "Recuva accessibility", "/addons/recuva");
/// assert_eq!(addon.config_file_name(), "recuvaAddon.ini");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddonInfo {
    /// Manifest name, used to build file names.
    pub name: String,
    /// Display summary, used in warning titles.
    pub summary: String,
    /// Directory the add-on package is installed in.
    pub install_dir: PathBuf,
}

impl AddonInfo {
    /// Creates add-on metadata.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        summary: impl Into<String>,
        install_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            summary: summary.into(),
            install_dir: install_dir.into(),
        }
    }

    /// `<name>Addon.ini`.
    #[must_use]
    pub fn config_file_name(&self) -> String {
        format!("{}Addon.ini", self.name)
    }

    /// Configuration file inside `config_dir`.
    #[must_use]
    pub fn config_path(&self, config_dir: &Path) -> PathBuf {
        config_dir.join(self.config_file_name())
    }

    /// Legacy configuration file shipped inside the add-on package.
    #[must_use]
    pub fn legacy_config_path(&self) -> PathBuf {
        self.install_dir.join(self.config_file_name())
    }

    /// Title of the reset warning.
    #[must_use]
    pub fn warning_title(&self) -> String {
        format!("{} - Warning", self.summary)
    }
}

/// A host whose state is fixed at construction.
///
/// # Examples
///
/// ```
/// use addon_config::{HostEnvironment, StaticHost};
///
/// let host = StaticHost::new("/tmp/config").with_secure(true);
/// assert!(host.is_secure());
/// assert!(host.save_configuration_on_exit());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticHost {
    config_dir: PathBuf,
    secure: bool,
    save_on_exit: bool,
}

impl StaticHost {
    /// A non-secure host that saves on exit.
    #[must_use]
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            secure: false,
            save_on_exit: true,
        }
    }

    /// Sets secure mode.
    #[must_use]
    pub const fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Sets the "save configuration on exit" preference.
    #[must_use]
    pub const fn with_save_on_exit(mut self, save_on_exit: bool) -> Self {
        self.save_on_exit = save_on_exit;
        self
    }
}

impl HostEnvironment for StaticHost {
    fn config_dir(&self) -> PathBuf {
        self.config_dir.clone()
    }

    fn is_secure(&self) -> bool {
        self.secure
    }

    fn save_configuration_on_exit(&self) -> bool {
        self.save_on_exit
    }
}

/// A notifier for headless hosts: the warning goes to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn show_warning(&self, text: &str, title: &str, _delay: Duration) {
        log::warn!("{title}: {text}");
    }
}

//! Outcome types reported by the configuration manager.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// States the startup workflow passes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    /// No configuration file at the target path.
    NoFileFound,
    /// The file was written by the current version.
    SameVersion,
    /// The file was written by another version and was removed.
    OldVersionFound,
    /// The file could not be parsed or validated.
    CorruptFile,
    /// The configuration was reset to factory defaults.
    Reset,
    /// A legacy file is being merged in.
    MergePending,
    /// The configuration was written to disk at the end of startup.
    Persisted,
}

impl fmt::Display for LoadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NoFileFound => "no file found",
            Self::SameVersion => "same version",
            Self::OldVersionFound => "old version found",
            Self::CorruptFile => "corrupt file",
            Self::Reset => "reset",
            Self::MergePending => "merge pending",
            Self::Persisted => "persisted",
        };
        f.write_str(name)
    }
}

/// What happened with the bundled legacy file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MergeOutcome {
    /// There was no legacy file.
    #[default]
    NotAttempted,
    /// A legacy file existed but the current file was kept as-is.
    Skipped,
    /// Keys were copied from the legacy file (`section.key` names).
    Merged {
        /// Keys copied into the active document.
        keys: Vec<String>,
    },
    /// The legacy file could not be used.
    Aborted {
        /// Why the merge stopped.
        reason: String,
    },
}

/// Summary of one startup run.
///
/// # Examples
///
/// ```
/// use addon_config::manager::{LoadReport, LoadState};
///
/// let report = LoadReport::default();
/// assert!(!report.passed_through(LoadState::Reset));
/// assert_eq!(report.initial_state(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LoadReport {
    /// States in the order they were entered.
    pub states: Vec<LoadState>,
    /// Legacy merge result.
    pub merge: MergeOutcome,
    /// Whether the bundled legacy file was deleted.
    pub legacy_removed: bool,
    /// Whether the reset warning was sent to the notifier.
    pub notified: bool,
    /// Files that should have been deleted but could not be.
    pub removal_failures: Vec<PathBuf>,
}

impl LoadReport {
    pub(crate) fn enter(&mut self, state: LoadState) {
        log::debug!("configuration load: {state}");
        self.states.push(state);
    }

    /// The classification of the target file.
    #[must_use]
    pub fn initial_state(&self) -> Option<LoadState> {
        self.states.first().copied()
    }

    /// Whether the run entered `state`.
    #[must_use]
    pub fn passed_through(&self, state: LoadState) -> bool {
        self.states.contains(&state)
    }

    /// Whether the configuration was reset to factory defaults.
    #[must_use]
    pub fn was_reset(&self) -> bool {
        self.passed_through(LoadState::Reset)
    }
}

/// Why a save did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The host runs in secure mode.
    SecureMode,
    /// The host does not save on exit and the save was not forced.
    SaveOnExitDisabled,
}

/// Result of [`ConfigManager::save`](super::ConfigManager::save).
///
/// Saving never returns an error; failures are logged and reported here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SaveOutcome {
    /// The file was written.
    Written,
    /// Nothing was written.
    Skipped {
        /// Why.
        reason: SkipReason,
    },
    /// Writing failed.
    Failed {
        /// The logged error.
        message: String,
    },
}

impl SaveOutcome {
    /// Whether the file was written.
    #[must_use]
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written)
    }
}

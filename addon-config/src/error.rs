//! Error types for the addon-config library.
//!
//! This module provides the error hierarchy for loading, validating and
//! persisting add-on configuration files, using `thiserror` for ergonomic
//! error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an addon-config error.
///
/// # Examples
///
/// ```
/// use addon_config::{Error, Result};
///
/// fn example_operation() -> Result<bool> {
///     Ok(true)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the addon-config library.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration file could not be parsed as INI text.
    #[error("parse error in {}: {message}", path.display())]
    Parse {
        /// The file that failed to parse (or `<memory>` for in-memory text).
        path: PathBuf,
        /// Description of the syntax problem.
        message: String,
    },

    /// A single key failed validation.
    ///
    /// Documents collect these instead of raising them; this variant exists
    /// for callers that want to surface one entry as an error.
    #[error("validation error in section [{section}] key \"{key}\": {reason}")]
    Validation {
        /// Section containing the key.
        section: String,
        /// The key that failed.
        key: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A configuration version is not present in the registry.
    #[error("unknown configuration version \"{version}\"")]
    UnknownVersion {
        /// The version string that was looked up.
        version: String,
    },

    /// An I/O error occurred (read, write or delete).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The key is not declared by the document's schema.
    #[error("unknown key [{section}] {key}")]
    UnknownKey {
        /// The section looked up.
        section: String,
        /// The key looked up.
        key: String,
    },

    /// The key is reserved and cannot be changed by callers.
    #[error("key \"{key}\" is reserved")]
    ReservedKey {
        /// The reserved key.
        key: String,
    },

    /// A value did not have the type the schema declares.
    #[error("key [{section}] {key} expects a {expected} value")]
    TypeMismatch {
        /// Section of the key.
        section: String,
        /// The key.
        key: String,
        /// Name of the declared type.
        expected: &'static str,
    },

    /// The document has no file to write to.
    #[error("document has no backing file")]
    NoBackingPath,
}

impl From<crate::validator::ValidationError> for Error {
    fn from(err: crate::validator::ValidationError) -> Self {
        Self::Validation {
            section: err.section,
            key: err.key,
            reason: err.reason,
        }
    }
}

impl Error {
    /// Check if the error is an I/O error.
    ///
    /// # Examples
    ///
    /// ```
    /// use addon_config::Error;
    ///
    /// let err: Error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "ro").into();
    /// assert!(err.is_io());
    /// ```
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// Check if the error means the file content could not be trusted.
    ///
    /// Parse and validation failures both lead to a configuration reset.
    #[must_use]
    pub fn is_corruption(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::Validation { .. })
    }
}

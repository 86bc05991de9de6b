#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # addon-config
//!
//! Versioned INI configuration for host add-ons.
//!
//! The library loads an add-on's configuration file, validates it against
//! the schema of the version that wrote it, migrates recognized settings from
//! a legacy file into the current schema, and falls back to factory defaults
//! when the file is corrupt. Failures never reach the host as errors.
//!
//! ## Core Types
//!
//! - [`ConfigManager`]: startup workflow, saving and toggles
//! - [`ConfigDocument`]: one schema-bound configuration file
//! - [`SchemaKind`] and [`Schema`]: the registry of shipped schemas
//! - [`ConfigValidator`]: coercion of raw text to typed values
//! - [`HostEnvironment`], [`Notifier`] and [`AddonInfo`]: host collaborators
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use addon_config::{ConfigDocument, SchemaKind};
//!
//! let doc = ConfigDocument::defaults(SchemaKind::current());
//! assert_eq!(doc.version(), "1.0");
//! assert_eq!(doc.get_bool("General", "AutoUpdateCheck"), Some(true));
//! ```

pub mod document;
pub mod error;
pub mod host;
pub mod logging;
pub mod manager;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

// Re-export key types at crate root for convenience
pub use document::ConfigDocument;
pub use error::{Error, Result};
pub use host::{AddonInfo, HostEnvironment, LogNotifier, Notifier, StaticHost};
pub use logging::{init_logger, LogLevel, Logger};
pub use manager::{ConfigManager, LoadReport, LoadState, MergeOutcome, SaveOutcome, SkipReason};
pub use schema::{schema_for, Schema, SchemaKind, Value, CURRENT_VERSION};
pub use validator::{ConfigValidator, ValidationError};

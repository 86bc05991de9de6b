//! Registry of shipped schema versions.
//!
//! Every schema version ever released has a [`SchemaKind`] variant. The
//! version-only [`SchemaKind::Base`] schema is used to read a file's version before
//! the full schema is chosen.

use super::{
    KeySpec, Schema, SectionSpec, KEY_AUTO_UPDATE_CHECK, KEY_CONFIG_VERSION,
    KEY_UPDATE_RELEASE_VERSIONS_TO_DEV_VERSIONS, SECTION_GENERAL,
};
use crate::error::{Error, Result};

/// Version written by this release.
pub const CURRENT_VERSION: &str = "1.0";

static BASE_SCHEMA: Schema = Schema {
    sections: &[SectionSpec {
        name: SECTION_GENERAL,
        keys: &[KeySpec::string(KEY_CONFIG_VERSION, " ")],
    }],
};

static V1_0_SCHEMA: Schema = Schema {
    sections: &[SectionSpec {
        name: SECTION_GENERAL,
        keys: &[
            KeySpec::string(KEY_CONFIG_VERSION, "1.0"),
            KeySpec::boolean(KEY_AUTO_UPDATE_CHECK, true),
            KeySpec::boolean(KEY_UPDATE_RELEASE_VERSIONS_TO_DEV_VERSIONS, false),
        ],
    }],
};

/// Released versions, oldest first.
const REGISTRY: &[(&str, SchemaKind)] = &[("1.0", SchemaKind::V1_0)];

/// The schemas a document can be bound to.
///
/// # Examples
///
/// ```
/// use addon_config::schema::{schema_for, SchemaKind};
///
/// assert_eq!(schema_for("1.0").unwrap(), SchemaKind::V1_0);
/// assert!(schema_for("0.9").is_err());
/// assert_eq!(SchemaKind::current().version(), Some("1.0"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    /// Version only: `General.ConfigVersion`.
    Base,
    /// Version 1.0.
    V1_0,
}

impl SchemaKind {
    /// The kind for [`CURRENT_VERSION`].
    #[must_use]
    pub const fn current() -> Self {
        Self::V1_0
    }

    /// The static schema for this kind.
    #[must_use]
    pub fn schema(self) -> &'static Schema {
        match self {
            Self::Base => &BASE_SCHEMA,
            Self::V1_0 => &V1_0_SCHEMA,
        }
    }

    /// The version string, or `None` for the version-only schema.
    #[must_use]
    pub const fn version(self) -> Option<&'static str> {
        match self {
            Self::Base => None,
            Self::V1_0 => Some("1.0"),
        }
    }

    /// All released kinds, oldest first.
    pub fn released() -> impl Iterator<Item = Self> {
        REGISTRY.iter().map(|(_, kind)| *kind)
    }
}

/// Looks up the schema kind for a stored version string.
///
/// # Errors
///
/// Returns [`Error::UnknownVersion`] if no released schema has that version.
pub fn schema_for(version: &str) -> Result<SchemaKind> {
    REGISTRY
        .iter()
        .find(|(v, _)| *v == version)
        .map(|(_, kind)| *kind)
        .ok_or_else(|| Error::UnknownVersion {
            version: version.to_string(),
        })
}

//! Configuration schema definitions.
//!
//! A schema is an ordered list of sections, each an ordered list of keys with
//! a declared value type and a default. Schemas are declared statically and
//! never change once shipped; see [`registry`] for the versions that exist.
//!
//! # Examples
//!
//! ```
//! use addon_config::schema::{SchemaKind, ValueType, SECTION_GENERAL, KEY_AUTO_UPDATE_CHECK};
//!
//! let schema = SchemaKind::current().schema();
//! let spec = schema.key(SECTION_GENERAL, KEY_AUTO_UPDATE_CHECK).unwrap();
//! assert_eq!(spec.value_type, ValueType::Boolean);
//! ```

pub mod registry;

use serde::Serialize;
use std::fmt;

pub use registry::{schema_for, SchemaKind, CURRENT_VERSION};

/// Section holding add-on wide settings.
pub const SECTION_GENERAL: &str = "General";

/// Reserved key recording which schema version wrote the file.
pub const KEY_CONFIG_VERSION: &str = "ConfigVersion";

/// Whether the add-on checks for updates automatically.
pub const KEY_AUTO_UPDATE_CHECK: &str = "AutoUpdateCheck";

/// Whether release builds are offered development versions as updates.
pub const KEY_UPDATE_RELEASE_VERSIONS_TO_DEV_VERSIONS: &str = "UpdateReleaseVersionsToDevVersions";

/// Declared type of a configuration value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// `True`/`False` style flag.
    Boolean,
    /// Signed decimal integer.
    Integer,
    /// Free-form text.
    String,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ValueType {
    /// Lower-case type name used in messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::String => "string",
        }
    }
}

/// A typed configuration value.
///
/// The [`Display`](fmt::Display) form is the INI serialization: booleans are
/// written as `True`/`False`.
///
/// # Examples
///
/// ```
/// use addon_config::Value;
///
/// assert_eq!(Value::Boolean(true).to_string(), "True");
/// assert_eq!(Value::from("1.0").to_string(), "1.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// A boolean flag.
    Boolean(bool),
    /// An integer.
    Integer(i64),
    /// A string.
    String(String),
}

impl Value {
    /// The type of this value.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Boolean(_) => ValueType::Boolean,
            Self::Integer(_) => ValueType::Integer,
            Self::String(_) => ValueType::String,
        }
    }

    /// Returns the flag if this is a boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number if this is an integer.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the text if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(true) => f.write_str("True"),
            Self::Boolean(false) => f.write_str("False"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

/// A default value as it appears in a static schema declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal {
    /// Boolean default.
    Boolean(bool),
    /// Integer default.
    Integer(i64),
    /// String default.
    String(&'static str),
}

impl Literal {
    /// Converts the literal into an owned [`Value`].
    #[must_use]
    pub fn to_value(self) -> Value {
        match self {
            Self::Boolean(b) => Value::Boolean(b),
            Self::Integer(n) => Value::Integer(n),
            Self::String(s) => Value::String(s.to_string()),
        }
    }
}

/// Declaration of one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySpec {
    /// Key name as written in the file.
    pub name: &'static str,
    /// Declared type.
    pub value_type: ValueType,
    /// Value used when the key is missing or invalid.
    pub default: Literal,
}

impl KeySpec {
    /// Declares a boolean key.
    #[must_use]
    pub const fn boolean(name: &'static str, default: bool) -> Self {
        Self {
            name,
            value_type: ValueType::Boolean,
            default: Literal::Boolean(default),
        }
    }

    /// Declares a string key.
    #[must_use]
    pub const fn string(name: &'static str, default: &'static str) -> Self {
        Self {
            name,
            value_type: ValueType::String,
            default: Literal::String(default),
        }
    }
}

/// Declaration of one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpec {
    /// Section name as written in the file.
    pub name: &'static str,
    /// Keys in file order.
    pub keys: &'static [KeySpec],
}

impl SectionSpec {
    /// Looks up a key by name.
    #[must_use]
    pub fn key(&self, name: &str) -> Option<&KeySpec> {
        self.keys.iter().find(|k| k.name == name)
    }
}

/// A complete schema: sections in file order.
#[derive(Debug, PartialEq, Eq)]
pub struct Schema {
    /// Sections in file order.
    pub sections: &'static [SectionSpec],
}

impl Schema {
    /// Looks up a section by name.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&SectionSpec> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Looks up a key by section and name.
    #[must_use]
    pub fn key(&self, section: &str, key: &str) -> Option<&KeySpec> {
        self.section(section).and_then(|s| s.key(key))
    }

    /// Whether the schema declares `section.key`.
    #[must_use]
    pub fn declares(&self, section: &str, key: &str) -> bool {
        self.key(section, key).is_some()
    }

    /// Iterates `(section, key)` pairs in file order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static KeySpec)> + '_ {
        self.sections
            .iter()
            .flat_map(|section| section.keys.iter().map(move |key| (section.name, key)))
    }
}

/// Whether `section.key` is the reserved version field.
#[must_use]
pub fn is_reserved(section: &str, key: &str) -> bool {
    section == SECTION_GENERAL && key == KEY_CONFIG_VERSION
}

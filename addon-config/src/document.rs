//! Schema-bound configuration documents.
//!
//! A [`ConfigDocument`] is the in-memory form of one configuration file,
//! bound to exactly one [`SchemaKind`]. It is read with `rust-ini`,
//! validated immediately, and written back in schema order with CRLF line
//! endings.
//!
//! # Examples
//!
//! ```
//! use addon_config::document::ConfigDocument;
//! use addon_config::schema::SchemaKind;
//!
//! let doc = ConfigDocument::parse("[General]\nAutoUpdateCheck = False\n", SchemaKind::V1_0).unwrap();
//! assert!(doc.is_valid());
//! assert_eq!(doc.get_bool("General", "AutoUpdateCheck"), Some(false));
//! assert_eq!(doc.version(), "1.0");
//! ```

use crate::error::{Error, Result};
use crate::schema::{
    is_reserved, Schema, SchemaKind, Value, KEY_CONFIG_VERSION, SECTION_GENERAL,
};
use crate::validator::{ConfigValidator, RawData, ValidationError, Values};
use ini::{Ini, ParseOption};
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Line terminator used when writing files.
pub const LINE_ENDING: &str = "\r\n";

const BYTE_ORDER_MARK: char = '\u{feff}';

/// A validated key/value store bound to one schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    kind: SchemaKind,
    path: Option<PathBuf>,
    values: Values,
    errors: Vec<ValidationError>,
}

impl ConfigDocument {
    /// Open a document for `kind`.
    ///
    /// With `None`, or a path that does not exist, the document holds pure
    /// defaults. A given path is remembered as the backing file either way.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the file is not valid UTF-8 INI text and
    /// [`Error::Io`] if it exists but cannot be read. Validation problems are
    /// not errors; see [`ConfigDocument::errors`].
    pub fn open(path: Option<&Path>, kind: SchemaKind) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::defaults(kind));
        };

        let raw = match fs::read_to_string(path) {
            Ok(text) => parse_raw(&text, path)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => RawData::new(),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                return Err(Error::Parse {
                    path: path.to_path_buf(),
                    message: format!("file is not valid UTF-8: {e}"),
                });
            }
            Err(e) => return Err(e.into()),
        };

        let mut doc = Self::from_raw(&raw, kind);
        doc.path = Some(path.to_path_buf());
        Ok(doc)
    }

    /// A document holding only the schema defaults, with no backing file.
    #[must_use]
    pub fn defaults(kind: SchemaKind) -> Self {
        Self::from_raw(&RawData::new(), kind)
    }

    /// Parse a document from in-memory INI text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the text is not valid INI.
    pub fn parse(text: &str, kind: SchemaKind) -> Result<Self> {
        let raw = parse_raw(text, Path::new("<memory>"))?;
        Ok(Self::from_raw(&raw, kind))
    }

    fn from_raw(raw: &RawData, kind: SchemaKind) -> Self {
        let validated = ConfigValidator::validate(kind.schema(), raw);
        Self {
            kind,
            path: None,
            values: validated.values,
            errors: validated.errors,
        }
    }

    /// The schema kind this document is bound to.
    #[must_use]
    pub const fn kind(&self) -> SchemaKind {
        self.kind
    }

    /// The schema this document is bound to.
    #[must_use]
    pub fn schema(&self) -> &'static Schema {
        self.kind.schema()
    }

    /// The backing file, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Rebind the document to a backing file.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }

    /// Whether the last validation found no problems.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Structured validation problems from the last validation.
    #[must_use]
    pub fn validation_errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Human-readable validation problems, one `section [S]\nkey "K": reason`
    /// entry per failed key. Empty when valid.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// The stored `General.ConfigVersion` value.
    #[must_use]
    pub fn version(&self) -> &str {
        self.get(SECTION_GENERAL, KEY_CONFIG_VERSION)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Look up a value.
    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&Value> {
        self.values.get(section).and_then(|keys| keys.get(key))
    }

    /// Look up a boolean value.
    #[must_use]
    pub fn get_bool(&self, section: &str, key: &str) -> Option<bool> {
        self.get(section, key).and_then(Value::as_bool)
    }

    /// Whether the document holds `section.key`.
    #[must_use]
    pub fn contains(&self, section: &str, key: &str) -> bool {
        self.get(section, key).is_some()
    }

    /// Set a value.
    ///
    /// Validation is not re-run; the value only has to match the declared
    /// type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReservedKey`] for the version field,
    /// [`Error::UnknownKey`] for keys the schema does not declare and
    /// [`Error::TypeMismatch`] when the value has the wrong type.
    pub fn set(&mut self, section: &str, key: &str, value: impl Into<Value>) -> Result<()> {
        if is_reserved(section, key) {
            return Err(Error::ReservedKey { key: key.into() });
        }

        let spec = self
            .schema()
            .key(section, key)
            .ok_or_else(|| Error::UnknownKey {
                section: section.into(),
                key: key.into(),
            })?;

        let value = value.into();
        if value.value_type() != spec.value_type {
            return Err(Error::TypeMismatch {
                section: section.into(),
                key: key.into(),
                expected: spec.value_type.name(),
            });
        }

        self.values
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value);
        Ok(())
    }

    /// Iterate `(section, key, value)` in schema order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str, &Value)> + '_ {
        self.schema()
            .entries()
            .filter_map(move |(section, spec)| {
                self.get(section, spec.name)
                    .map(|value| (section, spec.name, value))
            })
    }

    /// Re-run validation over the current values.
    ///
    /// Returns whether the document is valid afterwards.
    pub fn revalidate(&mut self) -> bool {
        let mut raw = RawData::new();
        for (section, key, value) in self.entries() {
            raw.entry(section.to_string())
                .or_default()
                .insert(key.to_string(), render(value));
        }
        let validated = ConfigValidator::validate(self.schema(), &raw);
        self.values = validated.values;
        self.errors = validated.errors;
        self.is_valid()
    }

    /// Render the document as INI text.
    ///
    /// Sections and keys follow schema order, so `ConfigVersion` is always
    /// the first line of `[General]`.
    #[must_use]
    pub fn to_ini_string(&self) -> String {
        let mut out = String::new();
        for section in self.schema().sections {
            let _ = write!(out, "[{}]{LINE_ENDING}", section.name);
            for spec in section.keys {
                if let Some(value) = self.get(section.name, spec.name) {
                    let _ = write!(out, "{} = {}{LINE_ENDING}", spec.name, render(value));
                }
            }
        }
        out
    }

    /// Write the document to its backing file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoBackingPath`] if the document has no file, or
    /// [`Error::Io`] if writing fails.
    pub fn write(&self) -> Result<()> {
        let path = self.path.as_deref().ok_or(Error::NoBackingPath)?;
        self.write_to(path)
    }

    /// Write the document to `path` without rebinding it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if writing fails (e.g. read-only filesystem).
    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_ini_string())?;
        log::debug!("wrote configuration to {}", path.display());
        Ok(())
    }
}

/// Read INI text into raw section/key strings.
///
/// Keys outside any section are ignored. A leading byte-order mark is
/// skipped. Quotes and backslashes are left for the validator; only an
/// unquoted trailing `# comment` is removed here. A repeated section or a
/// repeated key within a section is a parse error.
fn parse_raw(text: &str, origin: &Path) -> Result<RawData> {
    let parse_error = |message: String| Error::Parse {
        path: origin.to_path_buf(),
        message,
    };

    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    let options = ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ParseOption::default()
    };
    let ini = Ini::load_from_str_opt(text, options).map_err(|e| parse_error(e.to_string()))?;

    let mut raw = RawData::new();
    for (section, properties) in ini.iter() {
        let Some(section) = section else {
            continue;
        };
        if raw.contains_key(section) {
            return Err(parse_error(format!("duplicate section name [{section}]")));
        }
        let keys = raw.entry(section.to_string()).or_default();
        for (key, value) in properties.iter() {
            if keys.contains_key(key) {
                return Err(parse_error(format!(
                    "duplicate keyword \"{key}\" in section [{section}]"
                )));
            }
            keys.insert(key.to_string(), strip_inline_comment(value).to_string());
        }
    }
    Ok(raw)
}

/// Drop a trailing `# comment` that is not inside quotes.
fn strip_inline_comment(value: &str) -> &str {
    let value = value.trim();
    if let Some(quote) = value.chars().next().filter(|c| matches!(c, '"' | '\'')) {
        if let Some(end) = value[1..].find(quote) {
            let (quoted, rest) = value.split_at(end + 2);
            let rest = rest.trim_start();
            if rest.is_empty() || rest.starts_with('#') {
                return quoted;
            }
        }
        return value;
    }
    match value.find('#') {
        Some(idx) => value[..idx].trim_end(),
        None => value,
    }
}

/// Serialize a value so that reading it back yields the same value.
///
/// Strings are quoted when they are empty, padded, hold a `#`, or begin or
/// end with a quote character.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) if needs_quotes(s) => {
            let quote = if s.contains('"') { '\'' } else { '"' };
            format!("{quote}{s}{quote}")
        }
        other => other.to_string(),
    }
}

fn needs_quotes(s: &str) -> bool {
    s.is_empty()
        || s.trim() != s
        || s.contains('#')
        || s.starts_with(['"', '\''])
        || s.ends_with(['"', '\''])
}

//! Schema validation and type coercion.
//!
//! This module binds raw section/key text to a [`Schema`]: declared keys are
//! coerced to their type, missing keys take their default, and keys the
//! schema does not declare are ignored.

use crate::schema::{Schema, Value, ValueType};
use std::collections::HashMap;
use std::fmt;

/// Raw text as read from a file: section → key → value.
pub type RawData = HashMap<String, HashMap<String, String>>;

/// Typed values bound to a schema: section → key → value.
pub type Values = HashMap<String, HashMap<String, Value>>;

/// One key that failed coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Section containing the key.
    pub section: String,
    /// The key.
    pub key: String,
    /// Why the raw value was rejected.
    pub reason: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "section [{}]\nkey \"{}\": {}",
            self.section, self.key, self.reason
        )
    }
}

/// Output of [`ConfigValidator::validate`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Validated {
    /// Every declared key, coerced or defaulted.
    pub values: Values,
    /// One entry per key that failed coercion.
    pub errors: Vec<ValidationError>,
}

impl Validated {
    /// Whether no key failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validates raw section/key data against a schema.
///
/// # Examples
///
/// ```
/// use addon_config::schema::SchemaKind;
/// use addon_config::validator::{ConfigValidator, RawData};
/// use addon_config::Value;
///
/// let mut raw = RawData::new();
/// raw.entry("General".into())
///     .or_default()
///     .insert("AutoUpdateCheck".into(), "no".into());
///
/// let validated = ConfigValidator::validate(SchemaKind::V1_0.schema(), &raw);
/// assert!(validated.is_valid());
/// assert_eq!(
///     validated.values["General"]["AutoUpdateCheck"],
///     Value::Boolean(false)
/// );
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate raw data against `schema`.
    ///
    /// Never fails: problems are reported in [`Validated::errors`] and the
    /// affected keys fall back to their defaults.
    #[must_use]
    pub fn validate(schema: &Schema, raw: &RawData) -> Validated {
        let mut result = Validated::default();

        for (section, spec) in schema.entries() {
            let raw_value = raw.get(section).and_then(|keys| keys.get(spec.name));

            let value = match raw_value {
                None => spec.default.to_value(),
                Some(text) => match Self::coerce(spec.value_type, text) {
                    Ok(value) => value,
                    Err(reason) => {
                        result.errors.push(ValidationError {
                            section: section.to_string(),
                            key: spec.name.to_string(),
                            reason,
                        });
                        spec.default.to_value()
                    }
                },
            };

            result
                .values
                .entry(section.to_string())
                .or_default()
                .insert(spec.name.to_string(), value);
        }

        result
    }

    /// Coerce one raw value to `value_type`.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason when the text is not a valid
    /// representation of the type.
    pub fn coerce(value_type: ValueType, raw: &str) -> Result<Value, String> {
        let text = unquote(raw.trim());
        match value_type {
            ValueType::String => Ok(Value::String(text.to_string())),
            ValueType::Boolean => parse_bool(text)
                .map(Value::Boolean)
                .ok_or_else(|| wrong_type(raw)),
            ValueType::Integer => text
                .trim()
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|_| wrong_type(raw)),
        }
    }
}

/// Parse the boolean spellings the INI files have historically used.
fn parse_bool(text: &str) -> Option<bool> {
    match text.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Strip one pair of matching surrounding quotes.
fn unquote(text: &str) -> &str {
    for quote in ['"', '\''] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            return &text[1..text.len() - 1];
        }
    }
    text
}

fn wrong_type(raw: &str) -> String {
    format!("the value \"{raw}\" is of the wrong type.")
}

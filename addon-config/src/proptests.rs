//! Property-based tests for documents, validation and merging.

use crate::document::ConfigDocument;
use crate::host::{AddonInfo, LogNotifier, StaticHost};
use crate::manager::ConfigManager;
use crate::schema::{
    SchemaKind, Value, KEY_AUTO_UPDATE_CHECK, KEY_CONFIG_VERSION,
    KEY_UPDATE_RELEASE_VERSIONS_TO_DEV_VERSIONS, SECTION_GENERAL,
};
use crate::validator::{ConfigValidator, RawData};
use proptest::prelude::*;
use std::fs;
use tempfile::TempDir;

const BOOL_KEYS: [&str; 2] = [
    KEY_AUTO_UPDATE_CHECK,
    KEY_UPDATE_RELEASE_VERSIONS_TO_DEV_VERSIONS,
];

// Spellings the validator accepts for booleans
fn bool_text_strategy() -> impl Strategy<Value = (String, bool)> {
    prop_oneof![
        Just(("True".to_string(), true)),
        Just(("False".to_string(), false)),
        Just(("yes".to_string(), true)),
        Just(("no".to_string(), false)),
        Just(("ON".to_string(), true)),
        Just(("off".to_string(), false)),
        Just(("1".to_string(), true)),
        Just(("0".to_string(), false)),
    ]
}

// Text that is never a boolean
fn non_bool_text_strategy() -> impl Strategy<Value = String> {
    "[a-z]{2,12}".prop_filter("must not be a boolean spelling", |s| {
        !matches!(s.as_str(), "true" | "false" | "yes" | "no" | "on" | "off")
    })
}

// Text without double quotes; may need quoting when written
fn string_value_strategy() -> impl Strategy<Value = String> {
    "[ a-zA-Z0-9.#'_-]{0,12}"
}

// Optional boolean text per key
fn general_strategy() -> impl Strategy<Value = Vec<Option<(String, bool)>>> {
    prop::collection::vec(prop::option::of(bool_text_strategy()), BOOL_KEYS.len())
}

fn render_general(entries: &[Option<(String, bool)>], extra: &[(String, String)]) -> String {
    let mut text = String::from("[General]\n");
    for (key, entry) in BOOL_KEYS.iter().zip(entries) {
        if let Some((raw, _)) = entry {
            text.push_str(&format!("{key} = {raw}\n"));
        }
    }
    for (key, value) in extra {
        text.push_str(&format!("{key} = {value}\n"));
    }
    text
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    // Writing and reopening a document yields the same values
    #[test]
    fn document_write_round_trip(entries in general_strategy()) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("propAddon.ini");
        fs::write(&path, render_general(&entries, &[])).unwrap();

        let first = ConfigDocument::open(Some(&path), SchemaKind::V1_0).unwrap();
        first.write().unwrap();
        let second = ConfigDocument::open(Some(&path), SchemaKind::V1_0).unwrap();

        prop_assert!(second.is_valid());
        prop_assert_eq!(first.entries().collect::<Vec<_>>(), second.entries().collect::<Vec<_>>());

        let written = fs::read_to_string(&path).unwrap();
        prop_assert!(!written.replace("\r\n", "").contains('\n'));
    }

    // String values keep padding, `#` and quote characters across a write
    #[test]
    fn string_write_round_trip(value in string_value_strategy()) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("propAddon.ini");
        fs::write(&path, format!("[General]\nConfigVersion = \"{value}\"\n")).unwrap();

        let first = ConfigDocument::open(Some(&path), SchemaKind::Base).unwrap();
        prop_assert_eq!(first.version(), value.as_str());

        first.write().unwrap();
        let second = ConfigDocument::open(Some(&path), SchemaKind::Base).unwrap();
        prop_assert!(second.is_valid());
        prop_assert_eq!(second.version(), value.as_str());
    }

    // Missing keys expose the declared default, present keys their coerced value
    #[test]
    fn missing_keys_take_defaults(entries in general_strategy()) {
        let doc = ConfigDocument::parse(&render_general(&entries, &[]), SchemaKind::V1_0).unwrap();
        prop_assert!(doc.is_valid());

        for (key, entry) in BOOL_KEYS.iter().zip(&entries) {
            let expected = match entry {
                Some((_, value)) => *value,
                None => SchemaKind::V1_0
                    .schema()
                    .key(SECTION_GENERAL, key)
                    .unwrap()
                    .default
                    .to_value()
                    .as_bool()
                    .unwrap(),
            };
            prop_assert_eq!(doc.get_bool(SECTION_GENERAL, key), Some(expected));
        }
    }

    // A mistyped value falls back to the default and is reported for that key
    #[test]
    fn mismatched_value_defaults_with_error(index in 0..BOOL_KEYS.len(), junk in non_bool_text_strategy()) {
        let key = BOOL_KEYS[index];
        let mut raw = RawData::new();
        raw.entry(SECTION_GENERAL.to_string())
            .or_default()
            .insert(key.to_string(), junk);

        let validated = ConfigValidator::validate(SchemaKind::V1_0.schema(), &raw);
        prop_assert_eq!(validated.errors.len(), 1);
        prop_assert_eq!(&validated.errors[0].section, SECTION_GENERAL);
        prop_assert_eq!(&validated.errors[0].key, key);

        let default = SchemaKind::V1_0.schema().key(SECTION_GENERAL, key).unwrap().default.to_value();
        prop_assert_eq!(&validated.values[SECTION_GENERAL][key], &default);
    }

    // Merging never pulls keys the current schema does not declare
    #[test]
    fn merge_is_whitelist_only(
        entries in general_strategy(),
        extra in prop::collection::vec(("Extra[A-Z][a-z]{1,8}", "[a-z0-9]{1,8}"), 0..4),
    ) {
        let temp_dir = TempDir::new().unwrap();
        let config_dir = temp_dir.path().join("config");
        let install_dir = temp_dir.path().join("install");
        fs::create_dir_all(&config_dir).unwrap();
        fs::create_dir_all(&install_dir).unwrap();

        let mut legacy = render_general(&entries, &extra);
        legacy.push_str("[Obsolete]\nSetting = 1\n");
        legacy = legacy.replacen("[General]\n", "[General]\nConfigVersion = 1.0\n", 1);
        fs::write(install_dir.join("propAddon.ini"), legacy).unwrap();

        let manager = ConfigManager::load(
            AddonInfo::new("prop", "Prop add-on", &install_dir),
            Box::new(StaticHost::new(&config_dir)),
            Box::new(LogNotifier),
        );

        let reopened = ConfigDocument::open(Some(manager.config_path()), SchemaKind::V1_0).unwrap();
        let written = fs::read_to_string(manager.config_path()).unwrap();
        for (key, _) in &extra {
            prop_assert!(!written.contains(key.as_str()));
        }
        prop_assert!(!written.contains("Obsolete"));
        prop_assert_eq!(reopened.version(), "1.0");
        prop_assert_eq!(
            reopened.get(SECTION_GENERAL, KEY_CONFIG_VERSION),
            Some(&Value::from("1.0"))
        );

        for (key, entry) in BOOL_KEYS.iter().zip(&entries) {
            if let Some((_, value)) = entry {
                prop_assert_eq!(reopened.get_bool(SECTION_GENERAL, key), Some(*value));
            }
        }
    }
}

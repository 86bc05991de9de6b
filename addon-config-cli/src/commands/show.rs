//! Command to print the active settings.

use crate::error::CliError;
use crate::utils::{load_manager, print_json, GlobalOptions};
use addon_config::{ConfigDocument, Value};
use clap::Args;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Load the configuration and print its settings.
#[derive(Args)]
pub struct ShowCommand {
    /// Print the settings as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ShowOutput<'a> {
    path: &'a Path,
    version: &'a str,
    settings: BTreeMap<&'static str, BTreeMap<&'static str, &'a Value>>,
}

impl ShowCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let manager = load_manager(global)?;
        let document = manager.document();

        if self.json {
            return print_json(&ShowOutput {
                path: manager.config_path(),
                version: document.version(),
                settings: group_settings(document),
            });
        }

        for (section, key, value) in document.entries() {
            println!("{section}.{key} = {value}");
        }
        Ok(())
    }
}

fn group_settings(
    document: &ConfigDocument,
) -> BTreeMap<&'static str, BTreeMap<&'static str, &Value>> {
    let mut settings: BTreeMap<_, BTreeMap<_, _>> = BTreeMap::new();
    for (section, key, value) in document.entries() {
        settings.entry(section).or_default().insert(key, value);
    }
    settings
}

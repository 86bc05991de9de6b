//! Command to flip or peek at a boolean option.

use crate::error::CliError;
use crate::utils::{load_manager, GlobalOptions};
use addon_config::schema::{KEY_AUTO_UPDATE_CHECK, KEY_UPDATE_RELEASE_VERSIONS_TO_DEV_VERSIONS};
use addon_config::Value;
use clap::{Args, ValueEnum};

/// Boolean options that can be toggled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ToggleOption {
    /// General.AutoUpdateCheck
    AutoUpdateCheck,
    /// General.UpdateReleaseVersionsToDevVersions
    DevVersions,
}

impl ToggleOption {
    /// Key of the option in the `General` section.
    pub fn key(self) -> &'static str {
        match self {
            Self::AutoUpdateCheck => KEY_AUTO_UPDATE_CHECK,
            Self::DevVersions => KEY_UPDATE_RELEASE_VERSIONS_TO_DEV_VERSIONS,
        }
    }
}

/// Flip a boolean option and save (unless the host does not save on exit).
#[derive(Args)]
pub struct ToggleCommand {
    /// Option to toggle
    #[arg(value_enum)]
    pub option: ToggleOption,

    /// Only print the current value
    #[arg(long)]
    pub peek: bool,
}

impl ToggleCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut manager = load_manager(global)?;

        let value = match self.option {
            ToggleOption::AutoUpdateCheck => manager.toggle_auto_update_check(!self.peek)?,
            ToggleOption::DevVersions => {
                manager.toggle_update_release_versions_to_dev_versions(!self.peek)?
            }
        };

        println!("{} = {}", self.option.key(), Value::Boolean(value));
        Ok(())
    }
}

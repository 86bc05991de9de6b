//! Command to show the resolved configuration file path.

use crate::error::CliError;
use crate::utils::{build_addon, resolve_config_dir, GlobalOptions};
use clap::Args;

/// Show the path of the configuration file, without loading it.
#[derive(Args)]
pub struct ShowPathCommand {
    /// Show the legacy file inside the install directory instead
    #[arg(long)]
    pub legacy: bool,
}

impl ShowPathCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let addon = build_addon(global)?;

        let path = if self.legacy {
            addon.legacy_config_path()
        } else {
            addon.config_path(&resolve_config_dir(global)?)
        };

        println!("{}", path.display());
        Ok(())
    }
}

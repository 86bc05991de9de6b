//! Command to save the configuration.

use crate::error::CliError;
use crate::utils::{load_manager, GlobalOptions};
use addon_config::{SaveOutcome, SkipReason};
use clap::Args;

/// Save the configuration the way the host does.
///
/// Without `--force` this is the shutdown save, which honours the host's
/// "save configuration on exit" preference; with it, this is the save that
/// follows the host saving its own configuration.
#[derive(Args)]
pub struct SaveCommand {
    /// Save even if the host does not save on exit
    #[arg(long)]
    pub force: bool,
}

impl SaveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut manager = load_manager(global)?;

        let outcome = if self.force {
            manager.on_config_save_requested()
        } else {
            manager.on_terminate()
        };

        match outcome {
            SaveOutcome::Written => {
                if !global.quiet {
                    println!("Saved {}", manager.config_path().display());
                }
                Ok(())
            }
            SaveOutcome::Skipped { reason } => {
                let why = match reason {
                    SkipReason::SecureMode => "host is in secure mode",
                    SkipReason::SaveOnExitDisabled => "host does not save on exit",
                };
                println!("Save skipped: {why}");
                Ok(())
            }
            SaveOutcome::Failed { message } => Err(CliError::SemanticFailure(format!(
                "Could not save configuration: {message}"
            ))),
        }
    }
}

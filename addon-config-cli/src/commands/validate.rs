//! Command to validate an add-on configuration file.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use addon_config::manager::read_version;
use addon_config::{schema_for, ConfigDocument, Error as LibError};
use clap::Args;
use std::path::PathBuf;

/// Validate an add-on configuration file against its schema.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,

    /// Validate against this schema version instead of the file's own
    #[arg(long, value_name = "VERSION")]
    pub version: Option<String>,
}

impl ValidateCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Check file exists
        if !self.config_path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.config_path.display()
            )));
        }

        // 2. Pick the schema: explicit version, or the one the file declares
        let version = match self.version {
            Some(v) => v,
            None => match read_version(&self.config_path) {
                Ok(v) => v,
                Err(e) => return Err(invalid_file(e)),
            },
        };
        let kind = schema_for(&version).map_err(|e| {
            CliError::InvalidArguments(format!("{e}; cannot validate this file"))
        })?;

        // 3. Parse against the chosen schema
        let document = match ConfigDocument::open(Some(&self.config_path), kind) {
            Ok(doc) => doc,
            Err(e) => return Err(invalid_file(e)),
        };

        // 4. Report coercion errors
        if document.is_valid() {
            println!("Configuration is valid (version {version})");
            Ok(())
        } else {
            for error in document.validation_errors() {
                eprintln!("Validation error: {error}");
            }
            Err(CliError::SemanticFailure(
                "Configuration validation failed".to_string(),
            ))
        }
    }
}

fn invalid_file(e: LibError) -> CliError {
    if !e.is_corruption() {
        return e.into();
    }
    eprintln!("Parse error: {e}");
    CliError::SemanticFailure("Configuration file is invalid".to_string())
}

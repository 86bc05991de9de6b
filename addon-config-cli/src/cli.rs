//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including the host options shared by every subcommand.

use crate::commands::{
    CompletionsCommand, LoadCommand, SaveCommand, ShowCommand, ShowPathCommand, ToggleCommand,
    ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect and maintain versioned add-on configuration files.
#[derive(Parser)]
#[command(name = "addon-config")]
#[command(
    version,
    about = "Inspect and maintain versioned add-on configuration files",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Host configuration directory
    #[arg(long, value_name = "PATH", global = true, env = "ADDON_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Add-on install directory holding the legacy configuration file
    #[arg(long, value_name = "PATH", global = true, env = "ADDON_INSTALL_DIR")]
    pub install_dir: Option<PathBuf>,

    /// Add-on name used to build the file name `<NAME>Addon.ini`
    #[arg(
        long,
        value_name = "NAME",
        global = true,
        env = "ADDON_NAME",
        default_value = "addon"
    )]
    pub addon_name: String,

    /// Add-on summary shown in warning titles
    #[arg(long, value_name = "TEXT", global = true)]
    pub summary: Option<String>,

    /// Run as a host in secure mode (never write)
    #[arg(long, global = true)]
    pub secure: bool,

    /// Run as a host that does not save its configuration on exit
    #[arg(long, global = true)]
    pub no_save_on_exit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Run the startup workflow and print what it did
    Load(LoadCommand),

    /// Load the configuration and print its settings
    Show(ShowCommand),

    /// Toggle a boolean option
    Toggle(ToggleCommand),

    /// Save the configuration
    Save(SaveCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Show the resolved configuration file path
    ShowPath(ShowPathCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "addon-config",
            "show",
            "--addon-name",
            "recuva",
            "--secure",
        ])
        .unwrap();
        assert_eq!(cli.addon_name, "recuva");
        assert!(cli.secure);
        assert!(matches!(cli.command, Command::Show(_)));
    }
}

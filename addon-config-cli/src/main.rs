//! Main entry point for the addon-config CLI.
//!
//! The binary plays the part of the host application: it resolves the host
//! configuration directory and the add-on's install directory, runs the
//! add-on's configuration lifecycle and reports the result:
//! - `load`: Run the startup workflow
//! - `show`: Print the active settings
//! - `toggle`: Flip or peek at a boolean option
//! - `save`: Save the configuration
//! - `validate`: Validate a configuration file

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _level = addon_config::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config_dir: cli.config_dir,
        install_dir: cli.install_dir,
        addon_name: cli.addon_name,
        summary: cli.summary,
        secure: cli.secure,
        no_save_on_exit: cli.no_save_on_exit,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Load(cmd) => cmd.execute(&global),
        cli::Command::Show(cmd) => cmd.execute(&global),
        cli::Command::Toggle(cmd) => cmd.execute(&global),
        cli::Command::Save(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::ShowPath(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

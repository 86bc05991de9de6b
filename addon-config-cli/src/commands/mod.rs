//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `load`: Run the startup workflow and print its report
//! - `show`: Print the active settings
//! - `toggle`: Flip or peek at a boolean option
//! - `save`: Save the configuration
//! - `validate`: Validate a configuration file
//! - `show_path`: Show the resolved configuration file path
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod load;
pub mod save;
pub mod show;
pub mod show_path;
pub mod toggle;
pub mod validate;

pub use completions::CompletionsCommand;
pub use load::LoadCommand;
pub use save::SaveCommand;
pub use show::ShowCommand;
pub use show_path::ShowPathCommand;
pub use toggle::ToggleCommand;
pub use validate::ValidateCommand;

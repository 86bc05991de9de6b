//! Library exports for addon-config-cli.
//!
//! This module exports the CLI structure so its definition can be checked by
//! tests and reused for generated documentation.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;

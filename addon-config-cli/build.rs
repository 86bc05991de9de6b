//! Build script for addon-config-cli.
//!
//! This script generates the man page at build time using clap_mangen.
//! The generated page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("addon-config")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect and maintain versioned add-on configuration files")
        .long_about(
            "Loads an add-on's INI configuration the way its host does at startup: \
             old versions are replaced, corrupt files are reset to factory defaults, \
             and settings from a legacy file in the install directory are merged once",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Host configuration directory")
                .value_name("PATH")
                .global(true)
                .env("ADDON_CONFIG_DIR"),
        )
        .arg(
            Arg::new("install-dir")
                .long("install-dir")
                .help("Add-on install directory holding the legacy configuration file")
                .value_name("PATH")
                .global(true)
                .env("ADDON_INSTALL_DIR"),
        )
        .arg(
            Arg::new("addon-name")
                .long("addon-name")
                .help("Add-on name used to build the file name <NAME>Addon.ini")
                .value_name("NAME")
                .global(true)
                .env("ADDON_NAME")
                .default_value("addon"),
        )
        .arg(
            Arg::new("summary")
                .long("summary")
                .help("Add-on summary shown in warning titles")
                .value_name("TEXT")
                .global(true),
        )
        .arg(
            Arg::new("secure")
                .long("secure")
                .help("Run as a host in secure mode (never write)")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-save-on-exit")
                .long("no-save-on-exit")
                .help("Run as a host that does not save its configuration on exit")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("load")
                .about("Run the startup workflow and print what it did")
                .long_about("Classify, reset or migrate the configuration file and print the load report"),
            Command::new("show")
                .about("Load the configuration and print its settings"),
            Command::new("toggle")
                .about("Toggle a boolean option")
                .long_about("Flip auto-update-check or dev-versions, or print it with --peek"),
            Command::new("save")
                .about("Save the configuration")
                .long_about("Save on shutdown, or with --force as after the host saved its own configuration"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check an add-on configuration file against the schema of its version"),
            Command::new("show-path")
                .about("Show the resolved configuration file path"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("addon-config.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}

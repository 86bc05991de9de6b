//! Utility functions for CLI operations.
//!
//! This module resolves the simulated host (configuration directory, install
//! directory, secure mode and save preference) from the global options and
//! loads the add-on configuration through it.

use crate::error::CliError;
use addon_config::{AddonInfo, ConfigManager, Notifier, StaticHost};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default configuration directory name under the home directory.
const DEFAULT_CONFIG_DIR: &str = ".addon-config";

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the host configuration directory.
    pub config_dir: Option<PathBuf>,

    /// Override the add-on install directory.
    pub install_dir: Option<PathBuf>,

    /// Add-on name.
    pub addon_name: String,

    /// Add-on summary; defaults to the name.
    pub summary: Option<String>,

    /// Host runs in secure mode.
    pub secure: bool,

    /// Host does not save its configuration on exit.
    pub no_save_on_exit: bool,
}

/// Notifier for a terminal host: the warning is printed to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn show_warning(&self, text: &str, title: &str, _delay: Duration) {
        eprintln!("{title}: {text}");
    }
}

/// Resolve the host configuration directory.
///
/// Priority: `--config-dir` / `ADDON_CONFIG_DIR`, then `~/.addon-config`.
pub fn resolve_config_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    if let Some(ref dir) = global.config_dir {
        return Ok(dir.clone());
    }

    let home_dir = home::home_dir()
        .ok_or_else(|| CliError::Config("Could not determine home directory".to_string()))?;
    Ok(home_dir.join(DEFAULT_CONFIG_DIR))
}

/// Resolve the add-on install directory.
///
/// Defaults to `<config_dir>/addons/<name>`, so the legacy file never
/// coincides with the active one unless requested explicitly.
pub fn resolve_install_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    if let Some(ref dir) = global.install_dir {
        return Ok(dir.clone());
    }
    Ok(resolve_config_dir(global)?
        .join("addons")
        .join(&global.addon_name))
}

/// Build the add-on metadata from global options.
pub fn build_addon(global: &GlobalOptions) -> Result<AddonInfo, CliError> {
    if global.addon_name.trim().is_empty() {
        return Err(CliError::InvalidArguments(
            "add-on name must not be empty".to_string(),
        ));
    }
    let summary = global
        .summary
        .clone()
        .unwrap_or_else(|| global.addon_name.clone());
    Ok(AddonInfo::new(
        global.addon_name.clone(),
        summary,
        resolve_install_dir(global)?,
    ))
}

/// Build the simulated host from global options.
pub fn build_host(global: &GlobalOptions) -> Result<StaticHost, CliError> {
    Ok(StaticHost::new(resolve_config_dir(global)?)
        .with_secure(global.secure)
        .with_save_on_exit(!global.no_save_on_exit))
}

/// Run the startup workflow for the configured add-on.
///
/// The configuration directory is created first unless the host is in
/// secure mode.
pub fn load_manager(global: &GlobalOptions) -> Result<ConfigManager, CliError> {
    let addon = build_addon(global)?;
    let host = build_host(global)?;

    if !global.secure {
        let config_dir = resolve_config_dir(global)?;
        fs::create_dir_all(&config_dir)?;
    }

    Ok(ConfigManager::load(
        addon,
        Box::new(host),
        Box::new(StderrNotifier),
    ))
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(config_dir: Option<&str>) -> GlobalOptions {
        GlobalOptions {
            verbose: false,
            quiet: false,
            config_dir: config_dir.map(PathBuf::from),
            install_dir: None,
            addon_name: "recuva".to_string(),
            summary: None,
            secure: false,
            no_save_on_exit: false,
        }
    }

    #[test]
    fn test_explicit_config_dir_wins() {
        let global = options(Some("/srv/host"));
        assert_eq!(
            resolve_config_dir(&global).unwrap(),
            PathBuf::from("/srv/host")
        );
    }

    #[test]
    fn test_install_dir_defaults_under_config_dir() {
        let global = options(Some("/srv/host"));
        assert_eq!(
            resolve_install_dir(&global).unwrap(),
            PathBuf::from("/srv/host/addons/recuva")
        );
    }

    #[test]
    fn test_build_addon_uses_name_as_summary() {
        let addon = build_addon(&options(Some("/srv/host"))).unwrap();
        assert_eq!(addon.name, "recuva");
        assert_eq!(addon.summary, "recuva");
        assert_eq!(addon.warning_title(), "recuva - Warning");
    }

    #[test]
    fn test_empty_addon_name_rejected() {
        let mut global = options(Some("/srv/host"));
        global.addon_name = "  ".to_string();
        assert!(matches!(
            build_addon(&global),
            Err(CliError::InvalidArguments(_))
        ));
    }

    #[test]
    fn test_build_host_flags() {
        use addon_config::HostEnvironment;

        let mut global = options(Some("/srv/host"));
        global.secure = true;
        global.no_save_on_exit = true;
        let host = build_host(&global).unwrap();
        assert!(host.is_secure());
        assert!(!host.save_configuration_on_exit());
        assert_eq!(host.config_dir(), PathBuf::from("/srv/host"));
    }
}

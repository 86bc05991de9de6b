//! Command to run the startup workflow and report what it did.

use crate::error::CliError;
use crate::utils::{load_manager, print_json, GlobalOptions};
use addon_config::{LoadReport, MergeOutcome};
use clap::Args;
use serde::Serialize;
use std::path::Path;

/// Run the startup workflow (load hook) and print the load report.
#[derive(Args)]
pub struct LoadCommand {
    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct LoadOutput<'a> {
    path: &'a Path,
    #[serde(flatten)]
    report: &'a LoadReport,
}

impl LoadCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let manager = load_manager(global)?;
        let report = manager.report();

        if self.json {
            return print_json(&LoadOutput {
                path: manager.config_path(),
                report,
            });
        }

        println!("Configuration: {}", manager.config_path().display());
        println!("States: {}", describe_states(report));
        println!("Merge: {}", describe_merge(&report.merge));
        if !global.quiet {
            println!("Legacy file removed: {}", yes_no(report.legacy_removed));
            println!("Reset warning shown: {}", yes_no(report.notified));
        }
        for path in &report.removal_failures {
            eprintln!("Could not remove {}", path.display());
        }
        Ok(())
    }
}

/// States joined with arrows, in the order they were entered.
pub(crate) fn describe_states(report: &LoadReport) -> String {
    report
        .states
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

pub(crate) fn describe_merge(merge: &MergeOutcome) -> String {
    match merge {
        MergeOutcome::NotAttempted => "no legacy file".to_string(),
        MergeOutcome::Skipped => "skipped".to_string(),
        MergeOutcome::Merged { keys } if keys.is_empty() => "merged (no keys)".to_string(),
        MergeOutcome::Merged { keys } => format!("merged ({})", keys.join(", ")),
        MergeOutcome::Aborted { reason } => format!("aborted: {reason}"),
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

//! Sync command implementation.
//!
//! `pipsync sync` (the default command) queries pip for the installed set,
//! loads the requirements file, and installs whatever is missing.

use crate::cli::args::SyncArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::installer::{install_missing, InstallMode};
use crate::pip::Pip;
use crate::requirements::{load_required, SyncPlan};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The sync command implementation.
pub struct SyncCommand {
    settings: Settings,
    args: SyncArgs,
}

impl SyncCommand {
    /// Create a new sync command.
    pub fn new(settings: Settings, args: SyncArgs) -> Self {
        Self { settings, args }
    }
}

impl Command for SyncCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let pip = Pip::new(&self.settings.pip_command)?;

        // Installed set first, requirements second, matching the run order
        // the tool has always had. Either failure aborts before any install.
        let installed = pip.list_installed()?;
        let required = load_required(&self.settings.requirements)?;

        let plan = SyncPlan::new(required, installed);
        tracing::debug!(
            "{} required, {} installed, {} missing",
            plan.required.len(),
            plan.installed.len(),
            plan.missing.len()
        );

        if plan.is_satisfied() {
            ui.success("No missing packages");
            return Ok(CommandResult::success());
        }

        let names: Vec<&str> = plan.missing.iter().map(String::as_str).collect();
        ui.message(&format!(
            "{} missing package(s): {}",
            names.len(),
            names.join(", ")
        ));

        if self.args.dry_run {
            ui.message("Dry-run: nothing installed");
            return Ok(CommandResult::success());
        }

        if !self.args.yes && !self.args.non_interactive && ui.is_interactive() {
            let question = format!("Install {} missing package(s)?", names.len());
            if !ui.confirm(&question, true)? {
                ui.message("Skipped installation");
                return Ok(CommandResult::success());
            }
        }

        let mode = if self.args.batch {
            InstallMode::Batch
        } else {
            InstallMode::PerPackage
        };

        let report = install_missing(&pip, &plan.missing, mode, ui)?;

        if report.all_succeeded() {
            ui.success(&format!("Installed {} package(s)", report.installed.len()));
        } else {
            // Per-package failures are reported, not escalated to the exit
            // code; a later run will pick the stragglers up again.
            ui.warning(&format!(
                "Failed to install {} of {} package(s): {}",
                report.failed.len(),
                names.len(),
                report.failed.join(", ")
            ));
        }

        Ok(CommandResult::success())
    }
}

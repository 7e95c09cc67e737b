//! Check command implementation.
//!
//! `pipsync check` computes the reconciliation plan and reports it without
//! installing anything. Exits 1 when packages are missing so the command
//! can gate CI pipelines.

use crate::cli::args::CheckArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::pip::Pip;
use crate::requirements::{load_required, SyncPlan};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    settings: Settings,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(settings: Settings, args: CheckArgs) -> Self {
        Self { settings, args }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let pip = Pip::new(&self.settings.pip_command)?;
        let installed = pip.list_installed()?;
        let required = load_required(&self.settings.requirements)?;

        let plan = SyncPlan::new(required, installed);

        if self.args.json {
            let json = serde_json::to_string_pretty(&plan).map_err(anyhow::Error::from)?;
            println!("{}", json);
        } else if plan.is_satisfied() {
            ui.success("No missing packages");
        } else {
            ui.message(&format!("{} missing package(s):", plan.missing.len()));
            for name in &plan.missing {
                ui.message(&format!("  {}", name));
            }
        }

        if plan.is_satisfied() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

//! Install loop for missing packages.
//!
//! Per-package mode is the canonical behavior: each missing package gets
//! its own pip invocation, and a failed install is reported and skipped
//! without stopping the loop. Batch mode hands pip the whole missing set
//! in one invocation and consequently cannot attribute a failure to any
//! single package.

use std::collections::BTreeSet;

use crate::error::{PipsyncError, Result};
use crate::pip::Pip;
use crate::ui::UserInterface;

/// How the missing set is handed to pip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InstallMode {
    /// One pip invocation per package; failures are isolated per item.
    #[default]
    PerPackage,
    /// One pip invocation for the whole set; no per-item failure isolation.
    Batch,
}

/// Outcome of an install run.
#[derive(Debug, Clone, Default)]
pub struct InstallReport {
    /// Packages that installed successfully.
    pub installed: Vec<String>,

    /// Packages whose install exited non-zero (per-package mode only).
    pub failed: Vec<String>,
}

impl InstallReport {
    /// Whether every attempted install succeeded.
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Install every package in `missing`.
///
/// The caller is expected to have checked for an empty set already; an
/// empty set short-circuits here as well without invoking pip.
pub fn install_missing(
    pip: &Pip,
    missing: &BTreeSet<String>,
    mode: InstallMode,
    ui: &mut dyn UserInterface,
) -> Result<InstallReport> {
    if missing.is_empty() {
        return Ok(InstallReport::default());
    }

    match mode {
        InstallMode::PerPackage => install_per_package(pip, missing, ui),
        InstallMode::Batch => install_batch(pip, missing, ui),
    }
}

fn install_per_package(
    pip: &Pip,
    missing: &BTreeSet<String>,
    ui: &mut dyn UserInterface,
) -> Result<InstallReport> {
    // In verbose mode pip writes straight to the terminal instead of being
    // captured behind the spinner.
    let capture = !ui.output_mode().shows_command_output();
    let mut report = InstallReport::default();

    for package in missing {
        let mut spinner = ui.start_spinner(&format!("Installing {}...", package));
        let result = pip.install(&[package.as_str()], capture)?;

        if result.success {
            spinner.finish_success(&format!("Installed {}", package));
            report.installed.push(package.clone());
        } else {
            spinner.finish_error(&format!("Failed to install {}, skipping", package));
            tracing::warn!(
                "install of {} exited with code {:?}",
                package,
                result.exit_code
            );
            if capture && !result.stderr.is_empty() {
                tracing::debug!("pip stderr for {}: {}", package, result.stderr.trim_end());
            }
            report.failed.push(package.clone());
        }
    }

    Ok(report)
}

fn install_batch(
    pip: &Pip,
    missing: &BTreeSet<String>,
    ui: &mut dyn UserInterface,
) -> Result<InstallReport> {
    let capture = !ui.output_mode().shows_command_output();
    let names: Vec<&str> = missing.iter().map(String::as_str).collect();

    let mut spinner = ui.start_spinner(&format!("Installing {} package(s)...", names.len()));
    let result = pip.install(&names, capture)?;

    if !result.success {
        spinner.finish_error("Batch install failed");
        return Err(PipsyncError::BatchInstallFailed {
            code: result.exit_code,
        });
    }

    spinner.finish_success(&format!("Installed {} package(s)", names.len()));
    Ok(InstallReport {
        installed: missing.iter().cloned().collect(),
        failed: Vec::new(),
    })
}

//! Settings resolution.
//!
//! Pipsync's configuration surface is deliberately small: the path of the
//! requirements file and the pip command. Both come from CLI flags, with
//! environment-variable fallbacks handled by clap (`PIPSYNC_REQUIREMENTS`,
//! `PIPSYNC_PIP`) and built-in defaults last.

use std::path::PathBuf;

use crate::cli::args::Cli;

/// Default requirements file location.
pub const DEFAULT_REQUIREMENTS_PATH: &str = "/etc/odoo/requirements.txt";

/// Default pip command.
pub const DEFAULT_PIP_COMMAND: &str = "pip3";

/// Resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Path of the requirements file to reconcile against.
    pub requirements: PathBuf,

    /// The pip command, as a single string. Whitespace-separated so that
    /// multi-word values like `python3 -m pip` work.
    pub pip_command: String,
}

impl Settings {
    /// Resolve settings from parsed CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            requirements: cli
                .requirements
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_REQUIREMENTS_PATH)),
            pip_command: cli
                .pip
                .clone()
                .unwrap_or_else(|| DEFAULT_PIP_COMMAND.to_string()),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            requirements: PathBuf::from(DEFAULT_REQUIREMENTS_PATH),
            pip_command: DEFAULT_PIP_COMMAND.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults_apply_when_flags_absent() {
        let cli = Cli::parse_from(["pipsync"]);
        let settings = Settings::from_cli(&cli);
        assert_eq!(
            settings.requirements,
            PathBuf::from(DEFAULT_REQUIREMENTS_PATH)
        );
        assert_eq!(settings.pip_command, DEFAULT_PIP_COMMAND);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "pipsync",
            "--requirements",
            "/tmp/reqs.txt",
            "--pip",
            "python3 -m pip",
        ]);
        let settings = Settings::from_cli(&cli);
        assert_eq!(settings.requirements, PathBuf::from("/tmp/reqs.txt"));
        assert_eq!(settings.pip_command, "python3 -m pip");
    }

    #[test]
    fn default_impl_matches_constants() {
        let settings = Settings::default();
        assert_eq!(
            settings.requirements,
            PathBuf::from("/etc/odoo/requirements.txt")
        );
        assert_eq!(settings.pip_command, "pip3");
    }
}

//! The external pip collaborator.
//!
//! Pipsync never talks to a package registry itself; pip does all the real
//! work. This module wraps the two invocations pipsync makes: listing
//! installed packages in freeze format, and installing packages by name.

use std::collections::BTreeSet;

use crate::error::{PipsyncError, Result};
use crate::requirements::bare_name;
use crate::shell::{execute, CommandOptions, CommandResult};

/// A configured pip invocation.
///
/// Built from a command string such as `pip3` or `python3 -m pip`; the
/// string is split on whitespace into program and leading arguments.
#[derive(Debug, Clone)]
pub struct Pip {
    program: String,
    base_args: Vec<String>,
}

impl Pip {
    /// Create a pip wrapper from a command string.
    pub fn new(command: &str) -> Result<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or_else(|| PipsyncError::InvalidPipCommand {
            message: "command is empty".to_string(),
        })?;

        Ok(Self {
            program,
            base_args: parts.collect(),
        })
    }

    /// The command string, for logs and error messages.
    pub fn describe(&self) -> String {
        crate::shell::command::render_argv(&self.program, &self.base_args)
    }

    fn argv(&self, tail: &[&str]) -> Vec<String> {
        let mut args = self.base_args.clone();
        args.extend(tail.iter().map(|s| s.to_string()));
        args
    }

    /// Query the set of installed package names.
    ///
    /// Runs `<pip> list --format=freeze` and keeps the bare name of each
    /// non-empty output line. Pip being unavailable or exiting non-zero is
    /// a hard failure that aborts the run.
    pub fn list_installed(&self) -> Result<BTreeSet<String>> {
        let args = self.argv(&["list", "--format=freeze"]);
        let result =
            execute(&self.program, &args, &CommandOptions::captured()).map_err(|_| {
                PipsyncError::ListInstalledFailed {
                    command: self.describe(),
                    message: "command could not be run".to_string(),
                }
            })?;

        if !result.success {
            return Err(PipsyncError::ListInstalledFailed {
                command: self.describe(),
                message: format!("exited with code {:?}", result.exit_code),
            });
        }

        let installed: BTreeSet<String> = result
            .stdout
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| bare_name(line).to_string())
            .collect();

        tracing::debug!("pip reports {} installed package(s)", installed.len());
        Ok(installed)
    }

    /// Install one or more packages by name.
    ///
    /// The child's output is captured when `capture` is set, otherwise it
    /// streams straight to the terminal. The exit code in the returned
    /// result is the sole success signal.
    pub fn install(&self, packages: &[&str], capture: bool) -> Result<CommandResult> {
        let mut tail = vec!["install"];
        tail.extend_from_slice(packages);
        let args = self.argv(&tail);

        let options = if capture {
            CommandOptions::captured()
        } else {
            CommandOptions::inherited()
        };

        execute(&self.program, &args, &options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_command_on_whitespace() {
        let pip = Pip::new("python3 -m pip").unwrap();
        assert_eq!(pip.describe(), "python3 -m pip");
    }

    #[test]
    fn empty_command_is_rejected() {
        let err = Pip::new("   ").unwrap_err();
        assert!(matches!(err, PipsyncError::InvalidPipCommand { .. }));
    }

    #[test]
    fn missing_pip_is_a_hard_failure() {
        let pip = Pip::new("pipsync-no-such-pip").unwrap();
        let err = pip.list_installed().unwrap_err();
        assert!(matches!(err, PipsyncError::ListInstalledFailed { .. }));
    }

    #[test]
    #[cfg(unix)]
    fn list_installed_parses_freeze_output() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::TempDir::new().unwrap();
        let script = temp.path().join("fakepip");
        fs::write(&script, "#!/bin/sh\necho 'flask==2.0'\necho 'lxml==4.9'\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let pip = Pip::new(script.to_str().unwrap()).unwrap();
        let installed = pip.list_installed().unwrap();

        assert!(installed.contains("flask"));
        assert!(installed.contains("lxml"));
        assert_eq!(installed.len(), 2);
    }

    #[test]
    #[cfg(unix)]
    fn list_installed_nonzero_exit_is_error() {
        let pip = Pip::new("false").unwrap();
        let err = pip.list_installed().unwrap_err();

        match err {
            PipsyncError::ListInstalledFailed { message, .. } => {
                assert!(message.contains("exited with code"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    #[cfg(unix)]
    fn install_reports_exit_status() {
        let ok = Pip::new("true").unwrap();
        assert!(ok.install(&["requests"], true).unwrap().success);

        let bad = Pip::new("false").unwrap();
        assert!(!bad.install(&["requests"], true).unwrap().success);
    }
}

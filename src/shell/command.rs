//! External command execution.
//!
//! Commands are executed argv-style (program + argument vector), never
//! through a shell: package names come from user-controlled files and must
//! reach pip as literal arguments. Execution is synchronous and blocking
//! with no timeout; a hung child hangs the run.

use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::error::{PipsyncError, Result};

/// Result of executing an external command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output (empty unless captured).
    pub stdout: String,

    /// Standard error (empty unless captured).
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the command succeeded (exit code 0).
    pub success: bool,
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Capture stdout (if false, inherits from parent).
    pub capture_stdout: bool,

    /// Capture stderr (if false, inherits from parent).
    pub capture_stderr: bool,
}

impl CommandOptions {
    /// Options that capture both output streams.
    pub fn captured() -> Self {
        Self {
            capture_stdout: true,
            capture_stderr: true,
            ..Default::default()
        }
    }

    /// Options that let the child write directly to the terminal.
    pub fn inherited() -> Self {
        Self::default()
    }
}

/// Render an argv for error messages and logs.
pub fn render_argv(program: &str, args: &[String]) -> String {
    let mut rendered = program.to_string();
    for arg in args {
        rendered.push(' ');
        rendered.push_str(arg);
    }
    rendered
}

/// Execute an external command and wait for it to exit.
///
/// A spawn failure (program not found, permission denied) maps to
/// [`PipsyncError::CommandFailed`] with `code: None`. A non-zero exit is
/// not an error here; callers inspect [`CommandResult::success`].
pub fn execute(program: &str, args: &[String], options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new(program);
    cmd.args(args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    if options.capture_stdout {
        cmd.stdout(Stdio::piped());
    } else {
        cmd.stdout(Stdio::inherit());
    }

    if options.capture_stderr {
        cmd.stderr(Stdio::piped());
    } else {
        cmd.stderr(Stdio::inherit());
    }

    let output = cmd.output().map_err(|_| PipsyncError::CommandFailed {
        command: render_argv(program, args),
        code: None,
    })?;

    let duration = start.elapsed();

    let stdout = if options.capture_stdout {
        String::from_utf8_lossy(&output.stdout).to_string()
    } else {
        String::new()
    };

    let stderr = if options.capture_stderr {
        String::from_utf8_lossy(&output.stderr).to_string()
    } else {
        String::new()
    };

    Ok(CommandResult {
        exit_code: output.status.code(),
        stdout,
        stderr,
        duration,
        success: output.status.success(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    #[cfg(unix)]
    fn execute_successful_command() {
        let result = execute("echo", &args(&["hello"]), &CommandOptions::captured()).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[test]
    #[cfg(unix)]
    fn execute_failing_command() {
        let result = execute("false", &[], &CommandOptions::captured()).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(1));
    }

    #[test]
    fn execute_missing_program_is_error() {
        let err = execute(
            "pipsync-definitely-not-a-real-program",
            &[],
            &CommandOptions::captured(),
        )
        .unwrap_err();

        match err {
            PipsyncError::CommandFailed { command, code } => {
                assert!(command.contains("pipsync-definitely-not-a-real-program"));
                assert_eq!(code, None);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    #[cfg(unix)]
    fn execute_with_cwd() {
        let temp = tempfile::TempDir::new().unwrap();
        let options = CommandOptions {
            cwd: Some(temp.path().to_path_buf()),
            capture_stdout: true,
            ..Default::default()
        };

        let result = execute("pwd", &[], &options).unwrap();

        assert!(result.success);
    }

    #[test]
    #[cfg(unix)]
    fn command_result_tracks_duration() {
        let result = execute("echo", &args(&["fast"]), &CommandOptions::captured()).unwrap();

        assert!(result.duration.as_millis() < 5000);
    }

    #[test]
    fn render_argv_joins_with_spaces() {
        assert_eq!(
            render_argv("pip3", &args(&["install", "requests"])),
            "pip3 install requests"
        );
        assert_eq!(render_argv("pip3", &[]), "pip3");
    }
}

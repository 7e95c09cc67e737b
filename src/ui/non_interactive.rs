//! Non-interactive UI for CI/headless environments.

use crate::error::Result;

use super::{OutputMode, SpinnerHandle, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Animated spinners are replaced with plain lines since they produce
/// noisy output in log-based environments; confirmations resolve to their
/// default without blocking.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

/// Spinner stand-in that prints outcome lines instead of animating.
struct LogSpinner {
    show: bool,
}

impl SpinnerHandle for LogSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        if self.show {
            println!("✓ {}", msg);
        }
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        tracing::debug!(
            "non-interactive confirm '{}' resolved to default {}",
            question,
            default
        );
        Ok(default)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_status() {
            println!("{}", message);
        }
        Box::new(LogSpinner {
            show: self.mode.shows_status(),
        })
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_returns_default() {
        let mut ui = NonInteractiveUI::new(OutputMode::Normal);
        assert!(ui.confirm("Install 3 packages?", true).unwrap());
        assert!(!ui.confirm("Install 3 packages?", false).unwrap());
    }

    #[test]
    fn never_interactive() {
        let ui = NonInteractiveUI::new(OutputMode::Normal);
        assert!(!ui.is_interactive());
    }

    #[test]
    fn spinner_finishes_without_panic() {
        let mut ui = NonInteractiveUI::new(OutputMode::Silent);
        let mut spinner = ui.start_spinner("Installing requests...");
        spinner.finish_success("Installed requests");
    }
}

//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use pipsync::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("3 missing package(s)");
//! ui.success("Installed requests");
//!
//! assert!(ui.messages().contains(&"3 missing package(s)".to_string()));
//! assert!(ui.successes().contains(&"Installed requests".to_string()));
//! ```

use crate::error::Result;

use super::{OutputMode, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    confirm_response: Option<bool>,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    confirms: Vec<String>,
    spinners: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set the answer returned by `confirm` (overrides the default).
    pub fn set_confirm_response(&mut self, response: bool) {
        self.confirm_response = Some(response);
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all confirm questions that were shown.
    pub fn confirms(&self) -> &[String] {
        &self.confirms
    }

    /// Get the start messages of all spinners.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }
}

/// Spinner handle that discards everything.
struct MockSpinner;

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, _msg: &str) {}
    fn finish_success(&mut self, _msg: &str) {}
    fn finish_error(&mut self, _msg: &str) {}
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        self.confirms.push(question.to_string());
        Ok(self.confirm_response.unwrap_or(default))
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner)
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_interactions() {
        let mut ui = MockUI::new();
        ui.message("hello");
        ui.warning("careful");
        ui.error("broken");
        ui.show_header("pipsync");
        let _ = ui.start_spinner("Installing flask...");

        assert_eq!(ui.messages(), &["hello".to_string()]);
        assert_eq!(ui.warnings(), &["careful".to_string()]);
        assert_eq!(ui.errors(), &["broken".to_string()]);
        assert_eq!(ui.headers(), &["pipsync".to_string()]);
        assert_eq!(ui.spinners(), &["Installing flask...".to_string()]);
    }

    #[test]
    fn confirm_uses_configured_response() {
        let mut ui = MockUI::new();
        ui.set_confirm_response(false);

        assert!(!ui.confirm("Install?", true).unwrap());
        assert_eq!(ui.confirms(), &["Install?".to_string()]);
    }

    #[test]
    fn confirm_falls_back_to_default() {
        let mut ui = MockUI::new();
        assert!(ui.confirm("Install?", true).unwrap());
    }
}

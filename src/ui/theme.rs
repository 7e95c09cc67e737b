//! Visual theme and styling.

use console::Style;

/// Pipsync's visual theme.
#[derive(Debug, Clone)]
pub struct PipsyncTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
}

impl Default for PipsyncTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl PipsyncTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = PipsyncTheme::plain();
        let msg = theme.format_success("No missing packages");
        assert!(msg.contains("✓"));
        assert!(msg.contains("No missing packages"));
    }

    #[test]
    fn theme_formats_warning() {
        let theme = PipsyncTheme::plain();
        let msg = theme.format_warning("1 package failed");
        assert!(msg.contains("⚠"));
        assert!(msg.contains("1 package failed"));
    }

    #[test]
    fn theme_formats_error() {
        let theme = PipsyncTheme::plain();
        let msg = theme.format_error("Failed");
        assert!(msg.contains("✗"));
        assert!(msg.contains("Failed"));
    }

    #[test]
    fn theme_formats_header() {
        let theme = PipsyncTheme::plain();
        assert!(theme.format_header("pipsync").contains("pipsync"));
    }

    #[test]
    fn default_impl_matches_new() {
        let default = PipsyncTheme::default();
        let new = PipsyncTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }
}

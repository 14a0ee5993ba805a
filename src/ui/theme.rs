//! Visual theme and styling.

use console::Style;

/// Console styles for the report.
#[derive(Debug, Clone)]
pub struct SafeviewTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for section headers (bold).
    pub header: Style,
    /// Style for the prompt text (bold).
    pub prompt: Style,
    /// Style for the mask characters echoed while typing (dim).
    pub mask: Style,
}

impl Default for SafeviewTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl SafeviewTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            header: Style::new().bold(),
            prompt: Style::new().bold(),
            mask: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            prompt: Style::new(),
            mask: Style::new(),
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

    /// Format a section header as `=== TITLE ===`.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(format!("=== {} ===", title)))
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

//! UI-related application state

use crate::ui::theme::Theme;

/// UI-related state
pub struct UiState {
    /// Current theme
    pub current_theme: Theme,
    /// Whether theme needs to be applied
    pub theme_dirty: bool,
    /// Whether to show the About dialog
    pub show_about_dialog: bool,
}

impl UiState {
    /// Create a new UiState with the given theme
    pub fn new(theme: Theme) -> Self {
        Self {
            current_theme: theme,
            theme_dirty: true, // Apply theme on first frame
            show_about_dialog: false,
        }
    }
}

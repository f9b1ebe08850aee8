//! Theme and styling state management.
//!
//! This module encapsulates all state related to visual theming,
//! including theme manager and currently selected theme.

use seatmap::theme::DEFAULT_THEME;
use seatmap::{ThemeColors, ThemeManager};

/// State related to visual theme and styling.
///
/// Responsibilities:
/// - Managing theme instances
/// - Tracking current theme selection
pub struct ThemeState {
    /// Theme manager instance
    theme_manager: ThemeManager,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("current_theme_name", &self.current_theme_name())
            .finish_non_exhaustive()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeState {
    /// Creates a new theme state with the default theme.
    pub fn new() -> Self {
        Self::with_theme(DEFAULT_THEME)
    }

    /// Creates a new theme state with a specific theme.
    ///
    /// Unknown names (e.g. from an older settings file) fall back to the
    /// default theme.
    pub fn with_theme(theme_name: &str) -> Self {
        let mut theme_manager = ThemeManager::new();
        if theme_manager.set_current_theme(theme_name).is_err() {
            tracing::warn!(theme = theme_name, "unknown theme, using default");
        }
        Self { theme_manager }
    }

    // ===== Theme Queries =====

    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    pub fn current_theme_name(&self) -> &str {
        self.theme_manager.current_theme_name()
    }

    pub fn colors(&self) -> &ThemeColors {
        &self.theme_manager.current_theme().colors
    }

    // ===== Theme Mutations =====

    /// Sets the current theme by name. Unknown names are ignored.
    pub fn set_theme(&mut self, theme_name: &str) {
        if let Err(e) = self.theme_manager.set_current_theme(theme_name) {
            tracing::warn!("{e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_stored_theme_falls_back() {
        let state = ThemeState::with_theme("Dracula");
        assert_eq!(state.current_theme_name(), DEFAULT_THEME);
    }

    #[test]
    fn test_set_theme() {
        let mut state = ThemeState::new();
        state.set_theme("Light");
        assert_eq!(state.current_theme_name(), "Light");
        state.set_theme("missing");
        assert_eq!(state.current_theme_name(), "Light");
    }
}

//! Colour themes for the seat map and its surrounding panels.
//!
//! Built-in themes are Light, Dark and Solarized Dark. Besides the usual
//! panel and text colours every palette carries one fill per seat status,
//! so the map reads the same way whichever theme is active.
//!
//! # Examples
//!
//! ```
//! use seatmap::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let dark = manager.get_theme("Dark").unwrap();
//! println!("Available seats: {:?}", dark.colors.available);
//! ```

use crate::domain::status::SeatStatus;
use egui::Color32;
use std::collections::HashMap;

/// Name of the theme used when nothing else was chosen.
pub const DEFAULT_THEME: &str = "Dark";

/// Complete colour palette for a theme
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Background colors
    pub background: Color32,
    pub panel_background: Color32,
    pub extreme_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,
    pub text_strong: Color32,

    // Interactive colors
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    // Seat status fills
    pub occupied: Color32,
    pub booked_active: Color32,
    pub booked_future: Color32,
    pub available: Color32,

    // Map overlays
    pub cell_text: Color32,
    pub selection_outline: Color32,
    pub tooltip_background: Color32,
    pub tooltip_text: Color32,

    pub error: Color32,
    pub warning: Color32,
}

impl ThemeColors {
    /// Fill colour for a seat in `status`.
    pub fn status_fill(&self, status: SeatStatus) -> Color32 {
        match status {
            SeatStatus::Occupied => self.occupied,
            SeatStatus::BookedActive => self.booked_active,
            SeatStatus::BookedFuture => self.booked_future,
            SeatStatus::Available => self.available,
        }
    }
}

/// A theme definition with metadata and colour palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
    /// Whether egui's dark visuals are the base for this theme.
    pub dark: bool,
}

/// Centralized theme manager providing access to all available themes
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    current_theme_name: String,
}

impl ThemeManager {
    /// Creates a new ThemeManager initialized with all built-in themes
    pub fn new() -> Self {
        let mut themes = HashMap::new();
        for theme in [light_theme(), dark_theme(), solarized_dark_theme()] {
            themes.insert(theme.name.clone(), theme);
        }

        Self {
            themes,
            current_theme_name: DEFAULT_THEME.to_string(),
        }
    }

    /// Retrieves a theme by name
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Returns all theme names, sorted
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Gets the currently selected theme
    pub fn current_theme(&self) -> &Theme {
        match self.themes.get(&self.current_theme_name) {
            Some(theme) => theme,
            None => &self.themes[DEFAULT_THEME],
        }
    }

    pub fn current_theme_name(&self) -> &str {
        &self.current_theme_name
    }

    /// Sets the current theme by name
    pub fn set_current_theme(&mut self, name: &str) -> Result<(), String> {
        if self.themes.contains_key(name) {
            self.current_theme_name = name.to_string();
            Ok(())
        } else {
            Err(format!("Theme '{}' not found", name))
        }
    }

    /// Applies a theme's colors to egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;
        *visuals = if theme.dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.panel_fill = colors.panel_background;
        visuals.window_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;
        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.selection_outline;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.error_fg_color = colors.error;
        visuals.warn_fg_color = colors.warning;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light panels, saturated status fills".to_string(),
        dark: false,
        colors: ThemeColors {
            background: Color32::from_rgb(248, 248, 248),
            panel_background: Color32::from_rgb(248, 248, 248),
            extreme_background: Color32::from_rgb(255, 255, 255),

            text: Color32::from_rgb(0, 0, 0),
            text_dim: Color32::from_rgb(120, 120, 120),
            text_strong: Color32::from_rgb(0, 0, 0),

            selection: Color32::from_rgb(180, 200, 255),
            hover: Color32::from_rgb(220, 220, 220),
            border: Color32::from_rgb(160, 160, 160),

            occupied: Color32::from_rgb(200, 40, 40),
            booked_active: Color32::from_rgb(230, 120, 20),
            booked_future: Color32::from_rgb(40, 100, 200),
            available: Color32::from_rgb(40, 160, 40),

            cell_text: Color32::from_rgb(255, 255, 255),
            selection_outline: Color32::from_rgb(20, 20, 20),
            tooltip_background: Color32::from_rgb(255, 255, 240),
            tooltip_text: Color32::from_rgb(20, 20, 20),

            error: Color32::from_rgb(200, 40, 40),
            warning: Color32::from_rgb(230, 120, 20),
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "egui dark panels, muted status fills".to_string(),
        dark: true,
        colors: ThemeColors {
            background: Color32::from_rgb(39, 39, 39),
            panel_background: Color32::from_rgb(39, 39, 39),
            extreme_background: Color32::from_rgb(16, 16, 16),

            text: Color32::from_rgb(255, 255, 255),
            text_dim: Color32::from_rgb(160, 160, 160),
            text_strong: Color32::from_rgb(255, 255, 255),

            selection: Color32::from_rgb(50, 80, 120),
            hover: Color32::from_rgb(70, 70, 70),
            border: Color32::from_rgb(100, 100, 100),

            occupied: Color32::from_rgb(231, 76, 60),
            booked_active: Color32::from_rgb(243, 156, 18),
            booked_future: Color32::from_rgb(52, 152, 219),
            available: Color32::from_rgb(46, 204, 113),

            cell_text: Color32::from_rgb(16, 16, 16),
            selection_outline: Color32::from_rgb(255, 255, 255),
            tooltip_background: Color32::from_rgb(24, 24, 24),
            tooltip_text: Color32::from_rgb(230, 230, 230),

            error: Color32::from_rgb(231, 76, 60),
            warning: Color32::from_rgb(243, 156, 18),
        },
    }
}

/// Official colors from: https://ethanschoonover.com/solarized/
fn solarized_dark_theme() -> Theme {
    Theme {
        name: "Solarized Dark".to_string(),
        description: "Solarized dark palette".to_string(),
        dark: true,
        colors: ThemeColors {
            // base03 / base02
            background: hex_to_color32("#002b36"),
            panel_background: hex_to_color32("#002b36"),
            extreme_background: hex_to_color32("#073642"),

            // base0 / base01 / base1
            text: hex_to_color32("#839496"),
            text_dim: hex_to_color32("#586e75"),
            text_strong: hex_to_color32("#93a1a1"),

            selection: hex_to_color32("#073642"),
            hover: hex_to_color32("#073642"),
            border: hex_to_color32("#586e75"),

            occupied: hex_to_color32("#dc322f"),      // red
            booked_active: hex_to_color32("#cb4b16"), // orange
            booked_future: hex_to_color32("#268bd2"), // blue
            available: hex_to_color32("#859900"),     // green

            cell_text: hex_to_color32("#fdf6e3"),
            selection_outline: hex_to_color32("#b58900"),
            tooltip_background: hex_to_color32("#073642"),
            tooltip_text: hex_to_color32("#eee8d5"),

            error: hex_to_color32("#dc322f"),
            warning: hex_to_color32("#b58900"),
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Adjusts the brightness of a color by a factor (1.0 = no change, >1.0 = brighter, <1.0 = darker)
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}

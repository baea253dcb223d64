use eframe::egui::{self, Color32, Stroke, Visuals};
use serde::{Deserialize, Serialize};

/// Available theme presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    #[default]
    Paper,
    Ink,
    Ocean,
}

impl ThemePreset {
    /// Get all available presets
    pub fn all() -> &'static [ThemePreset] {
        &[ThemePreset::Paper, ThemePreset::Ink, ThemePreset::Ocean]
    }

    /// Get display name for the preset
    pub fn name(&self) -> &'static str {
        match self {
            ThemePreset::Paper => "Paper",
            ThemePreset::Ink => "Ink",
            ThemePreset::Ocean => "Ocean",
        }
    }

    /// Parse a preset from its config name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|preset| preset.name().eq_ignore_ascii_case(name))
    }

    /// Get the theme colors for this preset
    pub fn theme(&self) -> Theme {
        match self {
            ThemePreset::Paper => Theme::paper(),
            ThemePreset::Ink => Theme::ink(),
            ThemePreset::Ocean => Theme::ocean(),
        }
    }
}

/// Theme color definitions
#[derive(Debug, Clone)]
pub struct Theme {
    pub dark: bool,

    pub bg_window: Color32,
    pub bg_field: Color32,
    pub bg_banner: Color32,

    pub text_primary: Color32,
    pub text_muted: Color32,

    pub accent: Color32,
    pub accent_hover: Color32,

    pub success: Color32,
    pub error: Color32,

    pub border: Color32,
}

impl Theme {
    /// Light theme close to a plain web page
    pub fn paper() -> Self {
        Self {
            dark: false,

            bg_window: Color32::from_rgb(250, 250, 249),
            bg_field: Color32::WHITE,
            bg_banner: Color32::from_rgb(241, 241, 239),

            text_primary: Color32::from_rgb(28, 25, 23),
            text_muted: Color32::from_rgb(120, 113, 108),

            accent: Color32::from_rgb(37, 99, 235),        // Blue-600
            accent_hover: Color32::from_rgb(29, 78, 216),  // Blue-700

            success: Color32::from_rgb(22, 163, 74),  // Green-600
            error: Color32::from_rgb(220, 38, 38),    // Red-600

            border: Color32::from_rgb(214, 211, 209),
        }
    }

    /// Dark theme
    pub fn ink() -> Self {
        Self {
            dark: true,

            bg_window: Color32::from_rgb(24, 24, 27),
            bg_field: Color32::from_rgb(16, 16, 18),
            bg_banner: Color32::from_rgb(39, 39, 42),

            text_primary: Color32::from_rgb(250, 250, 250),
            text_muted: Color32::from_rgb(161, 161, 170),

            accent: Color32::from_rgb(245, 158, 11),       // Amber-500
            accent_hover: Color32::from_rgb(251, 191, 36), // Amber-400

            success: Color32::from_rgb(34, 197, 94),  // Green-500
            error: Color32::from_rgb(239, 68, 68),    // Red-500

            border: Color32::from_rgb(63, 63, 70),
        }
    }

    /// Dark blue theme
    pub fn ocean() -> Self {
        Self {
            dark: true,

            bg_window: Color32::from_rgb(15, 23, 42),
            bg_field: Color32::from_rgb(12, 20, 30),
            bg_banner: Color32::from_rgb(30, 41, 59),

            text_primary: Color32::from_rgb(248, 250, 252),
            text_muted: Color32::from_rgb(148, 163, 184),

            accent: Color32::from_rgb(6, 182, 212),        // Cyan-500
            accent_hover: Color32::from_rgb(34, 211, 238), // Cyan-400

            success: Color32::from_rgb(52, 211, 153),  // Emerald-400
            error: Color32::from_rgb(251, 113, 133),   // Rose-400

            border: Color32::from_rgb(51, 65, 85),
        }
    }

    /// Apply this theme to egui's visuals
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = if self.dark {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        visuals.window_fill = self.bg_window;
        visuals.panel_fill = self.bg_window;
        visuals.faint_bg_color = self.bg_banner;
        // Text edit background
        visuals.extreme_bg_color = self.bg_field;

        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, self.accent);
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, self.accent_hover);

        visuals.selection.bg_fill = self.accent.gamma_multiply(0.3);
        visuals.selection.stroke = Stroke::new(1.0, self.accent);
        visuals.hyperlink_color = self.accent;

        visuals.window_stroke = Stroke::new(1.0, self.border);
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        ctx.set_visuals(visuals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_names_round_trip() {
        for preset in ThemePreset::all() {
            assert_eq!(ThemePreset::from_name(preset.name()), Some(*preset));
        }
        assert_eq!(ThemePreset::from_name("ocean"), Some(ThemePreset::Ocean));
        assert_eq!(ThemePreset::from_name("neon"), None);
    }

    #[test]
    fn test_only_paper_is_light() {
        assert!(!ThemePreset::Paper.theme().dark);
        assert!(ThemePreset::Ink.theme().dark);
        assert!(ThemePreset::Ocean.theme().dark);
    }
}

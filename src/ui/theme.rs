//! UI theme definitions.

use egui::{Color32, Visuals};
use serde::{Deserialize, Serialize};

/// Theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme (default; testing booths are usually lit)
    #[default]
    Light,
    /// Dark theme
    Dark,
}

/// Colors shared by every view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Window and panel background
    pub panel: Color32,
    /// Grouped form background
    pub card: Color32,
    /// Primary text
    pub text: Color32,
    /// Secondary text
    pub text_secondary: Color32,
    /// Accent for the selected syllable and primary buttons
    pub accent: Color32,
    /// Keyword marked correct
    pub correct: Color32,
    /// Keyword marked incorrect
    pub incorrect: Color32,
    /// Error alert text
    pub error: Color32,
}

impl Theme {
    /// Colors for this theme.
    pub fn palette(&self) -> Palette {
        match self {
            Theme::Light => Palette {
                panel: Color32::from_rgb(250, 250, 252),
                card: Color32::from_rgb(240, 240, 244),
                text: Color32::from_rgb(32, 32, 40),
                text_secondary: Color32::from_rgb(96, 96, 104),
                accent: Color32::from_rgb(26, 115, 232),
                correct: Color32::from_rgb(24, 128, 56),
                incorrect: Color32::from_rgb(200, 50, 40),
                error: Color32::from_rgb(200, 50, 40),
            },
            Theme::Dark => Palette {
                panel: Color32::from_rgb(28, 28, 36),
                card: Color32::from_rgb(38, 38, 48),
                text: Color32::from_rgb(240, 240, 245),
                text_secondary: Color32::from_rgb(160, 160, 170),
                accent: Color32::from_rgb(66, 133, 244),
                correct: Color32::from_rgb(52, 168, 83),
                incorrect: Color32::from_rgb(234, 67, 53),
                error: Color32::from_rgb(234, 67, 53),
            },
        }
    }

    /// Get the egui Visuals for this theme.
    pub fn visuals(&self) -> Visuals {
        let palette = self.palette();
        let mut visuals = match self {
            Theme::Light => Visuals::light(),
            Theme::Dark => Visuals::dark(),
        };

        visuals.window_fill = palette.panel;
        visuals.panel_fill = palette.panel;
        visuals.faint_bg_color = palette.card;

        visuals.widgets.noninteractive.bg_fill = palette.card;
        visuals.widgets.inactive.bg_fill = palette.card;
        visuals.widgets.active.bg_fill = palette.accent;

        visuals.selection.bg_fill = palette.accent.linear_multiply(0.3);
        visuals.selection.stroke.color = palette.accent;

        visuals.widgets.noninteractive.fg_stroke.color = palette.text;
        visuals.widgets.inactive.fg_stroke.color = palette.text_secondary;
        visuals.widgets.hovered.fg_stroke.color = palette.text;

        visuals
    }
}

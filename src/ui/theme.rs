//! Color themes for the UI.

use crate::app::Theme;
use crate::surface::Paint;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Axis lines and tick labels.
    pub axis: Color,
    /// Axis names.
    pub heading: Color,
    /// Plotted points.
    pub point: Color,
    /// Input line prompt.
    pub label: Color,
    /// Border color.
    pub border: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Keymap bar background color.
    pub keymap_bg: Color,
    /// Warning color, used while the loop is paused.
    pub warning: Color,
    /// Error color.
    pub error: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                axis: Color::Rgb(168, 153, 132),
                heading: Color::Rgb(251, 184, 108),
                point: Color::Rgb(142, 192, 124),
                label: Color::Rgb(184, 187, 38),
                border: Color::Rgb(102, 92, 84),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
                keymap_bg: Color::Rgb(50, 48, 47),
                warning: Color::Rgb(250, 189, 47),
                error: Color::Rgb(251, 73, 52),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                axis: Color::Rgb(124, 111, 100),
                heading: Color::Rgb(175, 58, 3),
                point: Color::Rgb(102, 123, 3),
                label: Color::Rgb(121, 116, 14),
                border: Color::Rgb(213, 196, 161),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
                keymap_bg: Color::Rgb(242, 229, 188),
                warning: Color::Rgb(181, 118, 20),
                error: Color::Rgb(157, 0, 6),
            },
        }
    }

    /// Resolve a surface paint for line and text commands.
    pub fn paint(&self, paint: Paint) -> Color {
        match paint {
            Paint::Ink => self.axis,
            Paint::Background => self.bg,
        }
    }
}

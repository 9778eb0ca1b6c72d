//! ANSI 256-color fallback theme for terminals without truecolor support.
//!
//! Approximates the glass-dark palette with indexed colors so the bar stays
//! legible inside macOS Terminal and other 8-bit color terminals.

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

/// ANSI 256-color approximation of the glass-dark palette.
#[derive(Debug, Clone)]
pub struct GlassAnsiTheme {
    roles: ThemeRoles,
}

impl GlassAnsiTheme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: Color::Indexed(232),
                surface: Color::Indexed(234),
                surface_muted: Color::Indexed(236),
                border: Color::Indexed(238),

                text: Color::Indexed(255),
                text_secondary: Color::Indexed(250),
                text_muted: Color::Indexed(244),

                accent: Color::Indexed(111),

                selection_bg: Color::Indexed(237),
                selection_fg: Color::Indexed(255),
                focus: Color::Indexed(111),
            },
        }
    }
}

impl Theme for GlassAnsiTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

// Glass-light palette: white surface with a black text ladder whose steps
// match the alpha levels of the original glass design.
pub const BACKDROP: Color = Color::Rgb(0xF2, 0xF2, 0xF3);
pub const SURFACE: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
pub const SURFACE_RAISED: Color = Color::Rgb(0xF5, 0xF5, 0xF6);
pub const BORDER: Color = Color::Rgb(0xE6, 0xE6, 0xE8); // ~6% black over white
pub const HIGHLIGHT: Color = Color::Rgb(0xEB, 0xEB, 0xEC); // ~6% black indicator wash

pub const TEXT_ACTIVE: Color = Color::Rgb(0x1A, 0x1A, 0x1A);
pub const TEXT_HOVER: Color = Color::Rgb(0x4D, 0x4D, 0x4D); // ~70% black
pub const TEXT_REST: Color = Color::Rgb(0x99, 0x99, 0x99); // ~40% black

pub const ACCENT: Color = Color::Rgb(0x3B, 0x6F, 0xD4);

/// Glass-light theme for bright terminals.
#[derive(Debug, Clone)]
pub struct GlassLightTheme {
    roles: ThemeRoles,
}

impl GlassLightTheme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: BACKDROP,
                surface: SURFACE,
                surface_muted: SURFACE_RAISED,
                border: BORDER,

                text: TEXT_ACTIVE,
                text_secondary: TEXT_HOVER,
                text_muted: TEXT_REST,

                accent: ACCENT,

                selection_bg: HIGHLIGHT,
                selection_fg: TEXT_ACTIVE,
                focus: ACCENT,
            },
        }
    }
}

impl Theme for GlassLightTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

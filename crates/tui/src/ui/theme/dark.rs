use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

// Glass-dark palette. Terminals have no backdrop blur, so the frosted look is
// approximated with a near-black surface and a white text ladder whose steps
// match the alpha levels of the original glass design.
pub const BACKDROP: Color = Color::Rgb(0x0D, 0x0D, 0x0E); // screen fill behind the bar
pub const SURFACE: Color = Color::Rgb(0x16, 0x16, 0x17); // glass tint #161617
pub const SURFACE_RAISED: Color = Color::Rgb(0x22, 0x22, 0x24);
pub const BORDER: Color = Color::Rgb(0x2E, 0x2E, 0x30); // ~8% white over the tint
pub const HIGHLIGHT: Color = Color::Rgb(0x2A, 0x2A, 0x2C); // ~9% white indicator wash

pub const TEXT_ACTIVE: Color = Color::Rgb(0xFF, 0xFF, 0xFF); // full white
pub const TEXT_HOVER: Color = Color::Rgb(0xCC, 0xCC, 0xCC); // ~80% white
pub const TEXT_REST: Color = Color::Rgb(0x80, 0x80, 0x80); // ~50% white

pub const ACCENT: Color = Color::Rgb(0x8A, 0xB4, 0xF8); // cool focus blue

/// Default glass-dark theme tuned for dark terminals.
#[derive(Debug, Clone)]
pub struct GlassDarkTheme {
    roles: ThemeRoles,
}

impl GlassDarkTheme {
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

impl Theme for GlassDarkTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

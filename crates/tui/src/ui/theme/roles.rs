use std::fmt::Debug;

use ratatui::style::{Color, Modifier, Style};

/// Semantic color roles used throughout the bar.
#[derive(Debug, Clone)]
pub struct ThemeRoles {
    /// Backdrop behind the bar (the demo screen fill).
    pub background: Color,
    /// Glass surface of the bar itself.
    pub surface: Color,
    /// Slightly raised surface tone, used for subtle separators.
    pub surface_muted: Color,
    /// Bar outline.
    pub border: Color,

    /// Active item text.
    pub text: Color,
    /// Hovered item text.
    pub text_secondary: Color,
    /// Resting item text.
    pub text_muted: Color,

    /// Interactive accent (hints, demo chrome).
    pub accent: Color,

    /// Indicator highlight behind the active item.
    pub selection_bg: Color,
    /// Text color atop the indicator highlight.
    pub selection_fg: Color,
    /// Border color when the bar holds focus.
    pub focus: Color,
}

/// Theme trait exposes semantic roles and common style builders.
pub trait Theme: Send + Sync + Debug {
    fn roles(&self) -> &ThemeRoles;

    // Text styles
    fn text_primary_style(&self) -> Style {
        Style::default().fg(self.roles().text)
    }
    fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.roles().text_secondary)
    }
    fn text_muted_style(&self) -> Style {
        Style::default().fg(self.roles().text_muted)
    }

    // Borders and focus
    fn border_style(&self, focused: bool) -> Style {
        let color = if focused { self.roles().focus } else { self.roles().border };
        Style::default().fg(color)
    }

    // Selection / indicator
    fn selection_style(&self) -> Style {
        Style::default().fg(self.roles().selection_fg).bg(self.roles().selection_bg)
    }

    // Accents
    fn accent_style(&self) -> Style {
        Style::default().fg(self.roles().accent)
    }
    fn accent_emphasis_style(&self) -> Style {
        Style::default().fg(self.roles().accent).add_modifier(Modifier::BOLD)
    }
}

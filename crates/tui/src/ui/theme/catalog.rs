use ratatui::style::Color;

use pillnav_types::ThemeChoice;

use super::{GlassAnsiTheme, GlassDarkTheme, GlassLightTheme, Theme};

/// Describes a selectable theme.
#[derive(Clone, Copy, Debug)]
pub struct ThemeDefinition {
    /// Canonical identifier used for persistence and env overrides.
    pub id: &'static str,
    /// Human-friendly display name.
    pub label: &'static str,
    /// Color chips summarizing the palette.
    pub swatch: ThemeSwatch,
    /// Aliases (e.g., env overrides) that map back to this definition.
    pub aliases: &'static [&'static str],
    /// Whether the palette targets ANSI/8-bit terminals.
    pub is_ansi_fallback: bool,
    factory: fn() -> Box<dyn Theme>,
}

impl ThemeDefinition {
    /// Instantiate the theme represented by this definition.
    pub fn build(&self) -> Box<dyn Theme> {
        (self.factory)()
    }
}

/// Minimal set of colors that summarize each palette.
#[derive(Clone, Copy, Debug)]
pub struct ThemeSwatch {
    pub background: Color,
    pub accent: Color,
    pub selection: Color,
}

/// Ordered list of selectable themes.
pub const THEME_DEFINITIONS: &[ThemeDefinition] = &[
    ThemeDefinition {
        id: "glass_dark",
        label: "Glass Dark",
        swatch: ThemeSwatch {
            background: Color::Rgb(0x16, 0x16, 0x17),
            accent: Color::Rgb(0x8A, 0xB4, 0xF8),
            selection: Color::Rgb(0x2A, 0x2A, 0x2C),
        },
        aliases: &["glass_dark", "glass-dark", "dark"],
        is_ansi_fallback: false,
        factory: || Box::new(GlassDarkTheme::new()),
    },
    ThemeDefinition {
        id: "glass_light",
        label: "Glass Light",
        swatch: ThemeSwatch {
            background: Color::Rgb(0xFF, 0xFF, 0xFF),
            accent: Color::Rgb(0x3B, 0x6F, 0xD4),
            selection: Color::Rgb(0xEB, 0xEB, 0xEC),
        },
        aliases: &["glass_light", "glass-light", "light"],
        is_ansi_fallback: false,
        factory: || Box::new(GlassLightTheme::new()),
    },
    ThemeDefinition {
        id: "ansi",
        label: "ANSI Fallback",
        swatch: ThemeSwatch {
            background: Color::Indexed(234),
            accent: Color::Indexed(111),
            selection: Color::Indexed(237),
        },
        aliases: &["ansi", "ansi256", "fallback"],
        is_ansi_fallback: true,
        factory: || Box::new(GlassAnsiTheme::new()),
    },
];

/// Resolves a theme name or alias to its definition, case-insensitively.
pub fn resolve(name: &str) -> Option<&'static ThemeDefinition> {
    let needle = name.to_ascii_lowercase();
    THEME_DEFINITIONS
        .iter()
        .find(|definition| definition.id == needle || definition.aliases.contains(&needle.as_str()))
}

/// Definition backing a caller-facing [`ThemeChoice`].
pub fn for_choice(choice: ThemeChoice) -> &'static ThemeDefinition {
    match choice {
        ThemeChoice::Dark => &THEME_DEFINITIONS[0],
        ThemeChoice::Light => &THEME_DEFINITIONS[1],
    }
}

/// Default truecolor definition.
pub fn default_truecolor() -> &'static ThemeDefinition {
    &THEME_DEFINITIONS[0]
}

/// Definition used for terminals limited to 8-bit color.
pub fn default_ansi() -> &'static ThemeDefinition {
    THEME_DEFINITIONS
        .iter()
        .find(|definition| definition.is_ansi_fallback)
        .unwrap_or(&THEME_DEFINITIONS[0])
}

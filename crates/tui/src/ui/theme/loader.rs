//! Theme selection and terminal capability detection.

use std::env;

use tracing::debug;

use pillnav_types::ThemeChoice;

use super::{Theme, ThemeDefinition, catalog};

/// Loaded theme plus metadata about which definition produced it.
pub struct LoadedTheme {
    pub definition: &'static ThemeDefinition,
    pub theme: Box<dyn Theme>,
}

impl LoadedTheme {
    fn from_definition(definition: &'static ThemeDefinition) -> Self {
        Self {
            definition,
            theme: definition.build(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorCapability {
    Truecolor,
    Ansi256,
}

/// Selects a theme from explicit overrides, caller preference, and terminal
/// capability.
///
/// Precedence: ANSI-only terminals always get the fallback palette, then the
/// `PILLNAV_THEME` env var, then the caller's choice, then the default.
pub fn load(preferred: Option<ThemeChoice>) -> LoadedTheme {
    let capability = detect_color_capability();
    if matches!(capability, ColorCapability::Ansi256) {
        debug!("ANSI-only terminal detected; ignoring theme overrides and forcing fallback palette.");
        return LoadedTheme::from_definition(catalog::default_ansi());
    }

    if let Ok(theme_name) = env::var("PILLNAV_THEME")
        && let Some(definition) = catalog::resolve(theme_name.trim())
    {
        return LoadedTheme::from_definition(definition);
    }

    if let Some(choice) = preferred {
        return LoadedTheme::from_definition(catalog::for_choice(choice));
    }

    LoadedTheme::from_definition(catalog::default_truecolor())
}

fn detect_color_capability() -> ColorCapability {
    if let Some(mode) = env::var("PILLNAV_COLOR_MODE").ok().and_then(|value| parse_color_mode(value.trim())) {
        return mode;
    }

    if env::var("PILLNAV_FORCE_TRUECOLOR")
        .ok()
        .map(|value| is_truthy(value.trim()))
        .unwrap_or(false)
    {
        return ColorCapability::Truecolor;
    }

    let color_term = env::var("COLORTERM").unwrap_or_default().to_ascii_lowercase();
    if color_term.contains("truecolor") || color_term.contains("24bit") {
        return ColorCapability::Truecolor;
    }

    let term = env::var("TERM").unwrap_or_default().to_ascii_lowercase();
    if term.contains("truecolor") {
        return ColorCapability::Truecolor;
    }

    ColorCapability::Ansi256
}

fn parse_color_mode(value: &str) -> Option<ColorCapability> {
    match value.to_ascii_lowercase().as_str() {
        "truecolor" | "24bit" => Some(ColorCapability::Truecolor),
        "ansi256" | "256" | "8bit" => Some(ColorCapability::Ansi256),
        _ => None,
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on" | "enable" | "enabled"
    )
}

#[cfg(test)]
mod tests {
    use pillnav_types::ThemeChoice;

    use super::*;

    #[test]
    fn color_mode_strings_parse() {
        assert_eq!(parse_color_mode("truecolor"), Some(ColorCapability::Truecolor));
        assert_eq!(parse_color_mode("24BIT"), Some(ColorCapability::Truecolor));
        assert_eq!(parse_color_mode("ansi256"), Some(ColorCapability::Ansi256));
        assert_eq!(parse_color_mode("8bit"), Some(ColorCapability::Ansi256));
        assert_eq!(parse_color_mode("bogus"), None);
    }

    #[test]
    fn truthy_values_are_recognized() {
        for value in ["1", "true", "YES", "on", "Enabled"] {
            assert!(is_truthy(value), "{value} should be truthy");
        }
        assert!(!is_truthy("0"));
        assert!(!is_truthy("off"));
    }

    #[test]
    fn env_override_beats_caller_preference() {
        temp_env::with_vars(
            [
                ("PILLNAV_COLOR_MODE", Some("truecolor")),
                ("PILLNAV_THEME", Some("light")),
            ],
            || {
                let loaded = load(Some(ThemeChoice::Dark));
                assert_eq!(loaded.definition.id, "glass_light");
            },
        );
    }

    #[test]
    fn ansi_terminal_forces_fallback() {
        temp_env::with_vars(
            [
                ("PILLNAV_COLOR_MODE", Some("ansi256")),
                ("PILLNAV_THEME", Some("light")),
            ],
            || {
                let loaded = load(Some(ThemeChoice::Dark));
                assert_eq!(loaded.definition.id, "ansi");
            },
        );
    }

    #[test]
    fn caller_preference_is_used_without_overrides() {
        temp_env::with_vars(
            [
                ("PILLNAV_COLOR_MODE", Some("truecolor")),
                ("PILLNAV_THEME", None::<&str>),
            ],
            || {
                let loaded = load(Some(ThemeChoice::Light));
                assert_eq!(loaded.definition.id, "glass_light");
            },
        );
    }
}

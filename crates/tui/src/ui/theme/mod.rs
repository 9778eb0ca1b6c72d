//! Theme styling module for the bar's UI layer.
//!
//! Defines the glass dark/light palettes, an ANSI 256-color fallback,
//! semantic theme roles, and helper builders for Ratatui widgets and styles.
//! Prefer these helpers over hard-coding colors.

pub mod ansi256;
pub mod catalog;
pub mod dark;
pub mod light;
pub mod loader;
pub mod roles;
pub mod theme_helpers;

pub use ansi256::GlassAnsiTheme;
pub use catalog::{ThemeDefinition, ThemeSwatch};
pub use dark::GlassDarkTheme;
pub use light::GlassLightTheme;
pub use loader::{LoadedTheme, load};
pub use roles::Theme;

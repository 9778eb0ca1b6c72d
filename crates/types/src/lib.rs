//! Shared type definitions for the pillnav workspace.
//!
//! This crate holds the data shapes exchanged between the TUI widget, the
//! runtime, and the CLI: navigation items, the icon slot union, placement and
//! theme enums, and the `Msg`/`Effect` pair used to route state changes into
//! the app and side effects back out of it.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Requested rendering weight for a factory-produced icon.
///
/// Mirrors the "thicker stroke when active" behavior of graphical icon sets:
/// the factory is asked for a `Bold` rendition when its item is active and a
/// `Regular` one otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconWeight {
    #[default]
    Regular,
    Bold,
}

/// Context handed to an [`IconFactory`] when its item is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconRequest {
    /// Horizontal cell budget available for the icon.
    pub size: u16,
    /// Desired rendering weight; `Bold` when the item is active.
    pub weight: IconWeight,
}

/// Produces an icon string for a given render context.
///
/// Implemented for any `Fn(&IconRequest) -> String`, so closures can be used
/// directly via [`IconSlot::factory`].
pub trait IconFactory: Send + Sync {
    fn render(&self, request: &IconRequest) -> String;
}

impl<F> IconFactory for F
where
    F: Fn(&IconRequest) -> String + Send + Sync,
{
    fn render(&self, request: &IconRequest) -> String {
        self(request)
    }
}

/// The icon slot of a navigation item.
///
/// Exactly three shapes are accepted, dispatched by a single exhaustive
/// `match` at render time:
/// - `Glyph`: a prebuilt string rendered as-is,
/// - `Factory`: a component invoked with an [`IconRequest`],
/// - `None`: renders empty.
#[derive(Clone, Default)]
pub enum IconSlot {
    /// Ready-made glyph, rendered verbatim.
    Glyph(String),
    /// Factory invoked with size and weight at render time.
    Factory(Arc<dyn IconFactory>),
    /// No icon for this item.
    #[default]
    None,
}

impl IconSlot {
    /// Convenience constructor for a prebuilt glyph.
    pub fn glyph(glyph: impl Into<String>) -> Self {
        IconSlot::Glyph(glyph.into())
    }

    /// Convenience constructor wrapping a closure factory.
    pub fn factory<F>(factory: F) -> Self
    where
        F: Fn(&IconRequest) -> String + Send + Sync + 'static,
    {
        IconSlot::Factory(Arc::new(factory))
    }
}

impl fmt::Debug for IconSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconSlot::Glyph(glyph) => f.debug_tuple("Glyph").field(glyph).finish(),
            IconSlot::Factory(_) => f.write_str("Factory(..)"),
            IconSlot::None => f.write_str("None"),
        }
    }
}

/// A single item in the navigation bar.
///
/// Items are owned by the caller and treated as immutable once supplied. The
/// `id` must be unique within a list; with duplicates, id-targeted lookups
/// resolve to the first match.
#[derive(Debug, Clone)]
pub struct NavItem {
    /// Unique identifier for this item.
    pub id: String,
    /// Human-friendly label, shown next to the icon when the item is active
    /// in horizontal layout and used for accessibility elsewhere.
    pub label: String,
    /// Icon slot; see [`IconSlot`].
    pub icon: IconSlot,
}

impl NavItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>, icon: IconSlot) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon,
        }
    }
}

/// Geometric direction along which items are arranged and the indicator
/// slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Raised when parsing a placement or theme name fails.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized {kind} `{value}` (expected one of: {expected})")]
pub struct ParseChoiceError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

/// Screen placement of the navigation bar.
///
/// `Bottom` renders a horizontal pill hugging the bottom edge; `Left` renders
/// a vertical rail hugging the left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Bottom,
    Left,
}

impl Position {
    /// Layout axis implied by this placement.
    pub fn axis(self) -> Axis {
        match self {
            Position::Bottom => Axis::Horizontal,
            Position::Left => Axis::Vertical,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Position::Bottom => "bottom",
            Position::Left => "left",
        }
    }
}

impl FromStr for Position {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bottom" => Ok(Position::Bottom),
            "left" => Ok(Position::Left),
            other => Err(ParseChoiceError {
                kind: "position",
                value: other.to_string(),
                expected: "bottom, left",
            }),
        }
    }
}

/// Color palette selection for the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

impl ThemeChoice {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeChoice::Dark => "dark",
            ThemeChoice::Light => "light",
        }
    }
}

impl FromStr for ThemeChoice {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(ThemeChoice::Dark),
            "light" => Ok(ThemeChoice::Light),
            other => Err(ParseChoiceError {
                kind: "theme",
                value: other.to_string(),
                expected: "dark, light",
            }),
        }
    }
}

/// Inbound state-sync messages handled by `App::update`.
///
/// These mirror externally controlled inputs: adopting a message never emits
/// a selection effect, so hosts can drive the bar without feedback loops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Adopt the given item id as active (external control; no effect).
    SetActive(String),
    /// Switch the bar placement and layout axis.
    SetPosition(Position),
    /// Switch the color palette.
    SetTheme(ThemeChoice),
    /// Toggle label display (effective in horizontal layout only).
    SetShowLabels(bool),
}

/// Side effects reported by event handlers for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// A user-driven transition selected the given item id. Emitted exactly
    /// once per click or keyboard transition, never for external sync.
    Select(String),
    /// Tear down the runtime and restore the terminal.
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_maps_to_layout_axis() {
        assert_eq!(Position::Bottom.axis(), Axis::Horizontal);
        assert_eq!(Position::Left.axis(), Axis::Vertical);
    }

    #[test]
    fn position_and_theme_parse_case_insensitively() {
        assert_eq!("Bottom".parse::<Position>().unwrap(), Position::Bottom);
        assert_eq!(" left ".parse::<Position>().unwrap(), Position::Left);
        assert_eq!("DARK".parse::<ThemeChoice>().unwrap(), ThemeChoice::Dark);
        assert_eq!("light".parse::<ThemeChoice>().unwrap(), ThemeChoice::Light);
        assert!("top".parse::<Position>().is_err());
        assert!("sepia".parse::<ThemeChoice>().is_err());
    }

    #[test]
    fn choices_serialize_as_lowercase_strings() {
        assert_eq!(serde_json::to_string(&Position::Left).unwrap(), "\"left\"");
        assert_eq!(serde_json::to_string(&ThemeChoice::Dark).unwrap(), "\"dark\"");
        let parsed: Position = serde_json::from_str("\"bottom\"").unwrap();
        assert_eq!(parsed, Position::Bottom);
    }

    #[test]
    fn icon_slot_factory_receives_request() {
        let slot = IconSlot::factory(|request: &IconRequest| {
            if request.weight == IconWeight::Bold {
                "◆".to_string()
            } else {
                "◇".to_string()
            }
        });
        let IconSlot::Factory(factory) = &slot else {
            panic!("expected factory variant");
        };
        let bold = factory.render(&IconRequest {
            size: 2,
            weight: IconWeight::Bold,
        });
        assert_eq!(bold, "◆");
    }
}

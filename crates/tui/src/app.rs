//! Application state and logic for the pillnav demo.
//!
//! This module contains the central state container shared by the runtime and
//! the navigation bar component: configuration context, the bar's selection
//! state, the focus ring, and the effect sink that maps user-driven
//! selections to the caller-supplied handler.

use rat_focus::Focus;
use tracing::debug;

use pillnav_types::{Effect, Msg, NavItem, Position, ThemeChoice};

use crate::ui::components::nav_bar::NavBarState;
use crate::ui::theme::{self, Theme};

/// Handler invoked with the newly selected item id on every user-driven
/// (click or keyboard) transition. Never invoked for externally driven sync.
pub type SelectHandler = Box<dyn FnMut(&str) + Send>;

/// Caller-facing configuration for [`crate::run`].
pub struct NavOptions {
    /// Navigation items to display, in visual and traversal order.
    pub items: Vec<NavItem>,
    /// Item id to activate at startup. Defaults to the first item.
    pub active_id: Option<String>,
    /// Bar placement; selects the layout axis and pill vs. rail shape.
    pub position: Position,
    /// Color palette selection.
    pub theme: ThemeChoice,
    /// Whether to show the active item's label in horizontal layout.
    pub show_labels: bool,
    /// Optional title rendered on the bar border.
    pub title: Option<String>,
    /// Selection callback; see [`SelectHandler`].
    pub on_select: Option<SelectHandler>,
}

impl NavOptions {
    pub fn new(items: Vec<NavItem>) -> Self {
        Self {
            items,
            active_id: None,
            position: Position::default(),
            theme: ThemeChoice::default(),
            show_labels: true,
            title: None,
            on_select: None,
        }
    }
}

/// Cross-cutting shared context owned by the App.
///
/// Holds presentation settings and the resolved theme so components do not
/// have to thread multiple references around.
pub struct SharedCtx {
    /// Resolved theme palette.
    pub theme: Box<dyn Theme>,
    /// The choice that produced `theme`; kept for preference persistence.
    pub theme_choice: ThemeChoice,
    /// Bar placement (bottom pill or left rail).
    pub position: Position,
    /// Label display toggle; only effective in horizontal layout.
    pub show_labels: bool,
    /// Optional title rendered on the bar border.
    pub title: Option<String>,
}

/// The main application state for the navigation bar runtime.
pub struct App {
    /// Shared presentation context.
    pub ctx: SharedCtx,
    /// Navigation bar selection, hover, and measurement state.
    pub nav: NavBarState,
    /// Global focus ring, rebuilt before each render.
    pub focus: Focus,
    /// Set when the visible state changed and a redraw is needed.
    pub dirty: bool,
    /// Set when the runtime should tear down.
    pub should_quit: bool,
    on_select: Option<SelectHandler>,
}

impl App {
    pub fn new(options: NavOptions) -> Self {
        let loaded = theme::load(Some(options.theme));
        debug!(theme = loaded.definition.id, "theme resolved");
        let ctx = SharedCtx {
            theme: loaded.theme,
            theme_choice: options.theme,
            position: options.position,
            show_labels: options.show_labels,
            title: options.title,
        };
        Self {
            ctx,
            nav: NavBarState::new(options.items, options.active_id.as_deref()),
            focus: Focus::default(),
            dirty: true,
            should_quit: false,
            on_select: options.on_select,
        }
    }

    /// Applies an externally driven state change.
    ///
    /// External sync never emits `Effect::Select`; hosts can drive the bar
    /// without triggering their own selection callback.
    pub fn update(&mut self, msg: Msg) {
        match msg {
            Msg::SetActive(id) => {
                if self.nav.sync_active(&id) {
                    self.dirty = true;
                }
            }
            Msg::SetPosition(position) => {
                if self.ctx.position != position {
                    self.ctx.position = position;
                    self.nav.mark_geometry_stale();
                    self.dirty = true;
                }
            }
            Msg::SetTheme(choice) => {
                if self.ctx.theme_choice != choice {
                    let loaded = theme::load(Some(choice));
                    self.ctx.theme = loaded.theme;
                    self.ctx.theme_choice = choice;
                    self.dirty = true;
                }
            }
            Msg::SetShowLabels(show) => {
                if self.ctx.show_labels != show {
                    self.ctx.show_labels = show;
                    self.nav.mark_geometry_stale();
                    self.dirty = true;
                }
            }
        }
    }

    /// Executes a single effect reported by an event handler.
    pub fn handle_effect(&mut self, effect: Effect) {
        match effect {
            Effect::Select(id) => {
                debug!(id, "item selected");
                if let Some(handler) = self.on_select.as_mut() {
                    handler(&id);
                }
            }
            Effect::Quit => self.should_quit = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use pillnav_types::{Effect, IconSlot, Msg, NavItem};

    use super::{App, NavOptions};

    fn items() -> Vec<NavItem> {
        vec![
            NavItem::new("a", "Alpha", IconSlot::glyph("a")),
            NavItem::new("b", "Beta", IconSlot::glyph("b")),
        ]
    }

    #[test]
    fn external_sync_never_invokes_the_selection_handler() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        let mut options = NavOptions::new(items());
        options.on_select = Some(Box::new(move |id| sink.lock().unwrap().push(id.to_string())));
        let mut app = App::new(options);

        app.update(Msg::SetActive("b".to_string()));
        assert_eq!(app.nav.active.as_deref(), Some("b"));
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn select_effect_reaches_the_handler_once() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        let mut options = NavOptions::new(items());
        options.on_select = Some(Box::new(move |id| sink.lock().unwrap().push(id.to_string())));
        let mut app = App::new(options);

        app.handle_effect(Effect::Select("b".to_string()));
        assert_eq!(calls.lock().unwrap().as_slice(), ["b".to_string()]);
    }

    #[test]
    fn quit_effect_flags_shutdown() {
        let mut app = App::new(NavOptions::new(items()));
        assert!(!app.should_quit);
        app.handle_effect(Effect::Quit);
        assert!(app.should_quit);
    }
}

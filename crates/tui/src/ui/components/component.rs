//! Component abstraction for the pillnav UI.
//!
//! Components are self-contained UI elements that own localized behavior:
//! they handle input events when focused, report side effects back to the
//! runtime as `Effect`s instead of mutating global state, and render
//! themselves into a provided `Rect`.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Frame, layout::Rect};

use pillnav_types::Effect;

use crate::app::App;

/// A trait representing a UI component with its own state and behavior.
///
/// Event handlers run only while the component is relevant to the current
/// input, return the effects the runtime should process, and leave rendering
/// side-effect free except for frame drawing.
pub(crate) trait Component {
    /// Handle key events when this component has focus.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events targeting this component.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);
}

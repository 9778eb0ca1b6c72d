//! UI components for the navigation bar.

pub mod component;
pub mod nav_bar;

pub use component::*;
pub use nav_bar::NavBarComponent;

use ratatui::layout::Rect;

/// Resolves a mouse position to the index of the item area containing it.
///
/// Returns `None` when the position falls outside the container or between
/// item areas.
pub fn find_target_index_by_mouse_position(container: &Rect, areas: &[Rect], x: u16, y: u16) -> Option<usize> {
    if !container.contains((x, y).into()) {
        return None;
    }
    areas.iter().position(|area| area.contains((x, y).into()))
}

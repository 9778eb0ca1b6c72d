//! Floating navigation bar component.
//!
//! A pill-shaped bar of icon buttons with a sliding indicator that tracks the
//! active item. It supports:
//! - Bottom (horizontal pill) and left (vertical rail) placement
//! - Pointer clicks, hover tracking, and circular arrow-key traversal
//! - rat-focus integration with a roving Tab stop on the active item
//! - Labels that expand next to the active item in horizontal layout
//!
//! Selection state lives in [`NavBarState`]; indicator measurement in
//! [`geometry`]; the mapping from state to renderable content in
//! [`projector`]. The component wires those together against a `Frame`.

pub mod geometry;
mod nav_bar_component;
mod projector;
mod state;

pub use geometry::{IndicatorGeometry, IndicatorLatch};
pub use nav_bar_component::NavBarComponent;
pub use state::{NavBarState, Step, step_for_key};

//! # Pillnav TUI Library
//!
//! This library provides a floating, keyboard-navigable navigation bar for
//! terminal applications built on the Ratatui framework. The bar renders as a
//! rounded "glass pill" hugging the bottom edge of the screen, or as a
//! vertical rail hugging the left edge.
//!
//! ## Key Features
//!
//! - Pointer and keyboard driven selection with circular arrow traversal
//! - A sliding indicator that tracks the active item's measured position
//! - Roving focus: only the active item sits in the Tab order
//! - Dark/light glass palettes with an ANSI 256-color fallback
//! - Labels that expand next to the active item in horizontal layout
//!
//! ## Architecture
//!
//! Selection, hover, and measurement state live in
//! `ui::components::nav_bar::NavBarState`; rendering is a pure projection of
//! that state plus the theme. The runtime owns the terminal lifecycle and a
//! single event loop that routes input to the component and executes the
//! `Effect`s it reports.

mod app;
pub mod prefs;
mod ui;

pub use app::{App, NavOptions, SelectHandler};
pub use ui::components::nav_bar::{IndicatorGeometry, IndicatorLatch, NavBarState, Step, step_for_key};

use anyhow::Result;

/// Runs the navigation bar demo until the user quits.
///
/// Sets up the terminal, drives the event loop, and restores the terminal on
/// every exit path. Returns the id of the item that was active when the
/// runtime shut down.
///
/// # Errors
///
/// Returns an error when terminal setup or teardown fails.
pub async fn run(options: NavOptions) -> Result<Option<String>> {
    ui::runtime::run_app(options).await
}

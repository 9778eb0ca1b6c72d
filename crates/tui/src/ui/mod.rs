//! UI rendering module for the navigation bar.
//!
//! Provides the component system, anchored layout helpers, the theme system,
//! the top-level draw function, and the event-loop runtime.

pub mod components;
pub mod layout;
pub mod main;
pub mod runtime;
pub mod theme;

use crossterm::event::KeyCode;
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

use pillnav_types::{Axis, Effect, NavItem};

use super::geometry::IndicatorLatch;

/// A keyboard-driven traversal step over the rendered item order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Prev,
    First,
    Last,
}

/// Maps an arrow key onto a traversal step for the given layout axis.
///
/// Horizontal bars use Left/Right, vertical rails use Up/Down; the other
/// pair is left unhandled so it can pass through to the host. Home and End
/// jump to the edges on either axis.
pub fn step_for_key(axis: Axis, code: KeyCode) -> Option<Step> {
    match (axis, code) {
        (Axis::Horizontal, KeyCode::Right) | (Axis::Vertical, KeyCode::Down) => Some(Step::Next),
        (Axis::Horizontal, KeyCode::Left) | (Axis::Vertical, KeyCode::Up) => Some(Step::Prev),
        (_, KeyCode::Home) => Some(Step::First),
        (_, KeyCode::End) => Some(Step::Last),
        _ => None,
    }
}

/// State for the navigation bar.
///
/// Owns the item list, the active id, per-item hover flags, rat-focus flags
/// for the container and each item, and the measurement bookkeeping the
/// indicator needs. Selection transitions report `Effect`s rather than
/// mutating anything outside this struct, which keeps the logic testable.
#[derive(Debug, Default)]
pub struct NavBarState {
    /// Items displayed in the bar, in visual and traversal order.
    pub items: Vec<NavItem>,
    /// Id of the currently active item, if any.
    pub active: Option<String>,
    /// Per-item transient hover flags; reset on pointer leave, never
    /// persisted.
    hover: Vec<bool>,
    /// Focus flag for the container in the global focus tree.
    pub container_focus: FocusFlag,
    /// Focus flags for each item; kept in sync with `items` length.
    pub item_focus_flags: Vec<FocusFlag>,
    /// Last rendered bar area; used for mouse hit testing.
    pub last_area: Rect,
    /// Last computed per-item areas for hit testing and measurement.
    pub per_item_areas: Vec<Rect>,
    /// Item ids in the order they were actually rendered. Keyboard traversal
    /// reads this, not `items`, so it reflects what is on screen.
    pub rendered_ids: Vec<String>,
    /// Indicator measurement latch.
    pub indicator: IndicatorLatch,
    geometry_stale: bool,
}

impl NavBarState {
    /// Creates bar state for the given items.
    ///
    /// The initial active id is the supplied one, else the first item's id,
    /// else none.
    pub fn new(items: Vec<NavItem>, initial_active: Option<&str>) -> Self {
        let active = initial_active
            .map(str::to_string)
            .or_else(|| items.first().map(|item| item.id.clone()));
        let mut state = Self {
            hover: vec![false; items.len()],
            container_focus: FocusFlag::named("nav.bar"),
            active,
            items,
            geometry_stale: true,
            ..Self::default()
        };
        state.rebuild_item_focus_flags();
        state
    }

    /// Replaces the item list, preserving the active id when it survives the
    /// change and clamping to the first item otherwise.
    pub fn set_items(&mut self, items: Vec<NavItem>) {
        self.items = items;
        if let Some(active) = self.active.as_deref()
            && !self.items.iter().any(|item| item.id == active)
        {
            self.active = self.items.first().map(|item| item.id.clone());
        }
        if self.active.is_none() {
            self.active = self.items.first().map(|item| item.id.clone());
        }
        self.hover = vec![false; self.items.len()];
        self.rendered_ids.clear();
        self.per_item_areas.clear();
        self.rebuild_item_focus_flags();
        self.geometry_stale = true;
    }

    /// Adopts an externally controlled active id. Unconditional, and never
    /// emits a selection effect. Returns whether the id changed.
    pub fn sync_active(&mut self, id: &str) -> bool {
        if self.active.as_deref() == Some(id) {
            return false;
        }
        self.active = Some(id.to_string());
        self.apply_selection_focus();
        self.geometry_stale = true;
        true
    }

    /// Applies a user-driven selection, emitting `Effect::Select` exactly
    /// once per transition.
    pub fn select(&mut self, id: &str) -> Vec<Effect> {
        self.active = Some(id.to_string());
        self.apply_selection_focus();
        self.geometry_stale = true;
        vec![Effect::Select(id.to_string())]
    }

    /// Computes the neighbor id for a traversal step over the rendered item
    /// order, wrapping circularly in both directions. No-op on an empty bar.
    pub fn step(&self, step: Step) -> Option<String> {
        let ids = &self.rendered_ids;
        let len = ids.len();
        if len == 0 {
            return None;
        }
        let current = self
            .active
            .as_deref()
            .and_then(|active| ids.iter().position(|id| id == active));
        let next = match step {
            Step::Next => current.map(|idx| (idx + 1) % len).unwrap_or(0),
            Step::Prev => current.map(|idx| (idx + len - 1) % len).unwrap_or(len - 1),
            Step::First => 0,
            Step::Last => len - 1,
        };
        ids.get(next).cloned()
    }

    /// Index of the active item within `items` (first match wins with
    /// duplicate ids).
    pub fn active_index(&self) -> Option<usize> {
        let active = self.active.as_deref()?;
        self.items.iter().position(|item| item.id == active)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    /// Focus flag of the active item, the bar's single roving Tab stop.
    pub fn active_focus_flag(&self) -> Option<FocusFlag> {
        let idx = self.active_index()?;
        self.item_focus_flags.get(idx).cloned()
    }

    /// Focus flag of the item with the given id.
    pub fn focus_flag_for(&self, id: &str) -> Option<FocusFlag> {
        let idx = self.items.iter().position(|item| item.id == id)?;
        self.item_focus_flags.get(idx).cloned()
    }

    pub fn any_item_focused(&self) -> bool {
        self.item_focus_flags.iter().any(|flag| flag.get())
    }

    /// Marks the current hover target, clearing every other flag. `None`
    /// clears all (pointer left the bar).
    ///
    /// Returns whether any flag changed.
    pub fn set_hover(&mut self, index: Option<usize>) -> bool {
        let mut changed = false;
        for (idx, flag) in self.hover.iter_mut().enumerate() {
            let hovered = index == Some(idx);
            if *flag != hovered {
                *flag = hovered;
                changed = true;
            }
        }
        changed
    }

    pub fn hovered(&self, index: usize) -> bool {
        self.hover.get(index).copied().unwrap_or(false)
    }

    /// Forces an indicator re-measure on the next render. Called for active
    /// id changes, axis changes, and terminal resizes.
    pub fn mark_geometry_stale(&mut self) {
        self.geometry_stale = true;
    }

    /// Consumes the stale flag, reporting whether a re-measure is due.
    pub fn take_geometry_stale(&mut self) -> bool {
        std::mem::replace(&mut self.geometry_stale, false)
    }

    /// Records the outcome of a render pass for hit testing and traversal.
    pub fn record_render(&mut self, area: Rect, per_item_areas: Vec<Rect>, rendered_ids: Vec<String>) {
        self.last_area = area;
        self.per_item_areas = per_item_areas;
        self.rendered_ids = rendered_ids;
    }

    /// Updates the collection of item focus flags to match `items` length
    /// and re-applies the roving selection focus.
    fn rebuild_item_focus_flags(&mut self) {
        self.item_focus_flags = (0..self.items.len())
            .map(|i| FocusFlag::named(&format!("nav.bar.item.{i}")))
            .collect();
        self.apply_selection_focus();
    }

    /// Applies the roving pattern: only the active item carries focus.
    fn apply_selection_focus(&mut self) {
        let active_idx = self.active_index();
        for (idx, flag) in self.item_focus_flags.iter().enumerate() {
            flag.set(Some(idx) == active_idx);
        }
    }
}

impl HasFocus for NavBarState {
    /// Builds a focus subtree with each item as a leaf under the container.
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        for flag in &self.item_focus_flags {
            builder.leaf_widget(flag);
        }
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;

    use pillnav_types::{Axis, Effect, IconSlot, NavItem};

    use super::{NavBarState, Step, step_for_key};

    fn items(ids: &[&str]) -> Vec<NavItem> {
        ids.iter()
            .map(|id| NavItem::new(*id, id.to_uppercase(), IconSlot::glyph("•")))
            .collect()
    }

    fn state_with_rendered(ids: &[&str]) -> NavBarState {
        let mut state = NavBarState::new(items(ids), None);
        state.rendered_ids = ids.iter().map(|id| id.to_string()).collect();
        state
    }

    #[test]
    fn initial_active_prefers_external_then_first_then_none() {
        let state = NavBarState::new(items(&["a", "b"]), Some("b"));
        assert_eq!(state.active.as_deref(), Some("b"));

        let state = NavBarState::new(items(&["a", "b"]), None);
        assert_eq!(state.active.as_deref(), Some("a"));

        let state = NavBarState::new(Vec::new(), None);
        assert_eq!(state.active, None);
    }

    #[test]
    fn select_emits_exactly_one_effect() {
        let mut state = state_with_rendered(&["a", "b", "c"]);
        let effects = state.select("b");
        assert_eq!(effects, vec![Effect::Select("b".to_string())]);
        assert_eq!(state.active.as_deref(), Some("b"));
    }

    #[test]
    fn sync_active_adopts_without_effects() {
        let mut state = state_with_rendered(&["a", "b"]);
        assert!(state.sync_active("b"));
        assert_eq!(state.active.as_deref(), Some("b"));
        assert!(!state.sync_active("b"), "no change on repeat sync");
    }

    #[test]
    fn next_and_prev_wrap_circularly() {
        let mut state = state_with_rendered(&["a", "b", "c"]);
        // a -> b -> c -> a going forward.
        for expected in ["b", "c", "a"] {
            let next = state.step(Step::Next).unwrap();
            assert_eq!(next, expected);
            state.select(&next);
        }
        // a -> c going backward wraps immediately.
        assert_eq!(state.step(Step::Prev).as_deref(), Some("c"));
    }

    #[test]
    fn single_item_wraps_onto_itself() {
        let state = state_with_rendered(&["only"]);
        assert_eq!(state.step(Step::Next).as_deref(), Some("only"));
        assert_eq!(state.step(Step::Prev).as_deref(), Some("only"));
    }

    #[test]
    fn empty_bar_steps_nowhere() {
        let state = NavBarState::new(Vec::new(), None);
        assert_eq!(state.step(Step::Next), None);
        assert_eq!(state.step(Step::Prev), None);
    }

    #[test]
    fn traversal_follows_the_rendered_order_not_the_item_order() {
        let mut state = NavBarState::new(items(&["a", "b", "c"]), Some("b"));
        // Screen shows the items in a different order than the prop list.
        state.rendered_ids = vec!["c".to_string(), "b".to_string(), "a".to_string()];
        assert_eq!(state.step(Step::Next).as_deref(), Some("a"));
        assert_eq!(state.step(Step::Prev).as_deref(), Some("c"));
        assert_eq!(state.step(Step::First).as_deref(), Some("c"));
        assert_eq!(state.step(Step::Last).as_deref(), Some("a"));
    }

    #[test]
    fn set_items_clamps_a_vanished_active_id() {
        let mut state = state_with_rendered(&["a", "b"]);
        state.select("b");
        state.set_items(items(&["x", "y"]));
        assert_eq!(state.active.as_deref(), Some("x"));
    }

    #[test]
    fn active_is_always_a_member_when_items_exist() {
        let mut state = state_with_rendered(&["a", "b", "c"]);
        for _ in 0..5 {
            let next = state.step(Step::Next).unwrap();
            state.select(&next);
            let active = state.active.clone().unwrap();
            assert!(state.items.iter().any(|item| item.id == active));
        }
    }

    #[test]
    fn roving_focus_follows_the_selection() {
        let mut state = state_with_rendered(&["a", "b"]);
        state.select("b");
        assert!(!state.item_focus_flags[0].get());
        assert!(state.item_focus_flags[1].get());
        assert_eq!(
            state.active_focus_flag().unwrap().widget_id(),
            state.item_focus_flags[1].widget_id()
        );
    }

    #[test]
    fn hover_is_exclusive_and_clearable() {
        let mut state = state_with_rendered(&["a", "b", "c"]);
        assert!(state.set_hover(Some(1)));
        assert!(state.hovered(1));
        assert!(state.set_hover(Some(2)));
        assert!(!state.hovered(1));
        assert!(state.hovered(2));
        assert!(state.set_hover(None));
        assert!(!state.hovered(2));
        assert!(!state.set_hover(None), "clearing twice changes nothing");
    }

    #[test]
    fn arrow_mapping_depends_on_the_axis() {
        assert_eq!(step_for_key(Axis::Horizontal, KeyCode::Right), Some(Step::Next));
        assert_eq!(step_for_key(Axis::Horizontal, KeyCode::Left), Some(Step::Prev));
        assert_eq!(step_for_key(Axis::Horizontal, KeyCode::Down), None);
        assert_eq!(step_for_key(Axis::Vertical, KeyCode::Down), Some(Step::Next));
        assert_eq!(step_for_key(Axis::Vertical, KeyCode::Up), Some(Step::Prev));
        assert_eq!(step_for_key(Axis::Vertical, KeyCode::Right), None);
        assert_eq!(step_for_key(Axis::Horizontal, KeyCode::Home), Some(Step::First));
        assert_eq!(step_for_key(Axis::Vertical, KeyCode::End), Some(Step::Last));
        assert_eq!(step_for_key(Axis::Horizontal, KeyCode::Char('x')), None);
    }

    #[test]
    fn geometry_stale_flag_is_consumed_once() {
        let mut state = state_with_rendered(&["a"]);
        assert!(state.take_geometry_stale(), "fresh state needs a measure");
        assert!(!state.take_geometry_stale());
        state.mark_geometry_stale();
        assert!(state.take_geometry_stale());
    }
}

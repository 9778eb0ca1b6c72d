//! Pure projection from item state to renderable content and extents.
//!
//! Everything here is a function of `(item, active, axis, labels)` with no
//! access to the frame, so the expand/collapse and icon-dispatch rules can be
//! tested without a terminal.

use unicode_width::UnicodeWidthStr;

use pillnav_types::{Axis, IconRequest, IconSlot, IconWeight, NavItem};

/// Horizontal cell budget offered to icon factories.
pub const ICON_SIZE: u16 = 2;
/// Minimum button extent along a horizontal bar, a terminal-scale hit target.
pub const MIN_BUTTON_WIDTH: u16 = 5;
/// Horizontal padding inside a button, per side.
const BUTTON_PAD: u16 = 2;
/// Extra padding applied to the vertical rail around its widest icon.
const RAIL_PAD: u16 = 2;

/// Render-ready content for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedItem {
    /// Icon text, if the slot produced one.
    pub icon: Option<String>,
    /// Label text, present only when visible per [`label_visible`].
    pub label: Option<String>,
    /// Button extent along the layout axis, in cells.
    pub extent: u16,
}

/// Resolves the icon slot. One of exactly three paths is taken: a prebuilt
/// glyph passes through verbatim, a factory is invoked with the size budget
/// and a weight that is heavier for the active item, and an empty slot
/// renders nothing.
pub fn resolve_icon(slot: &IconSlot, active: bool) -> Option<String> {
    match slot {
        IconSlot::Glyph(glyph) => Some(glyph.clone()),
        IconSlot::Factory(factory) => {
            let request = IconRequest {
                size: ICON_SIZE,
                weight: if active { IconWeight::Bold } else { IconWeight::Regular },
            };
            Some(factory.render(&request))
        }
        IconSlot::None => None,
    }
}

/// A label is laid out only on a horizontal bar, with labels enabled, for the
/// active item. Everywhere else it collapses to zero cells.
pub fn label_visible(axis: Axis, show_labels: bool, active: bool) -> bool {
    axis == Axis::Horizontal && show_labels && active
}

/// Resolves one item into its render-ready content and extent.
pub fn resolve_item(item: &NavItem, active: bool, axis: Axis, show_labels: bool) -> ResolvedItem {
    let icon = resolve_icon(&item.icon, active);
    let label = (label_visible(axis, show_labels, active) && !item.label.is_empty()).then(|| item.label.clone());
    let extent = match axis {
        Axis::Horizontal => {
            let icon_width = icon.as_deref().map(cell_width).unwrap_or(0);
            let label_width = label.as_deref().map(|text| 1 + cell_width(text)).unwrap_or(0);
            (icon_width + label_width + 2 * BUTTON_PAD).max(MIN_BUTTON_WIDTH)
        }
        // One row per item in the vertical rail.
        Axis::Vertical => 1,
    };
    ResolvedItem { icon, label, extent }
}

/// Inner width of the vertical rail: the widest icon plus padding.
pub fn rail_width(resolved: &[ResolvedItem]) -> u16 {
    let widest = resolved
        .iter()
        .filter_map(|item| item.icon.as_deref())
        .map(cell_width)
        .max()
        .unwrap_or(1);
    widest + 2 * RAIL_PAD
}

fn cell_width(text: &str) -> u16 {
    UnicodeWidthStr::width(text) as u16
}

#[cfg(test)]
mod tests {
    use pillnav_types::{Axis, IconRequest, IconSlot, IconWeight, NavItem};

    use super::{MIN_BUTTON_WIDTH, label_visible, resolve_icon, resolve_item};

    #[test]
    fn glyph_icons_pass_through_verbatim() {
        assert_eq!(resolve_icon(&IconSlot::glyph("⌕"), false).as_deref(), Some("⌕"));
    }

    #[test]
    fn factory_icons_see_bold_weight_only_when_active() {
        let slot = IconSlot::factory(|request: &IconRequest| match request.weight {
            IconWeight::Bold => "◆".to_string(),
            IconWeight::Regular => "◇".to_string(),
        });
        assert_eq!(resolve_icon(&slot, true).as_deref(), Some("◆"));
        assert_eq!(resolve_icon(&slot, false).as_deref(), Some("◇"));
    }

    #[test]
    fn empty_slot_renders_nothing() {
        assert_eq!(resolve_icon(&IconSlot::None, true), None);
    }

    #[test]
    fn labels_require_horizontal_axis_and_enablement_and_active() {
        assert!(label_visible(Axis::Horizontal, true, true));
        assert!(!label_visible(Axis::Horizontal, true, false));
        assert!(!label_visible(Axis::Horizontal, false, true));
        assert!(!label_visible(Axis::Vertical, true, true));
    }

    #[test]
    fn active_item_expands_to_fit_its_label() {
        let item = NavItem::new("search", "Search", IconSlot::glyph("⌕"));
        let resting = resolve_item(&item, false, Axis::Horizontal, true);
        let active = resolve_item(&item, true, Axis::Horizontal, true);
        assert_eq!(resting.label, None);
        assert_eq!(active.label.as_deref(), Some("Search"));
        assert!(active.extent > resting.extent, "label adds cells only while active");
    }

    #[test]
    fn labels_disabled_keeps_every_item_collapsed() {
        let item = NavItem::new("search", "Search", IconSlot::glyph("⌕"));
        let active = resolve_item(&item, true, Axis::Horizontal, false);
        assert_eq!(active.label, None);
        let vertical = resolve_item(&item, true, Axis::Vertical, true);
        assert_eq!(vertical.label, None);
    }

    #[test]
    fn buttons_keep_a_minimum_hit_target() {
        let item = NavItem::new("x", "", IconSlot::None);
        let resolved = resolve_item(&item, false, Axis::Horizontal, true);
        assert_eq!(resolved.icon, None);
        assert_eq!(resolved.extent, MIN_BUTTON_WIDTH);
    }

    #[test]
    fn vertical_items_occupy_one_row() {
        let item = NavItem::new("x", "Label", IconSlot::glyph("•"));
        assert_eq!(resolve_item(&item, true, Axis::Vertical, true).extent, 1);
    }
}

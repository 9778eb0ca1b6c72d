use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
};

use pillnav_types::{Axis, Effect};

use super::projector::{self, ResolvedItem};
use super::state::step_for_key;
use crate::app::App;
use crate::ui::components::{Component, find_target_index_by_mouse_position};
use crate::ui::layout::anchored_rect;
use crate::ui::theme::theme_helpers as th;

/// The floating navigation bar component.
///
/// Renders a rounded glass pill (bottom placement) or rail (left placement)
/// of icon buttons with a sliding indicator behind the active item. Selection
/// is driven by pointer clicks and arrow keys; both report
/// `Effect::Select` for the runtime to map onto the caller's handler.
#[derive(Debug, Default)]
pub struct NavBarComponent;

impl NavBarComponent {
    pub fn new() -> Self {
        Self
    }

    /// Splits the inner bar area into per-item button areas.
    fn split_items(axis: Axis, inner: Rect, resolved: &[ResolvedItem]) -> Vec<Rect> {
        let constraints = resolved.iter().map(|item| Constraint::Length(item.extent));
        match axis {
            Axis::Horizontal => Layout::horizontal(constraints).spacing(1).split(inner).to_vec(),
            Axis::Vertical => Layout::vertical(constraints).split(inner).to_vec(),
        }
    }

    /// Outer bar size for the given content, borders included.
    fn bar_size(axis: Axis, resolved: &[ResolvedItem]) -> (u16, u16) {
        match axis {
            Axis::Horizontal => {
                let gaps = resolved.len().saturating_sub(1) as u16;
                let inner: u16 = resolved.iter().map(|item| item.extent).sum::<u16>() + gaps;
                (inner + 2, 3)
            }
            Axis::Vertical => {
                let inner = resolved.len() as u16;
                (projector::rail_width(resolved) + 2, inner + 2)
            }
        }
    }
}

impl Component for NavBarComponent {
    /// Routes arrow keys to circular traversal over the rendered item order.
    ///
    /// A recognized arrow consumes the event, selects the neighbor, and moves
    /// focus to its control; unrecognized keys fall through untouched.
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Tab => {
                app.focus.next();
                app.dirty = true;
                Vec::new()
            }
            KeyCode::BackTab => {
                app.focus.prev();
                app.dirty = true;
                Vec::new()
            }
            code => {
                let Some(step) = step_for_key(app.ctx.position.axis(), code) else {
                    return Vec::new();
                };
                let Some(next_id) = app.nav.step(step) else {
                    return Vec::new();
                };
                let effects = app.nav.select(&next_id);
                if let Some(flag) = app.nav.focus_flag_for(&next_id) {
                    app.focus.by_widget_id(flag.widget_id());
                }
                app.dirty = true;
                effects
            }
        }
    }

    /// Handles clicks and pointer movement over the bar.
    ///
    /// A left click on a button selects it and focuses its control. Pointer
    /// movement maintains the per-item hover flags, clearing them when the
    /// pointer leaves the bar.
    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let target = find_target_index_by_mouse_position(&app.nav.last_area, &app.nav.per_item_areas, mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(idx) = target else {
                    return Vec::new();
                };
                let Some(id) = app.nav.items.get(idx).map(|item| item.id.clone()) else {
                    return Vec::new();
                };
                let effects = app.nav.select(&id);
                if let Some(flag) = app.nav.item_focus_flags.get(idx) {
                    app.focus.by_widget_id(flag.widget_id());
                }
                app.dirty = true;
                effects
            }
            MouseEventKind::Moved => {
                if app.nav.set_hover(target) {
                    app.dirty = true;
                }
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    /// Renders the bar anchored to the screen edge selected by the position.
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let App { ctx, nav, .. } = app;
        let theme = &*ctx.theme;
        let axis = ctx.position.axis();

        if nav.items.is_empty() {
            nav.record_render(Rect::default(), Vec::new(), Vec::new());
            return;
        }

        let resolved: Vec<ResolvedItem> = nav
            .items
            .iter()
            .map(|item| projector::resolve_item(item, nav.is_active(&item.id), axis, ctx.show_labels))
            .collect();

        let (width, height) = Self::bar_size(axis, &resolved);
        let bar_area = anchored_rect(ctx.position, width, height, area);
        frame.render_widget(Clear, bar_area);

        let block = th::pill_block(theme, ctx.title.as_deref(), nav.any_item_focused());
        let inner = block.inner(bar_area);
        frame.render_widget(block, bar_area);

        let item_areas = Self::split_items(axis, inner, &resolved);

        // Re-measure only on the declared triggers; a missing target keeps
        // the previous geometry.
        if nav.take_geometry_stale() {
            let target = nav.active_index().and_then(|idx| item_areas.get(idx)).copied();
            nav.indicator.recompute(axis, inner, target);
        }
        if nav.active.is_some()
            && let Some(indicator_area) = nav.indicator.rect_within(axis, inner)
        {
            frame.render_widget(Block::default().style(th::indicator_style(theme)), indicator_area);
        }

        for (idx, (item, content)) in nav.items.iter().zip(&resolved).enumerate() {
            let Some(button_area) = item_areas.get(idx).copied() else {
                continue;
            };
            let is_active = nav.is_active(&item.id);
            let is_focused = nav.item_focus_flags.get(idx).map(|flag| flag.get()).unwrap_or_default();
            // Keyboard focus reads as hover; a focused button takes the hover
            // text tier in addition to its underline.
            let style = th::item_text_style(theme, is_active, nav.hovered(idx) || is_focused);

            let mut spans: Vec<Span> = Vec::with_capacity(2);
            if let Some(icon) = content.icon.as_deref() {
                spans.push(Span::raw(icon.to_string()));
            }
            if let Some(label) = content.label.as_deref() {
                spans.push(Span::raw(format!(" {label}")));
            }
            let style = if is_focused {
                style.add_modifier(ratatui::style::Modifier::UNDERLINED)
            } else {
                style
            };
            frame.render_widget(Paragraph::new(Line::from(spans)).centered().style(style), button_area);
        }

        let rendered_ids = nav.items.iter().map(|item| item.id.clone()).collect();
        nav.record_render(bar_area, item_areas, rendered_ids);
    }
}

//! Top-level frame drawing for the demo screen.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Paragraph},
};

use pillnav_types::Axis;

use crate::app::App;
use crate::ui::components::{Component, NavBarComponent};
use crate::ui::theme::theme_helpers as th;

/// Draws the backdrop, the demo chrome, and the floating bar.
pub fn draw(frame: &mut Frame, app: &mut App, nav: &mut NavBarComponent) {
    let area = frame.area();
    let theme = &*app.ctx.theme;

    frame.render_widget(Block::default().style(Style::default().bg(theme.roles().background)), area);

    let active_label = app
        .nav
        .active_index()
        .and_then(|idx| app.nav.items.get(idx))
        .map(|item| item.label.clone())
        .unwrap_or_else(|| "none".to_string());
    let headline = Line::from(vec![
        ratatui::text::Span::styled("pillnav demo", theme.accent_emphasis_style()),
        ratatui::text::Span::styled(format!("  ·  active: {active_label}"), theme.text_secondary_style()),
    ])
    .centered();

    let arrows = match app.ctx.position.axis() {
        Axis::Horizontal => " ←/→",
        Axis::Vertical => " ↑/↓",
    };
    let hints = Line::from(th::build_hint_spans(
        theme,
        &[(arrows, " navigate  "), (" click", " select  "), (" q", " quit")],
    ))
    .centered();

    if area.height > 2 {
        frame.render_widget(Paragraph::new(headline), Rect::new(area.x, area.y + 1, area.width, 1));
    }
    if area.height > 3 {
        frame.render_widget(Paragraph::new(hints), Rect::new(area.x, area.y + 2, area.width, 1));
    }

    nav.render(frame, area, app);
}

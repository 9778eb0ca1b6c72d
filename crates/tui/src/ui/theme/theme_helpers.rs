use ratatui::{
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders},
};

use super::roles::{Theme, ThemeRoles};

/// Build the rounded "glass pill" block for the bar container.
///
/// The border takes the focus color while any item holds focus, standing in
/// for the focus ring of the original design.
pub fn pill_block<'a, T: Theme + ?Sized>(theme: &'a T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(
            t,
            theme.text_secondary_style().add_modifier(Modifier::BOLD),
        ));
    }
    block
}

/// Style for the glass surface (set background on the widget using `.style`).
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text_muted, .. } = *theme.roles();
    Style::default().bg(surface).fg(text_muted)
}

/// Style for the sliding indicator highlight behind the active item.
pub fn indicator_style<T: Theme + ?Sized>(theme: &T) -> Style {
    Style::default().bg(theme.roles().selection_bg)
}

/// Text style for an item button, resolved by the 3-way rule
/// active > hovered > default.
pub fn item_text_style<T: Theme + ?Sized>(theme: &T, active: bool, hovered: bool) -> Style {
    if active {
        // Bold stands in for the heavier icon stroke of the active item.
        return theme.text_primary_style().add_modifier(Modifier::BOLD);
    }
    if hovered {
        return theme.text_secondary_style();
    }
    theme.text_muted_style()
}

/// Builds a sequence of key/description hint spans for the demo chrome.
pub fn build_hint_spans<'a, T: Theme + ?Sized>(theme: &T, hints: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, description) in hints {
        spans.push(Span::styled(*key, theme.accent_emphasis_style()));
        spans.push(Span::styled(*description, theme.text_muted_style()));
    }
    spans
}

#[cfg(test)]
mod tests {
    use ratatui::style::Modifier;

    use crate::ui::theme::{GlassDarkTheme, Theme};

    use super::item_text_style;

    #[test]
    fn text_color_resolves_active_over_hover_over_default() {
        let theme = GlassDarkTheme::new();
        let roles = theme.roles().clone();

        let active = item_text_style(&theme, true, true);
        assert_eq!(active.fg, Some(roles.text));
        assert!(active.add_modifier.contains(Modifier::BOLD));

        let hovered = item_text_style(&theme, false, true);
        assert_eq!(hovered.fg, Some(roles.text_secondary));

        let resting = item_text_style(&theme, false, false);
        assert_eq!(resting.fg, Some(roles.text_muted));
    }
}

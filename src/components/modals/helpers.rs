use crate::domain::search::Highlighter;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
};

pub fn dim_area(buf: &mut Buffer, area: Rect) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let cell = &mut buf[(x, y)];
            cell.set_style(cell.style().add_modifier(Modifier::DIM));
        }
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(100u16.saturating_sub(percent_y) / 2),
            Constraint::Percentage(percent_y.min(100)),
            Constraint::Percentage(100u16.saturating_sub(percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(100u16.saturating_sub(percent_x) / 2),
            Constraint::Percentage(percent_x.min(100)),
            Constraint::Percentage(100u16.saturating_sub(percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn draw_drop_shadow(buf: &mut Buffer, area: Rect, terminal_area: Rect) {
    let shadow_area = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width,
        height: area.height,
    };

    let shadow_area = shadow_area.intersection(terminal_area);

    for y in shadow_area.top()..shadow_area.bottom() {
        for x in shadow_area.left()..shadow_area.right() {
            let cell = &mut buf[(x, y)];
            cell.set_style(Style::default().bg(Color::Black));
            cell.set_symbol(" ");
        }
    }
}

pub fn rect_contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

/// Splits `text` into spans, styling the highlighter's matches with `hit`.
pub fn highlighted_spans(
    text: &str,
    highlighter: &Highlighter,
    base: Style,
    hit: Style,
) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut last = 0;
    for range in highlighter.ranges(text) {
        if range.start > last {
            spans.push(Span::styled(text[last..range.start].to_string(), base));
        }
        spans.push(Span::styled(text[range.clone()].to_string(), base.patch(hit)));
        last = range.end;
    }
    if last < text.len() || spans.is_empty() {
        spans.push(Span::styled(text[last..].to_string(), base));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlighted_spans_split() {
        let hl = Highlighter::new("gta");
        let hit = Style::default().add_modifier(Modifier::BOLD);
        let spans = highlighted_spans("GTA V Cheats", &hl, Style::default(), hit);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].content, "GTA");
        assert_eq!(spans[0].style, hit);
        assert_eq!(spans[1].content, " V Cheats");
    }

    #[test]
    fn test_highlighted_spans_without_query() {
        let spans = highlighted_spans("Dolphin", &Highlighter::new(""), Style::default(), Style::default());
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content, "Dolphin");
    }

    #[test]
    fn test_rect_contains_edges() {
        let r = Rect::new(2, 3, 4, 2);
        assert!(rect_contains(r, 2, 3));
        assert!(rect_contains(r, 5, 4));
        assert!(!rect_contains(r, 6, 4));
        assert!(!rect_contains(r, 2, 5));
    }
}

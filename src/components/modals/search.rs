use crate::app::state::QueryState;
use crate::domain::models::Shortcut;
use crate::domain::search::{Highlighter, SearchEngine};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow, highlighted_spans, rect_contains};

const MIN_WIDTH: u16 = 24;
const MIN_HEIGHT: u16 = 12;
pub const RESULT_ROW_HEIGHT: u16 = 2;
const CLOSE_LABEL: &str = " ✕ ";

/// Screen regions of the open search modal. Shared by rendering and mouse
/// hit-testing so both always agree.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchModalLayout {
    pub content: Rect,
    pub close_button: Rect,
    pub input: Rect,
    pub shortcuts: Vec<Rect>,
    pub separator: Rect,
    pub results: Rect,
    pub hint: Rect,
}

impl SearchModalLayout {
    /// `None` when the terminal is too small to draw the modal.
    #[must_use]
    pub fn compute(area: Rect, shortcuts: &[Shortcut]) -> Option<Self> {
        let content = centered_rect(70, 80, area);
        if content.width < MIN_WIDTH || content.height < MIN_HEIGHT {
            return None;
        }

        let inner = Block::default().borders(Borders::ALL).inner(content);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Input box
                Constraint::Length(1), // Shortcut buttons
                Constraint::Length(1), // Separator
                Constraint::Min(1),    // Results
                Constraint::Length(1), // Keyboard hint
            ])
            .split(inner);

        let close_button = Rect {
            x: content.right().saturating_sub(CLOSE_LABEL.chars().count() as u16 + 2),
            y: content.y,
            width: CLOSE_LABEL.chars().count() as u16,
            height: 1,
        };

        let mut chips = Vec::with_capacity(shortcuts.len());
        let row = rows[1];
        let mut x = row.x.saturating_add(1);
        for shortcut in shortcuts {
            let width = u16::try_from(shortcut.label.chars().count())
                .unwrap_or(u16::MAX)
                .saturating_add(2);
            if x.saturating_add(width) > row.right() {
                break;
            }
            chips.push(Rect {
                x,
                y: row.y,
                width,
                height: 1,
            });
            x = x.saturating_add(width).saturating_add(1);
        }

        Some(Self {
            content,
            close_button,
            input: rows[0],
            shortcuts: chips,
            separator: rows[2],
            results: rows[3],
            hint: rows[4],
        })
    }

    #[must_use]
    pub fn visible_results(&self) -> usize {
        usize::from((self.results.height / RESULT_ROW_HEIGHT).max(1))
    }

    /// Position (in the result list) of the row under the pointer.
    #[must_use]
    pub fn result_at(&self, query: &QueryState, column: u16, row: u16) -> Option<usize> {
        if !rect_contains(self.results, column, row) {
            return None;
        }
        let offset = results_offset(query.selected, self.visible_results());
        let position = offset + usize::from((row - self.results.y) / RESULT_ROW_HEIGHT);
        (position < query.results.len()).then_some(position)
    }

    #[must_use]
    pub fn shortcut_at(&self, column: u16, row: u16) -> Option<usize> {
        self.shortcuts
            .iter()
            .position(|chip| rect_contains(*chip, column, row))
    }
}

/// First visible result so that `selected` stays on screen.
#[must_use]
pub fn results_offset(selected: usize, visible: usize) -> usize {
    selected.saturating_sub(visible.saturating_sub(1))
}

pub struct SearchModal<'a, 's> {
    pub theme: &'a Theme,
    pub state: &'a QueryState<'s>,
    pub engine: &'a SearchEngine,
    pub shortcuts: &'a [Shortcut],
    pub layout: &'a SearchModalLayout,
}

impl Widget for SearchModal<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = self.layout;
        let theme = self.theme;

        draw_drop_shadow(buf, layout.content, area);
        Clear.render(layout.content, buf);

        Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" SEARCH SITE ", theme.header_logo),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border_focus)
            .render(layout.content, buf);

        buf.set_string(
            layout.close_button.x,
            layout.close_button.y,
            CLOSE_LABEL,
            theme.close_button,
        );

        self.render_input(buf);
        self.render_shortcuts(buf);

        let separator = "─".repeat(layout.separator.width as usize);
        buf.set_string(layout.separator.x, layout.separator.y, separator, theme.border);

        self.render_results(buf);

        let hint = Line::from(vec![
            Span::styled(" Esc ", theme.footer_segment_key),
            Span::styled(" close  ", theme.dimmed),
            Span::styled(" ↑ ↓ ", theme.footer_segment_key),
            Span::styled(" navigate  ", theme.dimmed),
            Span::styled(" Enter ", theme.footer_segment_key),
            Span::styled(" open  ", theme.dimmed),
            Span::styled(" Alt+1-9 ", theme.footer_segment_key),
            Span::styled(" shortcuts ", theme.dimmed),
        ]);
        buf.set_line(layout.hint.x, layout.hint.y, &hint, layout.hint.width);
    }
}

impl SearchModal<'_, '_> {
    fn render_input(&self, buf: &mut Buffer) {
        let border_style = if self.state.input_focused {
            self.theme.border_focus
        } else {
            self.theme.border
        };
        let block = Block::default()
            .title(Span::styled(" ⌕ ", self.theme.border_focus))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        let inner = block.inner(self.layout.input);
        block.render(self.layout.input, buf);

        if inner.width > 0 && inner.height > 0 {
            Widget::render(&self.state.text_area, inner, buf);
        }
    }

    fn render_shortcuts(&self, buf: &mut Buffer) {
        for (chip, shortcut) in self.layout.shortcuts.iter().zip(self.shortcuts) {
            buf.set_string(
                chip.x,
                chip.y,
                format!(" {} ", shortcut.label),
                self.theme.shortcut_chip,
            );
        }
    }

    fn render_results(&self, buf: &mut Buffer) {
        let area = self.layout.results;
        let theme = self.theme;
        let q = self.state;

        // Empty query: neutral, nothing shown.
        if q.normalized.is_empty() {
            return;
        }

        if q.results.is_empty() {
            let lines = [
                Line::from(Span::styled(
                    "  No results found",
                    theme.list_item.add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "  Try searching for games, mods, emulators, or tools",
                    theme.dimmed,
                )),
            ];
            for (i, line) in lines.iter().enumerate() {
                let y = area.y + 1 + i as u16;
                if y < area.bottom() {
                    buf.set_line(area.x, y, line, area.width);
                }
            }
            return;
        }

        let highlighter = Highlighter::new(&q.normalized);
        let visible = self.layout.visible_results();
        let offset = results_offset(q.selected, visible);
        let catalog = self.engine.catalog();

        for (row, (position, &idx)) in q
            .results
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .enumerate()
        {
            let Some(entry) = catalog.get(idx) else {
                continue;
            };
            let selected = position == q.selected;
            let base = if selected {
                theme.list_item.patch(theme.list_selected)
            } else {
                theme.list_item
            };

            let y = area.y + row as u16 * RESULT_ROW_HEIGHT;
            let mut title = vec![Span::styled(if selected { " › " } else { "   " }, base)];
            title.extend(highlighted_spans(
                &entry.title,
                &highlighter,
                base.add_modifier(Modifier::BOLD),
                theme.highlight,
            ));
            title.push(Span::styled("  ", base));
            title.push(Span::styled(
                format!("[{}]", entry.category),
                base.patch(theme.category_badge),
            ));

            let mut description = vec![Span::styled("     ", base)];
            description.extend(highlighted_spans(
                &entry.description,
                &highlighter,
                base.patch(theme.page_description),
                theme.highlight,
            ));

            if selected {
                for line_y in y..(y + RESULT_ROW_HEIGHT).min(area.bottom()) {
                    buf.set_style(Rect::new(area.x, line_y, area.width, 1), base);
                }
            }
            buf.set_line(area.x, y, &Line::from(title), area.width);
            if y + 1 < area.bottom() {
                buf.set_line(area.x, y + 1, &Line::from(description), area.width);
            }
        }
    }
}

use crate::domain::catalog::Catalog;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// The site index: every catalog entry, grouped by category.
pub struct Page<'a> {
    pub catalog: Option<&'a Catalog>,
    pub scroll: u16,
    pub theme: &'a Theme,
}

impl Widget for Page<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border)
            .title(Span::styled(" SITE INDEX ", theme.page_category));

        let Some(catalog) = self.catalog else {
            Paragraph::new(Line::from(Span::styled(
                "  Site catalog unavailable. Search is disabled.",
                theme.dimmed,
            )))
            .block(block)
            .render(area, buf);
            return;
        };

        // Keep in sync with `page_line_count`.
        let mut lines = Vec::new();
        for (category, entries) in catalog.by_category() {
            lines.push(Line::from(Span::styled(
                format!("▍{}", category.label().to_uppercase()),
                theme.page_category,
            )));
            for entry in entries {
                let mut spans = vec![
                    Span::raw("  "),
                    Span::styled(entry.title.as_str(), theme.page_title),
                ];
                if !entry.description.is_empty() {
                    spans.push(Span::styled(" · ", theme.dimmed));
                    spans.push(Span::styled(
                        entry.description.as_str(),
                        theme.page_description,
                    ));
                }
                spans.push(Span::styled(format!("  {}", entry.url), theme.page_url));
                lines.push(Line::from(spans));
            }
            lines.push(Line::from(""));
        }

        Paragraph::new(lines)
            .block(block)
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

const WIDTH: u16 = 14;
const HEIGHT: u16 = 3;

/// Bottom-right corner of `body`, or `None` if it does not fit.
#[must_use]
pub fn button_rect(body: Rect) -> Option<Rect> {
    if body.width < WIDTH + 2 || body.height < HEIGHT + 1 {
        return None;
    }
    Some(Rect {
        x: body.right() - WIDTH - 1,
        y: body.bottom() - HEIGHT - 1,
        width: WIDTH,
        height: HEIGHT,
    })
}

/// Floating "open search" control.
pub struct SearchButton<'a> {
    pub theme: &'a Theme,
}

impl Widget for SearchButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        Paragraph::new(Line::from(vec![
            Span::styled(" ⌕ Search ", self.theme.search_button),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(self.theme.border_focus)
                .title_bottom(Line::from(" ^K ").right_aligned()),
        )
        .render(area, buf);
    }
}

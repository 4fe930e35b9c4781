use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use std::ops::{Deref, DerefMut};
use tui_textarea::{CursorMove, TextArea};

/// Single-line text input backed by `tui_textarea`.
#[derive(Default)]
pub struct AppTextArea<'a>(pub TextArea<'a>);

impl AppTextArea<'_> {
    /// Current text with any line breaks dropped.
    #[must_use]
    pub fn text(&self) -> String {
        self.0.lines().concat()
    }

    pub fn replace_text(&mut self, text: &str) {
        let mut area = TextArea::new(vec![text.to_string()]);
        area.set_cursor_style(self.0.cursor_style());
        area.set_cursor_line_style(self.0.cursor_line_style());
        area.set_placeholder_text(self.0.placeholder_text().to_string());
        area.set_placeholder_style(self.0.placeholder_style().unwrap_or_default());
        area.move_cursor(CursorMove::End);
        self.0 = area;
    }
}

impl Clone for AppTextArea<'_> {
    fn clone(&self) -> Self {
        let mut area = TextArea::new(self.0.lines().to_vec());
        let (row, col) = self.0.cursor();
        area.move_cursor(CursorMove::Jump(row as u16, col as u16));
        area.set_cursor_style(self.0.cursor_style());
        area.set_cursor_line_style(self.0.cursor_line_style());
        area.set_placeholder_text(self.0.placeholder_text().to_string());
        area.set_placeholder_style(self.0.placeholder_style().unwrap_or_default());
        Self(area)
    }
}

impl std::fmt::Debug for AppTextArea<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppTextArea")
            .field("lines", &self.0.lines())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}

impl PartialEq for AppTextArea<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.lines() == other.0.lines() && self.0.cursor() == other.0.cursor()
    }
}

impl<'a> Deref for AppTextArea<'a> {
    type Target = TextArea<'a>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for AppTextArea<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Widget for &AppTextArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self.0, area, buf);
    }
}

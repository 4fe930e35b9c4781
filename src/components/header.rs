use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const SEP_RIGHT: &str = "\u{e0b0}";

pub struct Header<'a> {
    pub site_name: &'a str,
    pub location: Option<&'a str>,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Separator styles: fg = current segment bg, bg = next segment bg
        let logo_bg = self.theme.header_logo.bg.unwrap_or(Color::Reset);
        let location_bg = self.theme.header_location.bg.unwrap_or(Color::Reset);
        let base_bg = self.theme.header.bg.unwrap_or(Color::Reset);
        let sep_logo_location = Style::default().fg(logo_bg).bg(location_bg);
        let sep_location_base = Style::default().fg(location_bg).bg(base_bg);

        let location = self.location.unwrap_or("index.html");

        let spans = vec![
            Span::styled(format!(" {} ", self.site_name), self.theme.header_logo),
            Span::styled(SEP_RIGHT, sep_logo_location),
            Span::styled(format!(" {location} "), self.theme.header_location),
            Span::styled(SEP_RIGHT, sep_location_base),
        ];

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}

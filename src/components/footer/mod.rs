mod groups;
mod types;

use crate::app::state::AppState;
use crate::theme::Theme;
use groups::get_groups;
pub use types::{FooterGroup, FooterItem};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Footer<'a, 's> {
    pub state: &'a AppState<'s>,
    pub theme: &'a Theme,
}

impl Widget for Footer<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        // Status segment
        let status_span = if let Some(err) = &state.last_error {
            Span::styled(format!("  ERROR: {err}  "), theme.status_error)
        } else if let Some(msg) = &state.status_message {
            Span::styled(format!("  {msg}  "), theme.status_info)
        } else {
            Span::styled("  READY  ", theme.status_ready)
        };

        let mut spans = vec![status_span, Span::raw("  ")];

        let available_width = area.width.saturating_sub(4) as usize; // Margin
        let mut current_width = spans.iter().map(Span::width).sum::<usize>();

        'groups: for group in get_groups(state) {
            if area.width > 100 {
                let label = Span::styled(format!("{}: ", group.name), theme.dimmed);
                current_width += label.width();
                spans.push(label);
            }

            for item in group.items {
                let key = Span::styled(format!(" {} ", item.key), theme.footer_segment_key);
                let desc = Span::styled(format!(" {} ", item.desc), theme.footer_segment_val);
                let item_width = key.width() + desc.width() + 1;
                if current_width + item_width > available_width {
                    break 'groups;
                }
                spans.push(key);
                spans.push(desc);
                spans.push(Span::raw(" "));
                current_width += item_width;
            }
            spans.push(Span::raw("  "));
            current_width += 2;
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}

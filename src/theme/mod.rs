use ratatui::style::{Modifier, Style};

pub mod palette;

pub use palette::{Palette, PORTAL_DARK};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub header_logo: Style,
    pub header_location: Style,
    pub header: Style,

    pub page_category: Style,
    pub page_title: Style,
    pub page_description: Style,
    pub page_url: Style,

    pub search_button: Style,
    pub close_button: Style,
    pub shortcut_chip: Style,
    pub category_badge: Style,
    pub input_cursor: Style,
    pub input_placeholder: Style,

    pub status_ready: Style,
    pub status_info: Style,
    pub status_error: Style,

    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer: Style,

    pub highlight: Style,
    pub list_selected: Style,
    pub list_item: Style,
    pub dimmed: Style,
}

impl Theme {
    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.blue),

            header_logo: Style::default()
                .bg(p.mauve)
                .fg(p.text)
                .add_modifier(Modifier::BOLD),
            header_location: Style::default().bg(p.surface1).fg(p.text),
            header: Style::default().bg(p.base).fg(p.text),

            page_category: Style::default().fg(p.blue).add_modifier(Modifier::BOLD),
            page_title: Style::default().fg(p.text).add_modifier(Modifier::BOLD),
            page_description: Style::default().fg(p.subtext0),
            page_url: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),

            search_button: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            close_button: Style::default().fg(p.red).add_modifier(Modifier::BOLD),
            shortcut_chip: Style::default().bg(p.surface1).fg(p.text),
            category_badge: Style::default().fg(p.peach),
            input_cursor: Style::default().add_modifier(Modifier::REVERSED),
            input_placeholder: Style::default().fg(p.overlay0),

            status_ready: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_info: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_error: Style::default()
                .bg(p.red)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),

            footer_segment_key: Style::default()
                .bg(p.surface0)
                .fg(p.blue)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().bg(p.base).fg(p.text),
            footer: Style::default().bg(p.crust).fg(p.subtext0),

            highlight: Style::default()
                .bg(p.yellow)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            list_selected: Style::default().bg(p.surface1).add_modifier(Modifier::BOLD),
            list_item: Style::default().fg(p.text),
            dimmed: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette(&PORTAL_DARK)
    }
}

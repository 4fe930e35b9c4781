use super::input::AppTextArea;
use crate::domain::search::{normalize_query, SearchEngine};
use ratatui::style::Style;

pub const INPUT_PLACEHOLDER: &str = "Search games, mods, emulators, tools...";

/// Lifecycle of the floating search modal.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchModal<'a> {
    #[default]
    Closed,
    Open(QueryState<'a>),
}

impl<'a> SearchModal<'a> {
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, SearchModal::Open(_))
    }

    #[must_use]
    pub fn query(&self) -> Option<&QueryState<'a>> {
        match self {
            SearchModal::Open(q) => Some(q),
            SearchModal::Closed => None,
        }
    }

    pub fn query_mut(&mut self) -> Option<&mut QueryState<'a>> {
        match self {
            SearchModal::Open(q) => Some(q),
            SearchModal::Closed => None,
        }
    }
}

/// Per-session query state. Dropped when the modal closes.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState<'a> {
    pub session: u64,
    pub text_area: AppTextArea<'a>,
    pub input_focused: bool,
    pub normalized: String,
    pub results: Vec<usize>, // Indices into the catalog
    pub selected: usize,     // Position in `results`
}

impl QueryState<'_> {
    #[must_use]
    pub fn new(session: u64, placeholder_style: Style) -> Self {
        let mut text_area = AppTextArea::default();
        text_area.set_placeholder_text(INPUT_PLACEHOLDER);
        text_area.set_placeholder_style(placeholder_style);
        text_area.set_cursor_line_style(Style::default());
        // No visible cursor until focus arrives.
        text_area.set_cursor_style(Style::default());

        Self {
            session,
            text_area,
            input_focused: false,
            normalized: String::new(),
            results: Vec::new(),
            selected: 0,
        }
    }

    #[must_use]
    pub fn raw_input(&self) -> String {
        self.text_area.text()
    }

    pub fn focus(&mut self, cursor_style: Style) {
        self.input_focused = true;
        self.text_area.set_cursor_style(cursor_style);
    }

    pub fn set_input(&mut self, text: &str, engine: &SearchEngine) {
        self.text_area.replace_text(text);
        self.refresh(engine);
    }

    /// Re-runs the search for the current input.
    pub fn refresh(&mut self, engine: &SearchEngine) {
        self.normalized = normalize_query(&self.raw_input());
        self.results = engine.matches(&self.normalized);
        self.selected = 0;
    }

    #[must_use]
    pub fn selected_result(&self) -> Option<usize> {
        self.results.get(self.selected).copied()
    }

    pub fn select_next(&mut self) {
        if !self.results.is_empty() {
            self.selected = (self.selected + 1) % self.results.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.results.is_empty() {
            if self.selected == 0 {
                self.selected = self.results.len() - 1;
            } else {
                self.selected -= 1;
            }
        }
    }
}

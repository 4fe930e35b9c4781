use super::keymap::KeyMap;
use crate::config::Config;
use crate::domain::models::Shortcut;
use crate::domain::search::SearchEngine;
use crate::theme::Theme;
use std::sync::Arc;
use std::time::Duration;

pub mod input;
pub mod page;
pub mod search;

// Re-exports
pub use input::AppTextArea;
pub use page::{page_line_count, PageState};
pub use search::{QueryState, SearchModal};

#[derive(Debug, Clone)]
pub struct AppState<'a> {
    // --- Status ---
    pub should_quit: bool,
    pub site_name: String,
    pub location: Option<String>, // Last page navigated to
    pub status_message: Option<String>,
    pub last_error: Option<String>,

    // --- Search ---
    // `None` when the catalog could not be loaded; search stays disabled.
    pub engine: Option<Arc<SearchEngine>>,
    pub search: SearchModal<'a>,
    pub shortcuts: Vec<Shortcut>,
    pub focus_delay: Duration,
    pub next_session: u64,

    // --- Page ---
    pub page: PageState,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub theme: Theme,

}

impl AppState<'_> {
    #[must_use]
    pub fn new(config: &Config, engine: Option<Arc<SearchEngine>>) -> Self {
        Self {
            site_name: config.site_name.clone(),
            shortcuts: config.shortcuts.clone(),
            focus_delay: config.focus_delay(),
            engine,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_engine(engine: SearchEngine) -> Self {
        Self {
            engine: Some(Arc::new(engine)),
            ..Default::default()
        }
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        let config = Config::default();
        Self {
            should_quit: false,
            site_name: config.site_name,
            location: None,
            status_message: None,
            last_error: None,
            engine: None,
            search: SearchModal::Closed,
            shortcuts: config.shortcuts,
            focus_delay: Duration::from_millis(config.focus_delay_ms),
            next_session: 0,
            page: PageState::default(),
            keymap: Arc::new(KeyMap::default()),
            theme: Theme::default(),
        }
    }
}

use super::action::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

pub struct KeyMap {
    // Checked first, whatever has focus.
    pub global: HashMap<KeyEvent, Action>,
    // Page (modal closed).
    pub page: HashMap<KeyEvent, Action>,
    // Search modal open. Unbound keys go to the input.
    pub search: HashMap<KeyEvent, Action>,
}

impl std::fmt::Debug for KeyMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyMap")
            .field("global", &self.global.len())
            .field("page", &self.page.len())
            .field("search", &self.search.len())
            .finish()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut global = HashMap::new();
        let mut page = HashMap::new();
        let mut search = HashMap::new();

        // --- Global ---
        global.insert(ctrl('k'), Action::OpenSearch);
        global.insert(key_with(KeyCode::Char('k'), KeyModifiers::SUPER), Action::OpenSearch);
        global.insert(ctrl('c'), Action::Quit);

        // --- Page ---
        page.insert(key(KeyCode::Char('q')), Action::Quit);
        page.insert(key(KeyCode::Char('j')), Action::ScrollPageDown(1));
        page.insert(key(KeyCode::Down), Action::ScrollPageDown(1));
        page.insert(key(KeyCode::Char('k')), Action::ScrollPageUp(1));
        page.insert(key(KeyCode::Up), Action::ScrollPageUp(1));
        page.insert(key(KeyCode::PageDown), Action::ScrollPageDown(10));
        page.insert(key(KeyCode::PageUp), Action::ScrollPageUp(10));
        page.insert(key(KeyCode::Home), Action::ScrollPageTop);
        page.insert(key(KeyCode::Char('g')), Action::ScrollPageTop);

        // --- Search Modal ---
        search.insert(key(KeyCode::Esc), Action::CloseSearch);
        search.insert(key(KeyCode::Enter), Action::SubmitSearch);
        search.insert(key(KeyCode::Down), Action::SearchSelectNext);
        search.insert(key(KeyCode::Up), Action::SearchSelectPrev);
        for (i, c) in ('1'..='9').enumerate() {
            search.insert(key_with(KeyCode::Char(c), KeyModifiers::ALT), Action::ApplyShortcut(i));
        }

        Self {
            global,
            page,
            search,
        }
    }
}

impl KeyMap {
    pub fn get_action(&self, event: KeyEvent, search_open: bool) -> Option<Action> {
        // Lookups ignore the event kind/state so terminals that report them
        // still hit the bindings.
        let event = KeyEvent::new(event.code, event.modifiers);
        if let Some(action) = self.global.get(&event) {
            return Some(action.clone());
        }
        let mode_map = if search_open { &self.search } else { &self.page };
        mode_map.get(&event).cloned()
    }
}

fn key(code: impl Into<KeyCode>) -> KeyEvent {
    KeyEvent::new(code.into(), KeyModifiers::empty())
}

fn key_with(code: impl Into<KeyCode>, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code.into(), modifiers)
}

fn ctrl(c: char) -> KeyEvent {
    key_with(KeyCode::Char(c), KeyModifiers::CONTROL)
}

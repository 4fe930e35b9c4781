use crate::app::{action::Action, state::AppState, ui};
use crate::components::modals::helpers::rect_contains;
use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Rect, Size};

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    match event {
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            let search_open = app_state.search.is_open();
            if let Some(action) = app_state.keymap.get_action(key, search_open) {
                return Some(action);
            }
            // Everything else typed while the modal is up belongs to the input.
            search_open.then_some(Action::SearchInput(key))
        }
        Event::Mouse(mouse) => {
            let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
            if app_state.search.is_open() {
                map_modal_mouse(mouse, app_state, area)
            } else {
                map_page_mouse(mouse, app_state, area)
            }
        }
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        _ => None,
    }
}

fn map_page_mouse(mouse: MouseEvent, app_state: &AppState<'_>, area: Rect) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let layout = ui::get_layout(area, app_state);
            layout
                .search_button
                .filter(|button| rect_contains(*button, mouse.column, mouse.row))
                .map(|_| Action::OpenSearch)
        }
        MouseEventKind::ScrollDown => Some(Action::ScrollPageDown(1)),
        MouseEventKind::ScrollUp => Some(Action::ScrollPageUp(1)),
        _ => None,
    }
}

fn map_modal_mouse(mouse: MouseEvent, app_state: &AppState<'_>, area: Rect) -> Option<Action> {
    let layout = ui::get_layout(area, app_state);
    let Some(modal) = layout.modal else {
        // Modal does not fit; any click dismisses it.
        return matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
            .then_some(Action::CloseSearch);
    };
    let (col, row) = (mouse.column, mouse.row);
    let inside = rect_contains(modal.content, col, row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if rect_contains(modal.close_button, col, row) {
                return Some(Action::CloseSearch);
            }
            if let Some(idx) = modal.shortcut_at(col, row) {
                return Some(Action::ApplyShortcut(idx));
            }
            if let Some(position) = app_state
                .search
                .query()
                .and_then(|q| modal.result_at(q, col, row))
            {
                return Some(Action::OpenResult(position));
            }
            // Backdrop
            (!inside).then_some(Action::CloseSearch)
        }
        MouseEventKind::ScrollDown if inside => Some(Action::SearchSelectNext),
        MouseEventKind::ScrollUp if inside => Some(Action::SearchSelectPrev),
        // Page scrolling is suppressed by the reducer while the modal is open.
        MouseEventKind::ScrollDown => Some(Action::ScrollPageDown(1)),
        MouseEventKind::ScrollUp => Some(Action::ScrollPageUp(1)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::reducer;
    use crate::domain::{catalog::Catalog, search::SearchEngine};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    const SIZE: Size = Size {
        width: 100,
        height: 40,
    };

    fn area() -> Rect {
        Rect::new(0, 0, SIZE.width, SIZE.height)
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn scroll(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn open_state(query: &str) -> AppState<'static> {
        let mut state = AppState::with_engine(SearchEngine::new(Catalog::default()));
        reducer::update(&mut state, Action::OpenSearch);
        reducer::update(&mut state, Action::FocusSearchInput(0));
        if let Some(engine) = state.engine.clone() {
            if let Some(q) = state.search.query_mut() {
                q.set_input(query, &engine);
            }
        }
        state
    }

    #[test]
    fn test_release_ignored() {
        let state = AppState::default();
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(map_event_to_action(Event::Key(key), &state, SIZE), None);
    }

    #[test]
    fn test_unbound_keys_go_to_search_input_when_open() {
        let state = open_state("");
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(
            map_event_to_action(Event::Key(key), &state, SIZE),
            Some(Action::SearchInput(key))
        );
    }

    #[test]
    fn test_unbound_keys_dropped_on_page() {
        let state = AppState::default();
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(map_event_to_action(Event::Key(key), &state, SIZE), None);
    }

    #[test]
    fn test_click_search_button_opens() {
        let state = AppState::with_engine(SearchEngine::new(Catalog::default()));
        let button = ui::get_layout(area(), &state).search_button.unwrap();
        assert_eq!(
            map_event_to_action(click(button.x + 1, button.y + 1), &state, SIZE),
            Some(Action::OpenSearch)
        );
        assert_eq!(map_event_to_action(click(0, 5), &state, SIZE), None);
    }

    #[test]
    fn test_click_close_button_and_backdrop() {
        let state = open_state("gta");
        let modal = ui::get_layout(area(), &state).modal.unwrap();
        let close = modal.close_button;
        assert_eq!(
            map_event_to_action(click(close.x + 1, close.y), &state, SIZE),
            Some(Action::CloseSearch)
        );
        assert_eq!(
            map_event_to_action(click(0, 0), &state, SIZE),
            Some(Action::CloseSearch)
        );
        // Clicks on empty modal chrome do nothing.
        assert_eq!(
            map_event_to_action(click(modal.hint.x, modal.hint.y), &state, SIZE),
            None
        );
    }

    #[test]
    fn test_click_shortcut_chip() {
        let state = open_state("");
        let modal = ui::get_layout(area(), &state).modal.unwrap();
        let chip = modal.shortcuts[1];
        assert_eq!(
            map_event_to_action(click(chip.x, chip.y), &state, SIZE),
            Some(Action::ApplyShortcut(1))
        );
    }

    #[test]
    fn test_click_result_row() {
        let state = open_state("emulator");
        let modal = ui::get_layout(area(), &state).modal.unwrap();
        let results = modal.results;
        assert_eq!(
            map_event_to_action(click(results.x + 2, results.y), &state, SIZE),
            Some(Action::OpenResult(0))
        );
        assert_eq!(
            map_event_to_action(click(results.x + 2, results.y + 3), &state, SIZE),
            Some(Action::OpenResult(1))
        );
    }

    #[test]
    fn test_wheel_inside_modal_moves_selection() {
        let state = open_state("emulator");
        let modal = ui::get_layout(area(), &state).modal.unwrap();
        let (x, y) = (modal.results.x + 1, modal.results.y);
        assert_eq!(
            map_event_to_action(scroll(MouseEventKind::ScrollDown, x, y), &state, SIZE),
            Some(Action::SearchSelectNext)
        );
        assert_eq!(
            map_event_to_action(scroll(MouseEventKind::ScrollUp, x, y), &state, SIZE),
            Some(Action::SearchSelectPrev)
        );
    }

    #[test]
    fn test_resize() {
        let state = AppState::default();
        assert_eq!(
            map_event_to_action(Event::Resize(80, 24), &state, SIZE),
            Some(Action::Resize(80, 24))
        );
    }
}

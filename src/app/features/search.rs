use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppState, QueryState, SearchModal},
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::OpenSearch => UpdateResult::Handled(open(state)),
        Action::CloseSearch => {
            close(state);
            UpdateResult::Handled(None)
        }
        Action::FocusSearchInput(session) => {
            let cursor = state.theme.input_cursor;
            if let Some(q) = state.search.query_mut() {
                if q.session == *session {
                    q.focus(cursor);
                } else {
                    debug!(stale = session, current = q.session, "ignoring stale focus request");
                }
            }
            UpdateResult::Handled(None)
        }
        Action::SearchInput(key) => {
            let Some(engine) = state.engine.clone() else {
                return UpdateResult::Handled(None);
            };
            if let Some(q) = state.search.query_mut() {
                if q.input_focused && !inserts_line_break(key) && q.text_area.input(*key) {
                    q.refresh(&engine);
                }
            }
            UpdateResult::Handled(None)
        }
        Action::ApplyShortcut(idx) => {
            let Some(engine) = state.engine.clone() else {
                return UpdateResult::Handled(None);
            };
            let Some(shortcut) = state.shortcuts.get(*idx) else {
                return UpdateResult::Handled(None);
            };
            let cursor = state.theme.input_cursor;
            if let Some(q) = state.search.query_mut() {
                q.focus(cursor);
                q.set_input(&shortcut.query, &engine);
                debug!(query = %shortcut.query, results = q.results.len(), "shortcut applied");
            }
            UpdateResult::Handled(None)
        }
        Action::SearchSelectNext => {
            if let Some(q) = state.search.query_mut() {
                q.select_next();
            }
            UpdateResult::Handled(None)
        }
        Action::SearchSelectPrev => {
            if let Some(q) = state.search.query_mut() {
                q.select_prev();
            }
            UpdateResult::Handled(None)
        }
        Action::SubmitSearch => UpdateResult::Handled(submit(state)),
        Action::OpenResult(position) => {
            if let Some(q) = state.search.query_mut() {
                if *position < q.results.len() {
                    q.selected = *position;
                    return UpdateResult::Handled(submit(state));
                }
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

fn open(state: &mut AppState) -> Option<Command> {
    if state.engine.is_none() {
        debug!("search is not initialised; ignoring open request");
        return None;
    }
    if state.search.is_open() {
        return None;
    }

    let session = state.next_session;
    state.next_session += 1;
    state.search = SearchModal::Open(QueryState::new(session, state.theme.input_placeholder));
    state.page.scroll_locked = true;
    debug!(session, "search opened");

    Some(Command::FocusInputAfter {
        session,
        delay: state.focus_delay,
    })
}

fn close(state: &mut AppState) {
    if let SearchModal::Open(q) = &state.search {
        debug!(session = q.session, "search closed");
    }
    state.search = SearchModal::Closed;
    state.page.scroll_locked = false;
}

fn submit(state: &mut AppState) -> Option<Command> {
    let q = state.search.query()?;
    let idx = q.selected_result()?;
    let url = state.engine.as_ref()?.catalog().get(idx)?.url.clone();
    close(state);
    Some(Command::Navigate(url))
}

fn inserts_line_break(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter | KeyCode::Tab | KeyCode::BackTab => true,
        KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

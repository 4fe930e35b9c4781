use crate::app::{
    action::{Action, UpdateResult},
    state::AppState,
};
use tracing::{info, warn};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::ScrollPageDown(n) => {
            let catalog = state.engine.as_ref().map(|e| e.catalog());
            state.page.scroll_by(i32::from(*n), catalog);
            UpdateResult::Handled(None)
        }
        Action::ScrollPageUp(n) => {
            let catalog = state.engine.as_ref().map(|e| e.catalog());
            state.page.scroll_by(-i32::from(*n), catalog);
            UpdateResult::Handled(None)
        }
        Action::ScrollPageTop => {
            if !state.page.scroll_locked {
                state.page.scroll = 0;
            }
            UpdateResult::Handled(None)
        }
        Action::Navigated(result) => {
            match result {
                Ok(target) => {
                    info!(%target, "navigated");
                    state.location = Some(target.clone());
                    state.status_message = Some(format!("Opened {target}"));
                    state.last_error = None;
                }
                Err(err) => {
                    warn!(error = %err, "navigation failed");
                    state.last_error = Some(err.clone());
                }
            }
            UpdateResult::Handled(None)
        }
        // Redraw only.
        Action::Tick | Action::Resize(_, _) => UpdateResult::Handled(None),
        _ => UpdateResult::NotHandled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::reducer;
    use crate::app::state::page_line_count;
    use crate::domain::{catalog::Catalog, search::SearchEngine};

    fn state() -> AppState<'static> {
        AppState::with_engine(SearchEngine::new(Catalog::default()))
    }

    #[test]
    fn test_tick_only_redraws() {
        let mut state = state();
        reducer::update(&mut state, Action::ScrollPageDown(2));
        let page = state.page.clone();

        assert_eq!(reducer::update(&mut state, Action::Tick), None);
        assert_eq!(reducer::update(&mut state, Action::Resize(10, 10)), None);
        assert_eq!(state.page, page);
        assert!(state.status_message.is_none());
        assert!(!state.search.is_open());
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut state = state();
        reducer::update(&mut state, Action::ScrollPageUp(5));
        assert_eq!(state.page.scroll, 0);

        reducer::update(&mut state, Action::ScrollPageDown(3));
        assert_eq!(state.page.scroll, 3);

        reducer::update(&mut state, Action::ScrollPageDown(u16::MAX));
        let max = page_line_count(state.engine.as_ref().unwrap().catalog()) - 1;
        assert_eq!(usize::from(state.page.scroll), max);

        reducer::update(&mut state, Action::ScrollPageTop);
        assert_eq!(state.page.scroll, 0);
    }

    #[test]
    fn test_scroll_suppressed_while_search_open() {
        let mut state = state();
        reducer::update(&mut state, Action::ScrollPageDown(4));
        reducer::update(&mut state, Action::OpenSearch);

        reducer::update(&mut state, Action::ScrollPageDown(4));
        reducer::update(&mut state, Action::ScrollPageTop);
        assert_eq!(state.page.scroll, 4);

        reducer::update(&mut state, Action::CloseSearch);
        reducer::update(&mut state, Action::ScrollPageDown(1));
        assert_eq!(state.page.scroll, 5);
    }

    #[test]
    fn test_navigation_result_updates_location() {
        let mut state = state();
        reducer::update(
            &mut state,
            Action::Navigated(Ok("https://example.org/help.html".to_string())),
        );
        assert_eq!(
            state.location.as_deref(),
            Some("https://example.org/help.html")
        );
        assert!(state.status_message.unwrap().contains("help.html"));
    }

    #[test]
    fn test_navigation_failure_sets_error() {
        let mut state = state();
        reducer::update(&mut state, Action::Navigated(Err("xdg-open missing".into())));
        assert_eq!(state.last_error.as_deref(), Some("xdg-open missing"));
        assert!(state.location.is_none());
    }
}

use crate::app::command::Command;

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Page ---
    ScrollPageUp(u16),
    ScrollPageDown(u16),
    ScrollPageTop,

    // --- Search Modal ---
    OpenSearch,                                // Button click or Ctrl+K
    CloseSearch,                               // Esc, close button, backdrop click
    FocusSearchInput(u64),                     // Focus timer fired for a session
    SearchInput(crossterm::event::KeyEvent),   // Edit the query text
    ApplyShortcut(usize),                      // Shortcut button by index
    SearchSelectNext,                          // Down
    SearchSelectPrev,                          // Up
    SubmitSearch,                              // Enter: open the selected result
    OpenResult(usize),                         // Click on a result row

    // --- Async Results ---
    Navigated(Result<String, String>), // Resolved target or error message
}

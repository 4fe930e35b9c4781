use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Move focus into the search input of `session` once `delay` elapses.
    FocusInputAfter { session: u64, delay: Duration },
    /// Open a catalog URL.
    Navigate(String),
}

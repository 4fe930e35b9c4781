use crate::app::{
    action::Action, command::Command, input::map_event_to_action, reducer, state::AppState, ui,
};
use crate::domain::navigator::Navigator;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, info};

const TICK_RATE: Duration = Duration::from_millis(250);
const INPUT_POLL: Duration = Duration::from_millis(100);

/// Pumps terminal events into `tx` until the receiver is dropped or the
/// source fails. `next` waits at most the given timeout for an event, so the
/// reader exits promptly once the loop has finished.
pub(crate) fn forward_terminal_events<F>(
    tx: &mpsc::Sender<Result<Event, std::io::Error>>,
    mut next: F,
) where
    F: FnMut(Duration) -> std::io::Result<Option<Event>>,
{
    while !tx.is_closed() {
        match next(INPUT_POLL) {
            Ok(Some(evt)) => {
                if tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Ok(None) => {}
            Err(e) => {
                let _ = tx.blocking_send(Err(e));
                break;
            }
        }
    }
    debug!("terminal reader stopped");
}

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    navigator: Arc<dyn Navigator>,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || {
        forward_terminal_events(&event_tx, |timeout| {
            if event::poll(timeout)? {
                event::read().map(Some)
            } else {
                Ok(None)
            }
        });
    });

    run_loop_with_events(terminal, app_state, navigator, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    navigator: Arc<dyn Navigator>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);

    info!(
        search_enabled = app_state.engine.is_some(),
        "Entering event loop"
    );

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &app_state);
        })?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = match res {
                    Ok(e) => e,
                    Err(e) => return Err(e.into()),
                };
                map_event_to_action(event, &app_state, terminal.size()?)
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            if let Action::Quit = action {
                break;
            }

            let command = reducer::update(&mut app_state, action);

            if app_state.should_quit {
                break;
            }

            if let Some(cmd) = command {
                handle_command(cmd, navigator.clone(), action_tx.clone())?;
            }
        }
    }

    info!("Leaving event loop");
    Ok(())
}

pub(crate) fn handle_command(
    command: Command,
    navigator: Arc<dyn Navigator>,
    tx: mpsc::Sender<Action>,
) -> Result<()> {
    debug!(?command, "Dispatching command");
    match command {
        Command::FocusInputAfter { session, delay } => {
            tokio::spawn(async move {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                let _ = tx.send(Action::FocusSearchInput(session)).await;
            });
        }
        Command::Navigate(url) => {
            tokio::spawn(async move {
                let result = navigator
                    .navigate(&url)
                    .await
                    .map_err(|e| format!("Failed to open {url}: {e:#}"));
                let _ = tx.send(Action::Navigated(result)).await;
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;

use super::*;
use crate::app::action::Action;
use crate::app::command::Command;
use crate::app::state::AppState;
use crate::domain::catalog::Catalog;
use crate::domain::navigator::MockNavigator;
use crate::domain::search::SearchEngine;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use rand::{Rng, SeedableRng};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;

fn key(code: KeyCode, modifiers: KeyModifiers) -> Result<Event, std::io::Error> {
    Ok(Event::Key(KeyEvent::new(code, modifiers)))
}

fn ctrl_c() -> Result<Event, std::io::Error> {
    key(KeyCode::Char('c'), KeyModifiers::CONTROL)
}

fn search_state() -> AppState<'static> {
    let mut state = AppState::with_engine(SearchEngine::new(Catalog::default()));
    state.focus_delay = Duration::ZERO;
    state
}

#[tokio::test]
async fn test_handle_command_navigate_success() {
    let mut mock = MockNavigator::new();
    mock.expect_navigate()
        .with(mockall::predicate::eq("help.html"))
        .returning(|url| Ok(format!("https://example.com/{url}")));

    let (tx, mut rx) = mpsc::channel(1);
    handle_command(Command::Navigate("help.html".into()), Arc::new(mock), tx).unwrap();

    let action = rx.recv().await.unwrap();
    assert_eq!(
        action,
        Action::Navigated(Ok("https://example.com/help.html".to_string()))
    );
}

#[tokio::test]
async fn test_handle_command_navigate_error_propagation() {
    let mut mock = MockNavigator::new();
    mock.expect_navigate()
        .returning(|_| Err(anyhow::anyhow!("opener exited with status 3")));

    let (tx, mut rx) = mpsc::channel(1);
    handle_command(Command::Navigate("mods.html".into()), Arc::new(mock), tx).unwrap();

    match rx.recv().await.unwrap() {
        Action::Navigated(Err(msg)) => {
            assert!(msg.contains("mods.html"));
            assert!(msg.contains("opener exited with status 3"));
        }
        other => panic!("Expected Action::Navigated(Err), got {other:?}"),
    }
}

#[tokio::test]
async fn test_handle_command_focus_after_delay() {
    let (tx, mut rx) = mpsc::channel(1);
    handle_command(
        Command::FocusInputAfter {
            session: 7,
            delay: Duration::from_millis(10),
        },
        Arc::new(MockNavigator::new()),
        tx,
    )
    .unwrap();

    let action = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(action, Action::FocusSearchInput(7));
}

#[tokio::test]
async fn test_navigation_error_reaches_state() {
    let mut mock = MockNavigator::new();
    mock.expect_navigate()
        .returning(|_| Err(anyhow::anyhow!("no opener")));

    let (tx, mut rx) = mpsc::channel(1);
    let mut state = search_state();
    handle_command(Command::Navigate("tools/sources.html".into()), Arc::new(mock), tx).unwrap();

    let action = rx.recv().await.unwrap();
    crate::app::reducer::update(&mut state, action);
    assert!(state.last_error.unwrap().contains("no opener"));
    assert!(state.location.is_none());
}

#[tokio::test]
async fn test_search_and_open_first_result() {
    let opened = Arc::new(Mutex::new(Vec::<String>::new()));
    let recorder = opened.clone();
    let mut mock = MockNavigator::new();
    mock.expect_navigate().returning(move |url| {
        recorder.lock().unwrap().push(url.to_string());
        Ok(url.to_string())
    });

    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    let (event_tx, event_rx) = mpsc::channel(100);

    let driver = tokio::spawn(async move {
        event_tx
            .send(key(KeyCode::Char('k'), KeyModifiers::CONTROL))
            .await
            .unwrap();
        // Let the focus timer fire.
        tokio::time::sleep(Duration::from_millis(50)).await;
        for c in "emulator".chars() {
            event_tx
                .send(key(KeyCode::Char(c), KeyModifiers::NONE))
                .await
                .unwrap();
        }
        event_tx
            .send(key(KeyCode::Enter, KeyModifiers::NONE))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
        event_tx.send(ctrl_c()).await.unwrap();
    });

    tokio::time::timeout(
        Duration::from_secs(10),
        run_loop_with_events(&mut terminal, search_state(), Arc::new(mock), event_rx),
    )
    .await
    .expect("loop timed out")
    .unwrap();
    driver.await.unwrap();

    assert_eq!(
        *opened.lock().unwrap(),
        vec!["console/playstation-emulators.html".to_string()]
    );
}

#[tokio::test]
async fn test_terminal_reader_stops_when_loop_is_gone() {
    let (event_tx, event_rx) = mpsc::channel(1);
    let reader = tokio::task::spawn_blocking(move || {
        // An idle terminal: every wait times out without input.
        forward_terminal_events(&event_tx, |timeout| {
            std::thread::sleep(timeout.min(Duration::from_millis(5)));
            Ok(None)
        });
    });

    drop(event_rx);
    tokio::time::timeout(Duration::from_secs(3), reader)
        .await
        .expect("reader kept running after the receiver was dropped")
        .unwrap();
}

#[tokio::test]
async fn test_terminal_reader_forwards_then_reports_error() {
    let (event_tx, mut event_rx) = mpsc::channel(4);
    let mut script = vec![
        Err(std::io::Error::other("tty gone")),
        Ok(None),
        Ok(Some(Event::Resize(80, 24))),
    ];
    let reader = tokio::task::spawn_blocking(move || {
        forward_terminal_events(&event_tx, |_| script.pop().unwrap_or(Ok(None)));
    });

    assert!(matches!(
        event_rx.recv().await,
        Some(Ok(Event::Resize(80, 24)))
    ));
    assert!(matches!(event_rx.recv().await, Some(Err(_))));
    assert!(event_rx.recv().await.is_none());
    reader.await.unwrap();
}

#[tokio::test]
async fn test_keystroke_fuzzing() {
    let mut mock = MockNavigator::new();
    mock.expect_navigate().returning(|url| Ok(url.to_string()));

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let app_state = search_state();

    let (event_tx, event_rx) = mpsc::channel(100);

    // Spawn a task to feed random events
    let fuzzer_handle = tokio::spawn(async move {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..10000 {
            let event = match rng.gen_range(0..100) {
                0..=5 => {
                    let w = rng.gen_range(10..200);
                    let h = rng.gen_range(10..100);
                    Event::Resize(w, h)
                }
                6..=15 => generate_random_mouse(&mut rng, ratatui::layout::Size::new(80, 24)),
                _ => generate_random_key(&mut rng),
            };
            if event_tx.send(Ok(event)).await.is_err() {
                break;
            }
            // Yield to allow the loop to process events
            if rng.gen_bool(0.1) {
                tokio::task::yield_now().await;
            }
        }
        let _ = event_tx.send(ctrl_c()).await;
    });

    let result = tokio::time::timeout(
        Duration::from_secs(30),
        run_loop_with_events(&mut terminal, app_state, Arc::new(mock), event_rx),
    )
    .await;

    match result {
        Ok(res) => res.unwrap(),
        Err(_) => panic!("Fuzzer timed out - possible deadlock or too slow"),
    }

    fuzzer_handle.await.unwrap();
}

fn generate_random_key<R: Rng>(rng: &mut R) -> Event {
    let code = match rng.gen_range(0..20) {
        0 => KeyCode::Esc,
        1 => KeyCode::Enter,
        2 => KeyCode::Left,
        3 => KeyCode::Right,
        4 => KeyCode::Up,
        5 => KeyCode::Down,
        6 => KeyCode::Home,
        7 => KeyCode::End,
        8 => KeyCode::PageUp,
        9 => KeyCode::PageDown,
        10 => KeyCode::Tab,
        11 => KeyCode::BackTab,
        12 => KeyCode::Delete,
        13 => KeyCode::Backspace,
        _ => {
            let c = rng.gen_range(b' '..=b'~') as char;
            KeyCode::Char(c)
        }
    };

    let mut modifiers = KeyModifiers::empty();
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::CONTROL);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::ALT);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::SHIFT);
    }
    // Keep the run going; plain `q` and Ctrl+C would end it early.
    if matches!(code, KeyCode::Char('c') | KeyCode::Char('q')) {
        modifiers.remove(KeyModifiers::CONTROL);
        modifiers.insert(KeyModifiers::ALT);
    }

    Event::Key(KeyEvent::new(code, modifiers))
}

fn generate_random_mouse<R: Rng>(rng: &mut R, size: ratatui::layout::Size) -> Event {
    use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
    let kind = match rng.gen_range(0..5) {
        0 => MouseEventKind::Down(MouseButton::Left),
        1 => MouseEventKind::Down(MouseButton::Right),
        2 => MouseEventKind::ScrollUp,
        3 => MouseEventKind::ScrollDown,
        _ => MouseEventKind::Moved,
    };

    let column = rng.gen_range(0..size.width);
    let row = rng.gen_range(0..size.height);

    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::empty(),
    })
}

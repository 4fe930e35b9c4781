use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use portal_search::app::{r#loop::run_loop, state::AppState};
use portal_search::config::{self, Config};
use portal_search::domain::catalog::{Catalog, CatalogError};
use portal_search::domain::search::{highlight, normalize_query, SearchEngine};
use portal_search::infrastructure::opener::SystemNavigator;
use portal_search::logging;

#[derive(Debug, Parser)]
#[command(name = "portal-search", version, about = "Floating site search for the game portal")]
struct Cli {
    /// Config file (defaults to ~/.config/portal-search/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Catalog TOML file replacing the built-in entries
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Print matches for QUERY and exit
    #[arg(long, value_name = "QUERY")]
    query: Option<String>,

    /// Raise log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

fn load_catalog(cli: &Cli, config: &Config) -> Result<Catalog, CatalogError> {
    match cli.catalog.as_deref().or(config.catalog.as_deref()) {
        Some(path) => Catalog::load(path),
        None => Ok(Catalog::default()),
    }
}

fn print_matches(engine: &SearchEngine, query: &str) -> Result<()> {
    let normalized = normalize_query(query);
    let mut out = io::stdout().lock();
    for entry in engine.search(&normalized) {
        writeln!(out, "{}", highlight(&entry.title, &normalized))?;
        writeln!(out, "  {}", highlight(&entry.description, &normalized))?;
        writeln!(out, "  [{}] {}", entry.category, entry.url)?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    // --- Non-interactive ---
    if let Some(query) = &cli.query {
        logging::init_stderr(cli.verbose)?;
        let catalog = load_catalog(&cli, &config)?;
        return print_matches(&SearchEngine::new(catalog), query);
    }

    let log_dir = config::log_dir().context("Could not determine home directory")?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create {}", log_dir.display()))?;
    let _log_guard = logging::init_file(&log_dir, cli.verbose)?;

    // Everything that can fail on bad config happens before the terminal
    // switches to raw mode.
    let site_root = config.site_root();
    let navigator = Arc::new(SystemNavigator::new(
        site_root.as_deref(),
        config.opener.as_deref(),
    )?);

    let (engine, load_error) = match load_catalog(&cli, &config) {
        Ok(catalog) => {
            info!(entries = catalog.len(), "Catalog loaded");
            (Some(Arc::new(SearchEngine::new(catalog))), None)
        }
        Err(err) => {
            warn!(error = %err, "Catalog unavailable, search disabled");
            (None, Some(err.to_string()))
        }
    };
    let mut app_state = AppState::new(&config, engine);
    app_state.last_error = load_error;

    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, navigator).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{err:?}");
    }

    Ok(())
}

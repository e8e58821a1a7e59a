//! ArtTable - a terminal table browser for the Art Institute of Chicago
//! collection.
//!
//! Fetches one page of artwork records at a time from the public catalog
//! API and renders them as a selectable table.

mod api;
mod app;
mod config;
mod error;
mod events;
mod logging;
mod tasks;
mod ui;

use std::io::Stdout;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info, warn};

use crate::api::ArticClient;
use crate::app::App;
use crate::config::{Config, Settings};
use crate::error::AppError;
use crate::events::EventHandler;
use crate::tasks::create_task_channel;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "arttable",
    version,
    about = "Browse the Art Institute of Chicago collection in your terminal"
)]
struct Cli {
    /// Override the catalog API base URL.
    #[arg(long)]
    base_url: Option<String>,

    /// The 1-based page to open with.
    #[arg(long, default_value_t = 1)]
    page: usize,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        // Logging is file-based; without it the app still works, the
        // operator just loses fetch-failure diagnostics.
        eprintln!("Failed to initialize logging: {}", e);
    }

    match run(cli).await {
        Ok(()) => logging::shutdown(),
        Err(e) => {
            error!(error = %e, "Fatal error");
            logging::shutdown();
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    }
}

/// Load configuration, build the client, and run the event loop inside a
/// managed terminal session.
async fn run(cli: Cli) -> error::Result<()> {
    let config = Config::load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        Config::default()
    });

    let mut settings = config.settings;
    if let Some(base_url) = cli.base_url {
        settings.base_url = base_url;
    }

    let client = ArticClient::new(&settings)?;
    let initial_page = cli.page.saturating_sub(1);
    info!(base_url = client.base_url(), initial_page, "Starting session");

    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, client, settings, initial_page).await;
    restore_terminal(&mut terminal)?;
    result
}

/// The main event loop.
///
/// Each iteration drains the pending fetch request (spawning at most one
/// background task), drains completed task results, draws a frame, and
/// waits for the next input event or tick.
async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    client: ArticClient,
    settings: Settings,
    initial_page: usize,
) -> error::Result<()> {
    let (mut api_rx, spawner) = create_task_channel();
    let mut app = App::new(settings, initial_page);
    let events = EventHandler::new();

    while !app.should_quit() {
        if let Some(page) = app.take_pending_fetch() {
            spawner.spawn_fetch_page(&client, page);
        }

        while let Ok(message) = api_rx.try_recv() {
            app.handle_api_message(message);
        }

        terminal.draw(|frame| app.view(frame))?;
        app.update(events.next()?);
    }

    Ok(())
}

/// Put the terminal into raw mode on the alternate screen.
fn setup_terminal() -> error::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().map_err(|e| AppError::terminal(e.to_string()))?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| AppError::terminal(e.to_string()))?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Restore the terminal to its original state.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> error::Result<()> {
    disable_raw_mode().map_err(|e| AppError::terminal(e.to_string()))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| AppError::terminal(e.to_string()))?;
    terminal.show_cursor()?;
    Ok(())
}

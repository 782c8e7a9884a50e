//! Terminal setup and teardown
//!
//! Initializes raw mode and the alternate screen, with a panic hook that
//! restores the terminal on crash, and runs the main event loop.

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;
use tracing::info;

use crate::config::{PouparPaths, Settings};
use crate::services::ApiClient;
use crate::storage::ClientStorage;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;
use super::worker::ThreadDispatcher;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

const TICK_RATE: Duration = Duration::from_millis(250);

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
pub fn run_tui(paths: &PouparPaths, settings: &Settings) -> Result<()> {
    let storage = ClientStorage::open(paths.client_storage_file())?;
    let client = ApiClient::new(settings)?;
    info!(api = client.base_url(), "starting TUI");

    let events = EventHandler::new(TICK_RATE);
    let dispatcher = ThreadDispatcher::new(client, events.sender());
    let mut app = App::new(settings.clone(), storage, Box::new(dispatcher));

    let mut terminal = init_terminal()?;
    let result = run_loop(&mut terminal, &mut app, &events);
    restore_terminal()?;

    info!("TUI closed");
    result
}

fn run_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, app))?;
        let event = events.next()?;
        handle_event(app, event, TICK_RATE)?;
    }
    Ok(())
}

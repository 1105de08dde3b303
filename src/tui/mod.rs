//! Terminal User Interface (TUI) for breathing sessions.
//!
//! Built with ratatui and crossterm. The event loop is the only clock: it
//! waits for input no longer than the next tick deadline and delivers due
//! ticks to the session timer.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::error::BreathworkError;

/// Run the TUI application until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn.
pub fn run(app: &mut App) -> Result<(), BreathworkError> {
    enable_raw_mode()
        .map_err(|e| BreathworkError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| BreathworkError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| BreathworkError::Terminal(format!("Failed to create terminal: {e}")))?;

    let result = run_app(&mut terminal, app);
    app.quit();

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), BreathworkError> {
    loop {
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| BreathworkError::Terminal(format!("Failed to draw: {e}")))?;

        if let Some(event::Action::Quit) = event::handle_events(app)? {
            break;
        }
    }

    Ok(())
}

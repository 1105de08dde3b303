//! Event handling for the TUI.

use std::time::Instant;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::error::BreathworkError;
use crate::tui::app::App;

/// Help line shown on `?`.
pub const HELP: &str = "space:start/pause | r:reset | j/k:exercise | v:voice | q:quit";

/// Action to take after handling an event.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
}

/// Wait for input until the next tick is due, then deliver due ticks.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App) -> Result<Option<Action>, BreathworkError> {
    let timeout = app.poll_timeout(Instant::now());

    let action = if event::poll(timeout)
        .map_err(|e| BreathworkError::Terminal(format!("Event poll failed: {e}")))?
    {
        match event::read()
            .map_err(|e| BreathworkError::Terminal(format!("Event read failed: {e}")))?
        {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                handle_key(app, key.code, key.modifiers)
            }
            _ => None,
        }
    } else {
        None
    };

    app.deliver_due(Instant::now());
    Ok(action)
}

/// Apply one key press.
pub fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Char(' ') | KeyCode::Enter => {
            app.status = None;
            app.toggle_running();
        }
        KeyCode::Char('r') => app.reset(),
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
        KeyCode::Char('v') => app.toggle_voice(),
        KeyCode::Char('?') => app.status = Some(HELP.to_string()),
        _ => {}
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::breathing::{Catalog, SpeechAnnouncer};

    fn app() -> App {
        let catalog = Catalog::builtin();
        let first = catalog.first();
        App::new(catalog, &first, SpeechAnnouncer::new(None, false), None)
    }

    fn press(app: &mut App, code: KeyCode) -> Option<Action> {
        handle_key(app, code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert_eq!(press(&mut app, KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(press(&mut app, KeyCode::Esc), Some(Action::Quit));
        assert_eq!(
            handle_key(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_space_toggles() {
        let mut app = app();
        assert_eq!(press(&mut app, KeyCode::Char(' ')), None);
        assert!(app.snapshot().running);
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.snapshot().running);
    }

    #[test]
    fn test_navigation() {
        let mut app = app();
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.selected, 1);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_help_and_voice() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.status.as_deref(), Some(HELP));
        press(&mut app, KeyCode::Char('v'));
        assert!(app.voice_enabled());
    }
}

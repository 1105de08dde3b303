//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::core::format_clock;
use crate::features::breathing::{PhaseView, SessionStatus, Snapshot};
use crate::tui::app::App;
use crate::tui::event::HELP;

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(7),    // Exercises and animation
            Constraint::Length(3), // Progress
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(0)])
        .split(chunks[1]);

    let snapshot = app.snapshot();

    render_header(frame, app, chunks[0]);
    render_exercises(frame, app, body[0]);
    render_breath(frame, &snapshot, body[1]);
    render_progress(frame, &snapshot, chunks[2]);
    render_status_bar(frame, app, chunks[3]);
}

fn render_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let exercise = app.exercise();
    let voice = if app.voice_enabled() { "🔊" } else { "🔇" };
    let title = format!(" {} ({})  {voice} ", exercise.title(), exercise.pattern());

    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(header, area);
}

fn render_exercises(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let items: Vec<ListItem<'_>> = app
        .catalog
        .iter()
        .enumerate()
        .map(|(i, exercise)| {
            let style = if i == app.selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(exercise.title().to_string(), style),
                Span::styled(
                    format!("  {}", exercise.pattern()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Exercises "))
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default();
    state.select(Some(app.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

/// Color for each animation state.
const fn phase_color(view: PhaseView) -> Color {
    match view {
        PhaseView::Idle => Color::Gray,
        PhaseView::Inhale => Color::Cyan,
        PhaseView::Hold => Color::Yellow,
        PhaseView::Exhale => Color::Blue,
        PhaseView::Pause => Color::Magenta,
        PhaseView::Complete => Color::Green,
    }
}

/// Circle drawn for the breath, larger while the lungs are full.
const fn breath_art(view: PhaseView) -> &'static [&'static str] {
    match view {
        PhaseView::Inhale | PhaseView::Hold => &[
            "   .-~~~~-.   ",
            "  /        \\  ",
            " |          | ",
            "  \\        /  ",
            "   '-~~~~-'   ",
        ],
        PhaseView::Exhale | PhaseView::Pause => &[
            "",
            "    .-~~-.    ",
            "   (      )   ",
            "    '-~~-'    ",
            "",
        ],
        PhaseView::Idle | PhaseView::Complete => &["", "", "      ()      ", "", ""],
    }
}

fn render_breath(frame: &mut Frame<'_>, snapshot: &Snapshot, area: Rect) {
    let color = phase_color(snapshot.phase_view);

    let mut lines: Vec<Line<'_>> = breath_art(snapshot.phase_view)
        .iter()
        .map(|row| Line::from(Span::styled(*row, Style::default().fg(color))))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        snapshot.display_label.clone(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));

    let breath = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(breath, area);
}

fn render_progress(frame: &mut Frame<'_>, snapshot: &Snapshot, area: Rect) {
    let color = if snapshot.status == SessionStatus::Complete {
        Color::Green
    } else {
        Color::Cyan
    };
    let label = format!(
        "{} / {}  {}",
        format_clock(snapshot.total_elapsed_seconds),
        format_clock(snapshot.total_duration_seconds),
        snapshot.status
    );

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(color))
        .ratio(snapshot.progress())
        .label(label);

    frame.render_widget(gauge, area);
}

fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_text = app.status.as_deref().unwrap_or(HELP);
    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::breathing::{Catalog, SpeechAnnouncer};
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(ratatui::buffer::Cell::symbol).collect()
    }

    #[test]
    fn test_render_idle() {
        let catalog = Catalog::builtin();
        let first = catalog.first();
        let app = App::new(catalog, &first, SpeechAnnouncer::new(None, false), None);

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Box Breathing"));
        assert!(text.contains("Ready?"));
        assert!(text.contains("0:00 / 2:00"));
    }

    #[test]
    fn test_render_running() {
        let catalog = Catalog::builtin();
        let first = catalog.first();
        let mut app = App::new(catalog, &first, SpeechAnnouncer::new(None, false), None);
        app.toggle_running();

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Inhale (4s)"));
        assert!(text.contains("Running"));
    }
}

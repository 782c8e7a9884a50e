//! Terms and conditions dialog
//!
//! Scrollable body; accepting posts to the backend and the dialog closes once
//! the request settles.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::components::terms::{INTRO, SECTIONS, TITLE};
use crate::tui::app::App;
use crate::tui::layout::centered_rect;

fn body_lines() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(INTRO), Line::from("")];
    for (heading, paragraphs) in SECTIONS {
        lines.push(Line::from(Span::styled(
            *heading,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.extend(paragraphs.iter().map(|p| Line::from(*p)));
        lines.push(Line::from(""));
    }
    lines
}

pub fn render(frame: &mut Frame, app: &App) {
    let palette = app.theme.palette();
    let area = centered_rect(70, 80, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", TITLE))
        .title_style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(inner);

    frame.render_widget(
        Paragraph::new(body_lines())
            .wrap(Wrap { trim: true })
            .scroll((app.terms_scroll, 0)),
        chunks[0],
    );

    let accept_style = if app.terms.is_pending() {
        Style::default().fg(palette.muted)
    } else {
        Style::default().fg(Color::Green)
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("[j/k]", Style::default().fg(Color::Yellow)),
            Span::raw(" Rolar  "),
            Span::styled("[a]", accept_style),
            Span::raw(format!(" {}  ", app.terms.accept_label())),
            Span::styled("[d]", Style::default().fg(Color::Red)),
            Span::raw(" Recusar"),
        ])),
        chunks[1],
    );
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.terms_scroll = app.terms_scroll.saturating_add(1);
            true
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.terms_scroll = app.terms_scroll.saturating_sub(1);
            true
        }
        KeyCode::PageDown => {
            app.terms_scroll = app.terms_scroll.saturating_add(10);
            true
        }
        KeyCode::PageUp => {
            app.terms_scroll = app.terms_scroll.saturating_sub(10);
            true
        }
        KeyCode::Char('a') | KeyCode::Enter => {
            app.accept_terms();
            true
        }
        KeyCode::Char('d') | KeyCode::Esc => {
            app.decline_terms();
            true
        }
        _ => false,
    }
}

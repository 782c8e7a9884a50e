//! Onboarding tutorial dialog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::models::TUTORIAL_STEPS;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

pub fn render(frame: &mut Frame, app: &App) {
    let palette = app.theme.palette();
    let tutorial = &app.tutorial;
    let step = tutorial.step();

    let area = centered_rect_fixed(58, 16, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(
            " Tutorial {}/{} ",
            tutorial.current_step() + 1,
            TUTORIAL_STEPS.len()
        ))
        .title_style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(4),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{} ", step.kind.icon()),
                Style::default().fg(palette.coins),
            ),
            Span::styled(step.title, Style::default().add_modifier(Modifier::BOLD)),
        ])),
        chunks[0],
    );

    let mut body = vec![Line::from(step.description)];
    if let Some(route) = step.path {
        body.push(Line::from(""));
        body.push(Line::from(Span::styled(
            format!("Página: {} ({})", route.title(), route.path()),
            Style::default().fg(palette.muted),
        )));
    }
    frame.render_widget(Paragraph::new(body).wrap(Wrap { trim: true }), chunks[1]);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("+{} POUPAR Coins", step.reward.coins),
                Style::default().fg(palette.coins),
            ),
            Span::raw("   "),
            Span::styled(
                format!("+{} XP", step.reward.experience),
                Style::default().fg(palette.success),
            ),
        ])),
        chunks[2],
    );

    let button_style = if tutorial.is_in_flight() {
        Style::default().fg(palette.muted)
    } else {
        Style::default().fg(Color::Green)
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("[Enter]", button_style),
            Span::raw(format!(" {}  ", tutorial.button_label())),
            Span::styled("[Esc]", Style::default().fg(Color::Red)),
            Span::raw(" Fechar"),
        ])),
        chunks[3],
    );
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.advance_tutorial();
            true
        }
        KeyCode::Esc | KeyCode::Char('q') => {
            app.dismiss_tutorial();
            true
        }
        _ => false,
    }
}

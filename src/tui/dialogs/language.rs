//! Narration language selector

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};
use tracing::info;

use crate::state::LANGUAGES;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

pub fn render(frame: &mut Frame, app: &App) {
    let palette = app.theme.palette();
    let area = centered_rect_fixed(36, LANGUAGES.len() as u16 + 2, frame.area());
    frame.render_widget(Clear, area);

    let items: Vec<ListItem> = LANGUAGES
        .iter()
        .map(|(code, name)| {
            let marker = if *code == app.audio.language() { "● " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(palette.accent)),
                Span::raw(*name),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Idioma ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    state.select(Some(app.language_index));
    frame.render_stateful_widget(list, area, &mut state);
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            true
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.language_index + 1 < LANGUAGES.len() {
                app.language_index += 1;
            }
            true
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.language_index = app.language_index.saturating_sub(1);
            true
        }
        KeyCode::Enter => {
            if let Some((code, name)) = LANGUAGES.get(app.language_index) {
                if app.audio.set_language(code) {
                    info!(language = *code, "narration language changed");
                    app.set_status(format!("Idioma: {}", name));
                }
            }
            app.close_dialog();
            true
        }
        _ => false,
    }
}

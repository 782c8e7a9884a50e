//! Command palette dialog
//!
//! Filters commands as the user types

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::commands::filter_commands;
use crate::tui::layout::centered_rect_fixed;

/// Render the command palette
pub fn render(frame: &mut Frame, app: &App) {
    let palette = app.theme.palette();
    let area = centered_rect_fixed(60, 20, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Comandos ")
        .title_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent));
    frame.render_widget(block, area);

    let input_area = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: 1,
    };
    let input_line = Line::from(vec![
        Span::styled("> ", Style::default().fg(palette.accent)),
        Span::raw(app.command_input.as_str()),
        Span::styled("_", Style::default().fg(palette.accent)),
    ]);
    frame.render_widget(Paragraph::new(input_line), input_area);

    let results_area = Rect {
        x: area.x + 1,
        y: area.y + 3,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(4),
    };

    let commands = filter_commands(&app.command_input);
    if commands.is_empty() {
        frame.render_widget(
            Paragraph::new("Nenhum comando encontrado").style(Style::default().fg(palette.warning)),
            results_area,
        );
        return;
    }

    let items: Vec<ListItem> = commands
        .iter()
        .map(|cmd| {
            let mut spans = vec![
                Span::styled(format!("{:<14}", cmd.name), Style::default().fg(palette.accent)),
                Span::raw(cmd.description),
            ];
            if let Some(shortcut) = cmd.shortcut {
                spans.push(Span::styled(
                    format!("  [{}]", shortcut),
                    Style::default().fg(palette.muted),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(
        app.selected_command_index
            .min(commands.len().saturating_sub(1)),
    ));
    frame.render_stateful_widget(list, results_area, &mut state);
}

//! Navigation menu
//!
//! A sidebar on wide terminals; on narrow ones a top bar plus a sheet that
//! opens over the page.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::tui::app::{App, FocusedPanel, MENU_ITEMS};

const BRAND: &str = "MY POUPAR+";

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3)])
        .split(area);

    render_header(frame, app, chunks[0]);
    render_menu(frame, app, chunks[1], " Menu ");
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.theme.palette();
    let block = Block::default()
        .title(format!(" {} ", BRAND))
        .title_style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.muted));

    let lines = match app.session.user() {
        Some(user) => vec![
            Line::from(Span::styled(
                format!("Nível {} · {} XP", user.level, user.experience),
                Style::default().fg(palette.text),
            )),
            Line::from(Span::styled(
                format!("{} coins", user.coins),
                Style::default().fg(palette.coins),
            )),
        ],
        None => vec![Line::from(Span::styled(
            "Sem sessão",
            Style::default().fg(palette.muted),
        ))],
    };
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_menu(frame: &mut Frame, app: &App, area: Rect, title: &str) {
    let palette = app.theme.palette();
    let is_focused = app.focused_panel == FocusedPanel::Menu || app.mobile_menu_open;

    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if is_focused { palette.accent } else { palette.muted }));

    let items: Vec<ListItem> = MENU_ITEMS
        .iter()
        .enumerate()
        .map(|(index, (label, route))| {
            let style = if *route == app.route {
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.text)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", index + 1), Style::default().fg(palette.muted)),
                Span::styled(*label, style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if is_focused {
        state.select(Some(app.menu_index));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

/// One-line header used instead of the sidebar
pub fn render_top_bar(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.theme.palette();
    let mut spans = vec![
        Span::styled(BRAND, Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(app.route.title(), Style::default().fg(palette.text)),
    ];
    if let Some(user) = app.session.user() {
        spans.push(Span::styled(
            format!("  {} coins", user.coins),
            Style::default().fg(palette.coins),
        ));
    }
    spans.push(Span::styled("  [M] Menu", Style::default().fg(palette.muted)));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Menu sheet over the page, narrow terminals only
pub fn render_sheet(frame: &mut Frame, app: &App, area: Rect) {
    let height = (MENU_ITEMS.len() as u16 + 2).min(area.height);
    let sheet = Rect {
        height,
        width: area.width.min(30),
        ..area
    };
    frame.render_widget(Clear, sheet);
    render_menu(frame, app, sheet, " Menu (Esc fecha) ");
}

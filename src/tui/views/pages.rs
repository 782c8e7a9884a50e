//! Page content for each route

use std::time::Instant;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::components::cookie_banner::{stored_choice, CookieChoice};
use crate::components::gesture::ROUTE_ORDER;
use crate::components::SavingsProjection;
use crate::models::audio::format_time;
use crate::models::tutorial::total_reward;
use crate::models::Route;
use crate::state::Palette;
use crate::tui::app::{App, FocusedPanel};

/// Render the page for the current route
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.theme.palette();
    let focused = app.focused_panel == FocusedPanel::Main;
    let mut block = Block::default()
        .title(format!(" {} ", app.route.title()))
        .title_style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { palette.accent } else { palette.muted }));

    // Fade in after a route change
    if app
        .transition
        .is_some_and(|t| t.is_active(Instant::now()))
    {
        block = block.style(Style::default().add_modifier(Modifier::DIM));
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match app.route {
        Route::Home => render_home(frame, app, inner, palette),
        Route::Dreams => render_dreams(frame, app, inner, palette),
        Route::Wallet => render_wallet(frame, app, inner, palette),
        Route::Music => render_music(frame, app, inner, palette),
        Route::Settings => render_settings(frame, app, inner, palette),
        other => render_placeholder(frame, inner, other, palette),
    }
}

fn profile_lines(app: &App, palette: Palette) -> Vec<Line<'static>> {
    match app.session.user() {
        Some(user) => vec![
            Line::from(vec![
                Span::raw("Olá, "),
                Span::styled(
                    if user.username.is_empty() { "poupador".to_string() } else { user.username.clone() },
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("!"),
            ]),
            Line::from(vec![
                Span::styled(format!("Nível {}", user.level), Style::default().fg(palette.accent)),
                Span::raw("  "),
                Span::styled(format!("{} XP", user.experience), Style::default().fg(palette.success)),
                Span::raw("  "),
                Span::styled(format!("{} POUPAR Coins", user.coins), Style::default().fg(palette.coins)),
            ]),
        ],
        None => match app.session.last_error() {
            Some(err) => vec![Line::from(Span::styled(
                format!("Não foi possível carregar o perfil: {} (r para tentar de novo)", err),
                Style::default().fg(palette.error),
            ))],
            None => vec![Line::from(Span::styled(
                "A carregar perfil...",
                Style::default().fg(palette.muted),
            ))],
        },
    }
}

fn render_home(frame: &mut Frame, app: &App, area: Rect, palette: Palette) {
    let mut lines = profile_lines(app, palette);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Poupe de forma divertida e inteligente.",
        Style::default().fg(palette.highlight),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from("g  Criar um objetivo de poupança"));
    lines.push(Line::from("p  Conhecer o POUPAR+ Premium"));
    lines.push(Line::from("v  Comandos de voz"));
    lines.push(Line::from(""));
    let order: Vec<&str> = ROUTE_ORDER.iter().map(|r| r.title()).collect();
    lines.push(Line::from(Span::styled(
        format!("Deslize com [ e ] entre: {}", order.join(" → ")),
        Style::default().fg(palette.muted),
    )));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_dreams(frame: &mut Frame, app: &App, area: Rect, palette: Palette) {
    if app.goals.is_empty() {
        frame.render_widget(
            Paragraph::new(vec![
                Line::from("Ainda não tem objetivos."),
                Line::from(""),
                Line::from(Span::styled(
                    "Prima g para criar o seu primeiro sonho.",
                    Style::default().fg(palette.highlight),
                )),
            ]),
            area,
        );
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            app.goals
                .iter()
                .map(|_| Constraint::Length(3))
                .chain(std::iter::once(Constraint::Min(0)))
                .collect::<Vec<_>>(),
        )
        .split(area);

    for (index, (tracked, row)) in app.goals.iter().zip(rows.iter()).enumerate() {
        let goal = &tracked.goal;
        let projection =
            SavingsProjection::compute(tracked.saved, goal.target_amount, goal.monthly_contribution);
        let selected = index == app.selected_goal_index;
        let marker = if selected { "> " } else { "  " };

        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)])
            .split(*row);

        let title_style = if selected {
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text)
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(format!("{}{}", marker, goal.name), title_style),
                Span::styled(
                    format!("  {} · {}", goal.goal_type, goal.category),
                    Style::default().fg(palette.muted),
                ),
            ])),
            parts[0],
        );
        frame.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(palette.success))
                .ratio(projection.progress)
                .label(format!(
                    "{} de {} ({}%)",
                    tracked.saved,
                    goal.target_amount,
                    projection.percent()
                )),
            parts[1],
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(
                    "  Falta {} · {} por mês · {} até {}",
                    projection.remaining,
                    goal.monthly_contribution,
                    projection.months_label(),
                    goal.target_date.format("%d/%m/%Y")
                ),
                Style::default().fg(palette.muted),
            )),
            parts[2],
        );
    }
}

fn render_wallet(frame: &mut Frame, app: &App, area: Rect, palette: Palette) {
    let mut lines = profile_lines(app, palette);
    let reward = total_reward();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "O tutorial vale {} POUPAR Coins e {} XP.",
            reward.coins, reward.experience
        ),
        Style::default().fg(palette.muted),
    )));
    lines.push(Line::from(
        "Cada poupança que faz transforma-se em coins que pode trocar por descontos.",
    ));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_music(frame: &mut Frame, app: &App, area: Rect, palette: Palette) {
    let items: Vec<ListItem> = app
        .audio
        .tracks()
        .iter()
        .map(|track| {
            ListItem::new(Line::from(vec![
                Span::raw(track.name.clone()),
                Span::styled(
                    format!("  {}", format_time(track.duration_secs)),
                    Style::default().fg(palette.muted),
                ),
            ]))
        })
        .collect();

    if items.is_empty() {
        frame.render_widget(Paragraph::new("Sem faixas configuradas."), area);
        return;
    }

    let list = List::new(items)
        .highlight_style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD))
        .highlight_symbol(if app.audio.is_playing() { "▶ " } else { "‖ " });
    let mut state = ListState::default();
    state.select(Some(app.audio.current_index()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_settings(frame: &mut Frame, app: &App, area: Rect, palette: Palette) {
    let label = Style::default().fg(palette.highlight);
    let cookies = match stored_choice(&app.storage) {
        Some(CookieChoice::Accepted) => "aceites",
        Some(CookieChoice::Declined) => "recusados",
        None => "por decidir",
    };
    let entries = [
        ("Tema", app.theme.theme().as_str().to_string()),
        ("Idioma", app.audio.language().to_string()),
        ("Volume", format!("{:.0}%", app.audio.volume() * 100.0)),
        ("Som", if app.audio.is_muted() { "silenciado".into() } else { "ativo".into() }),
        ("Cookies", cookies.to_string()),
        ("Servidor", app.settings.api_root().to_string()),
    ];
    let lines: Vec<Line> = entries
        .into_iter()
        .map(|(name, value)| {
            Line::from(vec![
                Span::styled(format!("{:<10}", name), label),
                Span::raw(value),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_placeholder(frame: &mut Frame, area: Rect, route: Route, palette: Palette) {
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(format!("{} ({})", route.title(), route.path())),
            Line::from(""),
            Line::from(Span::styled(
                "Disponível em breve no terminal.",
                Style::default().fg(palette.muted),
            )),
        ]),
        area,
    );
}

//! Help dialog
//!
//! Lists keyboard shortcuts plus the voice commands offered on the current page

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::components::relevant_commands;
use crate::tui::app::App;
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(64, 80, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Ajuda ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn help_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Navegação"),
        key_line("Tab", "Alternar foco menu/página"),
        key_line("j/k Enter", "Escolher página do menu"),
        key_line("[ / ]", "Deslizar para a página anterior/seguinte"),
        key_line("Backspace", "Voltar"),
        key_line("r", "Atualizar perfil"),
        key_line("M", "Menu (ecrã estreito)"),
        Line::from(""),
        heading("Ações"),
        key_line("g", "Novo objetivo"),
        key_line("c", "Contribuir para o objetivo (Sonhos)"),
        key_line("p", "POUPAR+ Premium"),
        key_line("t", "Termos e condições"),
        key_line("L", "Idioma da narração"),
        key_line("T", "Alternar tema"),
        key_line(":", "Paleta de comandos"),
        key_line("q", "Sair"),
        Line::from(""),
        heading("Áudio"),
        key_line("Space", "Tocar/pausar"),
        key_line(", / .", "Faixa anterior/seguinte"),
        key_line("m", "Silenciar"),
        key_line("+ / -", "Volume"),
        key_line("e", "Expandir leitor"),
        key_line("v", "Ouvir comandos de voz"),
        Line::from(""),
    ];

    lines.push(heading(&format!("Comandos de voz em {}", app.route.path())));
    for command in relevant_commands(app.route.path()) {
        lines.push(Line::from(vec![
            Span::styled(
                format!("\"{}\"", command.command),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw("  "),
            Span::styled(command.description, Style::default().fg(Color::Gray)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Prima qualquer tecla para fechar",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    ))
}

fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}

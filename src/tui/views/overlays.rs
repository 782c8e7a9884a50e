//! Voice command overlay, cookie banner and toasts

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::components::cookie_banner::MESSAGE;
use crate::components::VoiceOverlay;
use crate::tui::app::App;
use crate::tui::widgets::NotificationWidget;

/// Numbered voice commands for the current page, shown while listening
pub fn render_voice_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let Some(overlay) = VoiceOverlay::visible(app.audio.is_listening(), app.route.path()) else {
        return;
    };
    let palette = app.theme.palette();

    let mut lines = Vec::new();
    if overlay.commands().is_empty() {
        lines.push(Line::from(Span::styled(
            "Nenhum comando disponível nesta página",
            Style::default().fg(palette.muted),
        )));
    }
    for (index, command) in overlay.commands().iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", index + 1), Style::default().fg(palette.accent)),
            Span::styled(
                format!("\"{}\"", command.command),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", command.description),
            Style::default().fg(palette.muted),
        )));
    }

    let width = 44.min(area.width);
    let height = (lines.len() as u16 + 2).min(area.height);
    let rect = Rect {
        x: area.x + area.width.saturating_sub(width),
        y: area.y,
        width,
        height,
    };
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" A ouvir... (1-9 / Esc) ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.error)),
        ),
        rect,
    );
}

pub fn render_cookie_banner(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.theme.palette();
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(palette.muted));
    let lines = vec![
        Line::from(MESSAGE),
        Line::from(vec![
            Span::styled("[y] Aceitar", Style::default().fg(palette.success)),
            Span::raw("  "),
            Span::styled("[n] Recusar", Style::default().fg(palette.muted)),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        area,
    );
}

/// Current toast in the top-right corner of `area`
pub fn render_notification(frame: &mut Frame, app: &App, area: Rect) {
    let Some(notification) = app.notifications.current() else {
        return;
    };
    let width = 46.min(area.width);
    let rect = Rect {
        x: area.x + area.width.saturating_sub(width),
        y: area.y + area.height.saturating_sub(6),
        width,
        height: 5.min(area.height),
    };
    frame.render_widget(NotificationWidget::new(notification), rect);
}

//! Status bar view
//!
//! Audio controls on the left, the latest status or narration in the middle,
//! key hints on the right.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.theme.palette();
    let audio = &app.audio;
    let mut spans = vec![];

    let volume = if audio.is_muted() {
        Span::styled(" 🔇 ", Style::default().fg(palette.error))
    } else {
        Span::styled(
            format!(" 🔊 {:>3.0}% ", audio.volume() * 100.0),
            Style::default().fg(palette.text),
        )
    };
    spans.push(volume);

    let mic_style = if audio.is_listening() {
        Style::default().fg(palette.error).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.muted)
    };
    spans.push(Span::styled(
        if audio.is_listening() { "● a ouvir " } else { "○ voz " },
        mic_style,
    ));
    spans.push(Span::styled(
        audio.language().to_string(),
        Style::default().fg(palette.muted),
    ));

    if app.pending_requests() > 0 {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled("⟳", Style::default().fg(palette.accent)));
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(message.as_str(), Style::default().fg(palette.warning)));
    } else if let Some(narration) = audio.narration() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            format!("Lumin: {}", narration.text),
            Style::default().fg(palette.highlight),
        ));
    }

    let hints = " q:Sair  ?:Ajuda  ::Comandos ";
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(palette.muted)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

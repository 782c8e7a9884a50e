//! Music player strip
//!
//! One line when collapsed; expanded it adds a progress bar and the controls.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

use crate::models::audio::format_time;
use crate::tui::app::App;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.theme.palette();
    let audio = &app.audio;

    let Some(track) = audio.current_track() else {
        frame.render_widget(
            Paragraph::new(Span::styled(" ♪ Sem faixas", Style::default().fg(palette.muted))),
            area,
        );
        return;
    };

    let icon = if audio.is_playing() { "▶" } else { "‖" };
    let title = Line::from(vec![
        Span::styled(format!(" {} ", icon), Style::default().fg(palette.accent)),
        Span::styled(track.name.as_str(), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            format!(
                "  {} / {}",
                format_time(audio.current_time()),
                format_time(audio.duration())
            ),
            Style::default().fg(palette.muted),
        ),
        Span::styled(
            format!("  {}/{}", audio.current_index() + 1, audio.tracks().len()),
            Style::default().fg(palette.muted),
        ),
    ]);

    if !app.player_expanded || area.height < 3 {
        frame.render_widget(Paragraph::new(title), area);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    frame.render_widget(Paragraph::new(title), rows[0]);

    let ratio = if audio.duration() == 0 {
        0.0
    } else {
        f64::from(audio.current_time()) / f64::from(audio.duration())
    };
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(palette.accent))
            .ratio(ratio.clamp(0.0, 1.0))
            .label(""),
        rows[1],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            " [,] anterior  [Space] tocar/pausar  [.] seguinte  [m] som  [+/-] volume  [e] recolher",
            Style::default().fg(palette.muted),
        )),
        rows[2],
    );
}

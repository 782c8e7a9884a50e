//! Premium subscription dialog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::components::premium::{FEATURES, HIGHLIGHTS, PHONE_DIGITS, PHONE_PREFIX};
use crate::components::PaymentMethod;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

pub fn render(frame: &mut Frame, app: &App) {
    let palette = app.theme.palette();
    let modal = &app.premium;

    let area = centered_rect_fixed(62, 20, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" POUPAR+ Premium ")
        .title_style(Style::default().fg(palette.coins).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.coins));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(7),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(1),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            HIGHLIGHTS.join(" · "),
            Style::default().fg(palette.highlight),
        )),
        chunks[0],
    );

    let mut features = Vec::new();
    for (title, description) in FEATURES {
        features.push(Line::from(Span::styled(
            format!("✓ {}", title),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        features.push(Line::from(Span::styled(
            format!("  {}", description),
            Style::default().fg(palette.muted),
        )));
    }
    frame.render_widget(Paragraph::new(features), chunks[1]);

    let method_span = |method: PaymentMethod, key: &str| {
        let selected = modal.method() == Some(method);
        let style = if selected {
            Style::default().fg(Color::Black).bg(palette.accent)
        } else {
            Style::default().fg(palette.text)
        };
        vec![
            Span::styled(format!("[{}]", key), Style::default().fg(Color::Yellow)),
            Span::styled(format!(" {} ", method.label()), style),
            Span::raw("  "),
        ]
    };
    let mut methods = vec![Span::raw("Pagamento: ")];
    methods.extend(method_span(PaymentMethod::MbWay, "w"));
    methods.extend(method_span(PaymentMethod::Spin, "s"));
    frame.render_widget(Paragraph::new(Line::from(methods)), chunks[2]);

    let placeholder: String = "9".repeat(PHONE_DIGITS);
    let phone = if modal.phone().is_empty() {
        Span::styled(placeholder, Style::default().fg(palette.muted))
    } else {
        Span::raw(modal.phone().to_string())
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw("Telemóvel: "),
            Span::styled(format!("{} ", PHONE_PREFIX), Style::default().fg(palette.muted)),
            phone,
            Span::styled("_", Style::default().fg(palette.accent)),
        ])),
        chunks[3],
    );

    let subscribe_style = if modal.can_subscribe() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(palette.muted)
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("[Enter]", subscribe_style),
            Span::raw(" Subscrever  "),
            Span::styled("[Esc]", Style::default().fg(Color::Red)),
            Span::raw(" Fechar"),
        ])),
        chunks[4],
    );
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            true
        }
        KeyCode::Char('w') | KeyCode::Char('m') => {
            app.premium.select_method(PaymentMethod::MbWay);
            true
        }
        KeyCode::Char('s') => {
            app.premium.select_method(PaymentMethod::Spin);
            true
        }
        KeyCode::Tab => {
            let next = match app.premium.method() {
                Some(PaymentMethod::MbWay) => PaymentMethod::Spin,
                _ => PaymentMethod::MbWay,
            };
            app.premium.select_method(next);
            true
        }
        KeyCode::Char(c) if c.is_ascii_digit() => {
            app.premium.push_char(c);
            true
        }
        KeyCode::Backspace => {
            app.premium.backspace();
            true
        }
        KeyCode::Enter => {
            app.subscribe_premium();
            true
        }
        _ => false,
    }
}

//! Goal creation wizard dialog
//!
//! Wraps [`GoalWizard`] with text inputs and field focus. Enter validates the
//! step and moves on, Esc steps back (and cancels from step 1).

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::components::goal_wizard::Recommendation;
use crate::components::{GoalWizard, Notice, WizardOutcome, WizardStep};
use crate::models::goal::months_between;
use crate::models::{GoalCategory, GoalType, Money};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardField {
    #[default]
    Type,
    Category,
    Name,
    Amount,
    Date,
    Contribution,
}

#[derive(Debug, Clone)]
pub struct GoalWizardForm {
    pub wizard: GoalWizard,
    pub focused: WizardField,
    pub name: TextInput,
    pub amount: TextInput,
    pub date: TextInput,
    pub contribution: TextInput,
    /// Set once the user types a contribution of their own
    contribution_edited: bool,
}

impl GoalWizardForm {
    pub fn new(today: NaiveDate) -> Self {
        let wizard = GoalWizard::start(today);
        let earliest = wizard.earliest_target_date().format(DATE_FORMAT).to_string();
        Self {
            wizard,
            focused: WizardField::Type,
            name: TextInput::new().label("Nome").placeholder("Ex: Casa na praia"),
            amount: TextInput::new().label("Valor (€)").placeholder("0.00"),
            date: TextInput::new().label("Data alvo").placeholder(earliest),
            contribution: TextInput::new().label("Contribuição mensal (€)"),
            contribution_edited: false,
        }
    }

    /// Refresh the inputs from the draft after it was prefilled
    pub fn load_from_draft(&mut self) {
        let draft = self.wizard.draft();
        if let Some(amount) = draft.target_amount {
            self.amount.set_value(amount.to_decimal_string());
        }
        if let Some(date) = draft.target_date {
            self.date.set_value(date.format(DATE_FORMAT).to_string());
        }
        if let Some(monthly) = draft.monthly_contribution {
            self.contribution.set_value(monthly.to_decimal_string());
        }
    }

    fn fields(&self) -> &'static [WizardField] {
        match self.wizard.step() {
            WizardStep::Step1 => &[WizardField::Type, WizardField::Category, WizardField::Name],
            WizardStep::Step2 => &[WizardField::Amount],
            WizardStep::Step3 => &[WizardField::Date],
            WizardStep::Step4 => &[WizardField::Contribution],
        }
    }

    fn focus_first(&mut self) {
        self.focused = self.fields()[0];
    }

    pub fn next_field(&mut self) {
        let fields = self.fields();
        let index = fields.iter().position(|f| *f == self.focused).unwrap_or(0);
        self.focused = fields[(index + 1) % fields.len()];
    }

    pub fn prev_field(&mut self) {
        let fields = self.fields();
        let index = fields.iter().position(|f| *f == self.focused).unwrap_or(0);
        self.focused = fields[(index + fields.len() - 1) % fields.len()];
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused {
            WizardField::Name => Some(&mut self.name),
            WizardField::Amount => Some(&mut self.amount),
            WizardField::Date => Some(&mut self.date),
            WizardField::Contribution => Some(&mut self.contribution),
            WizardField::Type | WizardField::Category => None,
        }
    }

    /// Type a character into the focused input; returns whether it was accepted
    pub fn insert_char(&mut self, c: char) -> bool {
        let accepted = match self.focused {
            WizardField::Name => !c.is_control(),
            WizardField::Amount | WizardField::Contribution => {
                c.is_ascii_digit() || c == '.' || c == ','
            }
            WizardField::Date => c.is_ascii_digit() || c == '-',
            WizardField::Type | WizardField::Category => false,
        };
        if !accepted {
            return false;
        }
        if self.focused == WizardField::Contribution {
            self.contribution_edited = true;
        }
        if let Some(input) = self.focused_input() {
            input.insert(c);
        }
        true
    }

    pub fn backspace(&mut self) {
        if self.focused == WizardField::Contribution {
            self.contribution_edited = true;
        }
        if let Some(input) = self.focused_input() {
            input.backspace();
        }
    }

    pub fn move_cursor(&mut self, right: bool) {
        if let Some(input) = self.focused_input() {
            if right {
                input.move_right();
            } else {
                input.move_left();
            }
        }
    }

    /// Step a selector field; returns the wizard's side effect, if any
    pub fn cycle_selector(&mut self, forward: bool) -> Option<crate::components::WizardEffect> {
        match self.focused {
            WizardField::Type => {
                let next = cycle(GoalType::all(), self.wizard.draft().goal_type, forward);
                self.wizard.set_type(next)
            }
            WizardField::Category => {
                let next = cycle(GoalCategory::all(), self.wizard.draft().category, forward);
                self.wizard.set_category(next)
            }
            _ => None,
        }
    }

    /// Copy the inputs for the current step into the draft
    fn commit_inputs(&mut self) -> Result<(), Notice> {
        match self.wizard.step() {
            WizardStep::Step1 => self.wizard.set_name(self.name.value()),
            WizardStep::Step2 => {
                if !self.amount.value().trim().is_empty() {
                    let amount = Money::parse(self.amount.value()).map_err(|_| {
                        Notice::error("Valor Inválido", "Introduza um valor como 1500 ou 1500.50.")
                    })?;
                    self.wizard.set_target_amount(amount);
                }
            }
            WizardStep::Step3 => {
                if !self.date.value().trim().is_empty() {
                    let date = NaiveDate::parse_from_str(self.date.value().trim(), DATE_FORMAT)
                        .map_err(|_| {
                            Notice::error("Data Inválida", "Use o formato AAAA-MM-DD.")
                        })?;
                    self.wizard.set_target_date(date);
                }
            }
            WizardStep::Step4 => {
                if self.contribution_edited {
                    let monthly = Money::parse(self.contribution.value()).map_err(|_| {
                        Notice::error("Valor Inválido", "Introduza uma contribuição válida.")
                    })?;
                    self.wizard.set_monthly_contribution(monthly);
                }
            }
        }
        Ok(())
    }

    /// Validate and advance; completion hands back the finished goal
    pub fn submit(&mut self) -> WizardOutcome {
        if let Err(notice) = self.commit_inputs() {
            return WizardOutcome::Blocked(notice);
        }
        let outcome = self.wizard.next();
        if let WizardOutcome::Advanced(step) = outcome {
            if step == WizardStep::Step4 && !self.contribution_edited {
                if let Some(monthly) = self.wizard.draft().effective_contribution() {
                    self.contribution.set_value(monthly.to_decimal_string());
                }
            }
            self.focus_first();
        }
        outcome
    }

    pub fn back(&mut self) -> WizardOutcome {
        let outcome = self.wizard.back();
        if let WizardOutcome::SteppedBack(_) = outcome {
            self.focus_first();
        }
        outcome
    }
}

fn cycle<T: Copy + PartialEq>(options: &[T], current: Option<T>, forward: bool) -> T {
    let len = options.len();
    let next = match current.and_then(|c| options.iter().position(|o| *o == c)) {
        None => 0,
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
    };
    options[next]
}

pub fn render(frame: &mut Frame, app: &App) {
    let Some(form) = app.goal_wizard.as_ref() else {
        return;
    };
    let palette = app.theme.palette();
    let area = centered_rect_fixed(64, 20, frame.area());
    frame.render_widget(Clear, area);

    let step = form.wizard.step();
    let block = Block::default()
        .title(" Novo Objetivo ")
        .title_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("Passo {} de 4 · ", step.number()),
                Style::default().fg(palette.muted),
            ),
            Span::styled(step.title(), Style::default().add_modifier(Modifier::BOLD)),
        ])),
        chunks[0],
    );
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(palette.accent))
            .ratio(step.progress())
            .label(""),
        chunks[1],
    );

    match step {
        WizardStep::Step1 => render_step1(frame, chunks[3], form),
        WizardStep::Step2 => render_input(frame, chunks[3], &form.amount, form.focused == WizardField::Amount),
        WizardStep::Step3 => {
            let rows = split_rows(chunks[3], 3);
            render_input(frame, rows[0], &form.date, form.focused == WizardField::Date);
            let hint = format!(
                "Data mínima: {}",
                form.wizard.earliest_target_date().format(DATE_FORMAT)
            );
            frame.render_widget(
                Paragraph::new(Span::styled(hint, Style::default().fg(palette.muted))),
                rows[2],
            );
        }
        WizardStep::Step4 => render_summary(frame, chunks[3], form),
    }

    render_recommendation(frame, chunks[4], form, app);

    let back_label = if step == WizardStep::Step1 { " Cancelar" } else { " Voltar" };
    let next_label = if step == WizardStep::Step4 { " Criar Objetivo  " } else { " Próximo  " };
    let instructions = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Campo  "),
        Span::styled("[←/→]", Style::default().fg(Color::Yellow)),
        Span::raw(" Escolher  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(next_label),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(back_label),
    ]);
    frame.render_widget(Paragraph::new(instructions), chunks[5]);
}

fn split_rows(area: Rect, rows: usize) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); rows])
        .split(area)
}

fn render_step1(frame: &mut Frame, area: Rect, form: &GoalWizardForm) {
    let rows = split_rows(area, 5);
    let draft = form.wizard.draft();
    render_selector(
        frame,
        rows[0],
        "Tipo",
        draft.goal_type.map(|t| t.label()).unwrap_or("Selecione"),
        form.focused == WizardField::Type,
    );
    render_selector(
        frame,
        rows[2],
        "Categoria",
        draft.category.map(|c| c.label()).unwrap_or("Selecione"),
        form.focused == WizardField::Category,
    );
    render_input(frame, rows[4], &form.name, form.focused == WizardField::Name);
}

fn render_input(frame: &mut Frame, area: Rect, input: &TextInput, focused: bool) {
    let area = Rect { height: 1, ..area };
    frame.render_widget(input.clone().focused(focused), area);
}

fn render_selector(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let value_style = if focused {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    };
    let hint = if focused { " ← →" } else { "" };

    let line = Line::from(vec![
        Span::styled(format!("{}: ", label), label_style),
        Span::styled(format!(" {} ", value), value_style),
        Span::styled(hint, Style::default().fg(Color::Yellow)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_summary(frame: &mut Frame, area: Rect, form: &GoalWizardForm) {
    let draft = form.wizard.draft();
    let label = Style::default().fg(Color::Yellow);
    let rows = split_rows(area, 6);

    let months = draft
        .target_date
        .map(|d| months_between(draft.start_date, d).max(1).to_string())
        .unwrap_or_else(|| "—".into());
    let lines = [
        ("Objetivo", draft.name.clone()),
        (
            "Valor",
            draft.target_amount.map(|a| a.to_string()).unwrap_or_default(),
        ),
        (
            "Data alvo",
            draft
                .target_date
                .map(|d| d.format("%d/%m/%Y").to_string())
                .unwrap_or_default(),
        ),
        ("Meses", months),
    ];
    for (row, (name, value)) in rows.iter().zip(lines) {
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(format!("{}: ", name), label),
                Span::raw(value),
            ])),
            *row,
        );
    }
    render_input(
        frame,
        rows[5],
        &form.contribution,
        form.focused == WizardField::Contribution,
    );
}

fn render_recommendation(frame: &mut Frame, area: Rect, form: &GoalWizardForm, app: &App) {
    let palette = app.theme.palette();
    let (text, color) = match form.wizard.recommendation() {
        Recommendation::NotRequested => return,
        Recommendation::Pending => ("Lumin está a analisar o seu objetivo...".to_string(), palette.muted),
        Recommendation::Received { text, applied } => {
            let prefix = if *applied { "Lumin (valores aplicados): " } else { "Lumin: " };
            (format!("{}{}", prefix, text), palette.highlight)
        }
        Recommendation::Failed => (
            "Não foi possível obter recomendações da Lumin.".to_string(),
            palette.warning,
        ),
    };
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(palette.muted));
    frame.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(color))
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let Some(form) = app.goal_wizard.as_mut() else {
        app.close_dialog();
        return true;
    };

    match key.code {
        KeyCode::Esc => {
            if form.back() == WizardOutcome::Cancelled {
                app.cancel_goal_wizard();
            }
            true
        }

        KeyCode::Tab | KeyCode::Down => {
            form.next_field();
            true
        }

        KeyCode::BackTab | KeyCode::Up => {
            form.prev_field();
            true
        }

        KeyCode::Left | KeyCode::Right => {
            let forward = key.code == KeyCode::Right;
            match form.focused {
                WizardField::Type | WizardField::Category => {
                    let effect = form.cycle_selector(forward);
                    app.on_wizard_effect(effect);
                }
                _ => form.move_cursor(forward),
            }
            true
        }

        KeyCode::Enter => {
            match form.submit() {
                WizardOutcome::Blocked(notice) => app.notify(notice),
                WizardOutcome::Completed(goal) => app.complete_goal(goal),
                _ => {}
            }
            true
        }

        KeyCode::Backspace => {
            form.backspace();
            true
        }

        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(input) = form.focused_input() {
                input.clear();
            }
            true
        }

        KeyCode::Char(c) => {
            form.insert_char(c);
            true
        }

        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn type_text(form: &mut GoalWizardForm, text: &str) {
        for c in text.chars() {
            form.insert_char(c);
        }
    }

    #[test]
    fn test_full_flow_with_derived_contribution() {
        let mut form = GoalWizardForm::new(today());
        assert!(form.cycle_selector(true).is_none());
        form.next_field();
        let effect = form.cycle_selector(true);
        assert!(effect.is_some());

        form.next_field();
        type_text(&mut form, "Fundo");
        assert_eq!(form.submit(), WizardOutcome::Advanced(WizardStep::Step2));
        assert_eq!(form.focused, WizardField::Amount);

        type_text(&mut form, "600");
        assert_eq!(form.submit(), WizardOutcome::Advanced(WizardStep::Step3));

        type_text(&mut form, "2025-09-10");
        assert_eq!(form.submit(), WizardOutcome::Advanced(WizardStep::Step4));
        assert_eq!(form.contribution.value(), "100.00");

        match form.submit() {
            WizardOutcome::Completed(goal) => {
                assert_eq!(goal.name, "Fundo");
                assert_eq!(goal.monthly_contribution, Money::from_euros(100));
            }
            other => panic!("expected completion, got {:?}", other),
        }
    }

    #[test]
    fn test_edited_contribution_is_explicit() {
        let mut form = GoalWizardForm::new(today());
        form.cycle_selector(true);
        form.next_field();
        form.cycle_selector(true);
        form.next_field();
        type_text(&mut form, "Carro");
        form.submit();
        type_text(&mut form, "1200");
        form.submit();
        type_text(&mut form, "2026-03-10");
        form.submit();

        form.contribution.clear();
        type_text(&mut form, "150");
        match form.submit() {
            WizardOutcome::Completed(goal) => {
                assert_eq!(goal.monthly_contribution, Money::from_euros(150))
            }
            other => panic!("expected completion, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_date_is_blocked() {
        let mut form = GoalWizardForm::new(today());
        form.cycle_selector(true);
        form.next_field();
        form.cycle_selector(true);
        form.next_field();
        type_text(&mut form, "Viagem");
        form.submit();
        type_text(&mut form, "500");
        form.submit();

        type_text(&mut form, "2025-13-01");
        match form.submit() {
            WizardOutcome::Blocked(notice) => assert_eq!(notice.title, "Data Inválida"),
            other => panic!("expected block, got {:?}", other),
        }
        assert_eq!(form.wizard.step(), WizardStep::Step3);
    }

    #[test]
    fn test_letters_rejected_in_amount() {
        let mut form = GoalWizardForm::new(today());
        form.focused = WizardField::Amount;
        assert!(!form.insert_char('x'));
        assert!(form.insert_char('9'));
        assert_eq!(form.amount.value(), "9");
    }

    #[test]
    fn test_back_from_first_step_cancels() {
        let mut form = GoalWizardForm::new(today());
        assert_eq!(form.back(), WizardOutcome::Cancelled);
    }
}

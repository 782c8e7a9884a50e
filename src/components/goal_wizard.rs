//! Four-step goal creation wizard
//!
//! Step 1 collects type, category and name; step 2 the target amount; step 3
//! the target date; step 4 shows the monthly contribution and completes.
//! Picking both a type and a category asks the assistant once for a
//! recommendation, which may prefill amount, contribution and date.

use chrono::{Months, NaiveDate};
use tracing::{debug, warn};

use super::effect::Notice;
use crate::error::PouparError;
use crate::models::goal::{derive_monthly_contribution, earliest_target_date};
use crate::models::{Goal, GoalCategory, GoalType, Money};
use crate::services::LuminResponse;

/// Months assumed when a recommendation carries no timeframe
const DEFAULT_TIMEFRAME_MONTHS: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    Step1,
    Step2,
    Step3,
    Step4,
}

impl WizardStep {
    pub fn number(&self) -> u8 {
        match self {
            Self::Step1 => 1,
            Self::Step2 => 2,
            Self::Step3 => 3,
            Self::Step4 => 4,
        }
    }

    /// Fraction shown on the progress gauge
    pub fn progress(&self) -> f64 {
        f64::from(self.number()) / 4.0
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Step1 => "Tipo de Objetivo",
            Self::Step2 => "Valor do Objetivo",
            Self::Step3 => "Data Alvo",
            Self::Step4 => "Contribuição Mensal",
        }
    }

    fn next(&self) -> Option<Self> {
        match self {
            Self::Step1 => Some(Self::Step2),
            Self::Step2 => Some(Self::Step3),
            Self::Step3 => Some(Self::Step4),
            Self::Step4 => None,
        }
    }

    fn previous(&self) -> Option<Self> {
        match self {
            Self::Step1 => None,
            Self::Step2 => Some(Self::Step1),
            Self::Step3 => Some(Self::Step2),
            Self::Step4 => Some(Self::Step3),
        }
    }
}

/// Result of pressing next or back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    Advanced(WizardStep),
    Blocked(Notice),
    Completed(Goal),
    SteppedBack(WizardStep),
    Cancelled,
}

/// Side effect of a field update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEffect {
    RequestRecommendation {
        category: GoalCategory,
        prompt: String,
    },
}

/// Lifecycle of the one assistant request a wizard makes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Recommendation {
    #[default]
    NotRequested,
    Pending,
    /// Answer received; `applied` when it prefilled the goal
    Received { text: String, applied: bool },
    Failed,
}

impl Recommendation {
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Received { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// Partially filled goal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalDraft {
    pub goal_type: Option<GoalType>,
    pub category: Option<GoalCategory>,
    pub name: String,
    pub target_amount: Option<Money>,
    /// Only set when chosen explicitly or recommended
    pub monthly_contribution: Option<Money>,
    pub start_date: NaiveDate,
    pub target_date: Option<NaiveDate>,
}

impl GoalDraft {
    fn new(start_date: NaiveDate) -> Self {
        Self {
            goal_type: None,
            category: None,
            name: String::new(),
            target_amount: None,
            monthly_contribution: None,
            start_date,
            target_date: None,
        }
    }

    /// Explicit contribution, or one derived from amount and dates
    pub fn effective_contribution(&self) -> Option<Money> {
        self.monthly_contribution.or_else(|| {
            let target = self.target_amount?;
            let date = self.target_date?;
            Some(derive_monthly_contribution(target, self.start_date, date))
        })
    }
}

#[derive(Debug, Clone)]
pub struct GoalWizard {
    step: WizardStep,
    draft: GoalDraft,
    recommendation: Recommendation,
}

impl GoalWizard {
    /// Open at step 1 with the start date set to `today`
    pub fn start(today: NaiveDate) -> Self {
        Self {
            step: WizardStep::Step1,
            draft: GoalDraft::new(today),
            recommendation: Recommendation::NotRequested,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &GoalDraft {
        &self.draft
    }

    pub fn recommendation(&self) -> &Recommendation {
        &self.recommendation
    }

    pub fn earliest_target_date(&self) -> NaiveDate {
        earliest_target_date(self.draft.start_date)
    }

    pub fn set_type(&mut self, goal_type: GoalType) -> Option<WizardEffect> {
        self.draft.goal_type = Some(goal_type);
        self.maybe_request_recommendation()
    }

    pub fn set_category(&mut self, category: GoalCategory) -> Option<WizardEffect> {
        self.draft.category = Some(category);
        self.maybe_request_recommendation()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_target_amount(&mut self, amount: Money) {
        self.draft.target_amount = Some(amount);
    }

    pub fn set_target_date(&mut self, date: NaiveDate) {
        self.draft.target_date = Some(date);
    }

    pub fn set_monthly_contribution(&mut self, amount: Money) {
        self.draft.monthly_contribution = Some(amount);
    }

    fn maybe_request_recommendation(&mut self) -> Option<WizardEffect> {
        if self.recommendation != Recommendation::NotRequested {
            return None;
        }
        let category = match (self.draft.goal_type, self.draft.category) {
            (Some(_), Some(category)) => category,
            _ => return None,
        };

        self.recommendation = Recommendation::Pending;
        debug!(?category, "requesting goal recommendation");
        Some(WizardEffect::RequestRecommendation {
            category,
            prompt: category.recommendation_prompt().to_string(),
        })
    }

    /// Validate the current step and move forward, or complete on step 4
    pub fn next(&mut self) -> WizardOutcome {
        if let Err(notice) = self.validate_step() {
            return WizardOutcome::Blocked(notice);
        }

        match self.step.next() {
            Some(step) => {
                self.step = step;
                WizardOutcome::Advanced(step)
            }
            None => match self.build_goal() {
                Ok(goal) => WizardOutcome::Completed(goal),
                Err(notice) => WizardOutcome::Blocked(notice),
            },
        }
    }

    /// Step back; on step 1 this cancels the wizard
    pub fn back(&mut self) -> WizardOutcome {
        match self.step.previous() {
            Some(step) => {
                self.step = step;
                WizardOutcome::SteppedBack(step)
            }
            None => WizardOutcome::Cancelled,
        }
    }

    fn validate_step(&self) -> Result<(), Notice> {
        let draft = &self.draft;
        match self.step {
            WizardStep::Step1 => {
                if draft.goal_type.is_none() || draft.category.is_none() || draft.name.trim().is_empty() {
                    return Err(Notice::error(
                        "Campos Obrigatórios",
                        "Por favor, preencha todos os campos antes de continuar.",
                    ));
                }
            }
            WizardStep::Step2 => {
                if !draft.target_amount.is_some_and(|a| a.is_positive()) {
                    return Err(Notice::error(
                        "Valor Obrigatório",
                        "Por favor, defina o valor do seu objetivo.",
                    ));
                }
            }
            WizardStep::Step3 => match draft.target_date {
                None => {
                    return Err(Notice::error(
                        "Data Obrigatória",
                        "Por favor, defina a data alvo do seu objetivo.",
                    ))
                }
                Some(date) if date < self.earliest_target_date() => {
                    return Err(Notice::error(
                        "Data Inválida",
                        "A data alvo deve ser pelo menos um mês depois da data de início.",
                    ))
                }
                Some(_) => {}
            },
            WizardStep::Step4 => {}
        }
        Ok(())
    }

    fn build_goal(&self) -> Result<Goal, Notice> {
        let draft = &self.draft;
        let invalid = || Notice::error("Objetivo Incompleto", "Reveja os passos anteriores.");

        let goal = Goal {
            goal_type: draft.goal_type.ok_or_else(invalid)?,
            category: draft.category.ok_or_else(invalid)?,
            name: draft.name.trim().to_string(),
            target_amount: draft.target_amount.ok_or_else(invalid)?,
            monthly_contribution: draft.effective_contribution().ok_or_else(invalid)?,
            start_date: draft.start_date,
            target_date: draft.target_date.ok_or_else(invalid)?,
        };

        goal.validate()
            .map_err(|e| Notice::error("Objetivo Inválido", e.to_string()))?;
        Ok(goal)
    }

    /// Apply the assistant's answer; only the first answer counts
    ///
    /// Returns true when the goal fields were prefilled.
    pub fn apply_recommendation(&mut self, response: &LuminResponse, today: NaiveDate) -> bool {
        if self.recommendation != Recommendation::Pending {
            debug!("ignoring recommendation, none pending");
            return false;
        }

        let suggested = response
            .recommendations
            .and_then(|r| r.savings_goal.filter(|g| *g > 0.0).map(|goal| (r, goal)));

        let applied = match suggested {
            Some((rec, savings_goal)) => {
                let timeframe = rec
                    .timeframe
                    .filter(|t| *t > 0)
                    .unwrap_or(DEFAULT_TIMEFRAME_MONTHS);
                let target = Money::from_decimal(savings_goal);
                let monthly = match rec.monthly_contribution.filter(|m| *m > 0.0) {
                    Some(m) => Money::from_decimal(m),
                    None => target.split_ceil(i64::from(timeframe)),
                };

                self.draft.target_amount = Some(target);
                self.draft.monthly_contribution = Some(monthly);
                self.draft.target_date = today.checked_add_months(Months::new(timeframe));
                true
            }
            None => false,
        };

        self.recommendation = Recommendation::Received {
            text: response.response.clone(),
            applied,
        };
        applied
    }

    /// The assistant could not be reached; fields stay as they are
    pub fn recommendation_failed(&mut self, err: &PouparError) {
        warn!("goal recommendation failed: {}", err);
        if self.recommendation == Recommendation::Pending {
            self.recommendation = Recommendation::Failed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::Recommendations;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2025, 3, 10)
    }

    fn filled_step1() -> GoalWizard {
        let mut wizard = GoalWizard::start(today());
        wizard.set_type(GoalType::Savings);
        wizard.set_category(GoalCategory::House);
        wizard.set_name("Casa nova");
        wizard
    }

    #[test]
    fn test_step1_requires_all_fields() {
        let mut wizard = GoalWizard::start(today());
        wizard.set_type(GoalType::Savings);
        wizard.set_name("   ");
        assert!(matches!(wizard.next(), WizardOutcome::Blocked(_)));
        assert_eq!(wizard.step(), WizardStep::Step1);

        wizard.set_category(GoalCategory::Car);
        assert!(matches!(wizard.next(), WizardOutcome::Blocked(_)));

        wizard.set_name("Carro");
        assert_eq!(wizard.next(), WizardOutcome::Advanced(WizardStep::Step2));
    }

    #[test]
    fn test_step2_rejects_zero_amount() {
        let mut wizard = filled_step1();
        wizard.next();
        assert!(matches!(wizard.next(), WizardOutcome::Blocked(_)));
        wizard.set_target_amount(Money::zero());
        assert!(matches!(wizard.next(), WizardOutcome::Blocked(_)));
        wizard.set_target_amount(Money::from_euros(1200));
        assert_eq!(wizard.next(), WizardOutcome::Advanced(WizardStep::Step3));
    }

    #[test]
    fn test_step3_requires_date_after_start() {
        let mut wizard = filled_step1();
        wizard.next();
        wizard.set_target_amount(Money::from_euros(1200));
        wizard.next();

        match wizard.next() {
            WizardOutcome::Blocked(notice) => assert_eq!(notice.title, "Data Obrigatória"),
            other => panic!("expected block, got {:?}", other),
        }

        wizard.set_target_date(today());
        assert!(matches!(wizard.next(), WizardOutcome::Blocked(_)));
        wizard.set_target_date(date(2025, 4, 9));
        assert!(matches!(wizard.next(), WizardOutcome::Blocked(_)));
        assert_eq!(wizard.step(), WizardStep::Step3);

        wizard.set_target_date(date(2025, 4, 10));
        assert_eq!(wizard.next(), WizardOutcome::Advanced(WizardStep::Step4));
        assert!(wizard.draft().target_date.unwrap() > wizard.draft().start_date);
    }

    #[test]
    fn test_completion_derives_contribution() {
        let mut wizard = filled_step1();
        wizard.next();
        wizard.set_target_amount(Money::from_euros(1200));
        wizard.next();
        wizard.set_target_date(date(2026, 3, 10));
        wizard.next();

        assert_eq!(
            wizard.draft().effective_contribution(),
            Some(Money::from_cents(10_000))
        );

        match wizard.next() {
            WizardOutcome::Completed(goal) => {
                assert_eq!(goal.monthly_contribution.to_decimal_string(), "100.00");
                assert_eq!(goal.name, "Casa nova");
                assert!(goal.target_date > goal.start_date);
            }
            other => panic!("expected completion, got {:?}", other),
        }
    }

    #[test]
    fn test_derived_contribution_follows_date_changes() {
        let mut wizard = filled_step1();
        wizard.next();
        wizard.set_target_amount(Money::from_euros(1000));
        wizard.next();
        wizard.set_target_date(date(2026, 3, 10));
        wizard.next();
        wizard.back();
        wizard.set_target_date(date(2025, 6, 10));
        wizard.next();

        // 1000 / 3 rounded up to the cent
        assert_eq!(
            wizard.draft().effective_contribution(),
            Some(Money::from_cents(33_334))
        );
    }

    #[test]
    fn test_back_from_step1_cancels() {
        let mut wizard = filled_step1();
        wizard.next();
        assert_eq!(wizard.back(), WizardOutcome::SteppedBack(WizardStep::Step1));
        assert_eq!(wizard.back(), WizardOutcome::Cancelled);
    }

    #[test]
    fn test_recommendation_requested_once() {
        let mut wizard = GoalWizard::start(today());
        assert!(wizard.set_category(GoalCategory::Retirement).is_none());

        let effect = wizard.set_type(GoalType::Investment);
        assert_eq!(
            effect,
            Some(WizardEffect::RequestRecommendation {
                category: GoalCategory::Retirement,
                prompt: "Quero planejar minha aposentadoria".into(),
            })
        );
        assert!(wizard.set_category(GoalCategory::House).is_none());
        assert_eq!(wizard.recommendation(), &Recommendation::Pending);
    }

    #[test]
    fn test_recommendation_prefills_fields() {
        let mut wizard = GoalWizard::start(today());
        wizard.set_type(GoalType::Savings);
        wizard.set_category(GoalCategory::EmergencyFund);

        let response = LuminResponse {
            response: "Reserve seis meses de despesas.".into(),
            recommendations: Some(Recommendations {
                monthly_contribution: None,
                timeframe: Some(24),
                savings_goal: Some(6000.0),
            }),
        };
        assert!(wizard.apply_recommendation(&response, today()));

        let draft = wizard.draft();
        assert_eq!(draft.target_amount, Some(Money::from_euros(6000)));
        assert_eq!(draft.monthly_contribution, Some(Money::from_euros(250)));
        assert_eq!(draft.target_date, Some(date(2027, 3, 10)));
        assert_eq!(
            wizard.recommendation().text(),
            Some("Reserve seis meses de despesas.")
        );

        // A second answer is ignored
        assert!(!wizard.apply_recommendation(&response, today()));
    }

    #[test]
    fn test_recommendation_without_goal_keeps_fields() {
        let mut wizard = filled_step1();
        let response = LuminResponse {
            response: "Comece já!".into(),
            recommendations: Some(Recommendations::default()),
        };
        assert!(!wizard.apply_recommendation(&response, today()));
        assert_eq!(wizard.draft().target_amount, None);
        assert_eq!(wizard.recommendation().text(), Some("Comece já!"));
    }

    #[test]
    fn test_failed_recommendation_is_not_retried() {
        let mut wizard = GoalWizard::start(today());
        wizard.set_type(GoalType::Savings);
        wizard.set_category(GoalCategory::Travel);
        wizard.recommendation_failed(&PouparError::Network("offline".into()));

        assert_eq!(wizard.recommendation(), &Recommendation::Failed);
        assert!(wizard.set_category(GoalCategory::Car).is_none());
        assert_eq!(wizard.draft().target_amount, None);
    }
}

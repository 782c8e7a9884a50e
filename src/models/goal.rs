//! Savings goal model
//!
//! A goal is collected by the goal wizard and handed to the host when the
//! wizard completes. Amounts are euros stored as cents.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// What kind of goal the user is working towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    Savings,
    Investment,
    DebtRepayment,
}

impl GoalType {
    pub fn all() -> &'static [Self] {
        &[Self::Savings, Self::Investment, Self::DebtRepayment]
    }

    /// Label shown in the wizard
    pub fn label(&self) -> &'static str {
        match self {
            Self::Savings => "Poupança",
            Self::Investment => "Investimento",
            Self::DebtRepayment => "Pagamento de Dívida",
        }
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// What the goal is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalCategory {
    EmergencyFund,
    House,
    Car,
    Education,
    Retirement,
    Travel,
    Other,
}

impl GoalCategory {
    pub fn all() -> &'static [Self] {
        &[
            Self::EmergencyFund,
            Self::House,
            Self::Car,
            Self::Education,
            Self::Retirement,
            Self::Travel,
            Self::Other,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::EmergencyFund => "Fundo de Emergência",
            Self::House => "Casa",
            Self::Car => "Carro",
            Self::Education => "Educação",
            Self::Retirement => "Aposentadoria",
            Self::Travel => "Viagem",
            Self::Other => "Outro",
        }
    }

    /// Free-text prompt sent to the assistant when asking for a recommendation
    pub fn recommendation_prompt(&self) -> &'static str {
        match self {
            Self::House => "Quero comprar uma casa",
            Self::Car => "Quero comprar um carro",
            Self::Education => "Quero investir em educação",
            Self::Retirement => "Quero planejar minha aposentadoria",
            _ => "Quero criar uma reserva de emergência",
        }
    }
}

impl fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A fully populated goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    #[serde(rename = "type")]
    pub goal_type: GoalType,
    pub category: GoalCategory,
    pub name: String,
    pub target_amount: Money,
    pub monthly_contribution: Money,
    pub start_date: NaiveDate,
    pub target_date: NaiveDate,
}

impl Goal {
    /// Check the goal invariants
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }
        if !self.target_amount.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget);
        }
        if self.monthly_contribution.is_negative() {
            return Err(GoalValidationError::NegativeContribution);
        }
        if self.target_date <= self.start_date {
            return Err(GoalValidationError::TargetNotAfterStart);
        }
        Ok(())
    }

    /// Whole months available to save
    pub fn months_remaining(&self) -> i64 {
        months_between(self.start_date, self.target_date)
    }
}

/// Number of whole calendar months from `start` to `end`
///
/// A month only counts once the day of month has been reached again, so
/// 2025-01-31 -> 2025-02-28 is zero months. Negative when `end < start`.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    if end < start {
        return -months_between(end, start);
    }

    let years = (end.year() - start.year()) as i64;
    let months = end.month() as i64 - start.month() as i64;
    let mut total = years * 12 + months;
    if end.day() < start.day() {
        total -= 1;
    }
    total
}

/// Monthly contribution needed to reach `target` between the two dates,
/// rounded up to the nearest cent. The window is at least one month.
pub fn derive_monthly_contribution(target: Money, start: NaiveDate, end: NaiveDate) -> Money {
    target.split_ceil(months_between(start, end).max(1))
}

/// The earliest target date the wizard accepts for a goal starting on `start`
pub fn earliest_target_date(start: NaiveDate) -> NaiveDate {
    start
        .checked_add_months(Months::new(1))
        .unwrap_or(NaiveDate::MAX)
}

/// Validation errors for goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyName,
    NonPositiveTarget,
    NegativeContribution,
    TargetNotAfterStart,
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name cannot be empty"),
            Self::NonPositiveTarget => write!(f, "Target amount must be positive"),
            Self::NegativeContribution => write!(f, "Monthly contribution cannot be negative"),
            Self::TargetNotAfterStart => write!(f, "Target date must be after the start date"),
        }
    }
}

impl std::error::Error for GoalValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_goal() -> Goal {
        Goal {
            goal_type: GoalType::Savings,
            category: GoalCategory::House,
            name: "Casa nova".into(),
            target_amount: Money::from_euros(1200),
            monthly_contribution: Money::from_euros(100),
            start_date: date(2025, 1, 15),
            target_date: date(2026, 1, 15),
        }
    }

    #[test]
    fn test_months_between() {
        assert_eq!(months_between(date(2025, 1, 15), date(2026, 1, 15)), 12);
        assert_eq!(months_between(date(2025, 1, 15), date(2025, 2, 14)), 0);
        assert_eq!(months_between(date(2025, 1, 31), date(2025, 2, 28)), 0);
        assert_eq!(months_between(date(2025, 3, 1), date(2025, 1, 1)), -2);
    }

    #[test]
    fn test_derive_twelve_months() {
        let monthly =
            derive_monthly_contribution(Money::from_euros(1200), date(2025, 1, 15), date(2026, 1, 15));
        assert_eq!(monthly, Money::from_euros(100));
        assert_eq!(monthly.to_string(), "€100.00");
    }

    #[test]
    fn test_derive_rounds_up_to_cent() {
        let monthly =
            derive_monthly_contribution(Money::from_euros(1000), date(2025, 1, 1), date(2025, 4, 1));
        assert_eq!(monthly, Money::from_cents(33_334));
    }

    #[test]
    fn test_derive_short_window_uses_one_month() {
        let monthly =
            derive_monthly_contribution(Money::from_euros(500), date(2025, 1, 1), date(2025, 1, 20));
        assert_eq!(monthly, Money::from_euros(500));
    }

    #[test]
    fn test_earliest_target_date() {
        assert_eq!(earliest_target_date(date(2025, 1, 31)), date(2025, 2, 28));
        assert_eq!(earliest_target_date(date(2025, 6, 10)), date(2025, 7, 10));
    }

    #[test]
    fn test_validation() {
        assert!(sample_goal().validate().is_ok());

        let mut goal = sample_goal();
        goal.target_date = goal.start_date;
        assert_eq!(goal.validate(), Err(GoalValidationError::TargetNotAfterStart));

        let mut goal = sample_goal();
        goal.target_amount = Money::zero();
        assert_eq!(goal.validate(), Err(GoalValidationError::NonPositiveTarget));

        let mut goal = sample_goal();
        goal.name = "   ".into();
        assert_eq!(goal.validate(), Err(GoalValidationError::EmptyName));
    }

    #[test]
    fn test_serialization_field_names() {
        let json = serde_json::to_value(sample_goal()).unwrap();
        assert_eq!(json["type"], "savings");
        assert_eq!(json["category"], "house");
        assert_eq!(json["targetAmount"], 120_000);
        assert_eq!(json["targetDate"], "2026-01-15");
    }
}

//! Goal plan preview for `poupar plan-goal`

use chrono::NaiveDate;
use tabled::Tabled;

use super::render_table;
use crate::error::{PouparError, PouparResult};
use crate::models::goal::{derive_monthly_contribution, earliest_target_date, months_between};
use crate::models::Money;

/// Monthly saving needed to reach a target by a date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalPlan {
    pub target_amount: Money,
    pub start_date: NaiveDate,
    pub target_date: NaiveDate,
    pub months: i64,
    pub monthly_contribution: Money,
}

impl GoalPlan {
    /// Applies the same rules as the goal wizard: a positive amount and a
    /// target at least one month after the start.
    pub fn compute(
        target_amount: Money,
        start_date: NaiveDate,
        target_date: NaiveDate,
    ) -> PouparResult<Self> {
        if !target_amount.is_positive() {
            return Err(PouparError::Validation(
                "Target amount must be positive".into(),
            ));
        }
        let earliest = earliest_target_date(start_date);
        if target_date < earliest {
            return Err(PouparError::Validation(format!(
                "Target date must be on or after {}",
                earliest
            )));
        }

        Ok(Self {
            target_amount,
            start_date,
            target_date,
            months: months_between(start_date, target_date),
            monthly_contribution: derive_monthly_contribution(
                target_amount,
                start_date,
                target_date,
            ),
        })
    }
}

#[derive(Tabled)]
struct Field {
    #[tabled(rename = "Field")]
    name: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

pub fn format_goal_plan(plan: &GoalPlan) -> String {
    render_table([
        Field {
            name: "Target",
            value: plan.target_amount.to_string(),
        },
        Field {
            name: "Start",
            value: plan.start_date.to_string(),
        },
        Field {
            name: "Target date",
            value: plan.target_date.to_string(),
        },
        Field {
            name: "Months",
            value: plan.months.to_string(),
        },
        Field {
            name: "Monthly",
            value: plan.monthly_contribution.to_string(),
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_twelve_month_plan() {
        let plan = GoalPlan::compute(
            Money::from_euros(1200),
            date(2025, 1, 1),
            date(2026, 1, 1),
        )
        .unwrap();
        assert_eq!(plan.months, 12);
        assert_eq!(plan.monthly_contribution, Money::from_euros(100));

        let output = format_goal_plan(&plan);
        assert!(output.contains("€100.00"));
        assert!(output.contains("2026-01-01"));
    }

    #[test]
    fn test_target_too_soon() {
        let err = GoalPlan::compute(
            Money::from_euros(500),
            date(2025, 1, 15),
            date(2025, 2, 14),
        )
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_zero_amount_rejected() {
        let err = GoalPlan::compute(Money::zero(), date(2025, 1, 1), date(2025, 6, 1)).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_rounds_up_to_cent() {
        let plan =
            GoalPlan::compute(Money::from_euros(100), date(2025, 1, 1), date(2025, 4, 1)).unwrap();
        assert_eq!(plan.monthly_contribution, Money::from_cents(3334));
    }
}

//! Savings progress shown on the dreams page

use crate::models::Money;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavingsProjection {
    /// Fraction of the target reached, capped at 1
    pub progress: f64,
    pub remaining: Money,
    /// `None` when nothing is being contributed
    pub months_to_target: Option<u32>,
}

impl SavingsProjection {
    pub fn compute(current: Money, target: Money, monthly: Money) -> Self {
        let progress = if target.is_positive() {
            (current.cents() as f64 / target.cents() as f64).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let remaining = (target - current).clamp_non_negative();

        let months_to_target = if remaining.is_zero() {
            Some(0)
        } else if monthly.is_positive() {
            let months = (remaining.cents() + monthly.cents() - 1) / monthly.cents();
            u32::try_from(months).ok()
        } else {
            None
        };

        Self {
            progress,
            remaining,
            months_to_target,
        }
    }

    pub fn percent(&self) -> u16 {
        (self.progress * 100.0).round() as u16
    }

    pub fn months_label(&self) -> String {
        match self.months_to_target {
            Some(1) => "1 mês".to_string(),
            Some(n) => format!("{} meses", n),
            None => "—".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection() {
        let p = SavingsProjection::compute(
            Money::from_euros(2500),
            Money::from_euros(10_000),
            Money::from_euros(300),
        );
        assert_eq!(p.percent(), 25);
        assert_eq!(p.remaining, Money::from_euros(7500));
        assert_eq!(p.months_to_target, Some(25));
        assert_eq!(p.months_label(), "25 meses");
    }

    #[test]
    fn test_goal_already_reached() {
        let p = SavingsProjection::compute(
            Money::from_euros(1200),
            Money::from_euros(1000),
            Money::zero(),
        );
        assert_eq!(p.progress, 1.0);
        assert_eq!(p.remaining, Money::zero());
        assert_eq!(p.months_to_target, Some(0));
    }

    #[test]
    fn test_no_contribution() {
        let p = SavingsProjection::compute(Money::zero(), Money::from_euros(500), Money::zero());
        assert_eq!(p.months_to_target, None);
        assert_eq!(p.months_label(), "—");
    }
}

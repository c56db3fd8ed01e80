//! Department budget consumption, as shown in the departments table.

/// Spend as a percentage of budget. A zero budget reads as 0 % rather
/// than dividing by zero.
pub fn usage_percent(expenses: f64, budget: f64) -> f64 {
    if budget <= 0.0 {
        return 0.0;
    }
    expenses / budget * 100.0
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BudgetBand {
    Healthy,
    Warning,
    Over,
}

/// Banding thresholds: 90 % and above is over-budget, 70 % and above is
/// a warning.
pub fn budget_band(percent: f64) -> BudgetBand {
    if percent >= 90.0 {
        BudgetBand::Over
    } else if percent >= 70.0 {
        BudgetBand::Warning
    } else {
        BudgetBand::Healthy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_of_budget() {
        assert_eq!(usage_percent(45000.0, 50000.0), 90.0);
        assert_eq!(usage_percent(0.0, 50000.0), 0.0);
    }

    #[test]
    fn zero_budget_is_zero_percent() {
        assert_eq!(usage_percent(1000.0, 0.0), 0.0);
    }

    #[test]
    fn bands_at_the_thresholds() {
        assert_eq!(budget_band(69.9), BudgetBand::Healthy);
        assert_eq!(budget_band(70.0), BudgetBand::Warning);
        assert_eq!(budget_band(89.9), BudgetBand::Warning);
        assert_eq!(budget_band(90.0), BudgetBand::Over);
        assert_eq!(budget_band(130.0), BudgetBand::Over);
    }
}

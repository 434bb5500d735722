use crate::domain::BudgetProjection;

pub struct BudgetService;

impl BudgetService {
    /// Measures `total_spent` against `budget`.
    ///
    /// `ratio` is clamped to 1.0 for progress bars; `remaining` and
    /// `is_exceeded` use the raw figures. A budget that is not positive
    /// produces a zero ratio instead of a non-finite one.
    pub fn project_budget(total_spent: f64, budget: f64) -> BudgetProjection {
        let ratio = if budget > 0.0 {
            (total_spent / budget).min(1.0)
        } else {
            0.0
        };
        BudgetProjection {
            ratio,
            remaining: budget - total_spent,
            is_exceeded: total_spent > budget,
        }
    }

    /// Share of the budget taken by one category, in percent. Not clamped:
    /// a single category may exceed 100%.
    pub fn project_category_impact(category_value: f64, budget: f64) -> f64 {
        if budget > 0.0 {
            (category_value / budget) * 100.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exceeded_budget_clamps_ratio_but_not_remaining() {
        let projection = BudgetService::project_budget(4000.0, 3500.0);
        assert!(projection.is_exceeded);
        assert_eq!(projection.remaining, -500.0);
        assert_eq!(projection.ratio, 1.0);
    }

    #[test]
    fn zero_budget_degenerates_to_zero_ratio() {
        let projection = BudgetService::project_budget(0.0, 0.0);
        assert_eq!(projection.ratio, 0.0);
        assert_eq!(projection.remaining, 0.0);
        assert!(!projection.is_exceeded);

        let projection = BudgetService::project_budget(50.0, -10.0);
        assert_eq!(projection.ratio, 0.0);
        assert!(projection.is_exceeded);
        assert!(projection.ratio.is_finite());
    }

    #[test]
    fn nan_budget_degenerates_to_zero_ratio() {
        let projection = BudgetService::project_budget(10.0, f64::NAN);
        assert_eq!(projection.ratio, 0.0);
        assert_eq!(BudgetService::project_category_impact(10.0, f64::NAN), 0.0);
    }

    #[test]
    fn under_budget_reports_partial_ratio() {
        let projection = BudgetService::project_budget(875.0, 3500.0);
        assert_eq!(projection.ratio, 0.25);
        assert_eq!(projection.remaining, 2625.0);
        assert!(!projection.is_exceeded);
        assert_eq!(projection.percent_used(), 25);
    }

    #[test]
    fn spending_exactly_the_budget_is_not_exceeded() {
        let projection = BudgetService::project_budget(100.0, 100.0);
        assert_eq!(projection.ratio, 1.0);
        assert!(!projection.is_exceeded);
    }

    #[test]
    fn category_impact_is_unclamped() {
        assert_eq!(BudgetService::project_category_impact(50.0, 200.0), 25.0);
        assert_eq!(BudgetService::project_category_impact(300.0, 200.0), 150.0);
        assert_eq!(BudgetService::project_category_impact(300.0, 0.0), 0.0);
    }
}

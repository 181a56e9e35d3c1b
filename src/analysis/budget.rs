use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::models::{BudgetConfig, Category};

const WARNING_PERCENT: Decimal = Decimal::from_parts(80, 0, 0, false, 0);
const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Where spending stands against a budget. Percentages are of the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BudgetStatus {
    NoBudgetSet,
    Ok { percent: Decimal },
    Warning { percent: Decimal },
    Exceeded { percent: Decimal },
}

impl BudgetStatus {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::NoBudgetSet => "No budget",
            Self::Ok { .. } => "OK",
            Self::Warning { .. } => "Warning",
            Self::Exceeded { .. } => "Exceeded",
        }
    }

    pub(crate) fn percent(&self) -> Option<Decimal> {
        match self {
            Self::NoBudgetSet => None,
            Self::Ok { percent } | Self::Warning { percent } | Self::Exceeded { percent } => {
                Some(*percent)
            }
        }
    }
}

/// Classify `spent` against `budget`: under 80% is `Ok`, 80% up to 100% is
/// `Warning`, 100% and above is `Exceeded`. A budget of zero or less means no
/// budget is set. A ratio too large to represent is `Exceeded` at
/// `Decimal::MAX` percent.
pub(crate) fn evaluate(spent: Decimal, budget: Decimal) -> BudgetStatus {
    if budget <= Decimal::ZERO {
        return BudgetStatus::NoBudgetSet;
    }
    let Some(percent) = spent
        .checked_div(budget)
        .and_then(|ratio| ratio.checked_mul(HUNDRED))
    else {
        return BudgetStatus::Exceeded {
            percent: Decimal::MAX,
        };
    };
    if percent >= HUNDRED {
        BudgetStatus::Exceeded { percent }
    } else if percent >= WARNING_PERCENT {
        BudgetStatus::Warning { percent }
    } else {
        BudgetStatus::Ok { percent }
    }
}

/// What is left of the budget, never below zero.
pub(crate) fn remaining_budget(spent: Decimal, budget: Decimal) -> Decimal {
    budget.saturating_sub(spent).max(Decimal::ZERO)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CategoryBudgetStatus {
    pub category: Category,
    pub spent: Decimal,
    pub budget: Decimal,
    pub status: BudgetStatus,
}

/// Evaluate every category that has a non-zero budget, in category order.
/// Categories with a budget but no spending report zero spent.
pub(crate) fn evaluate_categories(
    spent_by_category: &BTreeMap<Category, Decimal>,
    config: &BudgetConfig,
) -> Vec<CategoryBudgetStatus> {
    Category::all()
        .iter()
        .filter_map(|&category| {
            let budget = config.category_budget(category);
            if budget <= Decimal::ZERO {
                return None;
            }
            let spent = spent_by_category
                .get(&category)
                .copied()
                .unwrap_or(Decimal::ZERO);
            Some(CategoryBudgetStatus {
                category,
                spent,
                budget,
                status: evaluate(spent, budget),
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "budget_tests.rs"]
mod tests;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::aggregate::{records_in_month, total_of};
use super::budget::{evaluate, remaining_budget, BudgetStatus};
use crate::models::{BudgetConfig, Expense, Month};

/// Headline numbers for one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Dashboard {
    pub month: Month,
    pub total_spent: Decimal,
    pub month_spent: Decimal,
    pub month_count: usize,
    pub remaining: Decimal,
    pub status: BudgetStatus,
}

impl Dashboard {
    pub(crate) fn build(records: &[Expense], month: Month, budget: &BudgetConfig) -> Self {
        let in_month = records_in_month(records, month);
        let month_spent = total_of(&in_month);
        Self {
            month,
            total_spent: total_of(records),
            month_spent,
            month_count: in_month.len(),
            remaining: remaining_budget(month_spent, budget.overall_monthly),
            status: evaluate(month_spent, budget.overall_monthly),
        }
    }

    pub(crate) fn for_day(records: &[Expense], today: NaiveDate, budget: &BudgetConfig) -> Self {
        Self::build(records, Month::of(today), budget)
    }
}

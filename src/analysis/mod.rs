mod aggregate;
mod budget;
mod dashboard;
mod filter;
mod insight;
mod recurring;

pub(crate) use aggregate::{records_in_month, sum_by_category, sum_by_day, sum_by_month, total_of};
pub(crate) use budget::{evaluate_categories, BudgetStatus};
pub(crate) use dashboard::Dashboard;
pub(crate) use filter::{ExpenseFilter, FilterOptions, ALL};
pub(crate) use insight::generate_insights;
pub(crate) use recurring::roll_recurring;

#[cfg(test)]
mod tests;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashSet;

use crate::models::{Category, Expense, ExpenseDraft, ExpenseFields};

/// Drafts for this period's copy of every recurring series, dated `today`.
///
/// A series is the set of recurring records sharing title, amount and
/// category. Each series yields exactly one draft, so two recurring records
/// entered separately with identical title, amount and category roll into a
/// single copy, not two. Copies made by earlier rolls join the series of
/// their source, which keeps each call at one draft per series however often
/// the ledger was rolled before. Calling twice still yields two sets of
/// drafts: there is no guard against rolling twice in a period.
pub(crate) fn roll_recurring(records: &[Expense], owner: &str, today: NaiveDate) -> Vec<ExpenseDraft> {
    let mut seen: HashSet<(&str, Decimal, Category)> = HashSet::new();
    records
        .iter()
        .filter(|e| e.recurring)
        .filter(|e| seen.insert((e.title.as_str(), e.amount, e.category)))
        .map(|e| {
            ExpenseDraft::new(
                owner,
                ExpenseFields::new(e.title.clone(), e.amount, today, e.category),
                true,
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "recurring_tests.rs"]
mod tests;

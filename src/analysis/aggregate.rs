use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::models::{Category, Expense, Month};

/// Sum of all amounts; zero for an empty slice. Sums saturate at the
/// `Decimal` range instead of overflowing.
pub(crate) fn total_of(records: &[Expense]) -> Decimal {
    records
        .iter()
        .fold(Decimal::ZERO, |acc, e| acc.saturating_add(e.amount))
}

fn add_to<K: Ord>(totals: &mut BTreeMap<K, Decimal>, key: K, amount: Decimal) {
    let total = totals.entry(key).or_insert(Decimal::ZERO);
    *total = total.saturating_add(amount);
}

/// Totals per category, ordered by category declaration order.
/// Categories without records are absent.
pub(crate) fn sum_by_category(records: &[Expense]) -> BTreeMap<Category, Decimal> {
    let mut totals = BTreeMap::new();
    for expense in records {
        add_to(&mut totals, expense.category, expense.amount);
    }
    totals
}

/// Totals per calendar month, in chronological order.
pub(crate) fn sum_by_month(records: &[Expense]) -> BTreeMap<Month, Decimal> {
    let mut totals = BTreeMap::new();
    for expense in records {
        add_to(&mut totals, Month::of(expense.occurred_on), expense.amount);
    }
    totals
}

/// Totals per day, in chronological order.
pub(crate) fn sum_by_day(records: &[Expense]) -> BTreeMap<NaiveDate, Decimal> {
    let mut totals = BTreeMap::new();
    for expense in records {
        add_to(&mut totals, expense.occurred_on, expense.amount);
    }
    totals
}

/// The records dated within `month`, in their original order.
pub(crate) fn records_in_month(records: &[Expense], month: Month) -> Vec<Expense> {
    records
        .iter()
        .filter(|e| month.contains(e.occurred_on))
        .cloned()
        .collect()
}

/// The category with the largest total. Equal totals go to the category that
/// comes first in declaration order.
pub(crate) fn top_category(totals: &BTreeMap<Category, Decimal>) -> Option<(Category, Decimal)> {
    totals
        .iter()
        .fold(None, |best: Option<(Category, Decimal)>, (&cat, &total)| match best {
            Some((_, best_total)) if best_total >= total => best,
            _ => Some((cat, total)),
        })
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;

use std::collections::BTreeSet;

use crate::error::LedgerResult;
use crate::models::{Category, Expense, Month};

/// Selector value meaning "no filter".
pub(crate) const ALL: &str = "All";

/// Narrow a ledger by category, month and title text. Active filters are
/// combined with AND; `None` fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ExpenseFilter {
    pub category: Option<Category>,
    pub month: Option<Month>,
    /// Stored lower-cased; matched as a substring of the lower-cased title.
    search: Option<String>,
}

impl ExpenseFilter {
    /// Build from request-level selector strings. Absent values, empty
    /// strings and `"All"` (any case) disable the respective filter.
    pub(crate) fn from_request(
        category: Option<&str>,
        month: Option<&str>,
        search: Option<&str>,
    ) -> LedgerResult<Self> {
        let category = match selector(category) {
            Some(c) => Some(c.parse::<Category>()?),
            None => None,
        };
        let month = match selector(month) {
            Some(m) => Some(m.parse::<Month>()?),
            None => None,
        };
        Ok(Self {
            category,
            month,
            search: None,
        }
        .with_search(search.unwrap_or_default()))
    }

    /// Whitespace inside the text is significant; text that is only
    /// whitespace clears the search.
    pub(crate) fn with_search(mut self, text: &str) -> Self {
        self.search = (!text.trim().is_empty()).then(|| text.to_lowercase());
        self
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.category.is_none() && self.month.is_none() && self.search.is_none()
    }

    pub(crate) fn matches(&self, expense: &Expense) -> bool {
        if self.category.is_some_and(|c| c != expense.category) {
            return false;
        }
        if self.month.is_some_and(|m| !m.contains(expense.occurred_on)) {
            return false;
        }
        match &self.search {
            Some(needle) => expense.title.to_lowercase().contains(needle.as_str()),
            None => true,
        }
    }

    /// The matching records, in their original relative order.
    pub(crate) fn apply(&self, records: &[Expense]) -> Vec<Expense> {
        records
            .iter()
            .filter(|e| self.matches(e))
            .cloned()
            .collect()
    }
}

fn selector(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(ALL))
}

/// The values a caller can offer in its category and month selectors:
/// only those actually present in the ledger, sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct FilterOptions {
    pub categories: Vec<Category>,
    pub months: Vec<Month>,
}

impl FilterOptions {
    pub(crate) fn from_records(records: &[Expense]) -> Self {
        let categories: BTreeSet<Category> = records.iter().map(|e| e.category).collect();
        let months: BTreeSet<Month> = records.iter().map(|e| Month::of(e.occurred_on)).collect();
        Self {
            categories: categories.into_iter().collect(),
            months: months.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;

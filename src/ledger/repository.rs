use crate::error::LedgerResult;
use crate::models::{BudgetConfig, Expense, ExpenseDraft, ExpenseFields};

/// Source and sink of truth for expense records.
pub(crate) trait ExpenseRepository {
    /// All records of `owner`, in insertion order.
    fn list_by_owner(&self, owner: &str) -> LedgerResult<Vec<Expense>>;

    fn insert(&mut self, draft: &ExpenseDraft) -> LedgerResult<i64>;

    /// Fails with `NotFound` when no record has `id`.
    fn update(&mut self, id: i64, fields: &ExpenseFields) -> LedgerResult<()>;

    /// Fails with `NotFound` when no record has `id`.
    fn delete(&mut self, id: i64) -> LedgerResult<()>;
}

pub(crate) trait BudgetRepository {
    /// Owners that never saved a budget get the all-zero config.
    fn get_budget(&self, owner: &str) -> LedgerResult<BudgetConfig>;

    fn save_budget(&mut self, owner: &str, config: &BudgetConfig) -> LedgerResult<()>;
}

use std::collections::HashMap;

use super::{BudgetRepository, ExpenseRepository};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{BudgetConfig, Expense, ExpenseDraft, ExpenseFields};

/// Repository kept entirely in memory, for exercising the context in tests.
#[derive(Debug, Default)]
pub(crate) struct MemoryRepository {
    expenses: Vec<Expense>,
    budgets: HashMap<String, BudgetConfig>,
    next_id: i64,
}

impl ExpenseRepository for MemoryRepository {
    fn list_by_owner(&self, owner: &str) -> LedgerResult<Vec<Expense>> {
        Ok(self
            .expenses
            .iter()
            .filter(|e| e.owner == owner)
            .cloned()
            .collect())
    }

    fn insert(&mut self, draft: &ExpenseDraft) -> LedgerResult<i64> {
        self.next_id += 1;
        self.expenses.push(draft.clone().into_expense(self.next_id));
        Ok(self.next_id)
    }

    fn update(&mut self, id: i64, fields: &ExpenseFields) -> LedgerResult<()> {
        let expense = self
            .expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(LedgerError::NotFound(id))?;
        expense.apply(fields.clone());
        Ok(())
    }

    fn delete(&mut self, id: i64) -> LedgerResult<()> {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        if self.expenses.len() == before {
            return Err(LedgerError::NotFound(id));
        }
        Ok(())
    }
}

impl BudgetRepository for MemoryRepository {
    fn get_budget(&self, owner: &str) -> LedgerResult<BudgetConfig> {
        Ok(self.budgets.get(owner).cloned().unwrap_or_default())
    }

    fn save_budget(&mut self, owner: &str, config: &BudgetConfig) -> LedgerResult<()> {
        self.budgets.insert(owner.to_string(), config.clone());
        Ok(())
    }
}

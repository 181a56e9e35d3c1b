mod context;
#[cfg(test)]
pub(crate) mod memory;
mod repository;

pub(crate) use context::OwnerContext;
pub(crate) use repository::{BudgetRepository, ExpenseRepository};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Expense, ExpenseFields};

/// One owner's expenses in insertion order. Ids are unique within a ledger.
#[derive(Debug, Clone, Default)]
pub(crate) struct Ledger {
    records: Vec<Expense>,
}

impl Ledger {
    pub(crate) fn from_records(records: Vec<Expense>) -> Self {
        Self { records }
    }

    pub(crate) fn records(&self) -> &[Expense] {
        &self.records
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn get(&self, id: i64) -> Option<&Expense> {
        self.records.iter().find(|e| e.id == id)
    }

    pub(crate) fn append(&mut self, expense: Expense) -> LedgerResult<()> {
        if self.get(expense.id).is_some() {
            return Err(LedgerError::Validation(format!(
                "duplicate expense id {}",
                expense.id
            )));
        }
        self.records.push(expense);
        Ok(())
    }

    pub(crate) fn replace(&mut self, id: i64, fields: ExpenseFields) -> LedgerResult<&Expense> {
        let expense = self
            .records
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(LedgerError::NotFound(id))?;
        expense.apply(fields);
        Ok(&*expense)
    }

    pub(crate) fn remove(&mut self, id: i64) -> LedgerResult<Expense> {
        let pos = self
            .records
            .iter()
            .position(|e| e.id == id)
            .ok_or(LedgerError::NotFound(id))?;
        Ok(self.records.remove(pos))
    }
}

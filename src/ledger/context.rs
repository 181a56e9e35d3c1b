use chrono::NaiveDate;
use tracing::{debug, info};

use super::{BudgetRepository, ExpenseRepository, Ledger};
use crate::analysis;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{BudgetConfig, Expense, ExpenseDraft, ExpenseFields};

/// Everything one request needs about one owner: their ledger and budget.
///
/// Built fresh from the repositories for each request and passed explicitly.
/// Mutations go to the repository first and are mirrored into the ledger only
/// once the repository accepted them.
#[derive(Debug, Clone)]
pub(crate) struct OwnerContext {
    owner: String,
    ledger: Ledger,
    budget: BudgetConfig,
}

impl OwnerContext {
    pub(crate) fn load<R>(repo: &R, owner: &str) -> LedgerResult<Self>
    where
        R: ExpenseRepository + BudgetRepository,
    {
        let records = repo.list_by_owner(owner)?;
        let budget = repo.get_budget(owner)?;
        debug!(owner, records = records.len(), "loaded owner context");
        Ok(Self {
            owner: owner.to_string(),
            ledger: Ledger::from_records(records),
            budget,
        })
    }

    pub(crate) fn owner(&self) -> &str {
        &self.owner
    }

    pub(crate) fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub(crate) fn budget(&self) -> &BudgetConfig {
        &self.budget
    }

    pub(crate) fn add_expense<R: ExpenseRepository>(
        &mut self,
        repo: &mut R,
        fields: ExpenseFields,
        recurring: bool,
    ) -> LedgerResult<Expense> {
        let draft = ExpenseDraft::new(self.owner.clone(), fields, recurring).validated()?;
        self.store(repo, draft)
    }

    pub(crate) fn edit_expense<R: ExpenseRepository>(
        &mut self,
        repo: &mut R,
        id: i64,
        fields: ExpenseFields,
    ) -> LedgerResult<Expense> {
        let fields = fields.validated()?;
        // Ids belonging to other owners are invisible here.
        if self.ledger.get(id).is_none() {
            return Err(LedgerError::NotFound(id));
        }
        repo.update(id, &fields)?;
        let updated = self.ledger.replace(id, fields)?.clone();
        info!(owner = %self.owner, id, "edited expense");
        Ok(updated)
    }

    pub(crate) fn delete_expense<R: ExpenseRepository>(
        &mut self,
        repo: &mut R,
        id: i64,
    ) -> LedgerResult<Expense> {
        if self.ledger.get(id).is_none() {
            return Err(LedgerError::NotFound(id));
        }
        repo.delete(id)?;
        let removed = self.ledger.remove(id)?;
        info!(owner = %self.owner, id, "deleted expense");
        Ok(removed)
    }

    pub(crate) fn save_budget<R: BudgetRepository>(
        &mut self,
        repo: &mut R,
        config: BudgetConfig,
    ) -> LedgerResult<()> {
        repo.save_budget(&self.owner, &config)?;
        info!(
            owner = %self.owner,
            overall = %config.overall_monthly,
            categories = config.category_budgets.len(),
            "saved budget"
        );
        self.budget = config;
        Ok(())
    }

    /// Materialise this period's copies of every recurring series, dated `today`.
    ///
    /// Not idempotent: each call stores a fresh set of copies.
    pub(crate) fn roll_recurring<R: ExpenseRepository>(
        &mut self,
        repo: &mut R,
        today: NaiveDate,
    ) -> LedgerResult<Vec<Expense>> {
        let drafts = analysis::roll_recurring(self.ledger.records(), &self.owner, today);
        let mut created = Vec::with_capacity(drafts.len());
        for draft in drafts {
            created.push(self.store(repo, draft)?);
        }
        info!(owner = %self.owner, %today, created = created.len(), "rolled recurring expenses");
        Ok(created)
    }

    fn store<R: ExpenseRepository>(
        &mut self,
        repo: &mut R,
        draft: ExpenseDraft,
    ) -> LedgerResult<Expense> {
        let id = repo.insert(&draft)?;
        let expense = draft.into_expense(id);
        self.ledger.append(expense.clone())?;
        debug!(owner = %self.owner, id, "stored expense");
        Ok(expense)
    }
}

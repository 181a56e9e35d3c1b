use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::Category;
use crate::error::LedgerError;

/// The editable part of an expense. Edits replace all four fields at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExpenseFields {
    pub title: String,
    pub amount: Decimal,
    pub occurred_on: NaiveDate,
    pub category: Category,
}

impl ExpenseFields {
    pub(crate) fn new(
        title: impl Into<String>,
        amount: Decimal,
        occurred_on: NaiveDate,
        category: Category,
    ) -> Self {
        Self {
            title: title.into(),
            amount,
            occurred_on,
            category,
        }
    }

    /// Check the record invariants and normalise the title.
    pub(crate) fn validated(mut self) -> Result<Self, LedgerError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(LedgerError::Validation("title must not be blank".into()));
        }
        if self.amount <= Decimal::ZERO {
            return Err(LedgerError::Validation(format!(
                "amount must be positive, got {}",
                self.amount
            )));
        }
        check_amount(self.amount)?;
        self.title = title.to_string();
        Ok(self)
    }
}

/// Largest amount accepted for one expense or budget: 1,000,000,000,000.
pub(crate) const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Amounts are whole cents no larger than [`MAX_AMOUNT`] in either direction.
pub(super) fn check_amount(amount: Decimal) -> Result<(), LedgerError> {
    if amount.normalize().scale() > 2 {
        return Err(LedgerError::Validation(format!(
            "amount has more than 2 decimal places: {amount}"
        )));
    }
    if amount.abs() > MAX_AMOUNT {
        return Err(LedgerError::Validation(format!(
            "amount is too large: {amount}"
        )));
    }
    Ok(())
}

/// An expense that has not been stored yet and so has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExpenseDraft {
    pub owner: String,
    pub fields: ExpenseFields,
    pub recurring: bool,
}

impl ExpenseDraft {
    pub(crate) fn new(owner: impl Into<String>, fields: ExpenseFields, recurring: bool) -> Self {
        Self {
            owner: owner.into(),
            fields,
            recurring,
        }
    }

    pub(crate) fn validated(self) -> Result<Self, LedgerError> {
        Ok(Self {
            fields: self.fields.validated()?,
            ..self
        })
    }

    /// Attach the id handed out by the repository.
    pub(crate) fn into_expense(self, id: i64) -> Expense {
        Expense {
            id,
            owner: self.owner,
            title: self.fields.title,
            amount: self.fields.amount,
            occurred_on: self.fields.occurred_on,
            category: self.fields.category,
            recurring: self.recurring,
        }
    }
}

/// A stored expense. `id` and `owner` never change after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Expense {
    pub id: i64,
    pub owner: String,
    pub title: String,
    pub amount: Decimal,
    pub occurred_on: NaiveDate,
    pub category: Category,
    pub recurring: bool,
}

impl Expense {
    pub(crate) fn fields(&self) -> ExpenseFields {
        ExpenseFields::new(
            self.title.clone(),
            self.amount,
            self.occurred_on,
            self.category,
        )
    }

    pub(crate) fn apply(&mut self, fields: ExpenseFields) {
        self.title = fields.title;
        self.amount = fields.amount;
        self.occurred_on = fields.occurred_on;
        self.category = fields.category;
    }
}

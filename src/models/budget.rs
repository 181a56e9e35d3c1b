use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::expense::check_amount;
use super::Category;
use crate::error::LedgerError;

/// Monthly budget settings for one owner. A zero value means "no budget".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct BudgetConfig {
    pub overall_monthly: Decimal,
    /// Categories absent from the map have a budget of zero.
    pub category_budgets: BTreeMap<Category, Decimal>,
}

impl BudgetConfig {
    pub(crate) fn category_budget(&self, category: Category) -> Decimal {
        self.category_budgets
            .get(&category)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    pub(crate) fn set_overall(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        self.overall_monthly = non_negative(amount)?;
        Ok(())
    }

    /// Setting a category budget to zero removes the override.
    pub(crate) fn set_category(
        &mut self,
        category: Category,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        let amount = non_negative(amount)?;
        if amount.is_zero() {
            self.category_budgets.remove(&category);
        } else {
            self.category_budgets.insert(category, amount);
        }
        Ok(())
    }
}

fn non_negative(amount: Decimal) -> Result<Decimal, LedgerError> {
    if amount < Decimal::ZERO {
        return Err(LedgerError::Validation(format!(
            "budget must not be negative, got {amount}"
        )));
    }
    check_amount(amount)?;
    Ok(amount)
}

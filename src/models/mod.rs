mod budget;
mod category;
mod expense;
mod month;

pub(crate) use budget::BudgetConfig;
pub(crate) use category::Category;
pub(crate) use expense::{Expense, ExpenseDraft, ExpenseFields};
pub(crate) use month::Month;

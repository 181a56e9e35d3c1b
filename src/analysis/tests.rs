#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::models::{BudgetConfig, Category, Expense, ExpenseDraft, ExpenseFields, Month};

fn expense(id: i64, amount: Decimal, on: &str, category: Category) -> Expense {
    let on = NaiveDate::parse_from_str(on, "%Y-%m-%d").unwrap();
    ExpenseDraft::new("alice", ExpenseFields::new("Item", amount, on, category), false)
        .into_expense(id)
}

fn ledger() -> Vec<Expense> {
    vec![
        expense(1, dec!(50), "2024-03-05", Category::Food),
        expense(2, dec!(200.25), "2024-03-06", Category::Travel),
        expense(3, dec!(80), "2024-04-01", Category::Food),
        expense(4, dec!(1500), "2024-02-10", Category::Bills),
        expense(5, dec!(19.99), "2023-11-30", Category::Health),
    ]
}

#[test]
fn test_breakdowns_add_up_to_total() {
    let records = ledger();
    let total = total_of(&records);
    assert_eq!(total, dec!(1850.24));
    assert_eq!(sum_by_category(&records).values().copied().sum::<Decimal>(), total);
    assert_eq!(sum_by_month(&records).values().copied().sum::<Decimal>(), total);
    assert_eq!(sum_by_day(&records).values().copied().sum::<Decimal>(), total);
}

#[test]
fn test_filtered_totals_match_breakdown() {
    let records = ledger();
    let filter = ExpenseFilter::from_request(Some("Food"), Some(ALL), None).unwrap();
    assert_eq!(
        total_of(&filter.apply(&records)),
        sum_by_category(&records)[&Category::Food]
    );
}

#[test]
fn test_dashboard() {
    let mut config = BudgetConfig::default();
    config.set_overall(dec!(300)).unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();

    let dash = Dashboard::for_day(&ledger(), today, &config);
    assert_eq!(dash.month, "2024-03".parse::<Month>().unwrap());
    assert_eq!(dash.total_spent, dec!(1850.24));
    assert_eq!(dash.month_spent, dec!(250.25));
    assert_eq!(dash.month_count, 2);
    assert_eq!(dash.remaining, dec!(49.75));
    assert_eq!(dash.status.label(), "Warning");
}

#[test]
fn test_dashboard_empty_month_without_budget() {
    let month: Month = "2024-05".parse().unwrap();
    let dash = Dashboard::build(&ledger(), month, &BudgetConfig::default());
    assert_eq!(dash.month_spent, Decimal::ZERO);
    assert_eq!(dash.month_count, 0);
    assert_eq!(dash.remaining, Decimal::ZERO);
    assert_eq!(dash.status, BudgetStatus::NoBudgetSet);
}

#[test]
fn test_category_alerts_for_one_month() {
    let mut config = BudgetConfig::default();
    config.set_category(Category::Food, dec!(100)).unwrap();
    let march: Month = "2024-03".parse().unwrap();

    let spent = sum_by_category(&records_in_month(&ledger(), march));
    let alerts = evaluate_categories(&spent, &config);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].spent, dec!(50));
    assert_eq!(alerts[0].status.label(), "OK");
}

#[test]
fn test_roll_then_insights_see_copies() {
    let mut records = vec![ExpenseDraft::new(
        "alice",
        ExpenseFields::new(
            "Rent",
            dec!(999),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            Category::Bills,
        ),
        true,
    )
    .into_expense(1)];
    let today = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
    for (i, draft) in roll_recurring(&records, "alice", today).into_iter().enumerate() {
        records.push(draft.into_expense(i as i64 + 2));
    }
    let insights = generate_insights(&records, today, &BudgetConfig::default());
    assert_eq!(
        insights[0].describe("₹"),
        "Top category this month: Bills (₹999.00)"
    );
    assert_eq!(
        insights[1].describe("₹"),
        "You spent the same as last month (₹999.00)"
    );
}

#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;
use crate::models::{ExpenseDraft, ExpenseFields};

fn expense(id: i64, amount: Decimal, on: &str, category: Category) -> Expense {
    let on = NaiveDate::parse_from_str(on, "%Y-%m-%d").unwrap();
    ExpenseDraft::new("alice", ExpenseFields::new("Item", amount, on, category), false)
        .into_expense(id)
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn month(s: &str) -> Month {
    s.parse().unwrap()
}

fn budget(overall: Decimal) -> BudgetConfig {
    let mut config = BudgetConfig::default();
    config.set_overall(overall).unwrap();
    config
}

fn descriptions(insights: &[Insight]) -> Vec<String> {
    insights.iter().map(|i| i.describe("₹")).collect()
}

// ── Direction / Trend ─────────────────────────────────────────

#[test]
fn test_direction() {
    assert_eq!(Direction::of(dec!(5)), Direction::More);
    assert_eq!(Direction::of(dec!(-0.01)), Direction::Less);
    assert_eq!(Direction::of(Decimal::ZERO), Direction::Same);
}

#[test]
fn test_trend_classify() {
    assert_eq!(Trend::classify(dec!(100), dec!(200), dec!(300)), Trend::Increasing);
    assert_eq!(Trend::classify(dec!(300), dec!(200), dec!(100)), Trend::Decreasing);
    assert_eq!(Trend::classify(dec!(100), dec!(300), dec!(200)), Trend::Fluctuating);
    assert_eq!(Trend::classify(dec!(100), dec!(100), dec!(200)), Trend::Fluctuating);
}

#[test]
fn test_percent_change() {
    assert_eq!(percent_change(dec!(500), dec!(1000)), dec!(50));
    assert_eq!(percent_change(dec!(500), Decimal::ZERO), Decimal::ZERO);
}

#[test]
fn test_percent_change_clamps_out_of_range() {
    assert_eq!(percent_change(Decimal::MAX, dec!(0.01)), Decimal::MAX);
    assert_eq!(percent_change(Decimal::MIN, dec!(0.01)), Decimal::MIN);
}

// ── generate_insights ─────────────────────────────────────────

#[test]
fn test_empty_ledger_has_no_insights() {
    assert!(generate_insights(&[], day("2024-04-15"), &budget(dec!(1000))).is_empty());
}

#[test]
fn test_month_over_month_increase() {
    let records = vec![
        expense(1, dec!(1000), "2024-03-10", Category::Food),
        expense(2, dec!(1500), "2024-04-10", Category::Food),
    ];
    let insights = generate_insights(&records, day("2024-04-15"), &BudgetConfig::default());
    assert_eq!(
        insights,
        vec![
            Insight::TopCategory {
                category: Category::Food,
                total: dec!(1500),
            },
            Insight::MonthOverMonth {
                current: dec!(1500),
                previous: dec!(1000),
                diff: dec!(500),
                percent: dec!(50),
                direction: Direction::More,
            },
        ]
    );
    assert_eq!(
        descriptions(&insights),
        vec![
            "Top category this month: Food (₹1,500.00)",
            "You spent +₹500.00 (+50.0%) more than last month (₹1,500.00 vs ₹1,000.00)",
        ]
    );
}

#[test]
fn test_month_over_month_decrease() {
    let records = vec![
        expense(1, dec!(1500), "2024-03-10", Category::Food),
        expense(2, dec!(1000), "2024-04-10", Category::Food),
    ];
    let insights = generate_insights(&records, day("2024-04-15"), &BudgetConfig::default());
    let text = descriptions(&insights);
    assert!(text[1].starts_with("You spent -₹500.00 (-33.3%) less than last month"));
}

#[test]
fn test_month_over_month_same() {
    let records = vec![
        expense(1, dec!(700), "2024-03-10", Category::Food),
        expense(2, dec!(700), "2024-04-10", Category::Food),
    ];
    let insights = generate_insights(&records, day("2024-04-15"), &BudgetConfig::default());
    assert_eq!(
        descriptions(&insights)[1],
        "You spent the same as last month (₹700.00)"
    );
}

#[test]
fn test_january_compares_with_december() {
    let records = vec![
        expense(1, dec!(400), "2023-12-31", Category::Food),
        expense(2, dec!(200), "2024-01-01", Category::Food),
    ];
    let insights = generate_insights(&records, day("2024-01-20"), &BudgetConfig::default());
    assert!(insights.iter().any(|i| matches!(
        i,
        Insight::MonthOverMonth {
            previous,
            direction: Direction::Less,
            ..
        } if *previous == dec!(400)
    )));
}

#[test]
fn test_no_comparison_without_previous_month() {
    let records = vec![
        expense(1, dec!(400), "2024-02-10", Category::Food),
        expense(2, dec!(200), "2024-04-01", Category::Travel),
    ];
    let insights = generate_insights(&records, day("2024-04-15"), &BudgetConfig::default());
    assert!(!insights
        .iter()
        .any(|i| matches!(i, Insight::MonthOverMonth { .. })));
}

#[test]
fn test_quiet_month_still_reports_budget() {
    let records = vec![expense(1, dec!(400), "2024-03-10", Category::Food)];
    let insights = generate_insights(&records, day("2024-05-02"), &budget(dec!(1000)));
    assert_eq!(
        insights,
        vec![Insight::BudgetRemaining {
            remaining: dec!(1000),
            status: BudgetStatus::Ok {
                percent: Decimal::ZERO
            },
        }]
    );
    assert_eq!(
        descriptions(&insights),
        vec!["₹1,000.00 left in this month's budget (0.0% used)"]
    );
}

#[test]
fn test_budget_warning() {
    let records = vec![expense(1, dec!(850), "2024-04-02", Category::Bills)];
    let insights = generate_insights(&records, day("2024-04-15"), &budget(dec!(1000)));
    assert_eq!(
        descriptions(&insights)[1],
        "Careful: ₹150.00 left in this month's budget (85.0% used)"
    );
}

#[test]
fn test_budget_exceeded() {
    let records = vec![expense(1, dec!(1200), "2024-04-02", Category::Bills)];
    let insights = generate_insights(&records, day("2024-04-15"), &budget(dec!(1000)));
    assert_eq!(
        insights[1],
        Insight::BudgetExceeded {
            spent: dec!(1200),
            budget: dec!(1000),
        }
    );
    assert_eq!(
        descriptions(&insights)[1],
        "Budget exceeded: spent ₹1,200.00 of a ₹1,000.00 monthly budget"
    );
}

#[test]
fn test_trend_over_last_three_months() {
    let records = vec![
        expense(1, dec!(999), "2023-12-05", Category::Other),
        expense(2, dec!(100), "2024-01-05", Category::Other),
        expense(3, dec!(200), "2024-02-05", Category::Other),
        expense(4, dec!(300), "2024-03-05", Category::Other),
    ];
    let insights = generate_insights(&records, day("2024-03-20"), &BudgetConfig::default());
    let trend = insights.last().unwrap();
    assert_eq!(
        *trend,
        Insight::Trend {
            months: [month("2024-01"), month("2024-02"), month("2024-03")],
            totals: [dec!(100), dec!(200), dec!(300)],
            trend: Trend::Increasing,
        }
    );
    assert_eq!(
        trend.describe("₹"),
        "Spending is increasing over 2024-01, 2024-02 and 2024-03 (₹100.00 → ₹200.00 → ₹300.00)"
    );
}

#[test]
fn test_trend_decreasing_and_fluctuating() {
    let falling = vec![
        expense(1, dec!(300), "2024-01-05", Category::Other),
        expense(2, dec!(200), "2024-02-05", Category::Other),
        expense(3, dec!(100), "2024-03-05", Category::Other),
    ];
    let insights = generate_insights(&falling, day("2024-03-20"), &BudgetConfig::default());
    assert!(matches!(
        insights.last(),
        Some(Insight::Trend {
            trend: Trend::Decreasing,
            ..
        })
    ));

    let mixed = vec![
        expense(1, dec!(100), "2024-01-05", Category::Other),
        expense(2, dec!(300), "2024-02-05", Category::Other),
        expense(3, dec!(200), "2024-03-05", Category::Other),
    ];
    let insights = generate_insights(&mixed, day("2024-03-20"), &BudgetConfig::default());
    assert!(matches!(
        insights.last(),
        Some(Insight::Trend {
            trend: Trend::Fluctuating,
            ..
        })
    ));
}

#[test]
fn test_no_trend_with_two_months() {
    let records = vec![
        expense(1, dec!(100), "2024-02-05", Category::Other),
        expense(2, dec!(200), "2024-03-05", Category::Other),
    ];
    let insights = generate_insights(&records, day("2024-03-20"), &BudgetConfig::default());
    assert!(!insights.iter().any(|i| matches!(i, Insight::Trend { .. })));
}

#[test]
fn test_extreme_amounts_still_produce_insights() {
    let records = vec![
        expense(1, Decimal::MAX, "2024-03-10", Category::Other),
        expense(2, Decimal::MAX, "2024-04-10", Category::Other),
        expense(3, Decimal::MAX, "2024-04-11", Category::Other),
    ];
    let insights = generate_insights(&records, day("2024-04-15"), &budget(dec!(0.01)));
    assert!(insights.contains(&Insight::BudgetExceeded {
        spent: Decimal::MAX,
        budget: dec!(0.01),
    }));
    assert_eq!(descriptions(&insights).len(), insights.len());
}

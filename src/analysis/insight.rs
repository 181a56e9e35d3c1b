//! Human-readable observations about an owner's spending.
//!
//! Each insight is computed independently and silently skipped when the data
//! it needs is missing, so the list may hold anywhere from zero to four items.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::aggregate::{records_in_month, sum_by_category, sum_by_month, top_category};
use super::budget::{evaluate, remaining_budget, BudgetStatus};
use crate::models::{BudgetConfig, Category, Expense, Month};
use crate::util::{format_amount, format_percent, format_signed_amount, format_signed_percent};

/// How this month's total compares with last month's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    More,
    Less,
    Same,
}

impl Direction {
    pub(crate) fn of(diff: Decimal) -> Self {
        if diff > Decimal::ZERO {
            Self::More
        } else if diff < Decimal::ZERO {
            Self::Less
        } else {
            Self::Same
        }
    }

    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::More => "more",
            Self::Less => "less",
            Self::Same => "same",
        }
    }
}

/// Shape of the last three monthly totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Trend {
    Increasing,
    Decreasing,
    Fluctuating,
}

impl Trend {
    /// Strictly rising or strictly falling totals; anything else fluctuates.
    pub(crate) fn classify(a: Decimal, b: Decimal, c: Decimal) -> Self {
        if c > b && b > a {
            Self::Increasing
        } else if c < b && b < a {
            Self::Decreasing
        } else {
            Self::Fluctuating
        }
    }

    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::Fluctuating => "fluctuating",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Insight {
    TopCategory {
        category: Category,
        total: Decimal,
    },
    MonthOverMonth {
        current: Decimal,
        previous: Decimal,
        diff: Decimal,
        percent: Decimal,
        direction: Direction,
    },
    BudgetExceeded {
        spent: Decimal,
        budget: Decimal,
    },
    BudgetRemaining {
        remaining: Decimal,
        status: BudgetStatus,
    },
    Trend {
        months: [Month; 3],
        totals: [Decimal; 3],
        trend: Trend,
    },
}

impl Insight {
    pub(crate) fn describe(&self, symbol: &str) -> String {
        match self {
            Self::TopCategory { category, total } => format!(
                "Top category this month: {category} ({})",
                format_amount(*total, symbol)
            ),
            Self::MonthOverMonth {
                current,
                previous,
                diff,
                percent,
                direction,
            } => match direction {
                Direction::Same => format!(
                    "You spent the same as last month ({})",
                    format_amount(*current, symbol)
                ),
                _ => format!(
                    "You spent {} ({}) {} than last month ({} vs {})",
                    format_signed_amount(*diff, symbol),
                    format_signed_percent(*percent),
                    direction.as_str(),
                    format_amount(*current, symbol),
                    format_amount(*previous, symbol)
                ),
            },
            Self::BudgetExceeded { spent, budget } => format!(
                "Budget exceeded: spent {} of a {} monthly budget",
                format_amount(*spent, symbol),
                format_amount(*budget, symbol)
            ),
            Self::BudgetRemaining { remaining, status } => {
                let used = status
                    .percent()
                    .map(|p| format!(" ({} used)", format_percent(p)))
                    .unwrap_or_default();
                let prefix = if matches!(status, BudgetStatus::Warning { .. }) {
                    "Careful: "
                } else {
                    ""
                };
                format!(
                    "{prefix}{} left in this month's budget{used}",
                    format_amount(*remaining, symbol)
                )
            }
            Self::Trend {
                months,
                totals,
                trend,
            } => format!(
                "Spending is {} over {}, {} and {} ({} → {} → {})",
                trend.as_str(),
                months[0],
                months[1],
                months[2],
                format_amount(totals[0], symbol),
                format_amount(totals[1], symbol),
                format_amount(totals[2], symbol)
            ),
        }
    }
}

/// `diff / previous * 100`, or zero when there is nothing to compare against.
/// A change too large to represent is clamped to `Decimal::MAX` (or `MIN`).
pub(crate) fn percent_change(diff: Decimal, previous: Decimal) -> Decimal {
    if previous.is_zero() {
        return Decimal::ZERO;
    }
    diff.checked_div(previous)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(if diff.is_sign_negative() == previous.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        })
}

/// Insights for the month containing `today`. An empty ledger yields none.
pub(crate) fn generate_insights(
    records: &[Expense],
    today: NaiveDate,
    budget: &BudgetConfig,
) -> Vec<Insight> {
    let mut insights = Vec::new();
    if records.is_empty() {
        return insights;
    }

    let month = Month::of(today);
    let by_month = sum_by_month(records);

    let this_month = records_in_month(records, month);
    if let Some((category, total)) = top_category(&sum_by_category(&this_month)) {
        insights.push(Insight::TopCategory { category, total });
    }

    let current = by_month.get(&month).copied();
    if let (Some(current), Some(previous)) = (current, by_month.get(&month.previous()).copied()) {
        let diff = current.saturating_sub(previous);
        insights.push(Insight::MonthOverMonth {
            current,
            previous,
            diff,
            percent: percent_change(diff, previous),
            direction: Direction::of(diff),
        });
    }

    let spent = current.unwrap_or(Decimal::ZERO);
    match evaluate(spent, budget.overall_monthly) {
        BudgetStatus::NoBudgetSet => {}
        BudgetStatus::Exceeded { .. } => insights.push(Insight::BudgetExceeded {
            spent,
            budget: budget.overall_monthly,
        }),
        status => insights.push(Insight::BudgetRemaining {
            remaining: remaining_budget(spent, budget.overall_monthly),
            status,
        }),
    }

    let last_three: Vec<(Month, Decimal)> = by_month
        .iter()
        .rev()
        .take(3)
        .map(|(m, t)| (*m, *t))
        .collect();
    if let &[(m3, c), (m2, b), (m1, a)] = last_three.as_slice() {
        insights.push(Insight::Trend {
            months: [m1, m2, m3],
            totals: [a, b, c],
            trend: Trend::classify(a, b, c),
        });
    }

    insights
}

#[cfg(test)]
#[path = "insight_tests.rs"]
mod tests;

//! Plain tabular views of a ledger, and CSV encoding of them.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::io::Write;
use std::path::Path;

use crate::analysis::{sum_by_category, sum_by_month};
use crate::models::{Expense, Month};

pub(crate) const RECORD_HEADERS: [&str; 4] = ["Name", "Amount", "Date", "Category"];
pub(crate) const SUMMARY_HEADERS: [&str; 3] = ["Section", "Key", "Total"];

/// One exported expense, columns in [`RECORD_HEADERS`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExportRow {
    pub name: String,
    pub amount: Decimal,
    pub date: String,
    pub category: String,
}

impl ExportRow {
    fn from_expense(expense: &Expense) -> Self {
        Self {
            name: expense.title.clone(),
            amount: expense.amount,
            date: expense.occurred_on.format("%Y-%m-%d").to_string(),
            category: expense.category.as_str().to_string(),
        }
    }

    fn cells(&self) -> [String; 4] {
        [
            self.name.clone(),
            self.amount.to_string(),
            self.date.clone(),
            self.category.clone(),
        ]
    }
}

/// Rows for every record, or only those in `month`, in ledger order.
pub(crate) fn export_rows(records: &[Expense], month: Option<Month>) -> Vec<ExportRow> {
    records
        .iter()
        .filter(|e| month.map_or(true, |m| m.contains(e.occurred_on)))
        .map(ExportRow::from_expense)
        .collect()
}

/// Category totals then monthly totals, as `(section, key, total)` rows.
pub(crate) fn summary_rows(records: &[Expense]) -> Vec<(&'static str, String, Decimal)> {
    let by_category = sum_by_category(records)
        .into_iter()
        .map(|(c, total)| ("Category", c.as_str().to_string(), total));
    let by_month = sum_by_month(records)
        .into_iter()
        .map(|(m, total)| ("Month", m.to_string(), total));
    by_category.chain(by_month).collect()
}

/// `expenses_all.csv`, or `expenses_<YYYY-MM>.csv` for a single month.
pub(crate) fn default_file_name(month: Option<Month>) -> String {
    match month {
        Some(m) => format!("expenses_{m}.csv"),
        None => "expenses_all.csv".to_string(),
    }
}

pub(crate) fn write_records<W: Write>(rows: &[ExportRow], out: W) -> Result<usize> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(RECORD_HEADERS)
        .context("Failed to write CSV header")?;
    for row in rows {
        wtr.write_record(row.cells())
            .context("Failed to write CSV record")?;
    }
    wtr.flush().context("Failed to flush CSV output")?;
    Ok(rows.len())
}

pub(crate) fn write_summary<W: Write>(
    rows: &[(&'static str, String, Decimal)],
    out: W,
) -> Result<usize> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(SUMMARY_HEADERS)
        .context("Failed to write CSV header")?;
    for (section, key, total) in rows {
        wtr.write_record([*section, key.as_str(), total.to_string().as_str()])
            .context("Failed to write CSV record")?;
    }
    wtr.flush().context("Failed to flush CSV output")?;
    Ok(rows.len())
}

pub(crate) fn create_file(path: &Path) -> Result<std::fs::File> {
    std::fs::File::create(path)
        .with_context(|| format!("Failed to create export file: {}", path.display()))
}

mod schema;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::{BudgetRepository, ExpenseRepository};
use crate::models::*;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub(crate) struct Database {
    conn: Connection,
}

impl Database {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .context("Failed to set database pragmas")?;
        let mut db = Self { conn };
        db.migrate().context("Database migration failed")?;
        debug!(path = %path.display(), "opened database");
        Ok(db)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&mut self) -> Result<()> {
        let has_version_table: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
            [],
            |row| row.get(0),
        )?;

        if !has_version_table {
            self.conn.execute_batch(schema::SCHEMA_V1)?;
            self.conn.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![schema::CURRENT_VERSION],
            )?;
            return Ok(());
        }

        let current: i32 = self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })
            .context("Failed to read schema version")?;
        if current != schema::CURRENT_VERSION {
            anyhow::bail!(
                "Unsupported database schema version {current} (expected {})",
                schema::CURRENT_VERSION
            );
        }

        Ok(())
    }
}

// ── Row decoding ──────────────────────────────────────────────

fn decimal_column(row: &Row, idx: usize) -> rusqlite::Result<Decimal> {
    let text: String = row.get(idx)?;
    Decimal::from_str(&text).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

fn date_column(row: &Row, idx: usize) -> rusqlite::Result<NaiveDate> {
    let text: String = row.get(idx)?;
    NaiveDate::parse_from_str(&text, DATE_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

fn category_column(row: &Row, idx: usize) -> rusqlite::Result<Category> {
    let text: String = row.get(idx)?;
    Category::from_str(&text).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

fn expense_from_row(row: &Row) -> rusqlite::Result<Expense> {
    Ok(Expense {
        id: row.get(0)?,
        owner: row.get(1)?,
        title: row.get(2)?,
        amount: decimal_column(row, 3)?,
        occurred_on: date_column(row, 4)?,
        category: category_column(row, 5)?,
        recurring: row.get(6)?,
    })
}

// ── Expenses ──────────────────────────────────────────────────

impl ExpenseRepository for Database {
    fn list_by_owner(&self, owner: &str) -> LedgerResult<Vec<Expense>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, owner, title, amount, occurred_on, category, recurring
             FROM expenses WHERE owner = ?1 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![owner], expense_from_row)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    fn insert(&mut self, draft: &ExpenseDraft) -> LedgerResult<i64> {
        self.conn.execute(
            "INSERT INTO expenses (owner, title, amount, occurred_on, category, recurring, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                draft.owner,
                draft.fields.title,
                draft.fields.amount.to_string(),
                draft.fields.occurred_on.format(DATE_FORMAT).to_string(),
                draft.fields.category.as_str(),
                draft.recurring,
                chrono::Utc::now().to_rfc3339(),
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(id, owner = %draft.owner, "inserted expense");
        Ok(id)
    }

    fn update(&mut self, id: i64, fields: &ExpenseFields) -> LedgerResult<()> {
        let changed = self.conn.execute(
            "UPDATE expenses SET title = ?1, amount = ?2, occurred_on = ?3, category = ?4
             WHERE id = ?5",
            params![
                fields.title,
                fields.amount.to_string(),
                fields.occurred_on.format(DATE_FORMAT).to_string(),
                fields.category.as_str(),
                id,
            ],
        )?;
        if changed == 0 {
            warn!(id, "update targeted a missing expense");
            return Err(LedgerError::NotFound(id));
        }
        Ok(())
    }

    fn delete(&mut self, id: i64) -> LedgerResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM expenses WHERE id = ?1", params![id])?;
        if changed == 0 {
            warn!(id, "delete targeted a missing expense");
            return Err(LedgerError::NotFound(id));
        }
        Ok(())
    }
}

// ── Budgets ───────────────────────────────────────────────────

impl BudgetRepository for Database {
    fn get_budget(&self, owner: &str) -> LedgerResult<BudgetConfig> {
        let overall = match self.conn.query_row(
            "SELECT overall FROM budgets WHERE owner = ?1",
            params![owner],
            |row| decimal_column(row, 0),
        ) {
            Ok(v) => v,
            Err(rusqlite::Error::QueryReturnedNoRows) => Decimal::ZERO,
            Err(e) => return Err(e.into()),
        };

        let mut stmt = self
            .conn
            .prepare("SELECT category, amount FROM category_budgets WHERE owner = ?1")?;
        let rows = stmt.query_map(params![owner], |row| {
            Ok((category_column(row, 0)?, decimal_column(row, 1)?))
        })?;

        Ok(BudgetConfig {
            overall_monthly: overall,
            category_budgets: rows.collect::<std::result::Result<_, _>>()?,
        })
    }

    fn save_budget(&mut self, owner: &str, config: &BudgetConfig) -> LedgerResult<()> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO budgets (owner, overall) VALUES (?1, ?2)
             ON CONFLICT(owner) DO UPDATE SET overall = ?2",
            params![owner, config.overall_monthly.to_string()],
        )?;
        tx.execute(
            "DELETE FROM category_budgets WHERE owner = ?1",
            params![owner],
        )?;
        for (category, amount) in &config.category_budgets {
            tx.execute(
                "INSERT INTO category_budgets (owner, category, amount) VALUES (?1, ?2, ?3)",
                params![owner, category.as_str(), amount.to_string()],
            )?;
        }
        tx.commit()?;
        Ok(())
    }
}

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::io::Write;
use std::path::PathBuf;

use super::{flag_value, has_flag, positional, shellexpand};
use crate::analysis::{
    evaluate_categories, generate_insights, records_in_month, sum_by_category, sum_by_day,
    total_of, BudgetStatus, Dashboard, ExpenseFilter, FilterOptions,
};
use crate::config::Config;
use crate::error::LedgerError;
use crate::export;
use crate::ledger::{BudgetRepository, ExpenseRepository, OwnerContext};
use crate::models::{Category, ExpenseFields, Month};
use crate::util::{format_amount, format_percent, parse_amount, parse_date, truncate};

const ADD_FLAGS: &[&str] = &["--amount", "--category", "--date"];
const EDIT_FLAGS: &[&str] = &["--title", "--amount", "--category", "--date"];
const LIST_FLAGS: &[&str] = &["--category", "--month", "--search"];
const EXPORT_FLAGS: &[&str] = &["--month"];

/// One command-line invocation against one owner's data.
pub(crate) struct Cli<'a, R, W> {
    repo: &'a mut R,
    out: W,
    owner: String,
    symbol: String,
    today: NaiveDate,
}

impl<'a, R, W> Cli<'a, R, W>
where
    R: ExpenseRepository + BudgetRepository,
    W: Write,
{
    pub(crate) fn new(repo: &'a mut R, out: W, config: &Config, today: NaiveDate) -> Self {
        Self {
            repo,
            out,
            owner: config.owner.clone(),
            symbol: config.currency_symbol.clone(),
            today,
        }
    }

    /// Dispatch `args` (program name and global flags already removed).
    pub(crate) fn run(&mut self, args: &[String]) -> Result<()> {
        let Some(command) = args.first() else {
            return self.dashboard();
        };
        let rest = &args[1..];
        match command.as_str() {
            "add" | "a" => self.add(rest),
            "edit" | "e" => self.edit(rest),
            "delete" | "rm" => self.delete(rest),
            "list" | "ls" => self.list(rest),
            "budget" | "b" => self.budget(rest),
            "summary" | "s" => self.summary(rest),
            "insights" | "i" => self.insights(),
            "roll" => self.roll(),
            "export" => self.export(rest),
            "--help" | "-h" | "help" => self.usage(),
            "--version" | "-V" | "version" => {
                writeln!(self.out, "spendwise {}", env!("CARGO_PKG_VERSION"))?;
                Ok(())
            }
            other => {
                self.usage()?;
                anyhow::bail!("Unknown command: {other}");
            }
        }
    }

    fn context(&self) -> Result<OwnerContext> {
        OwnerContext::load(&*self.repo, &self.owner)
            .with_context(|| format!("Failed to load data for '{}'", self.owner))
    }

    fn usage(&mut self) -> Result<()> {
        let text = "\
Spendwise — local-only personal expense tracker

Usage: spendwise [--user <name>] [command]

Commands:
  (none)                                  Dashboard for the current month
  add <title> --amount <n> --category <c> Record an expense
    --date <YYYY-MM-DD>                   Date of the expense (default: today)
    --recurring                           Repeat it on every `roll`
  edit <id> [--title t] [--amount n] [--date d] [--category c]
  delete <id>                             Remove an expense
  list [text]                             List expenses, optionally matching a title
    --category <c|All> --month <YYYY-MM|All> --search <text>
  budget                                  Show budgets
  budget <amount>                         Set the overall monthly budget
  budget <category> <amount>              Set a category budget (0 clears it)
  summary [YYYY-MM] [--daily]             Monthly totals and budget status
  insights                                Observations about your spending
  roll                                    Copy recurring expenses to today
  export [path] [--month <YYYY-MM>]       Export expenses to CSV
    --summary                             Export category and monthly totals instead
  --help, -h                              Show this help
  --version, -V                           Show version

Categories: ";
        let names: Vec<&str> = Category::all().iter().map(|c| c.as_str()).collect();
        writeln!(self.out, "{text}{}", names.join(", "))?;
        Ok(())
    }

    fn dashboard(&mut self) -> Result<()> {
        let ctx = self.context()?;
        let dash = Dashboard::for_day(ctx.ledger().records(), self.today, ctx.budget());

        writeln!(self.out, "Spendwise — {} — {}", ctx.owner(), dash.month)?;
        writeln!(self.out, "{}", "─".repeat(40))?;
        if ctx.ledger().is_empty() {
            writeln!(self.out, "No expenses yet. Add one with `spendwise add`.")?;
            return Ok(());
        }
        writeln!(self.out, "  Total spent:  {}", format_amount(dash.total_spent, &self.symbol))?;
        writeln!(
            self.out,
            "  This month:   {} ({} expenses)",
            format_amount(dash.month_spent, &self.symbol),
            dash.month_count
        )?;
        let remaining = match dash.status {
            BudgetStatus::NoBudgetSet => "no budget set".to_string(),
            status => format!("{} [{}]", format_amount(dash.remaining, &self.symbol), status.label()),
        };
        writeln!(self.out, "  Remaining:    {remaining}")?;

        let insights = generate_insights(ctx.ledger().records(), self.today, ctx.budget());
        if !insights.is_empty() {
            writeln!(self.out)?;
            for insight in &insights {
                writeln!(self.out, "  • {}", insight.describe(&self.symbol))?;
            }
        }
        Ok(())
    }

    fn add(&mut self, args: &[String]) -> Result<()> {
        let title = positional(args, ADD_FLAGS).join(" ");
        let amount = flag_value(args, "--amount")
            .ok_or_else(|| anyhow::anyhow!("Usage: spendwise add <title> --amount <n> --category <c>"))?;
        let category = flag_value(args, "--category")
            .ok_or_else(|| anyhow::anyhow!("Missing --category ({})", category_names()))?;
        let date = match flag_value(args, "--date") {
            Some(d) => parse_date(d)?,
            None => self.today,
        };
        let fields = ExpenseFields::new(title, parse_amount(amount, &self.symbol)?, date, category.parse()?);

        let mut ctx = self.context()?;
        let expense = ctx.add_expense(self.repo, fields, has_flag(args, "--recurring"))?;
        writeln!(
            self.out,
            "Added #{}: {} {} ({}, {}){}",
            expense.id,
            expense.title,
            format_amount(expense.amount, &self.symbol),
            expense.category,
            expense.occurred_on,
            if expense.recurring { " [recurring]" } else { "" }
        )?;
        Ok(())
    }

    fn edit(&mut self, args: &[String]) -> Result<()> {
        let id = parse_id(positional(args, EDIT_FLAGS).first().copied(), "edit")?;
        let mut ctx = self.context()?;
        let mut fields = ctx
            .ledger()
            .get(id)
            .map(|e| e.fields())
            .ok_or(LedgerError::NotFound(id))?;

        if let Some(title) = flag_value(args, "--title") {
            fields.title = title.to_string();
        }
        if let Some(amount) = flag_value(args, "--amount") {
            fields.amount = parse_amount(amount, &self.symbol)?;
        }
        if let Some(date) = flag_value(args, "--date") {
            fields.occurred_on = parse_date(date)?;
        }
        if let Some(category) = flag_value(args, "--category") {
            fields.category = category.parse()?;
        }

        let expense = ctx.edit_expense(self.repo, id, fields)?;
        writeln!(
            self.out,
            "Updated #{}: {} {} ({}, {})",
            expense.id,
            expense.title,
            format_amount(expense.amount, &self.symbol),
            expense.category,
            expense.occurred_on
        )?;
        Ok(())
    }

    fn delete(&mut self, args: &[String]) -> Result<()> {
        let id = parse_id(args.first().map(String::as_str), "delete")?;
        let mut ctx = self.context()?;
        let removed = ctx.delete_expense(self.repo, id)?;
        writeln!(self.out, "Deleted #{}: {}", removed.id, removed.title)?;
        Ok(())
    }

    fn list(&mut self, args: &[String]) -> Result<()> {
        let loose_text = positional(args, LIST_FLAGS).join(" ");
        let search = flag_value(args, "--search").or(Some(loose_text.as_str()));
        let filter = ExpenseFilter::from_request(
            flag_value(args, "--category"),
            flag_value(args, "--month"),
            search,
        )?;
        let ctx = self.context()?;
        let records = ctx.ledger().records();
        if records.is_empty() {
            writeln!(self.out, "No expenses yet")?;
            return Ok(());
        }

        let shown = filter.apply(records);
        writeln!(
            self.out,
            "{:<5} {:<10} {:<26} {:<13} {:>12}",
            "ID", "Date", "Title", "Category", "Amount"
        )?;
        writeln!(self.out, "{}", "─".repeat(70))?;
        for e in &shown {
            writeln!(
                self.out,
                "{:<5} {:<10} {:<26} {:<13} {:>12}{}",
                e.id,
                e.occurred_on.to_string(),
                truncate(&e.title, 26),
                e.category.as_str(),
                format_amount(e.amount, &self.symbol),
                if e.recurring { " ↻" } else { "" }
            )?;
        }
        writeln!(self.out, "{}", "─".repeat(70))?;
        writeln!(
            self.out,
            "{} of {} expenses, total {}",
            shown.len(),
            records.len(),
            format_amount(total_of(&shown), &self.symbol)
        )?;

        if !filter.is_empty() {
            let options = FilterOptions::from_records(records);
            let cats: Vec<&str> = options.categories.iter().map(|c| c.as_str()).collect();
            let months: Vec<String> = options.months.iter().map(|m| m.to_string()).collect();
            writeln!(self.out, "Categories: {}", cats.join(", "))?;
            writeln!(self.out, "Months:     {}", months.join(", "))?;
        }
        Ok(())
    }

    fn budget(&mut self, args: &[String]) -> Result<()> {
        let mut ctx = self.context()?;
        let mut config = ctx.budget().clone();

        match args {
            [] => {}
            [amount] => {
                config.set_overall(parse_amount(amount, &self.symbol)?)?;
                ctx.save_budget(self.repo, config)?;
            }
            [category, amount] => {
                config.set_category(category.parse()?, parse_amount(amount, &self.symbol)?)?;
                ctx.save_budget(self.repo, config)?;
            }
            _ => anyhow::bail!("Usage: spendwise budget [<category>] <amount>"),
        }

        let config = ctx.budget();
        let overall = if config.overall_monthly.is_zero() {
            "not set".to_string()
        } else {
            format_amount(config.overall_monthly, &self.symbol)
        };
        writeln!(self.out, "Monthly budget: {overall}")?;
        for (category, amount) in &config.category_budgets {
            writeln!(self.out, "  {:<14} {}", category.as_str(), format_amount(*amount, &self.symbol))?;
        }
        Ok(())
    }

    fn summary(&mut self, args: &[String]) -> Result<()> {
        let month = match positional(args, &[]).first() {
            Some(m) => m.parse::<Month>()?,
            None => Month::of(self.today),
        };
        let ctx = self.context()?;
        let records = ctx.ledger().records();
        let dash = Dashboard::build(records, month, ctx.budget());
        let in_month = records_in_month(records, month);
        let by_category = sum_by_category(&in_month);

        writeln!(self.out, "Spendwise — {month}")?;
        writeln!(self.out, "{}", "─".repeat(40))?;
        writeln!(self.out, "  Spent:      {}", format_amount(dash.month_spent, &self.symbol))?;
        writeln!(self.out, "  Expenses:   {}", dash.month_count)?;
        writeln!(self.out, "  All time:   {}", format_amount(dash.total_spent, &self.symbol))?;
        match dash.status {
            BudgetStatus::NoBudgetSet => writeln!(self.out, "  Budget:     not set")?,
            status => writeln!(
                self.out,
                "  Budget:     {} of {} used, {} left [{}]",
                format_percent(status.percent().unwrap_or_default()),
                format_amount(ctx.budget().overall_monthly, &self.symbol),
                format_amount(dash.remaining, &self.symbol),
                status.label()
            )?,
        }

        if !by_category.is_empty() {
            writeln!(self.out)?;
            writeln!(self.out, "By Category:")?;
            for (category, total) in &by_category {
                writeln!(self.out, "  {:<14} {}", category.as_str(), format_amount(*total, &self.symbol))?;
            }
        }

        let alerts = evaluate_categories(&by_category, ctx.budget());
        if !alerts.is_empty() {
            writeln!(self.out)?;
            writeln!(self.out, "Category Budgets:")?;
            for alert in &alerts {
                writeln!(
                    self.out,
                    "  {:<14} {} / {} ({}) [{}]",
                    alert.category.as_str(),
                    format_amount(alert.spent, &self.symbol),
                    format_amount(alert.budget, &self.symbol),
                    format_percent(alert.status.percent().unwrap_or_default()),
                    alert.status.label()
                )?;
            }
        }

        if has_flag(args, "--daily") && !in_month.is_empty() {
            writeln!(self.out)?;
            writeln!(self.out, "By Day:")?;
            for (day, total) in sum_by_day(&in_month) {
                writeln!(self.out, "  {day}  {}", format_amount(total, &self.symbol))?;
            }
        }
        Ok(())
    }

    fn insights(&mut self) -> Result<()> {
        let ctx = self.context()?;
        let insights = generate_insights(ctx.ledger().records(), self.today, ctx.budget());
        if insights.is_empty() {
            writeln!(self.out, "No insights yet")?;
        }
        for insight in &insights {
            writeln!(self.out, "• {}", insight.describe(&self.symbol))?;
        }
        Ok(())
    }

    fn roll(&mut self) -> Result<()> {
        let mut ctx = self.context()?;
        let created = ctx.roll_recurring(self.repo, self.today)?;
        if created.is_empty() {
            writeln!(self.out, "No recurring expenses")?;
        }
        for e in &created {
            writeln!(
                self.out,
                "Added #{}: {} {} ({}, {})",
                e.id,
                e.title,
                format_amount(e.amount, &self.symbol),
                e.category,
                e.occurred_on
            )?;
        }
        Ok(())
    }

    fn export(&mut self, args: &[String]) -> Result<()> {
        let month = flag_value(args, "--month")
            .filter(|m| !m.eq_ignore_ascii_case(crate::analysis::ALL))
            .map(str::parse::<Month>)
            .transpose()?;
        let path = positional(args, EXPORT_FLAGS)
            .first()
            .map(|p| PathBuf::from(shellexpand(p)))
            .unwrap_or_else(|| PathBuf::from(export::default_file_name(month)));

        let ctx = self.context()?;
        let records = ctx.ledger().records();
        let count = if has_flag(args, "--summary") {
            let scoped: Vec<_> = match month {
                Some(m) => records_in_month(records, m),
                None => records.to_vec(),
            };
            let rows = export::summary_rows(&scoped);
            if rows.is_empty() {
                0
            } else {
                export::write_summary(&rows, export::create_file(&path)?)?
            }
        } else {
            let rows = export::export_rows(records, month);
            if rows.is_empty() {
                0
            } else {
                export::write_records(&rows, export::create_file(&path)?)?
            }
        };

        if count == 0 {
            writeln!(self.out, "No expenses to export, no file written")?;
        } else {
            writeln!(self.out, "Exported {count} rows to {}", path.display())?;
        }
        Ok(())
    }
}

fn parse_id(arg: Option<&str>, command: &str) -> Result<i64> {
    let arg = arg.ok_or_else(|| anyhow::anyhow!("Usage: spendwise {command} <id>"))?;
    arg.trim_start_matches('#')
        .parse()
        .with_context(|| format!("Invalid expense id: {arg}"))
}

fn category_names() -> String {
    Category::all()
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;

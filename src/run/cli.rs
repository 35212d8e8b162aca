use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};

use crate::ledger::Ledger;
use crate::models::{parse_amount, parse_date, Kind, Transaction, DAY_FORMAT, DEFAULT_CATEGORIES};
use crate::summary;

/// LedgerTUI: local-only income and expense tracker.
///
/// Run without a subcommand to open the interactive TUI.
#[derive(Debug, Parser)]
#[command(name = "ledgertui", version, about)]
pub(crate) struct Cli {
    /// Path to the SQLite database
    #[arg(long, global = true, value_name = "FILE")]
    pub(crate) db: Option<PathBuf>,

    /// Path to the TOML config file
    #[arg(long, global = true, value_name = "FILE")]
    pub(crate) config: Option<PathBuf>,

    /// Log filter level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub(crate) log_level: Option<String>,

    #[command(subcommand)]
    pub(crate) command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Record a transaction
    Add {
        /// Positive amount, e.g. 12.50
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category label, e.g. Food
        category: String,
        /// expense or income
        #[arg(long, short, default_value = "expense")]
        kind: String,
        /// YYYY-MM-DD or "YYYY-MM-DD HH:MM:SS" (default: now)
        #[arg(long, short)]
        date: Option<String>,
    },
    /// Delete a transaction by id
    Delete { id: i64 },
    /// List transactions
    List {
        /// Only show this category (case-insensitive)
        #[arg(long, short)]
        category: Option<String>,
    },
    /// Print totals and category breakdowns
    #[command(alias = "s")]
    Summary,
    /// Per-category totals by type
    Categories,
    /// Export all transactions to CSV
    Export {
        /// Output file (default: ~/ledgertui-export-YYYY-MM-DD.csv)
        path: Option<String>,
    },
}

pub(crate) fn as_cli(command: Command, ledger: &mut Ledger) -> Result<()> {
    match command {
        Command::Add {
            amount,
            category,
            kind,
            date,
        } => cli_add(ledger, &amount, &category, &kind, date.as_deref()),
        Command::Delete { id } => cli_delete(ledger, id),
        Command::List { category } => {
            cli_list(ledger, category.as_deref());
            Ok(())
        }
        Command::Summary => cli_summary(ledger),
        Command::Categories => {
            cli_categories(ledger);
            Ok(())
        }
        Command::Export { path } => cli_export(ledger, path.as_deref()),
    }
}

fn cli_add(
    ledger: &mut Ledger,
    amount: &str,
    category: &str,
    kind: &str,
    date: Option<&str>,
) -> Result<()> {
    let amount = parse_amount(amount)?;
    let date = date.map(parse_date).transpose()?;
    if category.trim().is_empty() {
        anyhow::bail!("Please enter a category");
    }

    let id = ledger.add(amount, category.trim(), kind, date)?;
    if let Some(txn) = ledger.get(id) {
        println!("Added #{id}: {txn}");
    }
    Ok(())
}

fn cli_delete(ledger: &mut Ledger, id: i64) -> Result<()> {
    let label = ledger.get(id).map(|t| t.to_string());
    let affected = ledger.delete(id)?;
    match (affected, label) {
        (0, _) => println!("No transaction with id {id}"),
        (_, Some(label)) => println!("Deleted #{id}: {label}"),
        (_, None) => println!("Deleted #{id}"),
    }
    Ok(())
}

fn print_table(txns: &[&Transaction]) {
    println!(
        "{:<6} {:<12} {:<8} {:<20} {:>12}",
        "ID", "Date", "Type", "Category", "Amount"
    );
    println!("{}", "─".repeat(62));
    for txn in txns {
        println!(
            "{:<6} {:<12} {:<8} {:<20} {:>12}",
            txn.id().unwrap_or(0),
            txn.date().format(DAY_FORMAT),
            txn.kind().label(),
            txn.category(),
            format!("${:.2}", txn.amount()),
        );
    }
}

fn cli_list(ledger: &Ledger, category: Option<&str>) {
    let txns: Vec<&Transaction> = match category {
        Some(cat) => ledger.filter_by_category(cat),
        None => ledger.transactions().iter().collect(),
    };

    if txns.is_empty() {
        match category {
            Some(cat) => println!("No transactions in category '{cat}'"),
            None => println!("No transactions"),
        }
        return;
    }
    print_table(&txns);
}

fn print_breakdown(title: &str, entries: &[(String, Decimal)], total: Decimal) {
    if entries.is_empty() {
        return;
    }
    println!();
    println!("{title}:");
    for (name, amount) in entries {
        println!(
            "  {name:<24} ${amount:>10.2}  {:>5.1}%",
            summary::share(*amount, total)
        );
    }
}

fn cli_summary(ledger: &Ledger) -> Result<()> {
    let today = Local::now().date_naive();
    let s = ledger.summary(today);

    println!("LedgerTUI — {}", today.format("%B %Y"));
    println!("{}", "─".repeat(40));
    println!("  Income:       ${:.2}", s.all_time.income);
    println!("  Expenses:     ${:.2}", s.all_time.expense);
    println!("  Balance:      ${:.2}", s.all_time.balance);
    println!();
    println!("  This month");
    println!("  Income:       ${:.2}", s.month.income);
    println!("  Expenses:     ${:.2}", s.month.expense);
    println!("  Balance:      ${:.2}", s.month.balance);
    println!("  Total Txns:   {}", ledger.store().count()?);

    print_breakdown(
        "Expenses by Category",
        s.categories.for_kind(Kind::Expense),
        s.all_time.expense,
    );
    print_breakdown(
        "Income by Category",
        s.categories.for_kind(Kind::Income),
        s.all_time.income,
    );

    let recent = summary::recent(ledger.transactions(), 5);
    if !recent.is_empty() {
        println!();
        println!("Recent:");
        for txn in recent.iter().rev() {
            println!("  {txn}");
        }
    }
    Ok(())
}

fn cli_categories(ledger: &Ledger) {
    if ledger.is_empty() {
        println!("No transactions yet. Suggested categories: {}", DEFAULT_CATEGORIES.join(", "));
        return;
    }

    let s = ledger.summary(Local::now().date_naive());
    println!("{:<8} {:<24} {:>12} {:>7}", "Type", "Category", "Total", "Share");
    println!("{}", "─".repeat(54));
    for kind in Kind::all() {
        let total = match kind {
            Kind::Expense => s.all_time.expense,
            Kind::Income => s.all_time.income,
        };
        for (name, amount) in s.categories.for_kind(*kind) {
            println!(
                "{:<8} {:<24} {:>12} {:>6.1}%",
                kind.label(),
                name,
                format!("${amount:.2}"),
                summary::share(*amount, total)
            );
        }
    }
}

fn cli_export(ledger: &Ledger, path: Option<&str>) -> Result<()> {
    let output_path = path.map(shellexpand).unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!(
            "{home}/ledgertui-export-{}.csv",
            Local::now().format(DAY_FORMAT)
        )
    });

    let count = crate::export::to_path(ledger.transactions(), Path::new(&output_path))
        .with_context(|| format!("Export to {output_path} failed"))?;
    tracing::info!(count, path = %output_path, "exported transactions");
    if count == 0 {
        println!("No transactions to export (wrote header only to {output_path})");
    } else {
        println!("Exported {count} transactions to {output_path}");
    }
    Ok(())
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}

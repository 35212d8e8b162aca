use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use super::app::{App, InputMode, PendingAction, Screen};
use crate::ledger::Ledger;
use crate::models::{parse_amount, parse_date, Kind, LedgerError};

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut Ledger) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit LedgerTUI", cmd_quit, r);
    register_command!("quit", "Quit LedgerTUI", cmd_quit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("t", "Go to Transactions", cmd_transactions, r);
    register_command!("transactions", "Go to Transactions", cmd_transactions, r);
    register_command!("a", "Open the add form", cmd_add, r);
    register_command!("add", "Open the add form", cmd_add, r);
    register_command!(
        "add-txn",
        "Add transaction (e.g. :add-txn 4.50 Food expense 2024-01-15)",
        cmd_add_txn,
        r
    );
    register_command!(
        "delete-txn",
        "Delete selected transaction",
        cmd_delete_txn,
        r
    );
    register_command!(
        "filter",
        "Filter transactions by category (e.g. :filter rent)",
        cmd_filter,
        r
    );
    register_command!("f", "Filter transactions by category", cmd_filter, r);
    register_command!("resync", "Reload the ledger from disk", cmd_resync, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, ledger)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

pub(crate) fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| (levenshtein(input, k), **k))
        .unwrap_or(&"help")
        .to_string()
}

pub(crate) fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Arguments of `:add-txn`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AddArgs {
    pub(crate) amount: Decimal,
    pub(crate) category: String,
    pub(crate) kind: Kind,
    pub(crate) date: Option<NaiveDateTime>,
}

/// Parse `<amount> <category words...> [expense|income] [YYYY-MM-DD]`.
///
/// Trailing tokens are peeled off right to left: a date first, then a
/// kind. Whatever remains after the amount is the category.
pub(crate) fn parse_add_args(args: &str) -> Result<AddArgs, String> {
    let mut tokens: Vec<&str> = args.split_whitespace().collect();
    if tokens.len() < 2 {
        return Err("Usage: :add-txn <amount> <category> [expense|income] [YYYY-MM-DD]".into());
    }

    let amount = parse_amount(tokens.remove(0)).map_err(|e| e.to_string())?;

    let mut date = None;
    if let Some(last) = tokens.last() {
        if tokens.len() > 1 {
            if let Ok(d) = parse_date(last) {
                date = Some(d);
                tokens.pop();
            }
        }
    }

    let mut kind = Kind::Expense;
    if let Some(last) = tokens.last() {
        if tokens.len() > 1 {
            if let Ok(k) = Kind::parse(last) {
                kind = k;
                tokens.pop();
            }
        }
    }

    let category = tokens.join(" ");
    if category.is_empty() {
        return Err("Please enter a category".into());
    }

    Ok(AddArgs {
        amount,
        category,
        kind,
        date,
    })
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    app.refresh(ledger);
    Ok(())
}

fn cmd_transactions(_args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    app.screen = Screen::Transactions;
    app.refresh(ledger);
    Ok(())
}

fn cmd_add(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.screen = Screen::Add;
    app.input_mode = InputMode::Editing;
    Ok(())
}

fn cmd_add_txn(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    let parsed = match parse_add_args(args) {
        Ok(p) => p,
        Err(msg) => {
            app.set_status(msg);
            return Ok(());
        }
    };

    match ledger.add(
        parsed.amount,
        &parsed.category,
        parsed.kind.as_str(),
        parsed.date,
    ) {
        Ok(id) => {
            let added = ledger.get(id).map(|t| t.to_string()).unwrap_or_default();
            app.refresh(ledger);
            app.set_status(format!("Added #{id}: {added}"));
            Ok(())
        }
        Err(e) => match e.downcast_ref::<LedgerError>() {
            Some(invalid) => {
                app.set_status(format!("Error: {invalid}"));
                Ok(())
            }
            None => Err(e),
        },
    }
}

fn cmd_delete_txn(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    if app.screen != Screen::Transactions || app.transactions.is_empty() {
        app.set_status("Navigate to Transactions and select one first");
        return Ok(());
    }

    let target = app
        .selected_transaction()
        .and_then(|txn| txn.id().map(|id| (id, txn.to_string())));
    if let Some((id, label)) = target {
        app.confirm_message = format!("Delete #{id} ({label})?");
        app.pending_action = Some(PendingAction::DeleteTransaction { id, label });
        app.input_mode = InputMode::Confirm;
    }

    Ok(())
}

fn cmd_filter(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    app.filter_input = args.to_string();
    app.screen = Screen::Transactions;
    app.cursor.top();
    app.refresh(ledger);
    if args.is_empty() {
        app.set_status("Filter cleared");
    } else {
        app.set_status(format!(
            "{} transactions in '{args}'",
            app.transactions.len()
        ));
    }
    Ok(())
}

fn cmd_resync(_args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    ledger.resync()?;
    app.refresh(ledger);
    app.set_status(format!("Reloaded {} transactions", ledger.len()));
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

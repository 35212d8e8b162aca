mod schema;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use rusqlite::{params, Connection};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::models::{Transaction, DATE_FORMAT};

/// SQLite-backed transaction table.
///
/// Holds only the file path. Every operation opens its own connection,
/// commits, and closes it again.
pub(crate) struct Store {
    path: PathBuf,
}

/// A row exactly as read from the table, before validation.
struct StoredRow {
    id: i64,
    amount: f64,
    category: String,
    kind: String,
    date: String,
}

impl StoredRow {
    fn into_transaction(self) -> Result<Transaction> {
        let id = self.id;
        // f64 Display is the shortest text that reads back to the same value.
        let amount = Decimal::from_str(&self.amount.to_string())
            .with_context(|| format!("Row {id}: amount {} is not representable", self.amount))?;
        let date = NaiveDateTime::parse_from_str(&self.date, DATE_FORMAT)
            .with_context(|| format!("Row {id}: bad date '{}'", self.date))?;
        let txn = Transaction::new(amount, self.category, &self.kind, Some(date))
            .with_context(|| format!("Row {id}: invalid transaction"))?;
        Ok(txn.with_id(id))
    }
}

impl Store {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let store = Self {
            path: path.to_path_buf(),
        };
        store
            .connect()?
            .execute_batch(schema::SCHEMA)
            .context("Failed to create transactions table")?;
        tracing::debug!(path = %path.display(), "store opened");
        Ok(store)
    }

    fn connect(&self) -> Result<Connection> {
        Connection::open(&self.path)
            .with_context(|| format!("Failed to open database: {}", self.path.display()))
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Persist one transaction and return its generated id.
    pub(crate) fn insert(&self, txn: &Transaction) -> Result<i64> {
        let amount = txn
            .amount()
            .to_f64()
            .with_context(|| format!("Amount {} cannot be stored", txn.amount()))?;

        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        tx.execute(
            "INSERT INTO transactions (amount, category, type, date) VALUES (?1, ?2, ?3, ?4)",
            params![
                amount,
                txn.category(),
                txn.kind().as_str(),
                txn.date().format(DATE_FORMAT).to_string(),
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(id)
    }

    /// All rows in insertion (id) order, each re-validated.
    pub(crate) fn load_all(&self) -> Result<Vec<Transaction>> {
        let conn = self.connect()?;
        let mut stmt =
            conn.prepare("SELECT id, amount, category, type, date FROM transactions ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(StoredRow {
                id: row.get(0)?,
                amount: row.get(1)?,
                category: row.get(2)?,
                kind: row.get(3)?,
                date: row.get(4)?,
            })
        })?;
        let rows = rows.collect::<std::result::Result<Vec<_>, _>>()?;
        rows.into_iter().map(StoredRow::into_transaction).collect()
    }

    /// Delete by primary key. Returns the number of rows removed, which is
    /// zero when no row has that id.
    pub(crate) fn delete(&self, id: i64) -> Result<usize> {
        let conn = self.connect()?;
        Ok(conn.execute("DELETE FROM transactions WHERE id = ?1", params![id])?)
    }

    pub(crate) fn count(&self) -> Result<i64> {
        let conn = self.connect()?;
        Ok(conn.query_row("SELECT COUNT(*) FROM transactions", [], |row| row.get(0))?)
    }
}

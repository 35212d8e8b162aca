use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::path::Path;

use crate::db::Store;
use crate::models::Transaction;
use crate::summary::{self, Summary};

/// The user's ledger: the durable store plus its in-memory mirror.
///
/// The mirror is owned here and only handed out as a borrowed slice.
/// Appends keep it in step with the store directly; anything else goes
/// through [`Ledger::resync`].
pub(crate) struct Ledger {
    store: Store,
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let store = Store::open(path)?;
        let mut ledger = Self {
            store,
            transactions: Vec::new(),
        };
        ledger.resync()?;
        tracing::info!(
            path = %ledger.store.path().display(),
            count = ledger.len(),
            "ledger opened"
        );
        Ok(ledger)
    }

    /// Validate, persist and append a transaction. Returns its id.
    ///
    /// A validation failure is a [`crate::models::LedgerError`] inside the
    /// returned error and leaves the ledger untouched.
    pub(crate) fn add(
        &mut self,
        amount: Decimal,
        category: &str,
        kind: &str,
        date: Option<NaiveDateTime>,
    ) -> Result<i64> {
        let txn = Transaction::new(amount, category, kind, date)?;
        let id = self.store.insert(&txn)?;
        tracing::info!(
            id,
            kind = %txn.kind(),
            amount = %txn.amount(),
            category = txn.category(),
            "transaction added"
        );
        self.transactions.push(txn.with_id(id));
        Ok(id)
    }

    /// Delete by persisted id, then rebuild the mirror from the store.
    /// Returns the number of rows removed; an unknown id removes nothing and
    /// is not an error.
    pub(crate) fn delete(&mut self, id: i64) -> Result<usize> {
        let affected = self.store.delete(id)?;
        if affected == 0 {
            tracing::warn!(id, "delete matched no transaction");
        } else {
            tracing::info!(id, "transaction deleted");
        }
        self.resync()?;
        Ok(affected)
    }

    /// Discard the in-memory sequence and reload it from the store.
    pub(crate) fn resync(&mut self) -> Result<()> {
        self.transactions = self.store.load_all()?;
        tracing::debug!(count = self.transactions.len(), "ledger resynced");
        Ok(())
    }

    pub(crate) fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub(crate) fn get(&self, id: i64) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id() == Some(id))
    }

    pub(crate) fn len(&self) -> usize {
        self.transactions.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub(crate) fn filter_by_category(&self, category: &str) -> Vec<&Transaction> {
        summary::filter_by_category(&self.transactions, category)
    }

    pub(crate) fn summary(&self, today: NaiveDate) -> Summary {
        summary::summarize(&self.transactions, today)
    }

    pub(crate) fn store(&self) -> &Store {
        &self.store
    }
}

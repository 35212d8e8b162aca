use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::models::{Transaction, DATE_FORMAT};

/// Write transactions as CSV (`id,date,type,category,amount`) in sequence
/// order. Returns the number of data rows written.
pub(crate) fn write_csv<W: Write>(txns: &[Transaction], writer: W) -> Result<usize> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["id", "date", "type", "category", "amount"])?;
    for txn in txns {
        wtr.write_record([
            txn.id().map(|id| id.to_string()).unwrap_or_default(),
            txn.date().format(DATE_FORMAT).to_string(),
            txn.kind().as_str().to_string(),
            txn.category().to_string(),
            format!("{:.2}", txn.amount()),
        ])?;
    }
    wtr.flush()?;
    Ok(txns.len())
}

pub(crate) fn to_path(txns: &[Transaction], path: &Path) -> Result<usize> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create export file: {}", path.display()))?;
    write_csv(txns, file)
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod export_tests;

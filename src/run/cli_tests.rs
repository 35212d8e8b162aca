#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;
use tempfile::TempDir;

use super::cli::{as_cli, Command};
use crate::ledger::Ledger;
use crate::models::{Kind, LedgerError};

fn temp_ledger() -> (TempDir, Ledger) {
    let dir = TempDir::new().unwrap();
    let ledger = Ledger::open(&dir.path().join("ledger.db")).unwrap();
    (dir, ledger)
}

fn add(amount: &str, category: &str, kind: &str, date: Option<&str>) -> Command {
    Command::Add {
        amount: amount.to_string(),
        category: category.to_string(),
        kind: kind.to_string(),
        date: date.map(str::to_string),
    }
}

#[test]
fn test_add_records_transaction() {
    let (_dir, mut ledger) = temp_ledger();
    as_cli(add("1200", " Salary ", "income", Some("2024-01-05")), &mut ledger).unwrap();

    assert_eq!(ledger.len(), 1);
    let txn = &ledger.transactions()[0];
    assert_eq!(txn.amount(), dec!(1200));
    assert_eq!(txn.category(), "Salary");
    assert_eq!(txn.kind(), Kind::Income);
}

#[test]
fn test_add_rejects_empty_category() {
    let (_dir, mut ledger) = temp_ledger();
    let err = as_cli(add("5", "   ", "expense", None), &mut ledger).unwrap_err();
    assert_eq!(err.to_string(), "Please enter a category");
    assert!(ledger.is_empty());
}

#[test]
fn test_add_rejects_bad_input() {
    let (_dir, mut ledger) = temp_ledger();

    let err = as_cli(add("-5", "Food", "expense", None), &mut ledger).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<LedgerError>(),
        Some(LedgerError::InvalidAmount(_))
    ));

    let err = as_cli(add("5", "Food", "gift", None), &mut ledger).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<LedgerError>(),
        Some(LedgerError::InvalidKind(_))
    ));

    let err = as_cli(add("5", "Food", "expense", Some("01/05/2024")), &mut ledger).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<LedgerError>(),
        Some(LedgerError::InvalidDate(_))
    ));

    assert!(ledger.is_empty());
}

#[test]
fn test_delete_absent_id_is_ok() {
    let (_dir, mut ledger) = temp_ledger();
    ledger.add(dec!(3), "Food", "expense", None).unwrap();

    as_cli(Command::Delete { id: 9_999 }, &mut ledger).unwrap();
    assert_eq!(ledger.len(), 1);
}

#[test]
fn test_delete_existing_id() {
    let (_dir, mut ledger) = temp_ledger();
    let id = ledger.add(dec!(3), "Food", "expense", None).unwrap();

    as_cli(Command::Delete { id }, &mut ledger).unwrap();
    assert!(ledger.is_empty());
}

#[test]
fn test_report_commands_succeed() {
    let (_dir, mut ledger) = temp_ledger();
    as_cli(Command::Categories, &mut ledger).unwrap();
    as_cli(Command::Summary, &mut ledger).unwrap();

    ledger.add(dec!(1200), "Salary", "income", None).unwrap();
    ledger.add(dec!(300), "Rent", "expense", None).unwrap();
    as_cli(Command::Categories, &mut ledger).unwrap();
    as_cli(Command::Summary, &mut ledger).unwrap();
    as_cli(Command::List { category: Some("rent".into()) }, &mut ledger).unwrap();
}

#[test]
fn test_export_writes_file() {
    let (dir, mut ledger) = temp_ledger();
    ledger.add(dec!(4.5), "Coffee", "expense", None).unwrap();
    let path = dir.path().join("out.csv");

    as_cli(
        Command::Export {
            path: Some(path.to_string_lossy().into_owned()),
        },
        &mut ledger,
    )
    .unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 2);
    assert!(text.ends_with(",expense,Coffee,4.50\n"));
}

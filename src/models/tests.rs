#![allow(clippy::unwrap_used)]

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

// ── Transaction::new ──────────────────────────────────────────

#[test]
fn test_new_expense() {
    let txn = Transaction::new(dec!(300), "Rent", "expense", Some(at(2024, 1, 6))).unwrap();
    assert!(txn.id().is_none());
    assert_eq!(txn.amount(), dec!(300));
    assert_eq!(txn.category(), "Rent");
    assert_eq!(txn.kind(), Kind::Expense);
    assert!(txn.is_expense());
    assert!(!txn.is_income());
    assert_eq!(txn.date(), at(2024, 1, 6));
}

#[test]
fn test_new_income() {
    let txn = Transaction::new(dec!(1200), "Salary", "income", Some(at(2024, 1, 5))).unwrap();
    assert!(txn.is_income());
    assert_eq!(txn.kind(), Kind::Income);
}

#[test]
fn test_kind_is_case_insensitive() {
    for raw in ["INCOME", "Income", "iNcOmE", " income "] {
        let txn = Transaction::new(dec!(1), "X", raw, None).unwrap();
        assert_eq!(txn.kind(), Kind::Income, "failed for {raw:?}");
    }
    let txn = Transaction::new(dec!(1), "X", "EXPENSE", None).unwrap();
    assert_eq!(txn.kind().as_str(), "expense");
}

#[test]
fn test_rejects_zero_amount() {
    let err = Transaction::new(Decimal::ZERO, "Food", "expense", None).unwrap_err();
    assert!(matches!(err, LedgerError::InvalidAmount(_)));
}

#[test]
fn test_rejects_negative_amounts() {
    for amount in [dec!(-5), dec!(-0.01), dec!(-1000000)] {
        let err = Transaction::new(amount, "Food", "expense", None).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidAmount(_)));
    }
}

#[test]
fn test_amount_checked_before_kind() {
    let err = Transaction::new(dec!(-1), "Food", "gift", None).unwrap_err();
    assert!(matches!(err, LedgerError::InvalidAmount(_)));
}

#[test]
fn test_rejects_unknown_kinds() {
    for raw in ["", "transfer", "expenses", "in come", "refund"] {
        let err = Transaction::new(dec!(10), "Food", raw, None).unwrap_err();
        assert_eq!(err, LedgerError::InvalidKind(raw.to_string()));
    }
}

#[test]
fn test_empty_category_accepted() {
    let txn = Transaction::new(dec!(10), "", "expense", None).unwrap();
    assert_eq!(txn.category(), "");
}

#[test]
fn test_date_defaults_to_now_at_second_precision() {
    let before = chrono::Local::now().naive_local().with_nanosecond(0).unwrap();
    let txn = Transaction::new(dec!(10), "Food", "expense", None).unwrap();
    let after = chrono::Local::now().naive_local();
    assert!(txn.date() >= before);
    assert!(txn.date() <= after);
    assert_eq!(txn.date().nanosecond(), 0);
}

#[test]
fn test_supplied_date_drops_subseconds() {
    let precise = at(2024, 3, 1).with_nanosecond(123_456_789).unwrap();
    let txn = Transaction::new(dec!(10), "Food", "expense", Some(precise)).unwrap();
    assert_eq!(txn.date(), at(2024, 3, 1));
}

#[test]
fn test_with_id() {
    let txn = Transaction::new(dec!(10), "Food", "expense", None)
        .unwrap()
        .with_id(42);
    assert_eq!(txn.id(), Some(42));
}

#[test]
fn test_display() {
    let txn = Transaction::new(dec!(300), "Rent", "expense", Some(at(2024, 1, 6))).unwrap();
    assert_eq!(txn.to_string(), "Expense: $300.00 for Rent on 2024-01-06");

    let txn = Transaction::new(dec!(4.5), "Tips", "income", Some(at(2024, 2, 1))).unwrap();
    assert_eq!(txn.to_string(), "Income: $4.50 for Tips on 2024-02-01");
}

// ── parse_amount ──────────────────────────────────────────────

#[test]
fn test_parse_amount_valid() {
    assert_eq!(parse_amount("1200").unwrap(), dec!(1200));
    assert_eq!(parse_amount("4.50").unwrap(), dec!(4.5));
    assert_eq!(parse_amount("  0.01 ").unwrap(), dec!(0.01));
}

#[test]
fn test_parse_amount_non_numeric() {
    for raw in ["", "abc", "12abc", "NaN", "inf", "$", "1,2.3.4"] {
        let err = parse_amount(raw).unwrap_err();
        assert!(
            matches!(err, LedgerError::InvalidAmount(_)),
            "expected InvalidAmount for {raw:?}"
        );
    }
}

#[test]
fn test_parse_amount_non_positive() {
    assert!(matches!(
        parse_amount("0").unwrap_err(),
        LedgerError::InvalidAmount(_)
    ));
    assert!(matches!(
        parse_amount("-5").unwrap_err(),
        LedgerError::InvalidAmount(_)
    ));
}

#[test]
fn test_amount_upper_bound() {
    assert_eq!(max_amount(), dec!(999999999999.99));
    let txn = Transaction::new(max_amount(), "Lottery", "income", None).unwrap();
    assert_eq!(txn.amount(), dec!(999999999999.99));

    for amount in [
        dec!(1000000000000),
        Decimal::MAX,
        "50000000000000000000000000000".parse::<Decimal>().unwrap(),
    ] {
        let err = Transaction::new(amount, "Lottery", "income", None).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidAmount(_)));
    }
    assert!(matches!(
        parse_amount("79228162514264337593543950335").unwrap_err(),
        LedgerError::InvalidAmount(_)
    ));
}

#[test]
fn test_amount_whole_cents_only() {
    for raw in ["1.001", "0.005", "0.10000000000000000001"] {
        assert!(
            matches!(parse_amount(raw).unwrap_err(), LedgerError::InvalidAmount(_)),
            "expected InvalidAmount for {raw:?}"
        );
    }
    let err = Transaction::new(dec!(0.001), "Food", "expense", None).unwrap_err();
    assert!(matches!(err, LedgerError::InvalidAmount(_)));

    // Trailing zeros are not extra precision.
    assert_eq!(parse_amount("1.500").unwrap(), dec!(1.5));
    assert_eq!(parse_amount("999999999999.99").unwrap(), max_amount());
}

// ── parse_date ────────────────────────────────────────────────

#[test]
fn test_parse_date_full() {
    let dt = parse_date("2024-01-05 14:03:59").unwrap();
    assert_eq!(dt.format(DATE_FORMAT).to_string(), "2024-01-05 14:03:59");
}

#[test]
fn test_parse_date_day_only_is_midnight() {
    let dt = parse_date("2024-01-05").unwrap();
    assert_eq!(dt.format(DATE_FORMAT).to_string(), "2024-01-05 00:00:00");
}

#[test]
fn test_parse_date_invalid() {
    for raw in ["", "01/05/2024", "2024-13-01", "2024-02-30", "yesterday"] {
        assert_eq!(
            parse_date(raw).unwrap_err(),
            LedgerError::InvalidDate(raw.to_string())
        );
    }
}

// ── Kind ──────────────────────────────────────────────────────

#[test]
fn test_kind_roundtrip() {
    for kind in Kind::all() {
        assert_eq!(Kind::parse(kind.as_str()).unwrap(), *kind);
        assert_eq!(kind.as_str().parse::<Kind>().unwrap(), *kind);
    }
}

#[test]
fn test_kind_toggle_and_labels() {
    assert_eq!(Kind::Expense.toggle(), Kind::Income);
    assert_eq!(Kind::Income.toggle(), Kind::Expense);
    assert_eq!(Kind::Income.label(), "Income");
    assert_eq!(format!("{}", Kind::Expense), "expense");
}

#[test]
fn test_error_messages() {
    assert_eq!(
        LedgerError::InvalidAmount("-5".into()).to_string(),
        "Amount must be a positive number (got '-5')"
    );
    assert_eq!(
        LedgerError::InvalidKind("gift".into()).to_string(),
        "Transaction type must be either 'expense' or 'income' (got 'gift')"
    );
}

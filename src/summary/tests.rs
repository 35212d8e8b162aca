#![allow(clippy::unwrap_used)]

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::models::{Kind, Transaction};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    day(y, m, d).and_hms_opt(12, 0, 0).unwrap()
}

fn txn(amount: Decimal, category: &str, kind: &str, date: NaiveDateTime) -> Transaction {
    Transaction::new(amount, category, kind, Some(date)).unwrap()
}

fn sample() -> Vec<Transaction> {
    vec![
        txn(dec!(1200), "Salary", "income", at(2024, 1, 5)),
        txn(dec!(300), "Rent", "expense", at(2024, 1, 6)),
        txn(dec!(45.50), "Food", "expense", at(2024, 2, 2)),
        txn(dec!(200), "Freelance", "income", at(2024, 2, 10)),
        txn(dec!(12.25), "Food", "expense", at(2024, 2, 11)),
        txn(dec!(300), "Rent", "expense", at(2023, 2, 6)),
    ]
}

// ── Totals ────────────────────────────────────────────────────

#[test]
fn test_spec_example_totals() {
    let txns = vec![
        txn(dec!(1200), "Salary", "income", at(2024, 1, 5)),
        txn(dec!(300), "Rent", "expense", at(2024, 1, 6)),
    ];
    assert_eq!(total_income(&txns), dec!(1200.00));
    assert_eq!(total_expense(&txns), dec!(300.00));
    assert_eq!(balance(&txns), dec!(900.00));

    let cats = category_totals(&txns);
    assert_eq!(cats.expense, vec![("Rent".to_string(), dec!(300.00))]);
    assert_eq!(cats.income, vec![("Salary".to_string(), dec!(1200.00))]);
}

#[test]
fn test_empty_sequence() {
    let txns: Vec<Transaction> = Vec::new();
    assert_eq!(totals(&txns), Totals::default());
    assert_eq!(category_totals(&txns), CategoryTotals::default());
    assert!(filter_by_category(&txns, "Food").is_empty());
    assert!(recent(&txns, 5).is_empty());
}

#[test]
fn test_balance_is_income_minus_expense() {
    let mut txns = sample();
    let t = totals(&txns);
    assert_eq!(t.balance, t.income - t.expense);
    assert_eq!(balance(&txns), total_income(&txns) - total_expense(&txns));

    // Still holds as entries are dropped one by one.
    while !txns.is_empty() {
        txns.remove(0);
        let t = totals(&txns);
        assert_eq!(t.balance, t.income - t.expense);
        assert_eq!(t.income, total_income(&txns));
        assert_eq!(t.expense, total_expense(&txns));
    }
}

#[test]
fn test_negative_balance() {
    let txns = vec![
        txn(dec!(50), "Gift", "income", at(2024, 1, 1)),
        txn(dec!(80), "Food", "expense", at(2024, 1, 2)),
    ];
    assert_eq!(balance(&txns), dec!(-30));
}

// ── Month to date ─────────────────────────────────────────────

#[test]
fn test_month_to_date_matches_year_and_month() {
    let txns = sample();
    let feb = month_to_date(&txns, day(2024, 2, 15));
    assert_eq!(feb.income, dec!(200));
    assert_eq!(feb.expense, dec!(57.75));
    assert_eq!(feb.balance, dec!(142.25));

    // February 2023 rent must not leak into February 2024.
    let feb_2023 = month_to_date(&txns, day(2023, 2, 1));
    assert_eq!(feb_2023.expense, dec!(300));
    assert_eq!(feb_2023.income, Decimal::ZERO);
}

#[test]
fn test_month_to_date_empty_month() {
    let txns = sample();
    assert_eq!(month_to_date(&txns, day(2024, 7, 1)), Totals::default());
}

// ── Category totals ───────────────────────────────────────────

#[test]
fn test_category_totals_first_seen_order() {
    let txns = sample();
    let cats = category_totals(&txns);
    let names: Vec<&str> = cats.expense.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["Rent", "Food"]);
    assert_eq!(cats.expense[0].1, dec!(600));
    assert_eq!(cats.expense[1].1, dec!(57.75));

    let names: Vec<&str> = cats.income.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["Salary", "Freelance"]);
}

#[test]
fn test_category_totals_split_by_kind() {
    let txns = vec![
        txn(dec!(10), "Misc", "expense", at(2024, 1, 1)),
        txn(dec!(25), "Misc", "income", at(2024, 1, 2)),
    ];
    let cats = category_totals(&txns);
    assert_eq!(cats.for_kind(Kind::Expense), &[("Misc".to_string(), dec!(10))]);
    assert_eq!(cats.for_kind(Kind::Income), &[("Misc".to_string(), dec!(25))]);
}

#[test]
fn test_category_totals_sum_to_kind_totals() {
    let txns = sample();
    let cats = category_totals(&txns);
    let expense: Decimal = cats.expense.iter().map(|(_, a)| *a).sum();
    let income: Decimal = cats.income.iter().map(|(_, a)| *a).sum();
    assert_eq!(expense, total_expense(&txns));
    assert_eq!(income, total_income(&txns));
}

// ── Filtering ─────────────────────────────────────────────────

#[test]
fn test_filter_by_category_case_insensitive() {
    let mut txns = sample();
    txns.push(txn(dec!(3), "FOOD", "expense", at(2024, 3, 1)));

    let food = filter_by_category(&txns, "food");
    let amounts: Vec<Decimal> = food.iter().map(|t| t.amount()).collect();
    assert_eq!(amounts, vec![dec!(45.50), dec!(12.25), dec!(3)]);
}

#[test]
fn test_filter_by_category_exact_not_substring() {
    let txns = sample();
    assert!(filter_by_category(&txns, "Foo").is_empty());
    assert!(filter_by_category(&txns, "Food ").is_empty());
}

// ── Helpers ───────────────────────────────────────────────────

#[test]
fn test_recent() {
    let txns = sample();
    let last = recent(&txns, 2);
    assert_eq!(last.len(), 2);
    assert_eq!(last[0].amount(), dec!(12.25));
    assert_eq!(last[1].category(), "Rent");
    assert_eq!(recent(&txns, 100).len(), txns.len());
}

#[test]
fn test_share() {
    assert_eq!(share(dec!(25), dec!(100)), 25.0);
    assert_eq!(share(dec!(1), dec!(4)), 25.0);
    assert_eq!(share(dec!(10), Decimal::ZERO), 0.0);
}

#[test]
fn test_summarize() {
    let txns = sample();
    let s = summarize(&txns, day(2024, 1, 20));
    assert_eq!(s.all_time, totals(&txns));
    assert_eq!(s.month.income, dec!(1200));
    assert_eq!(s.month.expense, dec!(300));
    assert_eq!(s.categories, category_totals(&txns));
}

//! Aggregates over a transaction sequence.
//!
//! Every function here is pure and rescans its input; nothing is cached.

use chrono::{Datelike, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::{Kind, Transaction};

/// Income, expense and their difference over some window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
}

impl Totals {
    fn over<'a>(txns: impl IntoIterator<Item = &'a Transaction>) -> Self {
        let mut income = Decimal::ZERO;
        let mut expense = Decimal::ZERO;
        for t in txns {
            match t.kind() {
                Kind::Income => income += t.amount(),
                Kind::Expense => expense += t.amount(),
            }
        }
        Self {
            income,
            expense,
            balance: income - expense,
        }
    }
}

/// Per-category sums, one list per kind, in first-seen order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryTotals {
    pub expense: Vec<(String, Decimal)>,
    pub income: Vec<(String, Decimal)>,
}

impl CategoryTotals {
    pub fn for_kind(&self, kind: Kind) -> &[(String, Decimal)] {
        match kind {
            Kind::Expense => &self.expense,
            Kind::Income => &self.income,
        }
    }
}

/// Everything the dashboard and `summary` command display.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Summary {
    pub all_time: Totals,
    pub month: Totals,
    pub categories: CategoryTotals,
}

fn sum_kind(txns: &[Transaction], kind: Kind) -> Decimal {
    txns.iter()
        .filter(|t| t.kind() == kind)
        .map(|t| t.amount())
        .sum()
}

pub fn total_income(txns: &[Transaction]) -> Decimal {
    sum_kind(txns, Kind::Income)
}

pub fn total_expense(txns: &[Transaction]) -> Decimal {
    sum_kind(txns, Kind::Expense)
}

pub fn balance(txns: &[Transaction]) -> Decimal {
    total_income(txns) - total_expense(txns)
}

pub fn totals(txns: &[Transaction]) -> Totals {
    Totals {
        income: total_income(txns),
        expense: total_expense(txns),
        balance: balance(txns),
    }
}

/// Totals restricted to the calendar month and year of `today`.
pub fn month_to_date(txns: &[Transaction], today: NaiveDate) -> Totals {
    Totals::over(txns.iter().filter(|t| {
        let d = t.date();
        d.year() == today.year() && d.month() == today.month()
    }))
}

/// Sum amounts per category label, split by kind.
///
/// Labels are grouped exactly as written; "Food" and "food" are separate
/// buckets.
pub fn category_totals(txns: &[Transaction]) -> CategoryTotals {
    let mut totals = CategoryTotals::default();
    for t in txns {
        let bucket = if t.is_income() {
            &mut totals.income
        } else {
            &mut totals.expense
        };
        match bucket.iter_mut().find(|(name, _)| name == t.category()) {
            Some((_, sum)) => *sum += t.amount(),
            None => bucket.push((t.category().to_string(), t.amount())),
        }
    }
    totals
}

/// Case-insensitive exact match on category, preserving sequence order.
pub fn filter_by_category<'a>(txns: &'a [Transaction], category: &str) -> Vec<&'a Transaction> {
    let wanted = category.to_lowercase();
    txns.iter()
        .filter(|t| t.category().to_lowercase() == wanted)
        .collect()
}

/// The last `n` transactions in sequence order.
pub fn recent(txns: &[Transaction], n: usize) -> &[Transaction] {
    &txns[txns.len().saturating_sub(n)..]
}

/// `part` as a percentage of `whole`; zero when `whole` is zero.
pub fn share(part: Decimal, whole: Decimal) -> f64 {
    if whole.is_zero() {
        return 0.0;
    }
    (part / whole * Decimal::ONE_HUNDRED).to_f64().unwrap_or(0.0)
}

pub fn summarize(txns: &[Transaction], today: NaiveDate) -> Summary {
    Summary {
        all_time: totals(txns),
        month: month_to_date(txns, today),
        categories: category_totals(txns),
    }
}

#[cfg(test)]
mod tests;

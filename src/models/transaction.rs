use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};
use rust_decimal::Decimal;
use std::str::FromStr;

use super::{Kind, LedgerError};

/// Storage format of the `date` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DAY_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    id: Option<i64>,
    amount: Decimal,
    category: String,
    kind: Kind,
    date: NaiveDateTime,
}

impl Transaction {
    /// Validate and build a transaction.
    ///
    /// `amount` must be strictly positive, below one trillion and in whole
    /// cents (see [`check_amount`]), and `kind` must name expense or
    /// income (any case). The category is taken as-is, empty included.
    /// A missing `date` means now. Dates are kept at second precision, the
    /// same precision the store writes.
    pub fn new(
        amount: Decimal,
        category: impl Into<String>,
        kind: &str,
        date: Option<NaiveDateTime>,
    ) -> Result<Self, LedgerError> {
        let amount = check_amount(amount, || amount.to_string())?;
        let kind = Kind::parse(kind)?;
        let date = truncate_to_seconds(date.unwrap_or_else(|| Local::now().naive_local()));

        Ok(Self {
            id: None,
            amount,
            category: category.into(),
            kind,
            date,
        })
    }

    /// Attach the primary key assigned by the store.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn date(&self) -> NaiveDateTime {
        self.date
    }

    pub fn is_income(&self) -> bool {
        self.kind == Kind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == Kind::Expense
    }
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: ${:.2} for {} on {}",
            self.kind.label(),
            self.amount,
            self.category,
            self.date.format(DAY_FORMAT)
        )
    }
}

/// Parse user-entered amount text. Non-numeric and non-positive input are
/// both `InvalidAmount`.
pub fn parse_amount(input: &str) -> Result<Decimal, LedgerError> {
    let amount = Decimal::from_str(input.trim())
        .map_err(|_| LedgerError::InvalidAmount(input.to_string()))?;
    check_amount(amount, || input.to_string())
}

/// Largest accepted amount: 999,999,999,999.99.
pub fn max_amount() -> Decimal {
    Decimal::new(99_999_999_999_999, 2)
}

/// Amounts are stored as `REAL`. Whole cents below one trillion have at most
/// 14 significant digits, so they survive the `f64` round trip exactly, and
/// no realistic number of them can overflow a `Decimal` sum.
fn check_amount(amount: Decimal, raw: impl FnOnce() -> String) -> Result<Decimal, LedgerError> {
    if amount <= Decimal::ZERO || amount > max_amount() || amount.normalize().scale() > 2 {
        return Err(LedgerError::InvalidAmount(raw()));
    }
    Ok(amount)
}

/// Parse `YYYY-MM-DD HH:MM:SS`, or a bare `YYYY-MM-DD` meaning midnight.
pub fn parse_date(input: &str) -> Result<NaiveDateTime, LedgerError> {
    let trimmed = input.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, DATE_FORMAT) {
        return Ok(dt);
    }
    NaiveDate::parse_from_str(trimmed, DAY_FORMAT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| LedgerError::InvalidDate(input.to_string()))
}

fn truncate_to_seconds(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_nanosecond(0).unwrap_or(dt)
}

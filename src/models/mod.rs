mod error;
mod kind;
mod transaction;

pub use error::LedgerError;
pub use kind::Kind;
pub use transaction::{
    max_amount, parse_amount, parse_date, Transaction, DATE_FORMAT, DAY_FORMAT,
};

/// Category suggestions offered by the add form.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Salary",
    "Rent",
    "Food",
    "Transportation",
    "Entertainment",
    "Utilities",
];

#[cfg(test)]
mod tests;

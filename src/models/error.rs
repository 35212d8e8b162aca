use thiserror::Error;

/// Rejections raised while building a [`Transaction`](super::Transaction).
///
/// All variants are recoverable: the caller shows the message and lets the
/// user correct the input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error(
        "Amount must be a positive number below 1,000,000,000,000 with at most 2 decimal places (got '{0}')"
    )]
    InvalidAmount(String),
    #[error("Transaction type must be either 'expense' or 'income' (got '{0}')")]
    InvalidKind(String),
    #[error("Invalid date '{0}': expected YYYY-MM-DD or YYYY-MM-DD HH:MM:SS")]
    InvalidDate(String),
}

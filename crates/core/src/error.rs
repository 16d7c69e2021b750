//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, ValidationError>;

/// Input validation failure.
///
/// Every variant is attributable to exactly one field and is recoverable by
/// resubmitting corrected input. Validation failures never reach the
/// classifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `price` outside [1, 10_000_000).
    #[error("price must be at least 1 and below 10000000, got {0}")]
    PriceOutOfRange(i64),

    /// `qty_ordered` outside [1, 10).
    #[error("qty_ordered must be at least 1 and below 10, got {0}")]
    QtyOutOfRange(i64),

    /// Category did not match any canonical entry (case-insensitively).
    #[error("invalid category: {given}; allowed: {allowed}")]
    UnknownCategory { given: String, allowed: String },

    /// `Month` outside [1, 12].
    #[error("Month must be between 1 and 12, got {0}")]
    MonthOutOfRange(i64),

    /// `date` (day of month) outside [1, 31].
    #[error("date must be between 1 and 31, got {0}")]
    DayOutOfRange(i64),
}

impl ValidationError {
    /// The request field this error is attributable to, using the wire names
    /// the HTTP surface exposes.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::PriceOutOfRange(_) => "price",
            ValidationError::QtyOutOfRange(_) => "qty_ordered",
            ValidationError::UnknownCategory { .. } => "category_name_1",
            ValidationError::MonthOutOfRange(_) => "Month",
            ValidationError::DayOutOfRange(_) => "date",
        }
    }
}

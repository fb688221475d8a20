//! Error types for the magazine model.

use thiserror::Error;

/// Errors raised when a model value would break one of its invariants.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// Circulation was set (or constructed) with a negative value.
    #[error("Circulation cannot be negative: {0}")]
    NegativeCirculation(i64),
}

/// Converts a requested circulation into a stored one.
pub(crate) fn checked_circulation(value: i64) -> Result<u64, ValidationError> {
    u64::try_from(value).map_err(|_| {
        tracing::warn!(circulation = value, "Rejected negative circulation");
        ValidationError::NegativeCirculation(value)
    })
}

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors for goal and deposit operations.
///
/// `NoEstimate` is deliberately not here: insufficient data to project is a
/// defined outcome of the projection engine, not an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GoalError {
    /// A selected weekday is outside the 0 (Sunday) to 6 (Saturday) range.
    #[error("Invalid deposit day '{0}': must be between 0 (Sunday) and 6 (Saturday)")]
    InvalidCadence(u8),

    #[error("Invalid target amount '{0}': must be positive")]
    InvalidTargetAmount(Decimal),

    #[error("Invalid deposit amount '{0}': must be positive")]
    InvalidDepositAmount(Decimal),

    #[error("Goal not found: {0}")]
    NotFound(String),

    #[error("Deposit not found: {0}")]
    DepositNotFound(String),
}

//! Public error types for the calculator module.

use thiserror::Error;

use crate::models::Number;

/// Errors that can be returned by `CalculatorClientV1`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    /// The divisor of a `divide` call was zero.
    #[error("division by zero: {dividend} / 0")]
    DivisionByZero { dividend: Number },
}

impl CalculatorError {
    /// Create a `DivisionByZero` error.
    #[must_use]
    pub fn division_by_zero(dividend: impl Into<Number>) -> Self {
        Self::DivisionByZero {
            dividend: dividend.into(),
        }
    }
}

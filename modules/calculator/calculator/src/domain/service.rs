//! Domain service for calculator
//!
//! Contains the core arithmetic.

use calculator_sdk::{CalculatorClientV1, CalculatorError, Number, Operation};
use tracing::{debug, instrument};

use crate::config::{CalculatorConfig, IntegerDivision};

/// Domain service that performs the four arithmetic operations.
///
/// Stateless apart from its configuration; every call is an independent,
/// pure transformation. Integer operands stay integral while the exact result
/// fits in `i64` and fall back to `f64` otherwise.
#[derive(Debug, Clone, Default)]
pub struct Service {
    config: CalculatorConfig,
}

impl Service {
    /// Create a new service with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new service with the given configuration.
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Configuration this service was built with.
    #[must_use]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    fn record(&self, op: Operation, a: Number, b: Number, result: Number) -> Number {
        if self.config.trace_operations {
            debug!(%op, %a, %b, %result, "operation evaluated");
        }
        result
    }
}

impl CalculatorClientV1 for Service {
    #[instrument(level = "debug", skip(self))]
    fn add(&self, a: Number, b: Number) -> Result<Number, CalculatorError> {
        let sum = combine(a, b, i64::checked_add, |x, y| x + y);
        Ok(self.record(Operation::Add, a, b, sum))
    }

    #[instrument(level = "debug", skip(self))]
    fn subtract(&self, a: Number, b: Number) -> Result<Number, CalculatorError> {
        let difference = combine(a, b, i64::checked_sub, |x, y| x - y);
        Ok(self.record(Operation::Subtract, a, b, difference))
    }

    #[instrument(level = "debug", skip(self))]
    fn multiply(&self, a: Number, b: Number) -> Result<Number, CalculatorError> {
        let product = combine(a, b, i64::checked_mul, |x, y| x * y);
        Ok(self.record(Operation::Multiply, a, b, product))
    }

    #[instrument(level = "debug", skip(self))]
    fn divide(&self, a: Number, b: Number) -> Result<Number, CalculatorError> {
        if b.is_zero() {
            if self.config.trace_operations {
                debug!(%a, "rejected division by zero");
            }
            return Err(CalculatorError::division_by_zero(a));
        }

        let quotient = match (a, b) {
            (Number::Int(x), Number::Int(y)) => divide_ints(x, y, self.config.integer_division),
            _ => Number::Float(a.as_f64() / b.as_f64()),
        };
        Ok(self.record(Operation::Divide, a, b, quotient))
    }
}

/// Apply `int_op` when both operands are integers and it does not overflow,
/// `float_op` otherwise.
fn combine(
    a: Number,
    b: Number,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Number {
    if let (Number::Int(x), Number::Int(y)) = (a, b)
        && let Some(v) = int_op(x, y)
    {
        return Number::Int(v);
    }
    Number::Float(float_op(a.as_f64(), b.as_f64()))
}

/// `y` must be non-zero.
#[allow(clippy::integer_division, clippy::cast_precision_loss)]
fn divide_ints(x: i64, y: i64, mode: IntegerDivision) -> Number {
    // i64::MIN / -1 is the only overflowing case.
    let Some(rem) = x.checked_rem(y) else {
        return Number::Float(x as f64 / y as f64);
    };

    let quotient = x / y;
    if rem == 0 {
        return Number::Int(quotient);
    }

    match mode {
        IntegerDivision::Float => Number::Float(x as f64 / y as f64),
        IntegerDivision::Floor if (rem < 0) != (y < 0) => Number::Int(quotient - 1),
        IntegerDivision::Floor => Number::Int(quotient),
    }
}

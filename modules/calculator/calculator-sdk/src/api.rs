//! Calculator API trait and types
//!
//! Contract trait for the calculator service.

use std::fmt;

use crate::errors::CalculatorError;
use crate::models::Number;

/// Calculator API trait
///
/// A stateless evaluator of the four basic binary operations. Consumers
/// should depend on `dyn CalculatorClientV1` rather than a concrete type so a
/// stub or spy can be substituted in tests.
///
/// Only [`divide`](Self::divide) can fail; the other operations always return
/// `Ok`.
pub trait CalculatorClientV1: Send + Sync {
    /// Return `a + b`.
    ///
    /// # Errors
    /// Never fails for the in-process implementation.
    fn add(&self, a: Number, b: Number) -> Result<Number, CalculatorError>;

    /// Return `a - b`.
    ///
    /// # Errors
    /// Never fails for the in-process implementation.
    fn subtract(&self, a: Number, b: Number) -> Result<Number, CalculatorError>;

    /// Return `a * b`.
    ///
    /// # Errors
    /// Never fails for the in-process implementation.
    fn multiply(&self, a: Number, b: Number) -> Result<Number, CalculatorError>;

    /// Return `a / b`.
    ///
    /// # Errors
    /// Returns [`CalculatorError::DivisionByZero`] when `b` is zero.
    fn divide(&self, a: Number, b: Number) -> Result<Number, CalculatorError>;
}

/// One of the four operations exposed by [`CalculatorClientV1`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operations in declaration order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Method name on [`CalculatorClientV1`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Infix operator symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Invoke the matching method on `calc`.
    ///
    /// # Errors
    /// Propagates whatever the underlying method returns.
    pub fn apply(
        self,
        calc: &dyn CalculatorClientV1,
        a: Number,
        b: Number,
    ) -> Result<Number, CalculatorError> {
        match self {
            Self::Add => calc.add(a, b),
            Self::Subtract => calc.subtract(a, b),
            Self::Multiply => calc.multiply(a, b),
            Self::Divide => calc.divide(a, b),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    /// Answers each operation with a distinct value so dispatch is observable.
    struct Echo;

    impl CalculatorClientV1 for Echo {
        fn add(&self, _a: Number, _b: Number) -> Result<Number, CalculatorError> {
            Ok(Number::Int(0))
        }

        fn subtract(&self, _a: Number, _b: Number) -> Result<Number, CalculatorError> {
            Ok(Number::Int(1))
        }

        fn multiply(&self, _a: Number, _b: Number) -> Result<Number, CalculatorError> {
            Ok(Number::Int(2))
        }

        fn divide(&self, a: Number, _b: Number) -> Result<Number, CalculatorError> {
            Err(CalculatorError::division_by_zero(a))
        }
    }

    #[test]
    fn test_apply_dispatches_to_matching_method() {
        assert_eq!(Operation::Add.apply(&Echo, 1.into(), 1.into()), Ok(Number::Int(0)));
        assert_eq!(
            Operation::Subtract.apply(&Echo, 1.into(), 1.into()),
            Ok(Number::Int(1))
        );
        assert_eq!(
            Operation::Multiply.apply(&Echo, 1.into(), 1.into()),
            Ok(Number::Int(2))
        );
        assert_eq!(
            Operation::Divide.apply(&Echo, 9.into(), 0.into()),
            Err(CalculatorError::DivisionByZero {
                dividend: Number::Int(9)
            })
        );
    }

    #[test]
    fn test_names_and_symbols() {
        let names = Operation::ALL.map(Operation::name);
        assert_eq!(names, ["add", "subtract", "multiply", "divide"]);
        assert_eq!(Operation::Divide.to_string(), "/");
        assert_eq!(Operation::Multiply.symbol(), "*");
    }
}

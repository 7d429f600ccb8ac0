//! Configuration for the calculator module.

use serde::Deserialize;

/// How an `Int / Int` division that is not exact is resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegerDivision {
    /// Return the floating-point quotient (`7 / 2 == 3.5`).
    #[default]
    Float,
    /// Round toward negative infinity and stay integral (`-7 / 2 == -4`).
    Floor,
}

/// Calculator module configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Resolution of inexact integer division.
    pub integer_division: IntegerDivision,

    /// Emit a `debug` event for every evaluated operation.
    pub trace_operations: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            integer_division: IntegerDivision::default(),
            trace_operations: true,
        }
    }
}

//! Calculator SDK
//!
//! This crate provides everything needed to consume the calculator:
//! - API trait (`CalculatorClientV1`)
//! - Operation selector (`Operation`)
//! - Operand and result type (`Number`)
//! - Error types (`CalculatorError`)
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculatorClientV1, CalculatorError, Number};
//!
//! fn average(calc: &dyn CalculatorClientV1, a: i64, b: i64) -> Result<Number, CalculatorError> {
//!     let sum = calc.add(a.into(), b.into())?;
//!     calc.divide(sum, 2.into())
//! }
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT AND TYPES ===
mod api;
pub use api::{CalculatorClientV1, Operation};

mod errors;
pub use errors::CalculatorError;

mod models;
pub use models::Number;

//! Calculator Module
//!
//! A stateless evaluator for addition, subtraction, multiplication and
//! guarded division.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - Core arithmetic
//! - `config.rs` - Module configuration
//!
//! Consumers should depend on `calculator-sdk` and hold the service as
//! `dyn CalculatorClientV1` so it can be replaced by a test double.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod config;
pub use config::{CalculatorConfig, IntegerDivision};

pub mod domain;
pub use domain::Service;

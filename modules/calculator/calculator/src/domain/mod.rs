//! Domain layer for calculator module
//!
//! Contains the arithmetic service.

pub mod service;

pub use service::Service;

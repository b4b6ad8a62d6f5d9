//! Execution module.
//!
//! Runs a filter under a processing configuration.

pub mod engine;

pub use engine::{ExecutionEngine, ExecutionResult, ExecutionStats};

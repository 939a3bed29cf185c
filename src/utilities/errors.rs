//! Crate-wide error type.
//!
//! Every failure is structural and detected before any computation starts:
//! the caller either passed series of unequal length, a parameter outside
//! the indicator's domain, or called into the engine outside the
//! `initialize()`/`shutdown()` window. There is no transient failure mode.

use thiserror::Error;

/// Upper bound on any window period, matching the reference engine.
pub const MAX_PERIOD: usize = 100_000;

#[derive(Debug, Error)]
pub enum TaError {
    #[error("{name}: input lengths differ: expected {expected}, got {actual}")]
    LengthMismatch {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{name}: invalid period {period}, allowed range {min}..={max}")]
    InvalidPeriod {
        name: &'static str,
        period: usize,
        min: usize,
        max: usize,
    },

    #[error("{name}: invalid parameter {param} = {value}")]
    InvalidParameter {
        name: &'static str,
        param: &'static str,
        value: f64,
    },

    #[error("{name}: invalid moving average type tag {tag}")]
    InvalidMaType { name: &'static str, tag: i32 },

    #[error("{name}: engine not initialized; call initialize() before any indicator")]
    NotInitialized { name: &'static str },
}

//! # Vector arithmetic (ADD / SUB / MULT / DIV)
//!
//! Element-wise arithmetic on two equal-length series. No lookback; DIV
//! performs IEEE division, so a zero divisor produces an infinity or NaN
//! exactly as the raw operation would.
//!
//! ## Errors
//! - **LengthMismatch**, **NotInitialized**.

use crate::utilities::errors::TaError;
use crate::utilities::helpers::check_same_length;
use crate::utilities::lifecycle::ensure_initialized;

fn binary_impl<F>(name: &'static str, real0: &[f64], real1: &[f64], f: F) -> Result<Vec<f64>, TaError>
where
    F: Fn(f64, f64) -> f64,
{
    ensure_initialized(name)?;
    check_same_length(name, &[real0.len(), real1.len()])?;
    Ok(real0.iter().zip(real1).map(|(&a, &b)| f(a, b)).collect())
}

pub fn add(real0: &[f64], real1: &[f64]) -> Result<Vec<f64>, TaError> {
    binary_impl("add", real0, real1, |a, b| a + b)
}

pub fn sub(real0: &[f64], real1: &[f64]) -> Result<Vec<f64>, TaError> {
    binary_impl("sub", real0, real1, |a, b| a - b)
}

pub fn mult(real0: &[f64], real1: &[f64]) -> Result<Vec<f64>, TaError> {
    binary_impl("mult", real0, real1, |a, b| a * b)
}

pub fn div(real0: &[f64], real1: &[f64]) -> Result<Vec<f64>, TaError> {
    binary_impl("div", real0, real1, |a, b| a / b)
}

//! # Vector transcendental transforms
//!
//! One IEEE math function applied per element. No lookback and no domain
//! checks; out-of-domain inputs (e.g. `acos(2.0)`, `ln(-1.0)`) map to NaN
//! the way the underlying operation does.
//!
//! ## Errors
//! - **NotInitialized**.

use crate::utilities::errors::TaError;
use crate::utilities::lifecycle::ensure_initialized;

fn unary_impl<F>(name: &'static str, real: &[f64], f: F) -> Result<Vec<f64>, TaError>
where
    F: Fn(f64) -> f64,
{
    ensure_initialized(name)?;
    Ok(real.iter().map(|&v| f(v)).collect())
}

pub fn acos(real: &[f64]) -> Result<Vec<f64>, TaError> {
    unary_impl("acos", real, f64::acos)
}

pub fn asin(real: &[f64]) -> Result<Vec<f64>, TaError> {
    unary_impl("asin", real, f64::asin)
}

pub fn atan(real: &[f64]) -> Result<Vec<f64>, TaError> {
    unary_impl("atan", real, f64::atan)
}

pub fn ceil(real: &[f64]) -> Result<Vec<f64>, TaError> {
    unary_impl("ceil", real, f64::ceil)
}

pub fn cos(real: &[f64]) -> Result<Vec<f64>, TaError> {
    unary_impl("cos", real, f64::cos)
}

pub fn cosh(real: &[f64]) -> Result<Vec<f64>, TaError> {
    unary_impl("cosh", real, f64::cosh)
}

pub fn exp(real: &[f64]) -> Result<Vec<f64>, TaError> {
    unary_impl("exp", real, f64::exp)
}

pub fn floor(real: &[f64]) -> Result<Vec<f64>, TaError> {
    unary_impl("floor", real, f64::floor)
}

pub fn ln(real: &[f64]) -> Result<Vec<f64>, TaError> {
    unary_impl("ln", real, f64::ln)
}

pub fn log10(real: &[f64]) -> Result<Vec<f64>, TaError> {
    unary_impl("log10", real, f64::log10)
}

pub fn sin(real: &[f64]) -> Result<Vec<f64>, TaError> {
    unary_impl("sin", real, f64::sin)
}

pub fn sinh(real: &[f64]) -> Result<Vec<f64>, TaError> {
    unary_impl("sinh", real, f64::sinh)
}

pub fn sqrt(real: &[f64]) -> Result<Vec<f64>, TaError> {
    unary_impl("sqrt", real, f64::sqrt)
}

pub fn tan(real: &[f64]) -> Result<Vec<f64>, TaError> {
    unary_impl("tan", real, f64::tan)
}

pub fn tanh(real: &[f64]) -> Result<Vec<f64>, TaError> {
    unary_impl("tanh", real, f64::tanh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::lifecycle::initialize;

    #[test]
    fn test_math_transforms_spot_values() {
        initialize();
        assert_eq!(sqrt(&[4.0, 9.0]).expect("sqrt"), vec![2.0, 3.0]);
        assert_eq!(floor(&[1.7]).expect("floor"), vec![1.0]);
        assert_eq!(ceil(&[1.2]).expect("ceil"), vec![2.0]);
        assert!((ln(&[std::f64::consts::E]).expect("ln")[0] - 1.0).abs() < 1e-12);
        assert!((log10(&[100.0]).expect("log10")[0] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_math_transforms_out_of_domain_is_nan() {
        initialize();
        assert!(acos(&[2.0]).expect("acos")[0].is_nan());
        assert!(asin(&[-2.0]).expect("asin")[0].is_nan());
        assert!(sqrt(&[-1.0]).expect("sqrt")[0].is_nan());
        assert!(ln(&[-1.0]).expect("ln")[0].is_nan());
    }

    #[test]
    fn test_math_transforms_inverse_pairs() {
        initialize();
        let data = [0.1, 0.4, 0.9];
        let forth = sin(&data).expect("sin");
        let back = asin(&forth).expect("asin");
        for (a, b) in data.iter().zip(&back) {
            assert!((a - b).abs() < 1e-12);
        }
        assert!((tanh(&[0.5]).expect("tanh")[0] - 0.5f64.tanh()).abs() < 1e-15);
    }

    #[test]
    fn test_math_transforms_empty_input() {
        initialize();
        assert!(cos(&[]).expect("empty ok").is_empty());
        assert!(exp(&[]).expect("empty ok").is_empty());
    }
}

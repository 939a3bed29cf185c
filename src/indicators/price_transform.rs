//! # Price transforms (AVGPRICE / MEDPRICE / TYPPRICE / WCLPRICE)
//!
//! Per-bar blends of the OHLC fields. No lookback.
//!
//! | function | formula                              |
//! |----------|--------------------------------------|
//! | AVGPRICE | `(open + high + low + close) / 4`    |
//! | MEDPRICE | `(high + low) / 2`                   |
//! | TYPPRICE | `(high + low + close) / 3`           |
//! | WCLPRICE | `(high + low + 2 * close) / 4`       |
//!
//! ## Errors
//! - **LengthMismatch**, **NotInitialized**.

use crate::utilities::errors::TaError;
use crate::utilities::helpers::check_same_length;
use crate::utilities::lifecycle::ensure_initialized;

pub fn avgprice(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
) -> Result<Vec<f64>, TaError> {
    ensure_initialized("avgprice")?;
    check_same_length("avgprice", &[open.len(), high.len(), low.len(), close.len()])?;
    Ok((0..open.len())
        .map(|i| (open[i] + high[i] + low[i] + close[i]) / 4.0)
        .collect())
}

pub fn medprice(high: &[f64], low: &[f64]) -> Result<Vec<f64>, TaError> {
    ensure_initialized("medprice")?;
    check_same_length("medprice", &[high.len(), low.len()])?;
    Ok(high.iter().zip(low).map(|(h, l)| (h + l) / 2.0).collect())
}

pub fn typprice(high: &[f64], low: &[f64], close: &[f64]) -> Result<Vec<f64>, TaError> {
    ensure_initialized("typprice")?;
    check_same_length("typprice", &[high.len(), low.len(), close.len()])?;
    Ok((0..high.len())
        .map(|i| (high[i] + low[i] + close[i]) / 3.0)
        .collect())
}

pub fn wclprice(high: &[f64], low: &[f64], close: &[f64]) -> Result<Vec<f64>, TaError> {
    ensure_initialized("wclprice")?;
    check_same_length("wclprice", &[high.len(), low.len(), close.len()])?;
    Ok((0..high.len())
        .map(|i| (high[i] + low[i] + close[i] * 2.0) / 4.0)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::lifecycle::initialize;

    #[test]
    fn test_price_transforms_hand_computed() {
        initialize();
        let open = [10.0];
        let high = [12.0];
        let low = [8.0];
        let close = [11.0];
        assert_eq!(avgprice(&open, &high, &low, &close).expect("avgprice")[0], 10.25);
        assert_eq!(medprice(&high, &low).expect("medprice")[0], 10.0);
        assert_eq!(typprice(&high, &low, &close).expect("typprice")[0], 31.0 / 3.0);
        assert_eq!(wclprice(&high, &low, &close).expect("wclprice")[0], 10.5);
    }

    #[test]
    fn test_price_transforms_length_mismatch() {
        initialize();
        assert!(medprice(&[1.0, 2.0], &[1.0]).is_err());
    }

    #[test]
    fn test_price_transforms_empty_input() {
        initialize();
        assert!(avgprice(&[], &[], &[], &[]).expect("empty ok").is_empty());
    }
}

//! # Chaikin A/D Line (AD)
//!
//! Accumulates volume weighted by the close's position inside the bar:
//! `((close - low) - (high - close)) / (high - low)`. A zero range
//! contributes nothing. No lookback.
//!
//! ## Errors
//! - **LengthMismatch**, **NotInitialized**.

use crate::utilities::errors::TaError;
use crate::utilities::helpers::check_same_length;
use crate::utilities::lifecycle::ensure_initialized;

#[inline]
pub fn ad_lookback() -> usize {
    0
}

/// The raw accumulation loop; shared with ADOSC.
pub(crate) fn ad_line(high: &[f64], low: &[f64], close: &[f64], volume: &[f64]) -> Vec<f64> {
    let len = high.len();
    let mut out = Vec::with_capacity(len);
    let mut total = 0.0;
    for i in 0..len {
        let range = high[i] - low[i];
        if range > 0.0 {
            total += ((close[i] - low[i]) - (high[i] - close[i])) / range * volume[i];
        }
        out.push(total);
    }
    out
}

pub fn ad(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    volume: &[f64],
) -> Result<Vec<f64>, TaError> {
    ensure_initialized("ad")?;
    check_same_length("ad", &[high.len(), low.len(), close.len(), volume.len()])?;
    Ok(ad_line(high, low, close, volume))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::lifecycle::initialize;

    #[test]
    fn test_ad_hand_computed() {
        initialize();
        let high = [12.0, 12.0];
        let low = [10.0, 10.0];
        let close = [12.0, 10.0];
        let volume = [100.0, 100.0];
        let out = ad(&high, &low, &close, &volume).expect("ad");
        // Close at the high adds all volume; close at the low removes it.
        assert_eq!(out, vec![100.0, 0.0]);
    }

    #[test]
    fn test_ad_zero_range_contributes_nothing() {
        initialize();
        let flat = [5.0; 3];
        let volume = [10.0, 20.0, 30.0];
        let out = ad(&flat, &flat, &flat, &volume).expect("ad");
        assert_eq!(out, vec![0.0; 3]);
    }

    #[test]
    fn test_ad_empty_input() {
        initialize();
        assert!(ad(&[], &[], &[], &[]).expect("empty ok").is_empty());
    }
}

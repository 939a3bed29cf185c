//! # Generic Moving Average (MA)
//!
//! Dispatch over the closed [`MaType`] set; this is the strategy every
//! composite indicator (BBANDS, STOCH, APO/PPO, MACDEXT, ...) delegates to.
//! `period == 1` short-circuits to a copy of the input for every type.
//!
//! ## Parameters
//! - **period**: window size in bars (default: 30, minimum: 1).
//! - **matype**: moving-average variant (default: SMA).
//!
//! ## Errors
//! - **InvalidPeriod**: `period` outside `1..=100000`.
//! - **NotInitialized**: engine not initialized.

use crate::indicators::moving_averages::{
    dema, dema_lookback, ema, ema_lookback, kama, kama_lookback, mama, mama_lookback, sma,
    sma_lookback, t3, t3_lookback, tema, tema_lookback, trima, trima_lookback, wma, wma_lookback,
};
use crate::utilities::enums::MaType;
use crate::utilities::errors::TaError;
use crate::utilities::helpers::validate_period;
use crate::utilities::lifecycle::ensure_initialized;

pub fn ma_lookback(period: usize, matype: MaType) -> usize {
    if period == 1 {
        return 0;
    }
    match matype {
        MaType::Sma => sma_lookback(period),
        MaType::Ema => ema_lookback(period),
        MaType::Wma => wma_lookback(period),
        MaType::Dema => dema_lookback(period),
        MaType::Tema => tema_lookback(period),
        MaType::Trima => trima_lookback(period),
        MaType::Kama => kama_lookback(period),
        MaType::Mama => mama_lookback(),
        MaType::T3 => t3_lookback(period),
    }
}

pub fn ma(real: &[f64], period: usize, matype: MaType) -> Result<Vec<f64>, TaError> {
    ensure_initialized("ma")?;
    if real.is_empty() {
        return Ok(Vec::new());
    }
    validate_period("ma", period, 1)?;
    if period == 1 {
        return Ok(real.to_vec());
    }
    match matype {
        MaType::Sma => sma(real, period),
        MaType::Ema => ema(real, period),
        MaType::Wma => wma(real, period),
        MaType::Dema => dema(real, period),
        MaType::Tema => tema(real, period),
        MaType::Trima => trima(real, period),
        MaType::Kama => kama(real, period),
        MaType::Mama => mama(real, 0.5, 0.05).map(|o| o.mama),
        MaType::T3 => t3(real, period, 0.7),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::lifecycle::initialize;

    #[test]
    fn test_ma_dispatch_matches_sma() {
        initialize();
        let data: Vec<f64> = (1..=20).map(|v| v as f64).collect();
        let via_ma = ma(&data, 5, MaType::Sma).expect("ma");
        let direct = sma(&data, 5).expect("sma");
        // Bit compare so the NaN warm-up prefix participates too.
        assert_eq!(
            via_ma.iter().map(|v| v.to_bits()).collect::<Vec<_>>(),
            direct.iter().map(|v| v.to_bits()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_ma_period_one_is_identity() {
        initialize();
        let data = [2.0, 4.0, 8.0];
        for tag in 0..=8 {
            let ty = MaType::try_from(tag).expect("tag");
            assert_eq!(ma(&data, 1, ty).expect("ma"), data.to_vec());
            assert_eq!(ma_lookback(1, ty), 0);
        }
    }

    #[test]
    fn test_ma_lookbacks_compound() {
        initialize();
        assert_eq!(ma_lookback(10, MaType::Sma), 9);
        assert_eq!(ma_lookback(10, MaType::Dema), 18);
        assert_eq!(ma_lookback(10, MaType::Tema), 27);
        assert_eq!(ma_lookback(10, MaType::T3), 54);
        assert_eq!(ma_lookback(10, MaType::Kama), 10);
        assert_eq!(ma_lookback(10, MaType::Mama), 32);
    }
}

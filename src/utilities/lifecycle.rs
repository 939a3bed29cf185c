//! Process-wide engine lifecycle.
//!
//! `initialize()` builds the read-only constant tables (today: the
//! candle-setting table driving the pattern engine) exactly once and marks
//! the engine usable; `shutdown()` marks it unusable again. Both are
//! idempotent. Indicator entry points call [`ensure_initialized`] (or
//! [`acquire`] when they need the tables) and fail fast with
//! `TaError::NotInitialized` outside the active window.
//!
//! The tables themselves live in a `OnceLock` and are never torn down, so
//! indicator calls already in flight on other threads keep valid references
//! even if `shutdown()` races them.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use crate::utilities::errors::TaError;

/// Which price span a candle-setting average is measured on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeType {
    RealBody,
    HighLow,
    Shadows,
}

/// One row of the candle-setting table: the span to average, how many
/// trailing bars feed the average (0 = the bar itself), and the factor a
/// candidate span is compared against.
#[derive(Debug, Clone, Copy)]
pub struct CandleSetting {
    pub range_type: RangeType,
    pub avg_period: usize,
    pub factor: f64,
}

/// Index into [`Context::candle_settings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandleSettingType {
    BodyLong = 0,
    BodyVeryLong = 1,
    BodyShort = 2,
    BodyDoji = 3,
    ShadowLong = 4,
    ShadowVeryLong = 5,
    ShadowShort = 6,
    ShadowVeryShort = 7,
    Near = 8,
    Far = 9,
    Equal = 10,
}

/// Shared read-only state with process lifetime.
pub struct Context {
    pub candle_settings: [CandleSetting; 11],
}

impl Context {
    #[inline]
    pub fn setting(&self, which: CandleSettingType) -> &CandleSetting {
        &self.candle_settings[which as usize]
    }
}

fn build_context() -> Context {
    use RangeType::*;
    // Reference defaults; order must match CandleSettingType.
    Context {
        candle_settings: [
            CandleSetting { range_type: RealBody, avg_period: 10, factor: 1.0 }, // BodyLong
            CandleSetting { range_type: RealBody, avg_period: 10, factor: 3.0 }, // BodyVeryLong
            CandleSetting { range_type: RealBody, avg_period: 10, factor: 1.0 }, // BodyShort
            CandleSetting { range_type: HighLow, avg_period: 10, factor: 0.1 },  // BodyDoji
            CandleSetting { range_type: RealBody, avg_period: 0, factor: 1.0 },  // ShadowLong
            CandleSetting { range_type: RealBody, avg_period: 0, factor: 2.0 },  // ShadowVeryLong
            CandleSetting { range_type: Shadows, avg_period: 10, factor: 1.0 },  // ShadowShort
            CandleSetting { range_type: HighLow, avg_period: 10, factor: 0.1 },  // ShadowVeryShort
            CandleSetting { range_type: HighLow, avg_period: 5, factor: 0.2 },   // Near
            CandleSetting { range_type: HighLow, avg_period: 5, factor: 0.6 },   // Far
            CandleSetting { range_type: HighLow, avg_period: 5, factor: 0.05 },  // Equal
        ],
    }
}

static CONTEXT: OnceLock<Context> = OnceLock::new();
static ACTIVE: AtomicBool = AtomicBool::new(false);

/// Bring the engine up. Safe to call more than once.
pub fn initialize() {
    CONTEXT.get_or_init(build_context);
    ACTIVE.store(true, Ordering::Release);
}

/// Take the engine down. Safe to call more than once; a later
/// `initialize()` brings it back up.
pub fn shutdown() {
    ACTIVE.store(false, Ordering::Release);
}

#[inline]
pub fn ensure_initialized(name: &'static str) -> Result<(), TaError> {
    if ACTIVE.load(Ordering::Acquire) {
        Ok(())
    } else {
        Err(TaError::NotInitialized { name })
    }
}

/// Like [`ensure_initialized`], but hands back the constant tables.
#[inline]
pub fn acquire(name: &'static str) -> Result<&'static Context, TaError> {
    ensure_initialized(name)?;
    // ensure_initialized passing implies the OnceLock was populated.
    CONTEXT.get().ok_or(TaError::NotInitialized { name })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_window() {
        initialize();
        assert!(ensure_initialized("test").is_ok());
        // Double init is harmless.
        initialize();
        let ctx = acquire("test").expect("context after init");
        assert_eq!(ctx.setting(CandleSettingType::Near).avg_period, 5);
        // Note: no shutdown() here; tests in other modules run concurrently
        // and share the process-wide flag.
    }
}

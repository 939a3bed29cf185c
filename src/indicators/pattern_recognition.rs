//! # Candlestick pattern recognition
//!
//! Sixty-one OHLC bar patterns. Every function takes the four aligned
//! price series and returns a full-length `Vec<i32>`: `0` where no
//! pattern completes on that bar, `+100` / `-100` for a bullish or
//! bearish signal, and `+200` / `-200` for the confirmed HIKKAKE
//! variants. The warm-up prefix is all zeros.
//!
//! Body and shadow thresholds are not fixed numbers; each comparison is
//! against a trailing average of a candle span (real body, high-low
//! range, or summed shadows) described by one row of the candle-setting
//! table in the engine context. A setting with `avg_period == 0`
//! compares against the current bar's own span instead.
//!
//! ## Parameters
//! - **penetration** (ABANDONEDBABY, DARKCLOUDCOVER, EVENINGDOJISTAR,
//!   EVENINGSTAR, MATHOLD, MORNINGDOJISTAR, MORNINGSTAR only): how far
//!   into the reference body the closing bar must reach, as a fraction
//!   of that body. Defaults 0.3 (0.5 for DARKCLOUDCOVER and MATHOLD).
//!
//! ## Errors
//! - **LengthMismatch**, **InvalidParameter**, **NotInitialized**.

use crate::utilities::errors::TaError;
use crate::utilities::helpers::{check_same_length, validate_non_negative};
use crate::utilities::lifecycle::{acquire, CandleSettingType, Context, RangeType};

use CandleSettingType::{
    BodyDoji, BodyLong, BodyShort, Equal, Far, Near, ShadowLong, ShadowShort, ShadowVeryLong,
    ShadowVeryShort,
};

/// Every recognized pattern, in the order of the public `cdl*` functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandlePattern {
    Cdl2Crows,
    Cdl3BlackCrows,
    Cdl3Inside,
    Cdl3LineStrike,
    Cdl3Outside,
    Cdl3StarsInSouth,
    Cdl3WhiteSoldiers,
    CdlAbandonedBaby,
    CdlAdvanceBlock,
    CdlBeltHold,
    CdlBreakaway,
    CdlClosingMarubozu,
    CdlConcealBabySwall,
    CdlCounterAttack,
    CdlDarkCloudCover,
    CdlDoji,
    CdlDojiStar,
    CdlDragonflyDoji,
    CdlEngulfing,
    CdlEveningDojiStar,
    CdlEveningStar,
    CdlGapSideSideWhite,
    CdlGravestoneDoji,
    CdlHammer,
    CdlHangingMan,
    CdlHarami,
    CdlHaramiCross,
    CdlHighWave,
    CdlHikkake,
    CdlHikkakeMod,
    CdlHomingPigeon,
    CdlIdentical3Crows,
    CdlInNeck,
    CdlInvertedHammer,
    CdlKicking,
    CdlKickingByLength,
    CdlLadderBottom,
    CdlLongLeggedDoji,
    CdlLongLine,
    CdlMarubozu,
    CdlMatchingLow,
    CdlMatHold,
    CdlMorningDojiStar,
    CdlMorningStar,
    CdlOnNeck,
    CdlPiercing,
    CdlRickshawMan,
    CdlRiseFall3Methods,
    CdlSeparatingLines,
    CdlShootingStar,
    CdlShortLine,
    CdlSpinningTop,
    CdlStalledPattern,
    CdlStickSandwich,
    CdlTakuri,
    CdlTasukiGap,
    CdlThrusting,
    CdlTristar,
    CdlUnique3River,
    CdlUpsideGap2Crows,
    CdlXSideGap3Methods,
}

impl CandlePattern {
    /// Bars consumed before the first signal can appear, given the
    /// engine's candle-setting table.
    pub fn lookback_with(self, ctx: &Context) -> usize {
        let avg = |which: CandleSettingType| ctx.setting(which).avg_period;
        match self {
            CandlePattern::Cdl2Crows => avg(BodyLong) + 2,
            CandlePattern::Cdl3BlackCrows => avg(ShadowVeryShort) + 3,
            CandlePattern::Cdl3Inside => avg(BodyLong).max(avg(BodyShort)) + 2,
            CandlePattern::Cdl3LineStrike => avg(Near) + 3,
            CandlePattern::Cdl3Outside => 3,
            CandlePattern::Cdl3StarsInSouth => {
                avg(ShadowVeryShort).max(avg(ShadowLong)).max(avg(BodyLong)) + 2
            }
            CandlePattern::Cdl3WhiteSoldiers => avg(ShadowVeryShort)
                .max(avg(BodyShort))
                .max(avg(Far))
                .max(avg(Near))
                + 2,
            CandlePattern::CdlAbandonedBaby => {
                avg(BodyDoji).max(avg(BodyLong)).max(avg(BodyShort)) + 2
            }
            CandlePattern::CdlAdvanceBlock => avg(ShadowLong)
                .max(avg(ShadowShort))
                .max(avg(Far))
                .max(avg(Near))
                .max(avg(BodyLong))
                + 2,
            CandlePattern::CdlBeltHold => avg(BodyLong).max(avg(ShadowVeryShort)),
            CandlePattern::CdlBreakaway => avg(BodyLong) + 4,
            CandlePattern::CdlClosingMarubozu => avg(BodyLong).max(avg(ShadowVeryShort)),
            CandlePattern::CdlConcealBabySwall => avg(ShadowVeryShort) + 3,
            CandlePattern::CdlCounterAttack => avg(Equal).max(avg(BodyLong)) + 1,
            CandlePattern::CdlDarkCloudCover => avg(BodyLong) + 1,
            CandlePattern::CdlDoji => avg(BodyDoji),
            CandlePattern::CdlDojiStar => avg(BodyDoji).max(avg(BodyLong)) + 1,
            CandlePattern::CdlDragonflyDoji => avg(BodyDoji).max(avg(ShadowVeryShort)),
            CandlePattern::CdlEngulfing => 2,
            CandlePattern::CdlEveningDojiStar => {
                avg(BodyDoji).max(avg(BodyLong)).max(avg(BodyShort)) + 2
            }
            CandlePattern::CdlEveningStar => avg(BodyLong).max(avg(BodyShort)) + 2,
            CandlePattern::CdlGapSideSideWhite => avg(Near).max(avg(Equal)) + 2,
            CandlePattern::CdlGravestoneDoji => avg(BodyDoji).max(avg(ShadowVeryShort)),
            CandlePattern::CdlHammer => avg(BodyShort)
                .max(avg(ShadowLong))
                .max(avg(ShadowVeryShort))
                .max(avg(Near))
                + 1,
            CandlePattern::CdlHangingMan => avg(BodyShort)
                .max(avg(ShadowLong))
                .max(avg(ShadowVeryShort))
                .max(avg(Near))
                + 1,
            CandlePattern::CdlHarami => avg(BodyShort).max(avg(BodyLong)) + 1,
            CandlePattern::CdlHaramiCross => avg(BodyDoji).max(avg(BodyLong)) + 1,
            CandlePattern::CdlHighWave => avg(BodyShort).max(avg(ShadowVeryLong)),
            CandlePattern::CdlHikkake => 5,
            CandlePattern::CdlHikkakeMod => avg(Near).max(1) + 5,
            CandlePattern::CdlHomingPigeon => avg(BodyShort).max(avg(BodyLong)) + 1,
            CandlePattern::CdlIdentical3Crows => avg(ShadowVeryShort).max(avg(Equal)) + 2,
            CandlePattern::CdlInNeck => avg(Equal).max(avg(BodyLong)) + 1,
            CandlePattern::CdlInvertedHammer => {
                avg(BodyShort).max(avg(ShadowLong)).max(avg(ShadowVeryShort)) + 1
            }
            CandlePattern::CdlKicking => avg(ShadowVeryShort).max(avg(BodyLong)) + 1,
            CandlePattern::CdlKickingByLength => avg(ShadowVeryShort).max(avg(BodyLong)) + 1,
            CandlePattern::CdlLadderBottom => avg(ShadowVeryShort) + 4,
            CandlePattern::CdlLongLeggedDoji => avg(BodyDoji).max(avg(ShadowLong)),
            CandlePattern::CdlLongLine => avg(BodyLong).max(avg(ShadowShort)),
            CandlePattern::CdlMarubozu => avg(BodyLong).max(avg(ShadowVeryShort)),
            CandlePattern::CdlMatchingLow => avg(Equal) + 1,
            CandlePattern::CdlMatHold => avg(BodyShort).max(avg(BodyLong)) + 4,
            CandlePattern::CdlMorningDojiStar => {
                avg(BodyDoji).max(avg(BodyLong)).max(avg(BodyShort)) + 2
            }
            CandlePattern::CdlMorningStar => avg(BodyLong).max(avg(BodyShort)) + 2,
            CandlePattern::CdlOnNeck => avg(Equal).max(avg(BodyLong)) + 1,
            CandlePattern::CdlPiercing => avg(BodyLong) + 1,
            CandlePattern::CdlRickshawMan => avg(BodyDoji).max(avg(ShadowLong)).max(avg(Near)),
            CandlePattern::CdlRiseFall3Methods => avg(BodyShort).max(avg(BodyLong)) + 4,
            CandlePattern::CdlSeparatingLines => {
                avg(ShadowVeryShort).max(avg(BodyLong)).max(avg(Equal)) + 1
            }
            CandlePattern::CdlShootingStar => {
                avg(BodyShort).max(avg(ShadowLong)).max(avg(ShadowVeryShort)) + 1
            }
            CandlePattern::CdlShortLine => avg(BodyShort).max(avg(ShadowShort)),
            CandlePattern::CdlSpinningTop => avg(BodyShort),
            CandlePattern::CdlStalledPattern => avg(BodyLong)
                .max(avg(BodyShort))
                .max(avg(ShadowVeryShort))
                .max(avg(Near))
                + 2,
            CandlePattern::CdlStickSandwich => avg(Equal) + 2,
            CandlePattern::CdlTakuri => {
                avg(BodyDoji).max(avg(ShadowVeryShort)).max(avg(ShadowVeryLong))
            }
            CandlePattern::CdlTasukiGap => avg(Near) + 2,
            CandlePattern::CdlThrusting => avg(Equal).max(avg(BodyLong)) + 1,
            CandlePattern::CdlTristar => avg(BodyDoji) + 2,
            CandlePattern::CdlUnique3River => avg(BodyShort).max(avg(BodyLong)) + 2,
            CandlePattern::CdlUpsideGap2Crows => avg(BodyShort).max(avg(BodyLong)) + 2,
            CandlePattern::CdlXSideGap3Methods => 2,
        }
    }

    /// Default penetration for the seven parameterized patterns; 0 for
    /// the rest (the parameter is unused there).
    pub fn default_penetration(self) -> f64 {
        match self {
            CandlePattern::CdlDarkCloudCover | CandlePattern::CdlMatHold => 0.5,
            CandlePattern::CdlAbandonedBaby
            | CandlePattern::CdlEveningDojiStar
            | CandlePattern::CdlEveningStar
            | CandlePattern::CdlMorningDojiStar
            | CandlePattern::CdlMorningStar => 0.3,
            _ => 0.0,
        }
    }
}

/// Resolve a pattern's lookback against the live engine context.
pub fn cdl_lookback(pattern: CandlePattern) -> Result<usize, TaError> {
    Ok(pattern.lookback_with(acquire("cdl_lookback")?))
}

/// Run one pattern by tag with its default penetration.
pub fn cdl(
    pattern: CandlePattern,
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
) -> Result<Vec<i32>, TaError> {
    use CandlePattern::*;
    match pattern {
        Cdl2Crows => cdl2crows(open, high, low, close),
        Cdl3BlackCrows => cdl3blackcrows(open, high, low, close),
        Cdl3Inside => cdl3inside(open, high, low, close),
        Cdl3LineStrike => cdl3linestrike(open, high, low, close),
        Cdl3Outside => cdl3outside(open, high, low, close),
        Cdl3StarsInSouth => cdl3starsinsouth(open, high, low, close),
        Cdl3WhiteSoldiers => cdl3whitesoldiers(open, high, low, close),
        CdlAbandonedBaby => cdlabandonedbaby(open, high, low, close, 0.3),
        CdlAdvanceBlock => cdladvanceblock(open, high, low, close),
        CdlBeltHold => cdlbelthold(open, high, low, close),
        CdlBreakaway => cdlbreakaway(open, high, low, close),
        CdlClosingMarubozu => cdlclosingmarubozu(open, high, low, close),
        CdlConcealBabySwall => cdlconcealbabyswall(open, high, low, close),
        CdlCounterAttack => cdlcounterattack(open, high, low, close),
        CdlDarkCloudCover => cdldarkcloudcover(open, high, low, close, 0.5),
        CdlDoji => cdldoji(open, high, low, close),
        CdlDojiStar => cdldojistar(open, high, low, close),
        CdlDragonflyDoji => cdldragonflydoji(open, high, low, close),
        CdlEngulfing => cdlengulfing(open, high, low, close),
        CdlEveningDojiStar => cdleveningdojistar(open, high, low, close, 0.3),
        CdlEveningStar => cdleveningstar(open, high, low, close, 0.3),
        CdlGapSideSideWhite => cdlgapsidesidewhite(open, high, low, close),
        CdlGravestoneDoji => cdlgravestonedoji(open, high, low, close),
        CdlHammer => cdlhammer(open, high, low, close),
        CdlHangingMan => cdlhangingman(open, high, low, close),
        CdlHarami => cdlharami(open, high, low, close),
        CdlHaramiCross => cdlharamicross(open, high, low, close),
        CdlHighWave => cdlhighwave(open, high, low, close),
        CdlHikkake => cdlhikkake(open, high, low, close),
        CdlHikkakeMod => cdlhikkakemod(open, high, low, close),
        CdlHomingPigeon => cdlhomingpigeon(open, high, low, close),
        CdlIdentical3Crows => cdlidentical3crows(open, high, low, close),
        CdlInNeck => cdlinneck(open, high, low, close),
        CdlInvertedHammer => cdlinvertedhammer(open, high, low, close),
        CdlKicking => cdlkicking(open, high, low, close),
        CdlKickingByLength => cdlkickingbylength(open, high, low, close),
        CdlLadderBottom => cdlladderbottom(open, high, low, close),
        CdlLongLeggedDoji => cdllongleggeddoji(open, high, low, close),
        CdlLongLine => cdllongline(open, high, low, close),
        CdlMarubozu => cdlmarubozu(open, high, low, close),
        CdlMatchingLow => cdlmatchinglow(open, high, low, close),
        CdlMatHold => cdlmathold(open, high, low, close, 0.5),
        CdlMorningDojiStar => cdlmorningdojistar(open, high, low, close, 0.3),
        CdlMorningStar => cdlmorningstar(open, high, low, close, 0.3),
        CdlOnNeck => cdlonneck(open, high, low, close),
        CdlPiercing => cdlpiercing(open, high, low, close),
        CdlRickshawMan => cdlrickshawman(open, high, low, close),
        CdlRiseFall3Methods => cdlrisefall3methods(open, high, low, close),
        CdlSeparatingLines => cdlseparatinglines(open, high, low, close),
        CdlShootingStar => cdlshootingstar(open, high, low, close),
        CdlShortLine => cdlshortline(open, high, low, close),
        CdlSpinningTop => cdlspinningtop(open, high, low, close),
        CdlStalledPattern => cdlstalledpattern(open, high, low, close),
        CdlStickSandwich => cdlsticksandwich(open, high, low, close),
        CdlTakuri => cdltakuri(open, high, low, close),
        CdlTasukiGap => cdltasukigap(open, high, low, close),
        CdlThrusting => cdlthrusting(open, high, low, close),
        CdlTristar => cdltristar(open, high, low, close),
        CdlUnique3River => cdlunique3river(open, high, low, close),
        CdlUpsideGap2Crows => cdlupsidegap2crows(open, high, low, close),
        CdlXSideGap3Methods => cdlxsidegap3methods(open, high, low, close),
    }
}

/// The four aligned price series, with the bar geometry helpers every
/// pattern shares.
#[derive(Clone, Copy)]
struct Bars<'a> {
    open: &'a [f64],
    high: &'a [f64],
    low: &'a [f64],
    close: &'a [f64],
}

impl Bars<'_> {
    #[inline(always)]
    fn color(&self, i: usize) -> i32 {
        if self.close[i] >= self.open[i] {
            1
        } else {
            -1
        }
    }

    #[inline(always)]
    fn real_body(&self, i: usize) -> f64 {
        (self.close[i] - self.open[i]).abs()
    }

    #[inline(always)]
    fn body_top(&self, i: usize) -> f64 {
        self.close[i].max(self.open[i])
    }

    #[inline(always)]
    fn body_bottom(&self, i: usize) -> f64 {
        self.close[i].min(self.open[i])
    }

    #[inline(always)]
    fn upper_shadow(&self, i: usize) -> f64 {
        self.high[i] - self.body_top(i)
    }

    #[inline(always)]
    fn lower_shadow(&self, i: usize) -> f64 {
        self.body_bottom(i) - self.low[i]
    }

    #[inline(always)]
    fn high_low(&self, i: usize) -> f64 {
        self.high[i] - self.low[i]
    }

    fn range(&self, range_type: RangeType, i: usize) -> f64 {
        match range_type {
            RangeType::RealBody => self.real_body(i),
            RangeType::HighLow => self.high_low(i),
            RangeType::Shadows => self.upper_shadow(i) + self.lower_shadow(i),
        }
    }

    /// Real body of `i` entirely above / below the real body of `j`.
    #[inline(always)]
    fn body_gap_up(&self, i: usize, j: usize) -> bool {
        self.body_bottom(i) > self.body_top(j)
    }

    #[inline(always)]
    fn body_gap_down(&self, i: usize, j: usize) -> bool {
        self.body_top(i) < self.body_bottom(j)
    }

    /// Full-range gaps, shadows included.
    #[inline(always)]
    fn gap_up(&self, i: usize, j: usize) -> bool {
        self.low[i] > self.high[j]
    }

    #[inline(always)]
    fn gap_down(&self, i: usize, j: usize) -> bool {
        self.high[i] < self.low[j]
    }
}

/// Running total for one candle setting measured at a fixed offset
/// behind the pattern bar. `avg` yields the comparison threshold for
/// the bar at `i - offset`; `roll` advances the window by one bar and
/// must be called once at the bottom of the scan loop.
struct RangeAvg {
    range_type: RangeType,
    avg_period: usize,
    factor: f64,
    offset: usize,
    total: f64,
}

impl RangeAvg {
    fn new(ctx: &Context, k: &Bars, which: CandleSettingType, offset: usize, first: usize) -> Self {
        let setting = ctx.setting(which);
        let mut total = 0.0;
        if setting.avg_period != 0 {
            let end = first - offset;
            for j in end - setting.avg_period..end {
                total += k.range(setting.range_type, j);
            }
        }
        RangeAvg {
            range_type: setting.range_type,
            avg_period: setting.avg_period,
            factor: setting.factor,
            offset,
            total,
        }
    }

    #[inline]
    fn avg(&self, k: &Bars, i: usize) -> f64 {
        let base = if self.avg_period != 0 {
            self.total / self.avg_period as f64
        } else {
            k.range(self.range_type, i)
        };
        // A shadow-pair span covers two shadows, so each one is
        // compared against half of it.
        let halver = if self.range_type == RangeType::Shadows {
            2.0
        } else {
            1.0
        };
        self.factor * base / halver
    }

    #[inline]
    fn roll(&mut self, k: &Bars, i: usize) {
        if self.avg_period != 0 {
            let idx = i - self.offset;
            self.total += k.range(self.range_type, idx) - k.range(self.range_type, idx - self.avg_period);
        }
    }
}

fn prologue<'a>(
    name: &'static str,
    open: &'a [f64],
    high: &'a [f64],
    low: &'a [f64],
    close: &'a [f64],
) -> Result<&'static Context, TaError> {
    let ctx = acquire(name)?;
    check_same_length(name, &[open.len(), high.len(), low.len(), close.len()])?;
    Ok(ctx)
}

/// Two Crows: an uptrending long white candle, a black candle gapping
/// above it, then a black candle opening inside the second body and
/// closing inside the first. Bearish.
pub fn cdl2crows(open: &[f64], high: &[f64], low: &[f64], close: &[f64]) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdl2crows", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::Cdl2Crows.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut body_long = RangeAvg::new(ctx, &k, BodyLong, 2, lookback);
    for i in lookback..len {
        if k.color(i - 2) == 1
            && k.real_body(i - 2) > body_long.avg(&k, i - 2)
            && k.color(i - 1) == -1
            && k.body_gap_up(i - 1, i - 2)
            && k.color(i) == -1
            && open[i] < open[i - 1]
            && open[i] > close[i - 1]
            && close[i] > open[i - 2]
            && close[i] < close[i - 2]
        {
            out[i] = -100;
        }
        body_long.roll(&k, i);
    }
    Ok(out)
}

/// Three Black Crows: three long black candles closing at their lows,
/// each opening inside the prior body. Bearish.
pub fn cdl3blackcrows(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdl3blackcrows", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::Cdl3BlackCrows.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut shadow2 = RangeAvg::new(ctx, &k, ShadowVeryShort, 2, lookback);
    let mut shadow1 = RangeAvg::new(ctx, &k, ShadowVeryShort, 1, lookback);
    let mut shadow0 = RangeAvg::new(ctx, &k, ShadowVeryShort, 0, lookback);
    for i in lookback..len {
        if k.color(i - 3) == 1
            && k.color(i - 2) == -1
            && k.lower_shadow(i - 2) < shadow2.avg(&k, i - 2)
            && k.color(i - 1) == -1
            && k.lower_shadow(i - 1) < shadow1.avg(&k, i - 1)
            && k.color(i) == -1
            && k.lower_shadow(i) < shadow0.avg(&k, i)
            && open[i - 1] < open[i - 2]
            && open[i - 1] > close[i - 2]
            && open[i] < open[i - 1]
            && open[i] > close[i - 1]
            && high[i - 3] > close[i - 2]
            && close[i - 2] > close[i - 1]
            && close[i - 1] > close[i]
        {
            out[i] = -100;
        }
        shadow2.roll(&k, i);
        shadow1.roll(&k, i);
        shadow0.roll(&k, i);
    }
    Ok(out)
}

/// Three Inside Up/Down: a long candle, a short harami inside it, then
/// a close beyond the first open confirming the reversal.
pub fn cdl3inside(open: &[f64], high: &[f64], low: &[f64], close: &[f64]) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdl3inside", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::Cdl3Inside.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut body_long = RangeAvg::new(ctx, &k, BodyLong, 2, lookback);
    let mut body_short = RangeAvg::new(ctx, &k, BodyShort, 1, lookback);
    for i in lookback..len {
        if k.real_body(i - 2) > body_long.avg(&k, i - 2)
            && k.real_body(i - 1) <= body_short.avg(&k, i - 1)
            && k.body_top(i - 1) < k.body_top(i - 2)
            && k.body_bottom(i - 1) > k.body_bottom(i - 2)
            && ((k.color(i - 2) == 1 && k.color(i) == -1 && close[i] < open[i - 2])
                || (k.color(i - 2) == -1 && k.color(i) == 1 && close[i] > open[i - 2]))
        {
            out[i] = -k.color(i - 2) * 100;
        }
        body_long.roll(&k, i);
        body_short.roll(&k, i);
    }
    Ok(out)
}

/// Three-Line Strike: three same-color candles with progressing closes
/// and near-body opens, then an opposite candle that opens beyond the
/// third close and closes beyond the first open.
pub fn cdl3linestrike(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdl3linestrike", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::Cdl3LineStrike.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut near3 = RangeAvg::new(ctx, &k, Near, 3, lookback);
    let mut near2 = RangeAvg::new(ctx, &k, Near, 2, lookback);
    for i in lookback..len {
        if k.color(i - 3) == k.color(i - 2)
            && k.color(i - 2) == k.color(i - 1)
            && k.color(i) == -k.color(i - 1)
            && open[i - 2] >= k.body_bottom(i - 3) - near3.avg(&k, i - 3)
            && open[i - 2] <= k.body_top(i - 3) + near3.avg(&k, i - 3)
            && open[i - 1] >= k.body_bottom(i - 2) - near2.avg(&k, i - 2)
            && open[i - 1] <= k.body_top(i - 2) + near2.avg(&k, i - 2)
            && ((k.color(i - 1) == 1
                && close[i - 1] > close[i - 2]
                && close[i - 2] > close[i - 3]
                && open[i] > close[i - 1]
                && close[i] < open[i - 3])
                || (k.color(i - 1) == -1
                    && close[i - 1] < close[i - 2]
                    && close[i - 2] < close[i - 3]
                    && open[i] < close[i - 1]
                    && close[i] > open[i - 3]))
        {
            out[i] = k.color(i - 1) * 100;
        }
        near3.roll(&k, i);
        near2.roll(&k, i);
    }
    Ok(out)
}

/// Three Outside Up/Down: an engulfing pair followed by a close that
/// extends the engulfing candle's direction.
pub fn cdl3outside(open: &[f64], high: &[f64], low: &[f64], close: &[f64]) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdl3outside", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::Cdl3Outside.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    for i in lookback..len {
        if (k.color(i - 1) == 1
            && k.color(i - 2) == -1
            && close[i - 1] > open[i - 2]
            && open[i - 1] < close[i - 2]
            && close[i] > close[i - 1])
            || (k.color(i - 1) == -1
                && k.color(i - 2) == 1
                && open[i - 1] > close[i - 2]
                && close[i - 1] < open[i - 2]
                && close[i] < close[i - 1])
        {
            out[i] = k.color(i - 1) * 100;
        }
    }
    Ok(out)
}

/// Three Stars in the South: three black candles with shrinking bodies
/// and ranges after a long black day with a long lower shadow. Bullish.
pub fn cdl3starsinsouth(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdl3starsinsouth", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::Cdl3StarsInSouth.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut body_long = RangeAvg::new(ctx, &k, BodyLong, 2, lookback);
    let mut shadow_long = RangeAvg::new(ctx, &k, ShadowLong, 2, lookback);
    let mut shadow1 = RangeAvg::new(ctx, &k, ShadowVeryShort, 1, lookback);
    let mut shadow0 = RangeAvg::new(ctx, &k, ShadowVeryShort, 0, lookback);
    for i in lookback..len {
        if k.color(i - 2) == -1
            && k.color(i - 1) == -1
            && k.color(i) == -1
            && k.real_body(i - 2) > body_long.avg(&k, i - 2)
            && k.lower_shadow(i - 2) > shadow_long.avg(&k, i - 2)
            && k.real_body(i - 1) < k.real_body(i - 2)
            && open[i - 1] > close[i - 2]
            && open[i - 1] <= high[i - 2]
            && low[i - 1] < close[i - 2]
            && low[i - 1] >= low[i - 2]
            && k.lower_shadow(i - 1) > shadow1.avg(&k, i - 1)
            && k.real_body(i) < k.real_body(i - 1)
            && k.lower_shadow(i) < shadow0.avg(&k, i)
            && k.upper_shadow(i) < shadow0.avg(&k, i)
            && low[i] > low[i - 1]
            && high[i] < high[i - 1]
        {
            out[i] = 100;
        }
        body_long.roll(&k, i);
        shadow_long.roll(&k, i);
        shadow1.roll(&k, i);
        shadow0.roll(&k, i);
    }
    Ok(out)
}

/// Three Advancing White Soldiers: three white candles with rising
/// closes, near-body opens, similar bodies and short upper shadows.
pub fn cdl3whitesoldiers(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdl3whitesoldiers", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::Cdl3WhiteSoldiers.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut shadow2 = RangeAvg::new(ctx, &k, ShadowVeryShort, 2, lookback);
    let mut shadow1 = RangeAvg::new(ctx, &k, ShadowVeryShort, 1, lookback);
    let mut shadow0 = RangeAvg::new(ctx, &k, ShadowVeryShort, 0, lookback);
    let mut near2 = RangeAvg::new(ctx, &k, Near, 2, lookback);
    let mut near1 = RangeAvg::new(ctx, &k, Near, 1, lookback);
    let mut far2 = RangeAvg::new(ctx, &k, Far, 2, lookback);
    let mut far1 = RangeAvg::new(ctx, &k, Far, 1, lookback);
    let mut body_short = RangeAvg::new(ctx, &k, BodyShort, 0, lookback);
    for i in lookback..len {
        if k.color(i - 2) == 1
            && k.upper_shadow(i - 2) < shadow2.avg(&k, i - 2)
            && k.color(i - 1) == 1
            && k.upper_shadow(i - 1) < shadow1.avg(&k, i - 1)
            && k.color(i) == 1
            && k.upper_shadow(i) < shadow0.avg(&k, i)
            && close[i] > close[i - 1]
            && close[i - 1] > close[i - 2]
            && open[i - 1] > open[i - 2]
            && open[i - 1] <= close[i - 2] + near2.avg(&k, i - 2)
            && open[i] > open[i - 1]
            && open[i] <= close[i - 1] + near1.avg(&k, i - 1)
            && k.real_body(i - 1) > k.real_body(i - 2) - far2.avg(&k, i - 2)
            && k.real_body(i) > k.real_body(i - 1) - far1.avg(&k, i - 1)
            && k.real_body(i) > body_short.avg(&k, i)
        {
            out[i] = 100;
        }
        shadow2.roll(&k, i);
        shadow1.roll(&k, i);
        shadow0.roll(&k, i);
        near2.roll(&k, i);
        near1.roll(&k, i);
        far2.roll(&k, i);
        far1.roll(&k, i);
        body_short.roll(&k, i);
    }
    Ok(out)
}

/// Abandoned Baby: a doji islanded by full gaps between a long candle
/// and an opposite candle penetrating the first body.
pub fn cdlabandonedbaby(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
    penetration: f64,
) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlabandonedbaby", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    validate_non_negative("cdlabandonedbaby", "penetration", penetration)?;
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlAbandonedBaby.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut body_long = RangeAvg::new(ctx, &k, BodyLong, 2, lookback);
    let mut body_doji = RangeAvg::new(ctx, &k, BodyDoji, 1, lookback);
    let mut body_short = RangeAvg::new(ctx, &k, BodyShort, 0, lookback);
    for i in lookback..len {
        if k.real_body(i - 2) > body_long.avg(&k, i - 2)
            && k.real_body(i - 1) <= body_doji.avg(&k, i - 1)
            && k.real_body(i) > body_short.avg(&k, i)
            && ((k.color(i - 2) == 1
                && k.color(i) == -1
                && close[i] < close[i - 2] - k.real_body(i - 2) * penetration
                && k.gap_up(i - 1, i - 2)
                && k.gap_down(i, i - 1))
                || (k.color(i - 2) == -1
                    && k.color(i) == 1
                    && close[i] > close[i - 2] + k.real_body(i - 2) * penetration
                    && k.gap_down(i - 1, i - 2)
                    && k.gap_up(i, i - 1)))
        {
            out[i] = k.color(i) * 100;
        }
        body_long.roll(&k, i);
        body_doji.roll(&k, i);
        body_short.roll(&k, i);
    }
    Ok(out)
}

/// Advance Block: three white candles with rising closes but fading
/// bodies or growing upper shadows. Bearish warning.
pub fn cdladvanceblock(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdladvanceblock", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlAdvanceBlock.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut shadow_short2 = RangeAvg::new(ctx, &k, ShadowShort, 2, lookback);
    let mut shadow_short1 = RangeAvg::new(ctx, &k, ShadowShort, 1, lookback);
    let mut shadow_short0 = RangeAvg::new(ctx, &k, ShadowShort, 0, lookback);
    let mut shadow_long0 = RangeAvg::new(ctx, &k, ShadowLong, 0, lookback);
    let mut near2 = RangeAvg::new(ctx, &k, Near, 2, lookback);
    let mut near1 = RangeAvg::new(ctx, &k, Near, 1, lookback);
    let mut far2 = RangeAvg::new(ctx, &k, Far, 2, lookback);
    let mut far1 = RangeAvg::new(ctx, &k, Far, 1, lookback);
    let mut body_long = RangeAvg::new(ctx, &k, BodyLong, 2, lookback);
    for i in lookback..len {
        if k.color(i - 2) == 1
            && k.color(i - 1) == 1
            && k.color(i) == 1
            && close[i] > close[i - 1]
            && close[i - 1] > close[i - 2]
            && open[i - 1] > open[i - 2]
            && open[i - 1] <= close[i - 2] + near2.avg(&k, i - 2)
            && open[i] > open[i - 1]
            && open[i] <= close[i - 1] + near1.avg(&k, i - 1)
            && k.real_body(i - 2) > body_long.avg(&k, i - 2)
            && k.upper_shadow(i - 2) < shadow_short2.avg(&k, i - 2)
            && ((k.real_body(i - 1) < k.real_body(i - 2) - far2.avg(&k, i - 2)
                && k.real_body(i) < k.real_body(i - 1) + near1.avg(&k, i - 1))
                || k.real_body(i) < k.real_body(i - 1) - far1.avg(&k, i - 1)
                || (k.real_body(i) < k.real_body(i - 1)
                    && k.real_body(i - 1) < k.real_body(i - 2)
                    && (k.upper_shadow(i) > shadow_short0.avg(&k, i)
                        || k.upper_shadow(i - 1) > shadow_short1.avg(&k, i - 1)))
                || (k.real_body(i) < k.real_body(i - 1)
                    && k.upper_shadow(i) > shadow_long0.avg(&k, i)))
        {
            out[i] = -100;
        }
        shadow_short2.roll(&k, i);
        shadow_short1.roll(&k, i);
        shadow_short0.roll(&k, i);
        shadow_long0.roll(&k, i);
        near2.roll(&k, i);
        near1.roll(&k, i);
        far2.roll(&k, i);
        far1.roll(&k, i);
        body_long.roll(&k, i);
    }
    Ok(out)
}

/// Belt-hold: a long candle with no shadow on its opening side.
pub fn cdlbelthold(open: &[f64], high: &[f64], low: &[f64], close: &[f64]) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlbelthold", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlBeltHold.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut body_long = RangeAvg::new(ctx, &k, BodyLong, 0, lookback);
    let mut shadow = RangeAvg::new(ctx, &k, ShadowVeryShort, 0, lookback);
    for i in lookback..len {
        if k.real_body(i) > body_long.avg(&k, i)
            && ((k.color(i) == 1 && k.lower_shadow(i) < shadow.avg(&k, i))
                || (k.color(i) == -1 && k.upper_shadow(i) < shadow.avg(&k, i)))
        {
            out[i] = k.color(i) * 100;
        }
        body_long.roll(&k, i);
        shadow.roll(&k, i);
    }
    Ok(out)
}

/// Breakaway: a five-bar acceleration away from a long candle, closed
/// by an opposite candle that re-enters the gap without filling it.
pub fn cdlbreakaway(open: &[f64], high: &[f64], low: &[f64], close: &[f64]) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlbreakaway", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlBreakaway.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut body_long = RangeAvg::new(ctx, &k, BodyLong, 4, lookback);
    for i in lookback..len {
        if k.real_body(i - 4) > body_long.avg(&k, i - 4)
            && k.color(i - 4) == k.color(i - 3)
            && k.color(i - 3) == k.color(i - 1)
            && k.color(i) == -k.color(i - 4)
            && ((k.color(i - 4) == -1
                && k.body_gap_down(i - 3, i - 4)
                && high[i - 2] < high[i - 3]
                && low[i - 2] < low[i - 3]
                && high[i - 1] < high[i - 2]
                && low[i - 1] < low[i - 2]
                && close[i] > open[i - 3]
                && close[i] < close[i - 4])
                || (k.color(i - 4) == 1
                    && k.body_gap_up(i - 3, i - 4)
                    && high[i - 2] > high[i - 3]
                    && low[i - 2] > low[i - 3]
                    && high[i - 1] > high[i - 2]
                    && low[i - 1] > low[i - 2]
                    && close[i] < open[i - 3]
                    && close[i] > close[i - 4]))
        {
            out[i] = k.color(i) * 100;
        }
        body_long.roll(&k, i);
    }
    Ok(out)
}

/// Closing Marubozu: a long candle with no shadow on its closing side.
pub fn cdlclosingmarubozu(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlclosingmarubozu", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlClosingMarubozu.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut body_long = RangeAvg::new(ctx, &k, BodyLong, 0, lookback);
    let mut shadow = RangeAvg::new(ctx, &k, ShadowVeryShort, 0, lookback);
    for i in lookback..len {
        if k.real_body(i) > body_long.avg(&k, i)
            && ((k.color(i) == 1 && k.upper_shadow(i) < shadow.avg(&k, i))
                || (k.color(i) == -1 && k.lower_shadow(i) < shadow.avg(&k, i)))
        {
            out[i] = k.color(i) * 100;
        }
        body_long.roll(&k, i);
        shadow.roll(&k, i);
    }
    Ok(out)
}

/// Concealing Baby Swallow: four black candles where the third gaps
/// down but trades into the prior body and the fourth engulfs it.
pub fn cdlconcealbabyswall(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlconcealbabyswall", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlConcealBabySwall.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut shadow3 = RangeAvg::new(ctx, &k, ShadowVeryShort, 3, lookback);
    let mut shadow2 = RangeAvg::new(ctx, &k, ShadowVeryShort, 2, lookback);
    let mut shadow1 = RangeAvg::new(ctx, &k, ShadowVeryShort, 1, lookback);
    for i in lookback..len {
        if k.color(i - 3) == -1
            && k.color(i - 2) == -1
            && k.color(i - 1) == -1
            && k.color(i) == -1
            && k.lower_shadow(i - 3) < shadow3.avg(&k, i - 3)
            && k.upper_shadow(i - 3) < shadow3.avg(&k, i - 3)
            && k.lower_shadow(i - 2) < shadow2.avg(&k, i - 2)
            && k.upper_shadow(i - 2) < shadow2.avg(&k, i - 2)
            && k.body_gap_down(i - 1, i - 2)
            && k.upper_shadow(i - 1) > shadow1.avg(&k, i - 1)
            && high[i - 1] > close[i - 2]
            && high[i] > high[i - 1]
            && low[i] < low[i - 1]
        {
            out[i] = 100;
        }
        shadow3.roll(&k, i);
        shadow2.roll(&k, i);
        shadow1.roll(&k, i);
    }
    Ok(out)
}

/// Counterattack: two long opposite candles closing at the same level.
pub fn cdlcounterattack(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlcounterattack", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlCounterAttack.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut equal = RangeAvg::new(ctx, &k, Equal, 1, lookback);
    let mut body_long1 = RangeAvg::new(ctx, &k, BodyLong, 1, lookback);
    let mut body_long0 = RangeAvg::new(ctx, &k, BodyLong, 0, lookback);
    for i in lookback..len {
        if k.color(i) == -k.color(i - 1)
            && k.real_body(i - 1) > body_long1.avg(&k, i - 1)
            && k.real_body(i) > body_long0.avg(&k, i)
            && close[i] <= close[i - 1] + equal.avg(&k, i - 1)
            && close[i] >= close[i - 1] - equal.avg(&k, i - 1)
        {
            out[i] = k.color(i) * 100;
        }
        equal.roll(&k, i);
        body_long1.roll(&k, i);
        body_long0.roll(&k, i);
    }
    Ok(out)
}

/// Dark Cloud Cover: a black candle opening above the prior high and
/// closing well into the prior white body.
pub fn cdldarkcloudcover(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
    penetration: f64,
) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdldarkcloudcover", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    validate_non_negative("cdldarkcloudcover", "penetration", penetration)?;
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlDarkCloudCover.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut body_long = RangeAvg::new(ctx, &k, BodyLong, 1, lookback);
    for i in lookback..len {
        if k.color(i - 1) == 1
            && k.real_body(i - 1) > body_long.avg(&k, i - 1)
            && k.color(i) == -1
            && open[i] > high[i - 1]
            && close[i] > open[i - 1]
            && close[i] < close[i - 1] - k.real_body(i - 1) * penetration
        {
            out[i] = -100;
        }
        body_long.roll(&k, i);
    }
    Ok(out)
}

/// Doji: open and close within the doji threshold of each other.
pub fn cdldoji(open: &[f64], high: &[f64], low: &[f64], close: &[f64]) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdldoji", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlDoji.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut body_doji = RangeAvg::new(ctx, &k, BodyDoji, 0, lookback);
    for i in lookback..len {
        if k.real_body(i) <= body_doji.avg(&k, i) {
            out[i] = 100;
        }
        body_doji.roll(&k, i);
    }
    Ok(out)
}

/// Doji Star: a doji gapping away from a long candle's body.
pub fn cdldojistar(open: &[f64], high: &[f64], low: &[f64], close: &[f64]) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdldojistar", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlDojiStar.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut body_long = RangeAvg::new(ctx, &k, BodyLong, 1, lookback);
    let mut body_doji = RangeAvg::new(ctx, &k, BodyDoji, 0, lookback);
    for i in lookback..len {
        if k.real_body(i - 1) > body_long.avg(&k, i - 1)
            && k.real_body(i) <= body_doji.avg(&k, i)
            && ((k.color(i - 1) == 1 && k.body_gap_up(i, i - 1))
                || (k.color(i - 1) == -1 && k.body_gap_down(i, i - 1)))
        {
            out[i] = -k.color(i - 1) * 100;
        }
        body_long.roll(&k, i);
        body_doji.roll(&k, i);
    }
    Ok(out)
}

/// Dragonfly Doji: a doji whose open and close sit at the high.
pub fn cdldragonflydoji(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdldragonflydoji", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlDragonflyDoji.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut body_doji = RangeAvg::new(ctx, &k, BodyDoji, 0, lookback);
    let mut shadow = RangeAvg::new(ctx, &k, ShadowVeryShort, 0, lookback);
    for i in lookback..len {
        if k.real_body(i) <= body_doji.avg(&k, i) && k.upper_shadow(i) < shadow.avg(&k, i) {
            out[i] = 100;
        }
        body_doji.roll(&k, i);
        shadow.roll(&k, i);
    }
    Ok(out)
}

/// Engulfing: a real body that wraps the prior opposite-color body.
pub fn cdlengulfing(open: &[f64], high: &[f64], low: &[f64], close: &[f64]) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlengulfing", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlEngulfing.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    for i in lookback..len {
        if (k.color(i) == 1
            && k.color(i - 1) == -1
            && close[i] > open[i - 1]
            && open[i] < close[i - 1])
            || (k.color(i) == -1
                && k.color(i - 1) == 1
                && open[i] > close[i - 1]
                && close[i] < open[i - 1])
        {
            out[i] = k.color(i) * 100;
        }
    }
    Ok(out)
}

/// Evening Doji Star: long white candle, gapped doji, then a black
/// candle closing well into the first body. Bearish.
pub fn cdleveningdojistar(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
    penetration: f64,
) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdleveningdojistar", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    validate_non_negative("cdleveningdojistar", "penetration", penetration)?;
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlEveningDojiStar.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut body_long = RangeAvg::new(ctx, &k, BodyLong, 2, lookback);
    let mut body_doji = RangeAvg::new(ctx, &k, BodyDoji, 1, lookback);
    let mut body_short = RangeAvg::new(ctx, &k, BodyShort, 0, lookback);
    for i in lookback..len {
        if k.real_body(i - 2) > body_long.avg(&k, i - 2)
            && k.color(i - 2) == 1
            && k.real_body(i - 1) <= body_doji.avg(&k, i - 1)
            && k.body_gap_up(i - 1, i - 2)
            && k.real_body(i) > body_short.avg(&k, i)
            && k.color(i) == -1
            && close[i] < close[i - 2] - k.real_body(i - 2) * penetration
        {
            out[i] = -100;
        }
        body_long.roll(&k, i);
        body_doji.roll(&k, i);
        body_short.roll(&k, i);
    }
    Ok(out)
}

/// Evening Star: like the doji variant but with a short-bodied star.
pub fn cdleveningstar(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
    penetration: f64,
) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdleveningstar", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    validate_non_negative("cdleveningstar", "penetration", penetration)?;
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlEveningStar.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut body_long = RangeAvg::new(ctx, &k, BodyLong, 2, lookback);
    let mut body_short1 = RangeAvg::new(ctx, &k, BodyShort, 1, lookback);
    let mut body_short0 = RangeAvg::new(ctx, &k, BodyShort, 0, lookback);
    for i in lookback..len {
        if k.real_body(i - 2) > body_long.avg(&k, i - 2)
            && k.color(i - 2) == 1
            && k.real_body(i - 1) <= body_short1.avg(&k, i - 1)
            && k.body_gap_up(i - 1, i - 2)
            && k.real_body(i) > body_short0.avg(&k, i)
            && k.color(i) == -1
            && close[i] < close[i - 2] - k.real_body(i - 2) * penetration
        {
            out[i] = -100;
        }
        body_long.roll(&k, i);
        body_short1.roll(&k, i);
        body_short0.roll(&k, i);
    }
    Ok(out)
}

/// Up/Down-gap side-by-side white lines: two similar white candles at
/// the same level, both gapping the same way from the candle before.
pub fn cdlgapsidesidewhite(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlgapsidesidewhite", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlGapSideSideWhite.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut near = RangeAvg::new(ctx, &k, Near, 1, lookback);
    let mut equal = RangeAvg::new(ctx, &k, Equal, 1, lookback);
    for i in lookback..len {
        if ((k.body_gap_up(i - 1, i - 2) && k.body_gap_up(i, i - 2))
            || (k.body_gap_down(i - 1, i - 2) && k.body_gap_down(i, i - 2)))
            && k.color(i - 1) == 1
            && k.color(i) == 1
            && k.real_body(i) >= k.real_body(i - 1) - near.avg(&k, i - 1)
            && k.real_body(i) <= k.real_body(i - 1) + near.avg(&k, i - 1)
            && open[i] >= open[i - 1] - equal.avg(&k, i - 1)
            && open[i] <= open[i - 1] + equal.avg(&k, i - 1)
        {
            out[i] = if k.body_gap_up(i - 1, i - 2) { 100 } else { -100 };
        }
        near.roll(&k, i);
        equal.roll(&k, i);
    }
    Ok(out)
}

/// Gravestone Doji: a doji whose open and close sit at the low.
pub fn cdlgravestonedoji(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlgravestonedoji", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlGravestoneDoji.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut body_doji = RangeAvg::new(ctx, &k, BodyDoji, 0, lookback);
    let mut shadow = RangeAvg::new(ctx, &k, ShadowVeryShort, 0, lookback);
    for i in lookback..len {
        if k.real_body(i) <= body_doji.avg(&k, i) && k.lower_shadow(i) < shadow.avg(&k, i) {
            out[i] = 100;
        }
        body_doji.roll(&k, i);
        shadow.roll(&k, i);
    }
    Ok(out)
}

/// Hammer: small body, long lower shadow, tiny upper shadow, body near
/// the prior low. Bullish.
pub fn cdlhammer(open: &[f64], high: &[f64], low: &[f64], close: &[f64]) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlhammer", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlHammer.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut body_short = RangeAvg::new(ctx, &k, BodyShort, 0, lookback);
    let mut shadow_long = RangeAvg::new(ctx, &k, ShadowLong, 0, lookback);
    let mut shadow_short = RangeAvg::new(ctx, &k, ShadowVeryShort, 0, lookback);
    let mut near = RangeAvg::new(ctx, &k, Near, 1, lookback);
    for i in lookback..len {
        if k.real_body(i) < body_short.avg(&k, i)
            && k.lower_shadow(i) > shadow_long.avg(&k, i)
            && k.upper_shadow(i) < shadow_short.avg(&k, i)
            && k.body_bottom(i) <= low[i - 1] + near.avg(&k, i - 1)
        {
            out[i] = 100;
        }
        body_short.roll(&k, i);
        shadow_long.roll(&k, i);
        shadow_short.roll(&k, i);
        near.roll(&k, i);
    }
    Ok(out)
}

/// Hanging Man: the hammer geometry appearing near the prior high.
pub fn cdlhangingman(open: &[f64], high: &[f64], low: &[f64], close: &[f64]) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlhangingman", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlHangingMan.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut body_short = RangeAvg::new(ctx, &k, BodyShort, 0, lookback);
    let mut shadow_long = RangeAvg::new(ctx, &k, ShadowLong, 0, lookback);
    let mut shadow_short = RangeAvg::new(ctx, &k, ShadowVeryShort, 0, lookback);
    let mut near = RangeAvg::new(ctx, &k, Near, 1, lookback);
    for i in lookback..len {
        if k.real_body(i) < body_short.avg(&k, i)
            && k.lower_shadow(i) > shadow_long.avg(&k, i)
            && k.upper_shadow(i) < shadow_short.avg(&k, i)
            && k.body_bottom(i) >= high[i - 1] - near.avg(&k, i - 1)
        {
            out[i] = -100;
        }
        body_short.roll(&k, i);
        shadow_long.roll(&k, i);
        shadow_short.roll(&k, i);
        near.roll(&k, i);
    }
    Ok(out)
}

/// Harami: a short body strictly inside the prior long body. Signals
/// against the first candle's direction.
pub fn cdlharami(open: &[f64], high: &[f64], low: &[f64], close: &[f64]) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlharami", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlHarami.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut body_long = RangeAvg::new(ctx, &k, BodyLong, 1, lookback);
    let mut body_short = RangeAvg::new(ctx, &k, BodyShort, 0, lookback);
    for i in lookback..len {
        if k.real_body(i - 1) > body_long.avg(&k, i - 1)
            && k.real_body(i) <= body_short.avg(&k, i)
            && k.body_top(i) < k.body_top(i - 1)
            && k.body_bottom(i) > k.body_bottom(i - 1)
        {
            out[i] = -k.color(i - 1) * 100;
        }
        body_long.roll(&k, i);
        body_short.roll(&k, i);
    }
    Ok(out)
}

/// Harami Cross: a doji strictly inside the prior long body.
pub fn cdlharamicross(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlharamicross", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlHaramiCross.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut body_long = RangeAvg::new(ctx, &k, BodyLong, 1, lookback);
    let mut body_doji = RangeAvg::new(ctx, &k, BodyDoji, 0, lookback);
    for i in lookback..len {
        if k.real_body(i - 1) > body_long.avg(&k, i - 1)
            && k.real_body(i) <= body_doji.avg(&k, i)
            && k.body_top(i) < k.body_top(i - 1)
            && k.body_bottom(i) > k.body_bottom(i - 1)
        {
            out[i] = -k.color(i - 1) * 100;
        }
        body_long.roll(&k, i);
        body_doji.roll(&k, i);
    }
    Ok(out)
}

/// High-Wave: a short body with very long shadows on both sides.
pub fn cdlhighwave(open: &[f64], high: &[f64], low: &[f64], close: &[f64]) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlhighwave", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlHighWave.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut body_short = RangeAvg::new(ctx, &k, BodyShort, 0, lookback);
    let mut shadow = RangeAvg::new(ctx, &k, ShadowVeryLong, 0, lookback);
    for i in lookback..len {
        if k.real_body(i) < body_short.avg(&k, i)
            && k.upper_shadow(i) > shadow.avg(&k, i)
            && k.lower_shadow(i) > shadow.avg(&k, i)
        {
            out[i] = k.color(i) * 100;
        }
        body_short.roll(&k, i);
        shadow.roll(&k, i);
    }
    Ok(out)
}

/// Hikkake: an inside bar followed by a false breakout. The signal bar
/// gets +-100; a close back through the inside bar within three bars
/// upgrades to +-200.
pub fn cdlhikkake(open: &[f64], high: &[f64], low: &[f64], close: &[f64]) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlhikkake", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlHikkake.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut pattern_idx = 0usize;
    let mut pattern_result = 0i32;
    // Warm the pattern state over the prefix so a confirmation right at
    // the first emitted bar is seen.
    for i in 2..len {
        let inside = high[i - 1] < high[i - 2] && low[i - 1] > low[i - 2];
        if inside
            && ((high[i] < high[i - 1] && low[i] < low[i - 1])
                || (high[i] > high[i - 1] && low[i] > low[i - 1]))
        {
            pattern_result = if high[i] < high[i - 1] { 100 } else { -100 };
            pattern_idx = i;
            if i >= lookback {
                out[i] = pattern_result;
            }
        } else if pattern_idx != 0
            && i <= pattern_idx + 3
            && ((pattern_result > 0 && close[i] > high[pattern_idx - 1])
                || (pattern_result < 0 && close[i] < low[pattern_idx - 1]))
        {
            if i >= lookback {
                out[i] = pattern_result + if pattern_result > 0 { 100 } else { -100 };
            }
            pattern_idx = 0;
        }
    }
    Ok(out)
}

/// Modified Hikkake: the hikkake with a context bar before the inside
/// bar and a close pinned to the inside bar's extreme.
pub fn cdlhikkakemod(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlhikkakemod", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlHikkakeMod.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    // State warms up three bars early so confirmations at the boundary
    // line up; the near-threshold window is already full there.
    let first = lookback - 3;
    let mut near = RangeAvg::new(ctx, &k, Near, 2, first);
    let mut pattern_idx = 0usize;
    let mut pattern_result = 0i32;
    for i in first..len {
        if high[i - 2] < high[i - 3]
            && low[i - 2] > low[i - 3]
            && high[i - 1] < high[i - 2]
            && low[i - 1] > low[i - 2]
            && ((high[i] < high[i - 1]
                && low[i] < low[i - 1]
                && close[i - 2] <= low[i - 2] + near.avg(&k, i - 2))
                || (high[i] > high[i - 1]
                    && low[i] > low[i - 1]
                    && close[i - 2] >= high[i - 2] - near.avg(&k, i - 2)))
        {
            pattern_result = if high[i] < high[i - 1] { 100 } else { -100 };
            pattern_idx = i;
            if i >= lookback {
                out[i] = pattern_result;
            }
        } else if pattern_idx != 0
            && i <= pattern_idx + 3
            && ((pattern_result > 0 && close[i] > high[pattern_idx - 1])
                || (pattern_result < 0 && close[i] < low[pattern_idx - 1]))
        {
            if i >= lookback {
                out[i] = pattern_result + if pattern_result > 0 { 100 } else { -100 };
            }
            pattern_idx = 0;
        }
        near.roll(&k, i);
    }
    Ok(out)
}

/// Homing Pigeon: a short black body inside the prior long black body.
pub fn cdlhomingpigeon(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlhomingpigeon", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlHomingPigeon.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut body_long = RangeAvg::new(ctx, &k, BodyLong, 1, lookback);
    let mut body_short = RangeAvg::new(ctx, &k, BodyShort, 0, lookback);
    for i in lookback..len {
        if k.color(i - 1) == -1
            && k.color(i) == -1
            && k.real_body(i - 1) > body_long.avg(&k, i - 1)
            && k.real_body(i) <= body_short.avg(&k, i)
            && open[i] < open[i - 1]
            && close[i] > close[i - 1]
        {
            out[i] = 100;
        }
        body_long.roll(&k, i);
        body_short.roll(&k, i);
    }
    Ok(out)
}

/// Identical Three Crows: three black candles closing at their lows,
/// each opening at the prior close.
pub fn cdlidentical3crows(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlidentical3crows", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlIdentical3Crows.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut shadow2 = RangeAvg::new(ctx, &k, ShadowVeryShort, 2, lookback);
    let mut shadow1 = RangeAvg::new(ctx, &k, ShadowVeryShort, 1, lookback);
    let mut shadow0 = RangeAvg::new(ctx, &k, ShadowVeryShort, 0, lookback);
    let mut equal2 = RangeAvg::new(ctx, &k, Equal, 2, lookback);
    let mut equal1 = RangeAvg::new(ctx, &k, Equal, 1, lookback);
    for i in lookback..len {
        if k.color(i - 2) == -1
            && k.lower_shadow(i - 2) < shadow2.avg(&k, i - 2)
            && k.color(i - 1) == -1
            && k.lower_shadow(i - 1) < shadow1.avg(&k, i - 1)
            && k.color(i) == -1
            && k.lower_shadow(i) < shadow0.avg(&k, i)
            && close[i - 2] > close[i - 1]
            && close[i - 1] > close[i]
            && open[i - 1] <= close[i - 2] + equal2.avg(&k, i - 2)
            && open[i - 1] >= close[i - 2] - equal2.avg(&k, i - 2)
            && open[i] <= close[i - 1] + equal1.avg(&k, i - 1)
            && open[i] >= close[i - 1] - equal1.avg(&k, i - 1)
        {
            out[i] = -100;
        }
        shadow2.roll(&k, i);
        shadow1.roll(&k, i);
        shadow0.roll(&k, i);
        equal2.roll(&k, i);
        equal1.roll(&k, i);
    }
    Ok(out)
}

/// In-Neck: a white candle opening below the prior low and closing
/// just at the prior close. Bearish continuation.
pub fn cdlinneck(open: &[f64], high: &[f64], low: &[f64], close: &[f64]) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlinneck", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlInNeck.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut equal = RangeAvg::new(ctx, &k, Equal, 1, lookback);
    let mut body_long = RangeAvg::new(ctx, &k, BodyLong, 1, lookback);
    for i in lookback..len {
        if k.color(i - 1) == -1
            && k.real_body(i - 1) > body_long.avg(&k, i - 1)
            && k.color(i) == 1
            && open[i] < low[i - 1]
            && close[i] <= close[i - 1] + equal.avg(&k, i - 1)
            && close[i] >= close[i - 1]
        {
            out[i] = -100;
        }
        equal.roll(&k, i);
        body_long.roll(&k, i);
    }
    Ok(out)
}

/// Inverted Hammer: small body, long upper shadow, tiny lower shadow,
/// gapping down from the prior body. Bullish.
pub fn cdlinvertedhammer(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlinvertedhammer", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlInvertedHammer.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut body_short = RangeAvg::new(ctx, &k, BodyShort, 0, lookback);
    let mut shadow_long = RangeAvg::new(ctx, &k, ShadowLong, 0, lookback);
    let mut shadow_short = RangeAvg::new(ctx, &k, ShadowVeryShort, 0, lookback);
    for i in lookback..len {
        if k.real_body(i) < body_short.avg(&k, i)
            && k.upper_shadow(i) > shadow_long.avg(&k, i)
            && k.lower_shadow(i) < shadow_short.avg(&k, i)
            && k.body_gap_down(i, i - 1)
        {
            out[i] = 100;
        }
        body_short.roll(&k, i);
        shadow_long.roll(&k, i);
        shadow_short.roll(&k, i);
    }
    Ok(out)
}

/// Kicking: two opposite marubozu separated by a body gap.
pub fn cdlkicking(open: &[f64], high: &[f64], low: &[f64], close: &[f64]) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlkicking", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlKicking.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut shadow1 = RangeAvg::new(ctx, &k, ShadowVeryShort, 1, lookback);
    let mut shadow0 = RangeAvg::new(ctx, &k, ShadowVeryShort, 0, lookback);
    let mut body_long1 = RangeAvg::new(ctx, &k, BodyLong, 1, lookback);
    let mut body_long0 = RangeAvg::new(ctx, &k, BodyLong, 0, lookback);
    for i in lookback..len {
        if k.color(i) == -k.color(i - 1)
            && k.real_body(i - 1) > body_long1.avg(&k, i - 1)
            && k.upper_shadow(i - 1) < shadow1.avg(&k, i - 1)
            && k.lower_shadow(i - 1) < shadow1.avg(&k, i - 1)
            && k.real_body(i) > body_long0.avg(&k, i)
            && k.upper_shadow(i) < shadow0.avg(&k, i)
            && k.lower_shadow(i) < shadow0.avg(&k, i)
            && ((k.color(i - 1) == -1 && k.body_gap_up(i, i - 1))
                || (k.color(i - 1) == 1 && k.body_gap_down(i, i - 1)))
        {
            out[i] = k.color(i) * 100;
        }
        shadow1.roll(&k, i);
        shadow0.roll(&k, i);
        body_long1.roll(&k, i);
        body_long0.roll(&k, i);
    }
    Ok(out)
}

/// Kicking by length: the kicking pattern signed by the longer
/// marubozu instead of the second one.
pub fn cdlkickingbylength(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlkickingbylength", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlKickingByLength.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut shadow1 = RangeAvg::new(ctx, &k, ShadowVeryShort, 1, lookback);
    let mut shadow0 = RangeAvg::new(ctx, &k, ShadowVeryShort, 0, lookback);
    let mut body_long1 = RangeAvg::new(ctx, &k, BodyLong, 1, lookback);
    let mut body_long0 = RangeAvg::new(ctx, &k, BodyLong, 0, lookback);
    for i in lookback..len {
        if k.color(i) == -k.color(i - 1)
            && k.real_body(i - 1) > body_long1.avg(&k, i - 1)
            && k.upper_shadow(i - 1) < shadow1.avg(&k, i - 1)
            && k.lower_shadow(i - 1) < shadow1.avg(&k, i - 1)
            && k.real_body(i) > body_long0.avg(&k, i)
            && k.upper_shadow(i) < shadow0.avg(&k, i)
            && k.lower_shadow(i) < shadow0.avg(&k, i)
            && ((k.color(i - 1) == -1 && k.body_gap_up(i, i - 1))
                || (k.color(i - 1) == 1 && k.body_gap_down(i, i - 1)))
        {
            let longer = if k.real_body(i) > k.real_body(i - 1) { i } else { i - 1 };
            out[i] = k.color(longer) * 100;
        }
        shadow1.roll(&k, i);
        shadow0.roll(&k, i);
        body_long1.roll(&k, i);
        body_long0.roll(&k, i);
    }
    Ok(out)
}

/// Ladder Bottom: three stepping black candles, a black candle with an
/// upper shadow, then a white candle opening and closing above it.
pub fn cdlladderbottom(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlladderbottom", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlLadderBottom.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut shadow = RangeAvg::new(ctx, &k, ShadowVeryShort, 1, lookback);
    for i in lookback..len {
        if k.color(i - 4) == -1
            && k.color(i - 3) == -1
            && k.color(i - 2) == -1
            && open[i - 4] > open[i - 3]
            && open[i - 3] > open[i - 2]
            && close[i - 4] > close[i - 3]
            && close[i - 3] > close[i - 2]
            && k.color(i - 1) == -1
            && k.upper_shadow(i - 1) > shadow.avg(&k, i - 1)
            && k.color(i) == 1
            && open[i] > open[i - 1]
            && close[i] > high[i - 1]
        {
            out[i] = 100;
        }
        shadow.roll(&k, i);
    }
    Ok(out)
}

/// Long-Legged Doji: a doji with at least one long shadow.
pub fn cdllongleggeddoji(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdllongleggeddoji", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlLongLeggedDoji.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut body_doji = RangeAvg::new(ctx, &k, BodyDoji, 0, lookback);
    let mut shadow = RangeAvg::new(ctx, &k, ShadowLong, 0, lookback);
    for i in lookback..len {
        if k.real_body(i) <= body_doji.avg(&k, i)
            && (k.lower_shadow(i) > shadow.avg(&k, i) || k.upper_shadow(i) > shadow.avg(&k, i))
        {
            out[i] = 100;
        }
        body_doji.roll(&k, i);
        shadow.roll(&k, i);
    }
    Ok(out)
}

/// Long Line: a long body with short shadows on both sides.
pub fn cdllongline(open: &[f64], high: &[f64], low: &[f64], close: &[f64]) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdllongline", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlLongLine.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut body_long = RangeAvg::new(ctx, &k, BodyLong, 0, lookback);
    let mut shadow = RangeAvg::new(ctx, &k, ShadowShort, 0, lookback);
    for i in lookback..len {
        if k.real_body(i) > body_long.avg(&k, i)
            && k.upper_shadow(i) < shadow.avg(&k, i)
            && k.lower_shadow(i) < shadow.avg(&k, i)
        {
            out[i] = k.color(i) * 100;
        }
        body_long.roll(&k, i);
        shadow.roll(&k, i);
    }
    Ok(out)
}

/// Marubozu: a long body with essentially no shadows.
pub fn cdlmarubozu(open: &[f64], high: &[f64], low: &[f64], close: &[f64]) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlmarubozu", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlMarubozu.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut body_long = RangeAvg::new(ctx, &k, BodyLong, 0, lookback);
    let mut shadow = RangeAvg::new(ctx, &k, ShadowVeryShort, 0, lookback);
    for i in lookback..len {
        if k.real_body(i) > body_long.avg(&k, i)
            && k.upper_shadow(i) < shadow.avg(&k, i)
            && k.lower_shadow(i) < shadow.avg(&k, i)
        {
            out[i] = k.color(i) * 100;
        }
        body_long.roll(&k, i);
        shadow.roll(&k, i);
    }
    Ok(out)
}

/// Matching Low: two black candles closing at the same level.
pub fn cdlmatchinglow(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlmatchinglow", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlMatchingLow.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut equal = RangeAvg::new(ctx, &k, Equal, 1, lookback);
    for i in lookback..len {
        if k.color(i - 1) == -1
            && k.color(i) == -1
            && close[i] <= close[i - 1] + equal.avg(&k, i - 1)
            && close[i] >= close[i - 1] - equal.avg(&k, i - 1)
        {
            out[i] = 100;
        }
        equal.roll(&k, i);
    }
    Ok(out)
}

/// Mat Hold: a long white candle, an upside-gapped black candle and two
/// more small reaction bars holding above the penetration level, then a
/// white candle closing at a new high.
pub fn cdlmathold(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
    penetration: f64,
) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlmathold", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    validate_non_negative("cdlmathold", "penetration", penetration)?;
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlMatHold.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut body_long = RangeAvg::new(ctx, &k, BodyLong, 4, lookback);
    let mut body_short3 = RangeAvg::new(ctx, &k, BodyShort, 3, lookback);
    let mut body_short2 = RangeAvg::new(ctx, &k, BodyShort, 2, lookback);
    let mut body_short1 = RangeAvg::new(ctx, &k, BodyShort, 1, lookback);
    for i in lookback..len {
        let floor = close[i - 4] - k.real_body(i - 4) * penetration;
        if k.real_body(i - 4) > body_long.avg(&k, i - 4)
            && k.real_body(i - 3) < body_short3.avg(&k, i - 3)
            && k.real_body(i - 2) < body_short2.avg(&k, i - 2)
            && k.real_body(i - 1) < body_short1.avg(&k, i - 1)
            && k.color(i - 4) == 1
            && k.color(i - 3) == -1
            && k.body_gap_up(i - 3, i - 4)
            && k.body_bottom(i - 2) < close[i - 4]
            && k.body_bottom(i - 1) < close[i - 4]
            && k.body_bottom(i - 2) > floor
            && k.body_bottom(i - 1) > floor
            && k.color(i) == 1
            && open[i] > close[i - 1]
            && close[i] > high[i - 3].max(high[i - 2]).max(high[i - 1])
        {
            out[i] = 100;
        }
        body_long.roll(&k, i);
        body_short3.roll(&k, i);
        body_short2.roll(&k, i);
        body_short1.roll(&k, i);
    }
    Ok(out)
}

/// Morning Doji Star: long black candle, gapped-down doji, then a white
/// candle closing well into the first body. Bullish.
pub fn cdlmorningdojistar(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
    penetration: f64,
) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlmorningdojistar", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    validate_non_negative("cdlmorningdojistar", "penetration", penetration)?;
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlMorningDojiStar.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut body_long = RangeAvg::new(ctx, &k, BodyLong, 2, lookback);
    let mut body_doji = RangeAvg::new(ctx, &k, BodyDoji, 1, lookback);
    let mut body_short = RangeAvg::new(ctx, &k, BodyShort, 0, lookback);
    for i in lookback..len {
        if k.real_body(i - 2) > body_long.avg(&k, i - 2)
            && k.color(i - 2) == -1
            && k.real_body(i - 1) <= body_doji.avg(&k, i - 1)
            && k.body_gap_down(i - 1, i - 2)
            && k.real_body(i) > body_short.avg(&k, i)
            && k.color(i) == 1
            && close[i] > close[i - 2] + k.real_body(i - 2) * penetration
        {
            out[i] = 100;
        }
        body_long.roll(&k, i);
        body_doji.roll(&k, i);
        body_short.roll(&k, i);
    }
    Ok(out)
}

/// Morning Star: like the doji variant but with a short-bodied star.
pub fn cdlmorningstar(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
    penetration: f64,
) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlmorningstar", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    validate_non_negative("cdlmorningstar", "penetration", penetration)?;
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlMorningStar.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut body_long = RangeAvg::new(ctx, &k, BodyLong, 2, lookback);
    let mut body_short1 = RangeAvg::new(ctx, &k, BodyShort, 1, lookback);
    let mut body_short0 = RangeAvg::new(ctx, &k, BodyShort, 0, lookback);
    for i in lookback..len {
        if k.real_body(i - 2) > body_long.avg(&k, i - 2)
            && k.color(i - 2) == -1
            && k.real_body(i - 1) <= body_short1.avg(&k, i - 1)
            && k.body_gap_down(i - 1, i - 2)
            && k.real_body(i) > body_short0.avg(&k, i)
            && k.color(i) == 1
            && close[i] > close[i - 2] + k.real_body(i - 2) * penetration
        {
            out[i] = 100;
        }
        body_long.roll(&k, i);
        body_short1.roll(&k, i);
        body_short0.roll(&k, i);
    }
    Ok(out)
}

/// On-Neck: a white candle opening below the prior low and closing at
/// that low. Bearish continuation.
pub fn cdlonneck(open: &[f64], high: &[f64], low: &[f64], close: &[f64]) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlonneck", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlOnNeck.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut equal = RangeAvg::new(ctx, &k, Equal, 1, lookback);
    let mut body_long = RangeAvg::new(ctx, &k, BodyLong, 1, lookback);
    for i in lookback..len {
        if k.color(i - 1) == -1
            && k.real_body(i - 1) > body_long.avg(&k, i - 1)
            && k.color(i) == 1
            && open[i] < low[i - 1]
            && close[i] <= low[i - 1] + equal.avg(&k, i - 1)
            && close[i] >= low[i - 1] - equal.avg(&k, i - 1)
        {
            out[i] = -100;
        }
        equal.roll(&k, i);
        body_long.roll(&k, i);
    }
    Ok(out)
}

/// Piercing: a white candle opening below the prior low and closing
/// above the midpoint of the prior black body.
pub fn cdlpiercing(open: &[f64], high: &[f64], low: &[f64], close: &[f64]) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlpiercing", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlPiercing.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut body_long = RangeAvg::new(ctx, &k, BodyLong, 1, lookback);
    for i in lookback..len {
        if k.color(i - 1) == -1
            && k.real_body(i - 1) > body_long.avg(&k, i - 1)
            && k.color(i) == 1
            && open[i] < low[i - 1]
            && close[i] < open[i - 1]
            && close[i] > close[i - 1] + k.real_body(i - 1) * 0.5
        {
            out[i] = 100;
        }
        body_long.roll(&k, i);
    }
    Ok(out)
}

/// Rickshaw Man: a long-legged doji whose body sits at the middle of
/// the range.
pub fn cdlrickshawman(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlrickshawman", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlRickshawMan.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut body_doji = RangeAvg::new(ctx, &k, BodyDoji, 0, lookback);
    let mut shadow = RangeAvg::new(ctx, &k, ShadowLong, 0, lookback);
    let mut near = RangeAvg::new(ctx, &k, Near, 0, lookback);
    for i in lookback..len {
        let mid = low[i] + k.high_low(i) * 0.5;
        if k.real_body(i) <= body_doji.avg(&k, i)
            && k.lower_shadow(i) > shadow.avg(&k, i)
            && k.upper_shadow(i) > shadow.avg(&k, i)
            && k.body_bottom(i) <= mid + near.avg(&k, i)
            && k.body_top(i) >= mid - near.avg(&k, i)
        {
            out[i] = 100;
        }
        body_doji.roll(&k, i);
        shadow.roll(&k, i);
        near.roll(&k, i);
    }
    Ok(out)
}

/// Rising/Falling Three Methods: a long candle, three small opposite
/// bars held inside its range, then a long candle resuming the trend.
pub fn cdlrisefall3methods(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlrisefall3methods", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlRiseFall3Methods.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut body_long4 = RangeAvg::new(ctx, &k, BodyLong, 4, lookback);
    let mut body_long0 = RangeAvg::new(ctx, &k, BodyLong, 0, lookback);
    let mut body_short3 = RangeAvg::new(ctx, &k, BodyShort, 3, lookback);
    let mut body_short2 = RangeAvg::new(ctx, &k, BodyShort, 2, lookback);
    let mut body_short1 = RangeAvg::new(ctx, &k, BodyShort, 1, lookback);
    for i in lookback..len {
        if k.real_body(i - 4) > body_long4.avg(&k, i - 4)
            && k.real_body(i - 3) < body_short3.avg(&k, i - 3)
            && k.real_body(i - 2) < body_short2.avg(&k, i - 2)
            && k.real_body(i - 1) < body_short1.avg(&k, i - 1)
            && k.real_body(i) > body_long0.avg(&k, i)
            && k.color(i - 3) == -k.color(i - 4)
            && k.color(i - 2) == k.color(i - 3)
            && k.color(i - 1) == k.color(i - 2)
            && k.color(i) == k.color(i - 4)
            && high[i - 3].max(high[i - 2]).max(high[i - 1]) < high[i - 4]
            && low[i - 3].min(low[i - 2]).min(low[i - 1]) > low[i - 4]
            && ((k.color(i - 4) == 1 && close[i] > close[i - 4] && open[i] > close[i - 1])
                || (k.color(i - 4) == -1 && close[i] < close[i - 4] && open[i] < close[i - 1]))
        {
            out[i] = k.color(i - 4) * 100;
        }
        body_long4.roll(&k, i);
        body_long0.roll(&k, i);
        body_short3.roll(&k, i);
        body_short2.roll(&k, i);
        body_short1.roll(&k, i);
    }
    Ok(out)
}

/// Separating Lines: an opposite pair opening at the same price, the
/// second a belt-hold resuming the trend.
pub fn cdlseparatinglines(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlseparatinglines", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlSeparatingLines.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut equal = RangeAvg::new(ctx, &k, Equal, 1, lookback);
    let mut body_long = RangeAvg::new(ctx, &k, BodyLong, 0, lookback);
    let mut shadow = RangeAvg::new(ctx, &k, ShadowVeryShort, 0, lookback);
    for i in lookback..len {
        if k.color(i) == -k.color(i - 1)
            && open[i] <= open[i - 1] + equal.avg(&k, i - 1)
            && open[i] >= open[i - 1] - equal.avg(&k, i - 1)
            && k.real_body(i) > body_long.avg(&k, i)
            && ((k.color(i) == 1 && k.lower_shadow(i) < shadow.avg(&k, i))
                || (k.color(i) == -1 && k.upper_shadow(i) < shadow.avg(&k, i)))
        {
            out[i] = k.color(i) * 100;
        }
        equal.roll(&k, i);
        body_long.roll(&k, i);
        shadow.roll(&k, i);
    }
    Ok(out)
}

/// Shooting Star: small body, long upper shadow, tiny lower shadow,
/// gapping up from the prior body. Bearish.
pub fn cdlshootingstar(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlshootingstar", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlShootingStar.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut body_short = RangeAvg::new(ctx, &k, BodyShort, 0, lookback);
    let mut shadow_long = RangeAvg::new(ctx, &k, ShadowLong, 0, lookback);
    let mut shadow_short = RangeAvg::new(ctx, &k, ShadowVeryShort, 0, lookback);
    for i in lookback..len {
        if k.real_body(i) < body_short.avg(&k, i)
            && k.upper_shadow(i) > shadow_long.avg(&k, i)
            && k.lower_shadow(i) < shadow_short.avg(&k, i)
            && k.body_gap_up(i, i - 1)
        {
            out[i] = -100;
        }
        body_short.roll(&k, i);
        shadow_long.roll(&k, i);
        shadow_short.roll(&k, i);
    }
    Ok(out)
}

/// Short Line: a short body with short shadows.
pub fn cdlshortline(open: &[f64], high: &[f64], low: &[f64], close: &[f64]) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlshortline", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlShortLine.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut body_short = RangeAvg::new(ctx, &k, BodyShort, 0, lookback);
    let mut shadow = RangeAvg::new(ctx, &k, ShadowShort, 0, lookback);
    for i in lookback..len {
        if k.real_body(i) < body_short.avg(&k, i)
            && k.upper_shadow(i) < shadow.avg(&k, i)
            && k.lower_shadow(i) < shadow.avg(&k, i)
        {
            out[i] = k.color(i) * 100;
        }
        body_short.roll(&k, i);
        shadow.roll(&k, i);
    }
    Ok(out)
}

/// Spinning Top: a short body with both shadows longer than the body.
pub fn cdlspinningtop(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlspinningtop", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlSpinningTop.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut body_short = RangeAvg::new(ctx, &k, BodyShort, 0, lookback);
    for i in lookback..len {
        if k.real_body(i) < body_short.avg(&k, i)
            && k.upper_shadow(i) > k.real_body(i)
            && k.lower_shadow(i) > k.real_body(i)
        {
            out[i] = k.color(i) * 100;
        }
        body_short.roll(&k, i);
    }
    Ok(out)
}

/// Stalled Pattern: two long white candles followed by a small white
/// candle riding the second one's shoulder. Bearish warning.
pub fn cdlstalledpattern(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlstalledpattern", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlStalledPattern.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut body_long2 = RangeAvg::new(ctx, &k, BodyLong, 2, lookback);
    let mut body_long1 = RangeAvg::new(ctx, &k, BodyLong, 1, lookback);
    let mut body_short = RangeAvg::new(ctx, &k, BodyShort, 0, lookback);
    let mut shadow1 = RangeAvg::new(ctx, &k, ShadowVeryShort, 1, lookback);
    let mut near2 = RangeAvg::new(ctx, &k, Near, 2, lookback);
    let mut near1 = RangeAvg::new(ctx, &k, Near, 1, lookback);
    for i in lookback..len {
        if k.color(i - 2) == 1
            && k.color(i - 1) == 1
            && k.color(i) == 1
            && close[i] > close[i - 1]
            && close[i - 1] > close[i - 2]
            && k.real_body(i - 2) > body_long2.avg(&k, i - 2)
            && k.real_body(i - 1) > body_long1.avg(&k, i - 1)
            && k.upper_shadow(i - 1) < shadow1.avg(&k, i - 1)
            && open[i - 1] > open[i - 2]
            && open[i - 1] <= close[i - 2] + near2.avg(&k, i - 2)
            && k.real_body(i) < body_short.avg(&k, i)
            && open[i] >= close[i - 1] - k.real_body(i) - near1.avg(&k, i - 1)
        {
            out[i] = -100;
        }
        body_long2.roll(&k, i);
        body_long1.roll(&k, i);
        body_short.roll(&k, i);
        shadow1.roll(&k, i);
        near2.roll(&k, i);
        near1.roll(&k, i);
    }
    Ok(out)
}

/// Stick Sandwich: two black candles closing at the same level with a
/// white candle held entirely above in between.
pub fn cdlsticksandwich(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlsticksandwich", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlStickSandwich.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut equal = RangeAvg::new(ctx, &k, Equal, 2, lookback);
    for i in lookback..len {
        if k.color(i - 2) == -1
            && k.color(i - 1) == 1
            && k.color(i) == -1
            && low[i - 1] > close[i - 2]
            && close[i] <= close[i - 2] + equal.avg(&k, i - 2)
            && close[i] >= close[i - 2] - equal.avg(&k, i - 2)
        {
            out[i] = 100;
        }
        equal.roll(&k, i);
    }
    Ok(out)
}

/// Takuri: a dragonfly doji with a very long lower shadow.
pub fn cdltakuri(open: &[f64], high: &[f64], low: &[f64], close: &[f64]) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdltakuri", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlTakuri.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut body_doji = RangeAvg::new(ctx, &k, BodyDoji, 0, lookback);
    let mut shadow_short = RangeAvg::new(ctx, &k, ShadowVeryShort, 0, lookback);
    let mut shadow_long = RangeAvg::new(ctx, &k, ShadowVeryLong, 0, lookback);
    for i in lookback..len {
        if k.real_body(i) <= body_doji.avg(&k, i)
            && k.upper_shadow(i) < shadow_short.avg(&k, i)
            && k.lower_shadow(i) > shadow_long.avg(&k, i)
        {
            out[i] = 100;
        }
        body_doji.roll(&k, i);
        shadow_short.roll(&k, i);
        shadow_long.roll(&k, i);
    }
    Ok(out)
}

/// Tasuki Gap: a gap continued by a same-direction candle, then an
/// opposite candle closing inside the gap without filling it.
pub fn cdltasukigap(open: &[f64], high: &[f64], low: &[f64], close: &[f64]) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdltasukigap", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlTasukiGap.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut near = RangeAvg::new(ctx, &k, Near, 1, lookback);
    for i in lookback..len {
        let similar = (k.real_body(i - 1) - k.real_body(i)).abs() < near.avg(&k, i - 1);
        if k.body_gap_up(i - 1, i - 2)
            && k.color(i - 1) == 1
            && k.color(i) == -1
            && open[i] < close[i - 1]
            && open[i] > open[i - 1]
            && close[i] < open[i - 1]
            && close[i] > k.body_top(i - 2)
            && similar
        {
            out[i] = 100;
        } else if k.body_gap_down(i - 1, i - 2)
            && k.color(i - 1) == -1
            && k.color(i) == 1
            && open[i] < open[i - 1]
            && open[i] > close[i - 1]
            && close[i] > open[i - 1]
            && close[i] < k.body_bottom(i - 2)
            && similar
        {
            out[i] = -100;
        }
        near.roll(&k, i);
    }
    Ok(out)
}

/// Thrusting: like In-Neck but closing into, yet below the midpoint
/// of, the prior black body.
pub fn cdlthrusting(open: &[f64], high: &[f64], low: &[f64], close: &[f64]) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlthrusting", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlThrusting.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut equal = RangeAvg::new(ctx, &k, Equal, 1, lookback);
    let mut body_long = RangeAvg::new(ctx, &k, BodyLong, 1, lookback);
    for i in lookback..len {
        if k.color(i - 1) == -1
            && k.real_body(i - 1) > body_long.avg(&k, i - 1)
            && k.color(i) == 1
            && open[i] < low[i - 1]
            && close[i] > close[i - 1] + equal.avg(&k, i - 1)
            && close[i] <= close[i - 1] + k.real_body(i - 1) * 0.5
        {
            out[i] = -100;
        }
        equal.roll(&k, i);
        body_long.roll(&k, i);
    }
    Ok(out)
}

/// Tristar: three dojis where the middle one gaps away from both
/// neighbors.
pub fn cdltristar(open: &[f64], high: &[f64], low: &[f64], close: &[f64]) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdltristar", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlTristar.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut body_doji = RangeAvg::new(ctx, &k, BodyDoji, 2, lookback);
    for i in lookback..len {
        if k.real_body(i - 2) <= body_doji.avg(&k, i - 2)
            && k.real_body(i - 1) <= body_doji.avg(&k, i - 2)
            && k.real_body(i) <= body_doji.avg(&k, i - 2)
        {
            if k.body_gap_up(i - 1, i - 2) && k.body_gap_down(i, i - 1) {
                out[i] = -100;
            } else if k.body_gap_down(i - 1, i - 2) && k.body_gap_up(i, i - 1) {
                out[i] = 100;
            }
        }
        body_doji.roll(&k, i);
    }
    Ok(out)
}

/// Unique Three River Bottom: a long black candle, a black harami
/// making a new low, then a small white candle opening above that low.
pub fn cdlunique3river(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlunique3river", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlUnique3River.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut body_long = RangeAvg::new(ctx, &k, BodyLong, 2, lookback);
    let mut body_short = RangeAvg::new(ctx, &k, BodyShort, 0, lookback);
    for i in lookback..len {
        if k.real_body(i - 2) > body_long.avg(&k, i - 2)
            && k.color(i - 2) == -1
            && k.color(i - 1) == -1
            && close[i - 1] > close[i - 2]
            && open[i - 1] <= open[i - 2]
            && low[i - 1] < low[i - 2]
            && k.real_body(i) < body_short.avg(&k, i)
            && k.color(i) == 1
            && open[i] > low[i - 1]
        {
            out[i] = 100;
        }
        body_long.roll(&k, i);
        body_short.roll(&k, i);
    }
    Ok(out)
}

/// Upside Gap Two Crows: a long white candle, a gapped-up black
/// candle, then a black candle engulfing it yet closing above the
/// first close.
pub fn cdlupsidegap2crows(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlupsidegap2crows", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlUpsideGap2Crows.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    let mut body_long = RangeAvg::new(ctx, &k, BodyLong, 2, lookback);
    let mut body_short = RangeAvg::new(ctx, &k, BodyShort, 1, lookback);
    for i in lookback..len {
        if k.color(i - 2) == 1
            && k.real_body(i - 2) > body_long.avg(&k, i - 2)
            && k.color(i - 1) == -1
            && k.real_body(i - 1) < body_short.avg(&k, i - 1)
            && k.body_gap_up(i - 1, i - 2)
            && k.color(i) == -1
            && open[i] > open[i - 1]
            && close[i] < close[i - 1]
            && close[i] > close[i - 2]
        {
            out[i] = -100;
        }
        body_long.roll(&k, i);
        body_short.roll(&k, i);
    }
    Ok(out)
}

/// Upside/Downside Gap Three Methods: two same-color candles around a
/// gap, then an opposite candle opening in the second body and closing
/// in the first, filling the gap.
pub fn cdlxsidegap3methods(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
) -> Result<Vec<i32>, TaError> {
    let ctx = prologue("cdlxsidegap3methods", open, high, low, close)?;
    if open.is_empty() {
        return Ok(Vec::new());
    }
    let k = Bars { open, high, low, close };
    let len = open.len();
    let mut out = vec![0i32; len];
    let lookback = CandlePattern::CdlXSideGap3Methods.lookback_with(ctx);
    if len <= lookback {
        return Ok(out);
    }

    for i in lookback..len {
        if k.color(i - 2) == k.color(i - 1)
            && k.color(i) == -k.color(i - 1)
            && open[i] < k.body_top(i - 1)
            && open[i] > k.body_bottom(i - 1)
            && close[i] < k.body_top(i - 2)
            && close[i] > k.body_bottom(i - 2)
        {
            if k.color(i - 2) == 1 && k.body_gap_up(i - 1, i - 2) {
                out[i] = 100;
            } else if k.color(i - 2) == -1 && k.body_gap_down(i - 1, i - 2) {
                out[i] = -100;
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::lifecycle::initialize;

    /// Alternating small-bodied bars: body 0.2, high-low range 0.8,
    /// each shadow 0.3.
    fn base_bars(n: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) {
        let mut open = Vec::with_capacity(n);
        let mut high = Vec::with_capacity(n);
        let mut low = Vec::with_capacity(n);
        let mut close = Vec::with_capacity(n);
        for i in 0..n {
            let (o, c) = if i % 2 == 0 { (100.0, 100.2) } else { (100.2, 100.0) };
            open.push(o);
            close.push(c);
            high.push(100.5);
            low.push(99.7);
        }
        (open, high, low, close)
    }

    fn set_bar(
        bars: &mut (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>),
        i: usize,
        o: f64,
        h: f64,
        l: f64,
        c: f64,
    ) {
        bars.0[i] = o;
        bars.1[i] = h;
        bars.2[i] = l;
        bars.3[i] = c;
    }

    #[test]
    fn test_engulfing_hand_built() {
        initialize();
        let mut b = base_bars(5);
        // Black bar then a white bar wrapping its body.
        set_bar(&mut b, 2, 100.2, 100.5, 99.7, 100.0);
        set_bar(&mut b, 3, 99.9, 100.5, 99.7, 100.3);
        let out = cdlengulfing(&b.0, &b.1, &b.2, &b.3).expect("engulfing");
        assert_eq!(out[3], 100);
        assert_eq!(out[2], 0);
    }

    #[test]
    fn test_doji_threshold_from_settings() {
        initialize();
        let mut b = base_bars(12);
        // Body 0 against a 10-bar high-low average of 0.8 (threshold 0.08).
        set_bar(&mut b, 11, 100.1, 100.5, 99.7, 100.1);
        let out = cdldoji(&b.0, &b.1, &b.2, &b.3).expect("doji");
        assert_eq!(out[11], 100);
        // A normal 0.2 body is no doji.
        assert_eq!(out[10], 0);
    }

    #[test]
    fn test_three_black_crows_hand_built() {
        initialize();
        let mut b = base_bars(14);
        // White day, then three declining black candles closing on
        // their lows, each opening inside the prior body.
        set_bar(&mut b, 10, 100.0, 100.7, 99.9, 100.6);
        set_bar(&mut b, 11, 100.5, 100.6, 100.1, 100.1);
        set_bar(&mut b, 12, 100.3, 100.4, 99.8, 99.8);
        set_bar(&mut b, 13, 100.1, 100.2, 99.5, 99.5);
        let out = cdl3blackcrows(&b.0, &b.1, &b.2, &b.3).expect("crows");
        assert_eq!(out[13], -100);
        assert!(out[..13].iter().all(|&v| v == 0));
    }

    #[test]
    fn test_morning_star_hand_built() {
        initialize();
        let mut b = base_bars(13);
        // Long black, gapped-down small body, long white closing well
        // into the first body.
        set_bar(&mut b, 10, 100.6, 100.7, 99.8, 99.9);
        set_bar(&mut b, 11, 99.6, 99.7, 99.4, 99.5);
        set_bar(&mut b, 12, 99.7, 100.9, 99.6, 100.8);
        let out = cdlmorningstar(&b.0, &b.1, &b.2, &b.3, 0.3).expect("morningstar");
        assert_eq!(out[12], 100);
        // The mirrored evening star must not fire here.
        let evening = cdleveningstar(&b.0, &b.1, &b.2, &b.3, 0.3).expect("eveningstar");
        assert!(evening.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_harami_sign_is_against_first_candle() {
        initialize();
        let mut b = base_bars(12);
        // Long black candle, then a small body strictly inside it.
        set_bar(&mut b, 10, 100.7, 100.8, 99.6, 99.8);
        set_bar(&mut b, 11, 100.0, 100.3, 99.9, 100.1);
        let out = cdlharami(&b.0, &b.1, &b.2, &b.3).expect("harami");
        assert_eq!(out[11], 100);
    }

    #[test]
    fn test_pattern_value_set_on_noisy_data() {
        initialize();
        let n = 120;
        let mut b = base_bars(n);
        // Deterministic pseudo-random walk.
        let mut level = 100.0f64;
        for i in 0..n {
            let step = (((i * 2654435761) % 19) as f64 - 9.0) / 30.0;
            level += step;
            let body = (((i * 40503) % 7) as f64) / 20.0;
            let up = (i * 7919) % 2 == 0;
            let (o, c) = if up { (level, level + body) } else { (level + body, level) };
            set_bar(&mut b, i, o, o.max(c) + 0.2, o.min(c) - 0.2, c);
        }
        for pattern in [
            CandlePattern::CdlEngulfing,
            CandlePattern::CdlHarami,
            CandlePattern::CdlBeltHold,
            CandlePattern::CdlHikkake,
            CandlePattern::CdlHikkakeMod,
            CandlePattern::CdlSpinningTop,
            CandlePattern::CdlMorningStar,
        ] {
            let out = cdl(pattern, &b.0, &b.1, &b.2, &b.3).expect("pattern");
            assert_eq!(out.len(), n);
            assert!(out
                .iter()
                .all(|v| [-200, -100, 0, 100, 200].contains(v)));
        }
    }

    #[test]
    fn test_dispatcher_matches_direct_call() {
        initialize();
        let b = base_bars(30);
        let direct = cdldoji(&b.0, &b.1, &b.2, &b.3).expect("direct");
        let routed = cdl(CandlePattern::CdlDoji, &b.0, &b.1, &b.2, &b.3).expect("routed");
        assert_eq!(direct, routed);
    }

    #[test]
    fn test_short_input_is_all_zeros() {
        initialize();
        let b = base_bars(5);
        let out = cdl3blackcrows(&b.0, &b.1, &b.2, &b.3).expect("short ok");
        assert_eq!(out, vec![0; 5]);
    }

    #[test]
    fn test_empty_input() {
        initialize();
        assert!(cdldoji(&[], &[], &[], &[]).expect("empty ok").is_empty());
        assert!(cdlengulfing(&[], &[], &[], &[]).expect("empty ok").is_empty());
    }

    #[test]
    fn test_length_mismatch() {
        initialize();
        let b = base_bars(10);
        assert!(cdldoji(&b.0, &b.1, &b.2, &b.3[..9]).is_err());
    }

    #[test]
    fn test_negative_penetration_rejected() {
        initialize();
        let b = base_bars(20);
        assert!(cdlmorningstar(&b.0, &b.1, &b.2, &b.3, -0.1).is_err());
    }
}

//! # tafast
//!
//! Batch technical-analysis indicators over `f64` slices: overlap
//! studies, momentum oscillators, volume and volatility indicators,
//! Hilbert-transform cycle measurements, statistic functions, price
//! transforms and candlestick pattern recognition.
//!
//! Every indicator returns a vector the same length as its input. The
//! first `*_lookback()` positions are NaN for real-valued outputs and
//! zero for integer-valued ones; values beyond the lookback are fully
//! primed. Call [`initialize`] once before using any indicator and
//! [`shutdown`] to tear the library back down:
//!
//! ```
//! use tafast::{initialize, shutdown, rsi};
//!
//! initialize();
//! let closes = [44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10,
//!               45.42, 45.84, 46.08, 45.89, 46.03, 45.61, 46.28, 46.28];
//! let out = rsi(&closes, 14).unwrap();
//! assert!(out[13].is_nan());
//! assert!(out[14] > 0.0 && out[14] < 100.0);
//! shutdown();
//! ```

#![allow(clippy::needless_range_loop)]
#![allow(clippy::too_many_arguments)]

pub mod indicators;
pub mod utilities;

pub use utilities::data_loader::{read_candles_from_csv, Candles};
pub use utilities::enums::MaType;
pub use utilities::errors::TaError;
pub use utilities::lifecycle::{initialize, shutdown, CandleSetting, CandleSettingType, RangeType};

pub use indicators::moving_averages::{
    dema, dema_lookback, ema, ema_lookback, kama, kama_lookback, ma, ma_lookback, mama,
    mama_lookback, sma, sma_lookback, t3, t3_lookback, tema, tema_lookback, trima, trima_lookback,
    wma, wma_lookback, MamaOutput,
};

pub use indicators::ad::{ad, ad_lookback};
pub use indicators::adosc::{adosc, adosc_lookback};
pub use indicators::adx::{adx, adx_lookback};
pub use indicators::adxr::{adxr, adxr_lookback};
pub use indicators::apo::{apo, apo_lookback};
pub use indicators::aroon::{aroon, aroon_lookback, aroonosc, AroonOutput};
pub use indicators::atr::{atr, atr_lookback};
pub use indicators::avgdev::{avgdev, avgdev_lookback};
pub use indicators::bbands::{bbands, bbands_lookback, BbandsOutput};
pub use indicators::beta::{beta, beta_lookback};
pub use indicators::bop::{bop, bop_lookback};
pub use indicators::cci::{cci, cci_lookback};
pub use indicators::cmo::{cmo, cmo_lookback};
pub use indicators::correl::{correl, correl_lookback};
pub use indicators::di::{di_lookback, minus_di, plus_di};
pub use indicators::dm::{dm_lookback, minus_dm, plus_dm};
pub use indicators::dx::{dx, dx_lookback};
pub use indicators::hilbert_transform::{
    ht_dcperiod, ht_dcperiod_lookback, ht_dcphase, ht_dcphase_lookback, ht_phasor,
    ht_phasor_lookback, ht_sine, ht_sine_lookback, ht_trendline, ht_trendline_lookback,
    ht_trendmode, ht_trendmode_lookback, PhasorOutput, SineOutput,
};
pub use indicators::linearreg::{
    linearreg, linearreg_angle, linearreg_intercept, linearreg_lookback, linearreg_slope, tsf,
};
pub use indicators::macd::{
    macd, macd_lookback, macdext, macdext_lookback, macdfix, macdfix_lookback, MacdOutput,
};
pub use indicators::math_operator::{add, div, mult, sub};
pub use indicators::math_transform::{
    acos, asin, atan, ceil, cos, cosh, exp, floor, ln, log10, sin, sinh, sqrt, tan, tanh,
};
pub use indicators::mfi::{mfi, mfi_lookback};
pub use indicators::midpoint::{midpoint, midpoint_lookback};
pub use indicators::midprice::{midprice, midprice_lookback};
pub use indicators::minmax::{
    max, min, minmax, minmax_lookback, minmaxindex, sum, sum_lookback, MinMaxIndexOutput,
    MinMaxOutput,
};
pub use indicators::mom::{mom, mom_lookback};
pub use indicators::natr::{natr, natr_lookback};
pub use indicators::obv::{obv, obv_lookback};
pub use indicators::pattern_recognition::{
    cdl, cdl2crows, cdl3blackcrows, cdl3inside, cdl3linestrike, cdl3outside, cdl3starsinsouth,
    cdl3whitesoldiers, cdl_lookback, cdlabandonedbaby, cdladvanceblock, cdlbelthold, cdlbreakaway,
    cdlclosingmarubozu, cdlconcealbabyswall, cdlcounterattack, cdldarkcloudcover, cdldoji,
    cdldojistar, cdldragonflydoji, cdlengulfing, cdleveningdojistar, cdleveningstar,
    cdlgapsidesidewhite, cdlgravestonedoji, cdlhammer, cdlhangingman, cdlharami, cdlharamicross,
    cdlhighwave, cdlhikkake, cdlhikkakemod, cdlhomingpigeon, cdlidentical3crows, cdlinneck,
    cdlinvertedhammer, cdlkicking, cdlkickingbylength, cdlladderbottom, cdllongleggeddoji,
    cdllongline, cdlmarubozu, cdlmatchinglow, cdlmathold, cdlmorningdojistar, cdlmorningstar,
    cdlonneck, cdlpiercing, cdlrickshawman, cdlrisefall3methods, cdlseparatinglines,
    cdlshootingstar, cdlshortline, cdlspinningtop, cdlstalledpattern, cdlsticksandwich, cdltakuri,
    cdltasukigap, cdlthrusting, cdltristar, cdlunique3river, cdlupsidegap2crows,
    cdlxsidegap3methods, CandlePattern,
};
pub use indicators::ppo::{ppo, ppo_lookback};
pub use indicators::price_transform::{avgprice, medprice, typprice, wclprice};
pub use indicators::roc::{roc, roc_lookback, rocp, rocr, rocr100};
pub use indicators::rsi::{rsi, rsi_lookback};
pub use indicators::sar::{sar, sar_lookback};
pub use indicators::stddev::{stddev, stddev_lookback};
pub use indicators::stoch::{
    stoch, stoch_lookback, stochf, stochf_lookback, StochOutput, StochfOutput,
};
pub use indicators::stochrsi::{stochrsi, stochrsi_lookback, StochRsiOutput};
pub use indicators::trange::{trange, trange_lookback};
pub use indicators::trix::{trix, trix_lookback};
pub use indicators::ultosc::{ultosc, ultosc_lookback};
pub use indicators::var::{var, var_lookback};
pub use indicators::willr::{willr, willr_lookback};

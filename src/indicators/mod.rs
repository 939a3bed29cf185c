pub mod ad;
pub mod adosc;
pub mod adx;
pub mod adxr;
pub mod apo;
pub mod aroon;
pub mod atr;
pub mod avgdev;
pub mod bbands;
pub mod beta;
pub mod bop;
pub mod cci;
pub mod cmo;
pub mod correl;
pub mod di;
pub mod dm;
pub mod dx;
pub(crate) mod hilbert;
pub mod hilbert_transform;
pub mod linearreg;
pub mod macd;
pub mod math_operator;
pub mod math_transform;
pub mod mfi;
pub mod midpoint;
pub mod midprice;
pub mod minmax;
pub mod mom;
pub mod moving_averages;
pub mod natr;
pub mod obv;
pub mod pattern_recognition;
pub mod ppo;
pub mod price_transform;
pub mod roc;
pub mod rsi;
pub mod sar;
pub mod stddev;
pub mod stoch;
pub mod stochrsi;
pub mod trange;
pub mod trix;
pub mod ultosc;
pub mod var;
pub mod willr;

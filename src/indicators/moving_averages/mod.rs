pub mod dema;
pub mod ema;
pub mod kama;
pub mod ma;
pub mod mama;
pub mod sma;
pub mod t3;
pub mod tema;
pub mod trima;
pub mod wma;

pub use dema::{dema, dema_lookback};
pub use ema::{ema, ema_lookback};
pub use kama::{kama, kama_lookback};
pub use ma::{ma, ma_lookback};
pub use mama::{mama, mama_lookback, MamaOutput};
pub use sma::{sma, sma_lookback};
pub use t3::{t3, t3_lookback};
pub use tema::{tema, tema_lookback};
pub use trima::{trima, trima_lookback};
pub use wma::{wma, wma_lookback};

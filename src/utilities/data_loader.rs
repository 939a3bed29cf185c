//! OHLCV container and CSV loader.
//!
//! The engine itself only ever sees `&[f64]` slices; `Candles` is the
//! convenience carrier callers and tests use to hold aligned OHLCV columns
//! and derive composite price sources (`hl2`, `hlc3`, ...).

use std::error::Error;
use std::fs::File;

use csv::ReaderBuilder;

#[derive(Debug, Clone, Default)]
pub struct Candles {
    pub timestamp: Vec<i64>,
    pub open: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub close: Vec<f64>,
    pub volume: Vec<f64>,
}

impl Candles {
    pub fn new(
        timestamp: Vec<i64>,
        open: Vec<f64>,
        high: Vec<f64>,
        low: Vec<f64>,
        close: Vec<f64>,
        volume: Vec<f64>,
    ) -> Self {
        Candles {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    pub fn len(&self) -> usize {
        self.close.len()
    }

    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    /// Borrow one raw column by name.
    pub fn select_candle_field(&self, field: &str) -> Result<&[f64], Box<dyn Error>> {
        match field.to_lowercase().as_str() {
            "open" => Ok(&self.open),
            "high" => Ok(&self.high),
            "low" => Ok(&self.low),
            "close" => Ok(&self.close),
            "volume" => Ok(&self.volume),
            _ => Err(format!("invalid candle field: {field}").into()),
        }
    }

    /// Materialize a derived price source by name; raw column names work too.
    pub fn source(&self, source: &str) -> Result<Vec<f64>, Box<dyn Error>> {
        match source.to_lowercase().as_str() {
            "hl2" => Ok(self.hl2()),
            "hlc3" => Ok(self.hlc3()),
            "ohlc4" => Ok(self.ohlc4()),
            "hlcc4" => Ok(self.hlcc4()),
            other => self.select_candle_field(other).map(|s| s.to_vec()),
        }
    }

    pub fn hl2(&self) -> Vec<f64> {
        self.high
            .iter()
            .zip(&self.low)
            .map(|(&h, &l)| (h + l) / 2.0)
            .collect()
    }

    pub fn hlc3(&self) -> Vec<f64> {
        self.high
            .iter()
            .zip(&self.low)
            .zip(&self.close)
            .map(|((&h, &l), &c)| (h + l + c) / 3.0)
            .collect()
    }

    pub fn ohlc4(&self) -> Vec<f64> {
        self.open
            .iter()
            .zip(&self.high)
            .zip(&self.low)
            .zip(&self.close)
            .map(|(((&o, &h), &l), &c)| (o + h + l + c) / 4.0)
            .collect()
    }

    pub fn hlcc4(&self) -> Vec<f64> {
        self.high
            .iter()
            .zip(&self.low)
            .zip(&self.close)
            .map(|((&h, &l), &c)| (h + l + 2.0 * c) / 4.0)
            .collect()
    }
}

/// Load candles from a headered CSV with columns
/// `timestamp,open,high,low,close,volume`.
pub fn read_candles_from_csv(file_path: &str) -> Result<Candles, Box<dyn Error>> {
    let file = File::open(file_path)?;
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);

    let mut candles = Candles::default();
    for result in rdr.records() {
        let record = result?;
        candles.timestamp.push(record[0].parse::<i64>()?);
        candles.open.push(record[1].parse::<f64>()?);
        candles.high.push(record[2].parse::<f64>()?);
        candles.low.push(record[3].parse::<f64>()?);
        candles.close.push(record[4].parse::<f64>()?);
        candles.volume.push(record[5].parse::<f64>()?);
    }
    Ok(candles)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Candles {
        Candles::new(
            vec![1, 2],
            vec![10.0, 11.0],
            vec![12.0, 13.0],
            vec![9.0, 10.0],
            vec![11.0, 12.0],
            vec![100.0, 200.0],
        )
    }

    #[test]
    fn test_derived_sources() {
        let c = sample();
        assert_eq!(c.hl2(), vec![10.5, 11.5]);
        assert_eq!(c.hlc3(), vec![(12.0 + 9.0 + 11.0) / 3.0, 35.0 / 3.0]);
        assert_eq!(c.ohlc4(), vec![10.5, 11.5]);
        assert_eq!(c.hlcc4(), vec![(12.0 + 9.0 + 22.0) / 4.0, 47.0 / 4.0]);
    }

    #[test]
    fn test_source_dispatch() {
        let c = sample();
        assert_eq!(c.source("close").unwrap(), vec![11.0, 12.0]);
        assert_eq!(c.source("hl2").unwrap(), vec![10.5, 11.5]);
        assert!(c.source("nope").is_err());
    }
}

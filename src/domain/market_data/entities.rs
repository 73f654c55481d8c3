pub use super::value_objects::{Price, Timestamp, Volume};
use serde::{Deserialize, Serialize};

/// Capability set the chart consumes from a record.
///
/// The chart is polymorphic over any record type exposing these five
/// fields; extended record variants carry extra data the chart ignores.
pub trait OhlcRecord {
    fn timestamp(&self) -> Timestamp;
    fn open(&self) -> Price;
    fn high(&self) -> Price;
    fn low(&self) -> Price;
    fn close(&self) -> Price;

    /// A record is drawable only when all four prices are finite.
    /// Malformed records stay in the series but never reach the surface.
    fn has_finite_prices(&self) -> bool {
        self.open().is_finite()
            && self.high().is_finite()
            && self.low().is_finite()
            && self.close().is_finite()
    }
}

/// Domain entity - one OHLC time bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    pub timestamp: Timestamp,
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
    pub volume: Volume,
}

impl StockRecord {
    pub fn new(
        timestamp: Timestamp,
        open: Price,
        high: Price,
        low: Price,
        close: Price,
        volume: Volume,
    ) -> Self {
        Self { timestamp, open, high, low, close, volume }
    }
}

/// StockRecord plus dividend-adjusted fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustedStockRecord {
    pub timestamp: Timestamp,
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
    pub volume: Volume,
    pub adjusted_close: Price,
    pub dividend_amount: f64,
}

/// AdjustedStockRecord plus the split coefficient of daily feeds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAdjustedStockRecord {
    pub timestamp: Timestamp,
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
    pub volume: Volume,
    #[serde(default)]
    pub adjusted_close: Option<Price>,
    #[serde(default)]
    pub dividend_amount: Option<f64>,
    #[serde(default)]
    pub split_coefficient: Option<f64>,
}

macro_rules! impl_ohlc_record {
    ($($ty:ty),+) => {
        $(impl OhlcRecord for $ty {
            fn timestamp(&self) -> Timestamp { self.timestamp }
            fn open(&self) -> Price { self.open }
            fn high(&self) -> Price { self.high }
            fn low(&self) -> Price { self.low }
            fn close(&self) -> Price { self.close }
        })+
    };
}

impl_ohlc_record!(StockRecord, AdjustedStockRecord, DailyAdjustedStockRecord);

/// Domain entity - the record sequence a chart draws.
///
/// Input order is not trusted: the constructor normalizes to one fixed
/// convention, ascending by timestamp with unique timestamps (duplicates
/// keep the last record seen). Every later stage assumes this ordering.
#[derive(Debug, Clone, Default)]
pub struct RecordSeries<R> {
    records: Vec<R>,
}

impl<R: OhlcRecord> RecordSeries<R> {
    pub fn new(mut records: Vec<R>) -> Self {
        records.sort_by_key(|r| r.timestamp());

        let mut normalized: Vec<R> = Vec::with_capacity(records.len());
        for record in records {
            match normalized.last_mut() {
                Some(last) if last.timestamp() == record.timestamp() => *last = record,
                _ => normalized.push(record),
            }
        }

        Self { records: normalized }
    }

    pub fn empty() -> Self {
        Self { records: Vec::new() }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Full time domain `[first, last]` in epoch milliseconds.
    pub fn time_domain(&self) -> Option<(f64, f64)> {
        match (self.records.first(), self.records.last()) {
            (Some(first), Some(last)) => {
                Some((first.timestamp().as_f64(), last.timestamp().as_f64()))
            }
            _ => None,
        }
    }

    /// Zoom ceiling: one tenth of the record count, never below identity.
    /// Stops the viewport from zooming past single-record resolution.
    pub fn max_zoom(&self) -> f64 {
        (self.records.len() as f64 / 10.0).max(1.0)
    }
}

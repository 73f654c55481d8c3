pub mod entities;
pub mod value_objects;
pub mod window;

pub use entities::{
    AdjustedStockRecord, DailyAdjustedStockRecord, OhlcRecord, RecordSeries, StockRecord,
};
pub use value_objects::{Price, Timestamp, Volume};
pub use window::{DEFAULT_PRICE_BOUNDS, VisibleWindow, resolve_window};

use super::entities::OhlcRecord;

/// Price bounds used when the window holds no usable records.
/// Keeps the price axis non-degenerate and non-inverted.
pub const DEFAULT_PRICE_BOUNDS: (f64, f64) = (0.0, 1.0);

/// Records inside the current time domain plus the price bounds
/// computed over exactly that subset.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleWindow<'a, R> {
    pub records: &'a [R],
    pub price_min: f64,
    pub price_max: f64,
}

impl<R> VisibleWindow<'_, R> {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Resolve the visible window for a candidate time domain `[t0, t1]`.
///
/// `records` must already be ascending by timestamp, so the in-range
/// subset is one contiguous slice. One linear pass finds the slice and
/// folds min(low)/max(high) at the same time; record counts are small
/// enough (a few thousand at most) that no spatial index is warranted.
///
/// Non-finite price components are skipped in the fold. If the window is
/// empty, or holds only malformed records, the bounds fall back to
/// [`DEFAULT_PRICE_BOUNDS`].
pub fn resolve_window<'a, R: OhlcRecord>(
    records: &'a [R],
    t0: f64,
    t1: f64,
) -> VisibleWindow<'a, R> {
    let mut start = records.len();
    let mut end = records.len();
    let mut price_min = f64::INFINITY;
    let mut price_max = f64::NEG_INFINITY;

    for (i, record) in records.iter().enumerate() {
        let t = record.timestamp().as_f64();
        if t < t0 {
            continue;
        }
        if t > t1 {
            end = i;
            break;
        }
        if start == records.len() {
            start = i;
        }
        let low = record.low().value();
        let high = record.high().value();
        if low.is_finite() {
            price_min = price_min.min(low);
        }
        if high.is_finite() {
            price_max = price_max.max(high);
        }
    }

    let slice = if start < end { &records[start..end] } else { &records[0..0] };

    if !price_min.is_finite() || !price_max.is_finite() {
        let (min, max) = DEFAULT_PRICE_BOUNDS;
        price_min = min;
        price_max = max;
    }

    VisibleWindow { records: slice, price_min, price_max }
}

use quickcheck_macros::quickcheck;
use stock_chart_wasm::domain::market_data::{
    DEFAULT_PRICE_BOUNDS, Price, StockRecord, Timestamp, Volume, resolve_window,
};

const DAY_MS: i64 = 86_400_000;

fn make_record(day: i64, low: f64, high: f64) -> StockRecord {
    StockRecord::new(
        Timestamp::from_millis(day * DAY_MS),
        Price::new((low + high) / 2.0),
        Price::new(high),
        Price::new(low),
        Price::new((low + high) / 2.0),
        Volume::new(1.0),
    )
}

#[quickcheck]
fn bounds_equal_true_min_max_over_window(prices: Vec<(i16, u8)>, a: u8, b: u8) -> bool {
    let records: Vec<StockRecord> = prices
        .iter()
        .enumerate()
        .map(|(i, (base, span))| {
            let low = *base as f64 / 10.0;
            make_record(i as i64, low, low + *span as f64 / 10.0)
        })
        .collect();

    let (lo_day, hi_day) = (a.min(b) as i64, a.max(b) as i64);
    let (t0, t1) = ((lo_day * DAY_MS) as f64, (hi_day * DAY_MS) as f64);

    let window = resolve_window(&records, t0, t1);

    let in_range: Vec<&StockRecord> = records
        .iter()
        .filter(|r| {
            let t = r.timestamp.as_f64();
            t >= t0 && t <= t1
        })
        .collect();

    if in_range.is_empty() {
        return window.is_empty()
            && (window.price_min, window.price_max) == DEFAULT_PRICE_BOUNDS;
    }

    let expected_min = in_range.iter().map(|r| r.low.value()).fold(f64::INFINITY, f64::min);
    let expected_max = in_range.iter().map(|r| r.high.value()).fold(f64::NEG_INFINITY, f64::max);

    window.records.len() == in_range.len()
        && window.price_min == expected_min
        && window.price_max == expected_max
}

#[test]
fn window_is_the_contiguous_in_range_slice() {
    let records: Vec<StockRecord> = (0..10).map(|i| make_record(i, 10.0 + i as f64, 20.0)).collect();
    let window = resolve_window(&records, 3.0 * DAY_MS as f64, 6.0 * DAY_MS as f64);
    assert_eq!(window.records.len(), 4);
    assert_eq!(window.records[0].timestamp.value(), 3 * DAY_MS);
    assert_eq!(window.price_min, 13.0);
    assert_eq!(window.price_max, 20.0);
}

#[test]
fn empty_window_falls_back_to_default_bounds() {
    let records: Vec<StockRecord> = (0..5).map(|i| make_record(i, 10.0, 20.0)).collect();
    let window = resolve_window(&records, 100.0 * DAY_MS as f64, 200.0 * DAY_MS as f64);
    assert!(window.is_empty());
    assert_eq!((window.price_min, window.price_max), (0.0, 1.0));
}

#[test]
fn non_finite_prices_are_excluded_from_bounds() {
    let mut records = vec![
        make_record(0, 10.0, 20.0),
        make_record(1, 5.0, 25.0),
        make_record(2, 12.0, 18.0),
    ];
    records[1].low = Price::new(f64::NAN);
    records[1].high = Price::new(f64::INFINITY);

    let window = resolve_window(&records, 0.0, 10.0 * DAY_MS as f64);
    // The malformed record stays in the window but not in the bounds.
    assert_eq!(window.records.len(), 3);
    assert_eq!(window.price_min, 10.0);
    assert_eq!(window.price_max, 20.0);
}

#[test]
fn all_malformed_records_still_yield_safe_bounds() {
    let mut record = make_record(0, 10.0, 20.0);
    record.low = Price::new(f64::NAN);
    record.high = Price::new(f64::NAN);
    let records = vec![record];

    let window = resolve_window(&records, 0.0, DAY_MS as f64);
    assert_eq!((window.price_min, window.price_max), DEFAULT_PRICE_BOUNDS);
}

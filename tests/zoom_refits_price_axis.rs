use stock_chart_wasm::domain::chart::{Chart, ChartLayout, ChartTheme, GestureDelta};
use stock_chart_wasm::domain::market_data::{Price, StockRecord, Timestamp, Volume};

const DAY_MS: i64 = 86_400_000;

/// Synthetic series with its global extremes pinned to the edges, so a
/// window over the middle must produce different bounds.
fn make_records() -> Vec<StockRecord> {
    (0..1_000)
        .map(|i| {
            let low = match i {
                0 => 1.0,
                _ => 100.0 + ((i * 37) % 211) as f64,
            };
            let high = match i {
                999 => 10_000.0,
                _ => low + 5.0,
            };
            StockRecord::new(
                Timestamp::from_millis(i as i64 * DAY_MS),
                Price::new(low + 1.0),
                Price::new(high),
                Price::new(low),
                Price::new(low + 2.0),
                Volume::new(1.0),
            )
        })
        .collect()
}

#[test]
fn zooming_to_the_middle_refits_the_price_axis() {
    let layout = ChartLayout::default();
    let mut chart = Chart::new(layout, ChartTheme::default());
    chart.set_records(make_records());

    let before = chart.visible_window();
    let before_bounds = (before.price_min, before.price_max);
    assert_eq!(before.records.len(), 1_000);

    // Zoom 10x anchored on the plot center lands on the middle tenth.
    let focus = (layout.x_range().0 + layout.x_range().1) / 2.0;
    chart.apply_gesture(&GestureDelta::new(10.0, 0.0, 0.0, focus));

    let (t0, t1) = chart.time_domain();
    let after = chart.visible_window();
    assert_eq!(after.records.len(), 100);

    // Bounds equal the local min/max of exactly the in-domain records.
    let expected_min = chart
        .records()
        .iter()
        .filter(|r| r.timestamp.as_f64() >= t0 && r.timestamp.as_f64() <= t1)
        .map(|r| r.low.value())
        .fold(f64::INFINITY, f64::min);
    let expected_max = chart
        .records()
        .iter()
        .filter(|r| r.timestamp.as_f64() >= t0 && r.timestamp.as_f64() <= t1)
        .map(|r| r.high.value())
        .fold(f64::NEG_INFINITY, f64::max);

    assert_eq!(after.price_min, expected_min);
    assert_eq!(after.price_max, expected_max);
    assert_ne!((after.price_min, after.price_max), before_bounds);
}

use stock_chart_wasm::domain::chart::{Chart, ChartLayout, ChartTheme, GestureDelta};
use stock_chart_wasm::domain::market_data::{Price, StockRecord, Timestamp, Volume};
use stock_chart_wasm::infrastructure::rendering::{MAX_BAR_WIDTH, MIN_BAR_WIDTH, body_width, build_frame};

const DAY_MS: i64 = 86_400_000;

fn make_records(count: usize) -> Vec<StockRecord> {
    (0..count)
        .map(|i| {
            StockRecord::new(
                Timestamp::from_millis(i as i64 * DAY_MS),
                Price::new(101.0),
                Price::new(104.0),
                Price::new(100.0),
                Price::new(103.0),
                Volume::new(1.0),
            )
        })
        .collect()
}

#[test]
fn body_width_is_capped_and_floored() {
    // 113 candles over 1130px would be exactly 10px each; fewer get capped.
    assert_eq!(body_width(1130.0, 113), 10.0);
    assert_eq!(body_width(1130.0, 50), MAX_BAR_WIDTH);
    assert_eq!(body_width(1130.0, 5), MAX_BAR_WIDTH);

    // Dense series never degrade below one pixel.
    assert_eq!(body_width(1130.0, 100_000), MIN_BAR_WIDTH);

    // In between, the width is the even share of the plot.
    assert_eq!(body_width(1130.0, 1_000), 1.13);
}

#[test]
fn zooming_in_widens_the_candles() {
    let layout = ChartLayout::default();
    let mut chart = Chart::new(layout, ChartTheme::default());
    chart.set_records(make_records(1_000));

    let wide_view = build_frame(&chart);
    assert_eq!(wide_view.candles.len(), 1_000);
    let initial_width = wide_view.candles[0].body_width;
    assert!(initial_width < 2.0);

    // 10x zoom leaves ~100 candles visible, each ~10x wider (capped).
    let focus = (layout.x_range().0 + layout.x_range().1) / 2.0;
    chart.apply_gesture(&GestureDelta::new(10.0, 0.0, 0.0, focus));

    let zoomed_view = build_frame(&chart);
    assert!(zoomed_view.candles.len() < 200);
    let zoomed_width = zoomed_view.candles[0].body_width;
    assert!(zoomed_width > initial_width);
    assert!(zoomed_width <= MAX_BAR_WIDTH);
}

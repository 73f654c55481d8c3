use stock_chart_wasm::domain::chart::{ChartLayout, GestureDelta, ViewportState};
use stock_chart_wasm::domain::market_data::{
    Price, RecordSeries, StockRecord, Timestamp, Volume,
};

fn make_record(i: i64) -> StockRecord {
    StockRecord::new(
        Timestamp::from_millis(i * 86_400_000),
        Price::new(100.0),
        Price::new(101.0),
        Price::new(99.0),
        Price::new(100.0),
        Volume::new(1.0),
    )
}

#[test]
fn max_zoom_follows_record_count() {
    let series = RecordSeries::new((0..250).map(make_record).collect());
    assert_eq!(series.max_zoom(), 25.0);

    // Never below identity, even for tiny series.
    let series = RecordSeries::new((0..5).map(make_record).collect());
    assert_eq!(series.max_zoom(), 1.0);
}

#[test]
fn zoom_clamps_to_extent_idempotently() {
    let layout = ChartLayout::default();
    let max_zoom = 25.0;
    let focus = 400.0;

    let overshoot = ViewportState::identity().apply_gesture(
        &GestureDelta::new(1_000.0, 0.0, 0.0, focus),
        &layout,
        max_zoom,
    );
    let exact = ViewportState::identity().apply_gesture(
        &GestureDelta::new(max_zoom, 0.0, 0.0, focus),
        &layout,
        max_zoom,
    );

    assert_eq!(overshoot, exact);
    assert_eq!(overshoot.scale(), max_zoom);
}

#[test]
fn zoom_never_drops_below_identity() {
    let layout = ChartLayout::default();
    let state = ViewportState::identity().apply_gesture(
        &GestureDelta::new(0.01, 0.0, 0.0, 600.0),
        &layout,
        25.0,
    );
    assert_eq!(state.scale(), 1.0);
    assert_eq!(state.translate(), (0.0, 0.0));
}

#[test]
fn pan_clamps_to_plot_box_idempotently() {
    let layout = ChartLayout::default();
    let zoomed = ViewportState::identity().apply_gesture(
        &GestureDelta::new(2.0, 0.0, 0.0, layout.margin_left),
        &layout,
        25.0,
    );

    let overshoot = zoomed.apply_gesture(
        &GestureDelta::new(1.0, -1e9, -1e9, 0.0),
        &layout,
        25.0,
    );
    let (x0, x1) = layout.x_range();
    let (y0, y1) = layout.y_box();
    assert_eq!(overshoot.translate().0, x1 * (1.0 - 2.0));
    assert_eq!(overshoot.translate().1, y1 * (1.0 - 2.0));

    // Panning further once at the edge changes nothing.
    let again = overshoot.apply_gesture(
        &GestureDelta::new(1.0, -500.0, -500.0, 0.0),
        &layout,
        25.0,
    );
    assert_eq!(again, overshoot);

    // And the opposite edge clamps against the other bound.
    let back = overshoot.apply_gesture(
        &GestureDelta::new(1.0, 1e9, 1e9, 0.0),
        &layout,
        25.0,
    );
    assert_eq!(back.translate().0, x0 * (1.0 - 2.0));
    assert_eq!(back.translate().1, y0 * (1.0 - 2.0));
}

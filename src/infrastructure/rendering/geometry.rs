//! Per-frame geometry building: pure data out, no surface access.
//!
//! Everything a draw needs is computed here from the chart aggregate, so
//! the mapping logic is testable without a browser and the canvas shim
//! stays a dumb painter.

use crate::domain::chart::{CandleTone, Chart, LinearScale};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::OhlcRecord;
use crate::log_debug;
use crate::time_utils::format_time_label;

/// Bars never grow past this width, however far the user zooms in.
pub const MAX_BAR_WIDTH: f64 = 10.0;
/// Bars never collapse below one pixel at full zoom-out.
pub const MIN_BAR_WIDTH: f64 = 1.0;
/// Target tick counts per axis.
pub const TIME_TICK_TARGET: usize = 8;
pub const PRICE_TICK_TARGET: usize = 6;

/// One axis mark: a pixel offset along its axis plus a label.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub pixel: f64,
    pub label: String,
}

/// Wick and body segments of one candle, in surface pixels.
/// `*_top` is the smaller y value (canvas y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandleShape {
    pub x: f64,
    pub wick_top: f64,
    pub wick_bottom: f64,
    pub body_top: f64,
    pub body_bottom: f64,
    pub body_width: f64,
    pub tone: CandleTone,
}

/// Complete geometry of one frame. A draw replaces the previous frame
/// wholesale; nothing here is diffed or patched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartFrame {
    pub time_ticks: Vec<AxisTick>,
    pub price_ticks: Vec<AxisTick>,
    pub candles: Vec<CandleShape>,
}

/// Body width from the *current* visible density: an even share of the
/// plot width per visible record, capped at [`MAX_BAR_WIDTH`]. Bars
/// widen as zooming in shrinks the visible count.
pub fn body_width(chart_width: f64, visible_count: usize) -> f64 {
    if visible_count == 0 {
        return MIN_BAR_WIDTH;
    }
    (chart_width / visible_count as f64).min(MAX_BAR_WIDTH).max(MIN_BAR_WIDTH)
}

pub fn format_price_label(value: f64) -> String {
    if value.abs() >= 1000.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

/// Build the frame for the chart's current viewport.
///
/// An empty window still yields both axes (default price bounds) with an
/// empty candle set.
pub fn build_frame<R: OhlcRecord>(chart: &Chart<R>) -> ChartFrame {
    let layout = *chart.layout();
    let (t0, t1) = chart.time_domain();
    let window = chart.visible_window();

    let time = LinearScale::new((t0, t1), layout.x_range());
    let price = LinearScale::new((window.price_min, window.price_max), layout.y_range());

    let span_ms = t1 - t0;
    let time_ticks = time
        .ticks(TIME_TICK_TARGET)
        .into_iter()
        .map(|t| AxisTick { pixel: time.map(t), label: format_time_label(t as i64, span_ms) })
        .collect();

    let price_ticks = price
        .ticks(PRICE_TICK_TARGET)
        .into_iter()
        .map(|p| AxisTick { pixel: price.map(p), label: format_price_label(p) })
        .collect();

    let width = body_width(layout.chart_width(), window.records.len());
    let mut candles = Vec::with_capacity(window.records.len());
    for record in window.records {
        if !record.has_finite_prices() {
            continue;
        }
        let x = time.map(record.timestamp().as_f64());
        let open_y = price.map(record.open().value());
        let close_y = price.map(record.close().value());
        candles.push(CandleShape {
            x,
            wick_top: price.map(record.high().value()),
            wick_bottom: price.map(record.low().value()),
            body_top: open_y.min(close_y),
            body_bottom: open_y.max(close_y),
            body_width: width,
            tone: CandleTone::from_prices(record.open(), record.close()),
        });
    }

    log_debug!(
        LogComponent::Infrastructure("Geometry"),
        "frame: {} candles, domain [{t0:.0}, {t1:.0}]",
        candles.len()
    );

    ChartFrame { time_ticks, price_ticks, candles }
}

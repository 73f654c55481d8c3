use super::scales::TimeScale;
use super::value_objects::{ChartLayout, ChartTheme};
use super::viewport::{GestureDelta, ViewportState};
use crate::domain::market_data::{OhlcRecord, RecordSeries, VisibleWindow, resolve_window};

/// Domain aggregate - one mounted chart instance.
///
/// Owns the record sequence, the viewport and the configuration; nothing
/// outside the aggregate writes any of them. Everything else (visible
/// window, price bounds, mappers) is derived on demand.
#[derive(Debug, Clone)]
pub struct Chart<R> {
    series: RecordSeries<R>,
    viewport: ViewportState,
    layout: ChartLayout,
    theme: ChartTheme,
}

impl<R: OhlcRecord> Chart<R> {
    pub fn new(layout: ChartLayout, theme: ChartTheme) -> Self {
        Self { series: RecordSeries::empty(), viewport: ViewportState::identity(), layout, theme }
    }

    /// Replace the record sequence wholesale (symbol change, initial load).
    ///
    /// The viewport is reset to identity before the new series is
    /// installed so no window is ever resolved against a stale domain.
    pub fn set_records(&mut self, records: Vec<R>) {
        self.viewport = ViewportState::identity();
        self.series = RecordSeries::new(records);
    }

    pub fn records(&self) -> &[R] {
        self.series.records()
    }

    pub fn record_count(&self) -> usize {
        self.series.count()
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    pub fn theme(&self) -> &ChartTheme {
        &self.theme
    }

    pub fn set_layout(&mut self, layout: ChartLayout) {
        self.layout = layout;
    }

    pub fn set_theme(&mut self, theme: ChartTheme) {
        self.theme = theme;
    }

    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    pub fn max_zoom(&self) -> f64 {
        self.series.max_zoom()
    }

    /// Gesture deltas are the only path that moves the viewport.
    pub fn apply_gesture(&mut self, delta: &GestureDelta) {
        self.viewport = self.viewport.apply_gesture(delta, &self.layout, self.max_zoom());
    }

    /// Full-domain time mapper. With fewer than two records the domain
    /// collapses and the mapper degrades to the range midpoint.
    pub fn full_time_scale(&self) -> TimeScale {
        let domain = self.series.time_domain().unwrap_or((0.0, 1.0));
        TimeScale::new(domain, self.layout.x_range())
    }

    /// Visible time domain derived from the current viewport.
    pub fn time_domain(&self) -> (f64, f64) {
        self.viewport.time_domain(&self.full_time_scale(), &self.layout)
    }

    /// Records inside the current time domain plus their price bounds.
    pub fn visible_window(&self) -> VisibleWindow<'_, R> {
        let (t0, t1) = self.time_domain();
        resolve_window(self.series.records(), t0, t1)
    }
}

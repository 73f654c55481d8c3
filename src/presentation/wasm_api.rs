//! JavaScript-facing chart API. Thin bridge only: parse host input,
//! delegate to the domain, draw.

use wasm_bindgen::prelude::*;

use crate::application::{drag_delta, wheel_delta};
use crate::domain::chart::{Chart, ChartLayout, ChartTheme};
use crate::domain::errors::ChartError;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::DailyAdjustedStockRecord;
use crate::infrastructure::rendering::{CanvasRenderer, build_frame};

/// One chart instance bound to a canvas element.
///
/// The host supplies records and configuration; the chart exposes
/// nothing back beyond the rendered surface.
#[wasm_bindgen]
pub struct StockChartApi {
    chart: Chart<DailyAdjustedStockRecord>,
    renderer: CanvasRenderer,
}

#[wasm_bindgen]
impl StockChartApi {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: String) -> Self {
        let layout = ChartLayout::default();
        let renderer =
            CanvasRenderer::new(canvas_id, layout.width as u32, layout.height as u32);
        Self { chart: Chart::new(layout, ChartTheme::default()), renderer }
    }

    /// Override layout and/or theme with host-supplied JSON. Both
    /// payloads are parsed before either is applied, so a rejected call
    /// leaves the previous configuration fully intact.
    pub fn configure(
        &mut self,
        layout_json: Option<String>,
        theme_json: Option<String>,
    ) -> Result<(), JsValue> {
        let (layout, theme) = parse_config(layout_json, theme_json).map_err(to_js)?;
        if let Some(layout) = layout {
            self.chart.set_layout(layout);
            self.renderer.set_dimensions(layout.width as u32, layout.height as u32);
        }
        if let Some(theme) = theme {
            self.chart.set_theme(theme);
        }
        self.redraw()
    }

    /// Replace the record sequence (initial load or symbol change) and
    /// draw the first frame. The viewport resets to identity.
    #[wasm_bindgen(js_name = setRecords)]
    pub fn set_records(&mut self, records_json: &str) -> Result<(), JsValue> {
        let records: Vec<DailyAdjustedStockRecord> = serde_json::from_str(records_json)
            .map_err(|e| ChartError::InvalidRecords(e.to_string()))
            .map_err(to_js)?;

        get_logger().info(
            LogComponent::Presentation("StockChartApi"),
            &format!("loaded {} records", records.len()),
        );

        self.chart.set_records(records);
        self.redraw()
    }

    /// Host-driven wheel gesture: one viewport update, one redraw.
    pub fn zoom(&mut self, delta_y: f64, focus_x: f64) -> Result<(), JsValue> {
        self.chart.apply_gesture(&wheel_delta(delta_y, focus_x));
        self.redraw()
    }

    /// Host-driven drag gesture.
    pub fn pan(&mut self, dx: f64, dy: f64) -> Result<(), JsValue> {
        self.chart.apply_gesture(&drag_delta(dx, dy));
        self.redraw()
    }

    #[wasm_bindgen(js_name = recordCount)]
    pub fn record_count(&self) -> usize {
        self.chart.record_count()
    }

    pub fn redraw(&self) -> Result<(), JsValue> {
        let frame = build_frame(&self.chart);
        self.renderer.draw(&frame, self.chart.layout(), self.chart.theme())
    }
}

/// Parse host configuration without touching chart state. Fails as a
/// whole: either both payloads are valid or nothing is applied.
pub fn parse_config(
    layout_json: Option<String>,
    theme_json: Option<String>,
) -> Result<(Option<ChartLayout>, Option<ChartTheme>), ChartError> {
    let layout = layout_json
        .map(|json| serde_json::from_str(&json))
        .transpose()
        .map_err(|e| ChartError::InvalidConfig(e.to_string()))?;
    let theme = theme_json
        .map(|json| serde_json::from_str(&json))
        .transpose()
        .map_err(|e| ChartError::InvalidConfig(e.to_string()))?;
    Ok((layout, theme))
}

fn to_js(error: ChartError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

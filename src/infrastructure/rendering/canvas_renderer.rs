use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::geometry::ChartFrame;
use crate::domain::chart::{ChartLayout, ChartTheme};
use crate::domain::logging::{LogComponent, get_logger};

const TICK_LENGTH: f64 = 6.0;
const WICK_LINE_WIDTH: f64 = 1.0;
const AXIS_FONT: &str = "11px sans-serif";

/// Canvas 2D painter - infrastructure implementation.
///
/// Consumes a prebuilt [`ChartFrame`] and replaces the whole surface in
/// one pass: clear, background, axes, candles. Nothing from the previous
/// frame survives, so stale axis marks or orphaned candles cannot occur.
pub struct CanvasRenderer {
    canvas_id: String,
    width: u32,
    height: u32,
}

impl CanvasRenderer {
    pub fn new(canvas_id: String, width: u32, height: u32) -> Self {
        Self { canvas_id, width, height }
    }

    pub fn set_dimensions(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn context(&self) -> Result<CanvasRenderingContext2d, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas = document
            .get_element_by_id(&self.canvas_id)
            .ok_or_else(|| JsValue::from_str("canvas element not found"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("element is not a canvas"))?;

        canvas.set_width(self.width);
        canvas.set_height(self.height);

        canvas
            .get_context("2d")
            .map_err(|_| JsValue::from_str("failed to get 2d context"))?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("failed to cast 2d context"))
    }

    /// Draw one frame, atomically replacing whatever was on the surface.
    pub fn draw(
        &self,
        frame: &ChartFrame,
        layout: &ChartLayout,
        theme: &ChartTheme,
    ) -> Result<(), JsValue> {
        let ctx = self.context()?;

        ctx.clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
        ctx.set_fill_style_str(&theme.background.to_css());
        ctx.fill_rect(0.0, 0.0, self.width as f64, self.height as f64);

        self.draw_axes(&ctx, frame, layout, theme)?;
        self.draw_candles(&ctx, frame, theme);

        get_logger().debug(
            LogComponent::Infrastructure("CanvasRenderer"),
            &format!("drew {} candles", frame.candles.len()),
        );
        Ok(())
    }

    fn draw_axes(
        &self,
        ctx: &CanvasRenderingContext2d,
        frame: &ChartFrame,
        layout: &ChartLayout,
        theme: &ChartTheme,
    ) -> Result<(), JsValue> {
        let axis = theme.axis.to_css();
        let (x0, x1) = layout.x_range();
        let (y_bottom, y_top) = layout.y_range();

        ctx.set_stroke_style_str(&axis);
        ctx.set_fill_style_str(&axis);
        ctx.set_line_width(1.0);
        ctx.set_font(AXIS_FONT);

        // Time axis along the bottom edge.
        ctx.begin_path();
        ctx.move_to(x0, y_bottom);
        ctx.line_to(x1, y_bottom);
        ctx.stroke();
        for tick in &frame.time_ticks {
            ctx.begin_path();
            ctx.move_to(tick.pixel, y_bottom);
            ctx.line_to(tick.pixel, y_bottom + TICK_LENGTH);
            ctx.stroke();
            ctx.set_text_align("center");
            ctx.fill_text(&tick.label, tick.pixel, y_bottom + TICK_LENGTH + 12.0)?;
        }

        // Price axis along the left edge.
        ctx.begin_path();
        ctx.move_to(x0, y_bottom);
        ctx.line_to(x0, y_top);
        ctx.stroke();
        for tick in &frame.price_ticks {
            ctx.begin_path();
            ctx.move_to(x0 - TICK_LENGTH, tick.pixel);
            ctx.line_to(x0, tick.pixel);
            ctx.stroke();
            ctx.set_text_align("right");
            ctx.fill_text(&tick.label, x0 - TICK_LENGTH - 2.0, tick.pixel + 4.0)?;
        }
        Ok(())
    }

    fn draw_candles(&self, ctx: &CanvasRenderingContext2d, frame: &ChartFrame, theme: &ChartTheme) {
        for candle in &frame.candles {
            // Wick: thin segment spanning low..high.
            ctx.set_stroke_style_str(&theme.wick.to_css());
            ctx.set_line_width(WICK_LINE_WIDTH);
            ctx.begin_path();
            ctx.move_to(candle.x, candle.wick_top);
            ctx.line_to(candle.x, candle.wick_bottom);
            ctx.stroke();

            // Body: thick segment spanning open..close, toned by direction.
            ctx.set_stroke_style_str(&theme.tone_color(candle.tone).to_css());
            ctx.set_line_width(candle.body_width);
            ctx.begin_path();
            if candle.body_top == candle.body_bottom {
                // Flat record: keep a visible one-pixel body.
                ctx.move_to(candle.x, candle.body_top - 0.5);
                ctx.line_to(candle.x, candle.body_top + 0.5);
            } else {
                ctx.move_to(candle.x, candle.body_top);
                ctx.line_to(candle.x, candle.body_bottom);
            }
            ctx.stroke();
        }
    }
}

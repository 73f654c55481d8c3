pub mod canvas_renderer;
pub mod geometry;

pub use canvas_renderer::CanvasRenderer;
pub use geometry::{
    AxisTick, CandleShape, ChartFrame, MAX_BAR_WIDTH, MIN_BAR_WIDTH, body_width, build_frame,
};

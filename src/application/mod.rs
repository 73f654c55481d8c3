pub mod gesture;

pub use gesture::{FrameCoalescer, drag_delta, wheel_delta};

//! Translates raw pointer gestures into viewport deltas and coalesces
//! them per animation frame.

use crate::domain::chart::GestureDelta;

/// Wheel motion to zoom-factor exponent. One notch of a typical wheel
/// (delta_y = 100) scales by 2^0.2 ~ 1.15.
pub const WHEEL_ZOOM_RATE: f64 = 0.002;

/// Normalize a wheel event: upward motion (negative delta) zooms in,
/// anchored on the pointer's horizontal position.
pub fn wheel_delta(delta_y: f64, focus_x: f64) -> GestureDelta {
    GestureDelta::new(2f64.powf(-delta_y * WHEEL_ZOOM_RATE), 0.0, 0.0, focus_x)
}

/// Normalize a pointer drag into a pan offset.
pub fn drag_delta(dx: f64, dy: f64) -> GestureDelta {
    GestureDelta::new(1.0, dx, dy, 0.0)
}

/// Collects gesture deltas between animation frames.
///
/// Dense wheel streams fire far more often than the surface can redraw;
/// drawing from inside the event handler would starve the event loop.
/// Handlers push into the coalescer instead, and the frame callback
/// drains one merged delta. Merging keeps arrival order, so the drained
/// delta is equivalent to replaying the gestures one by one.
#[derive(Debug, Default)]
pub struct FrameCoalescer {
    pending: Option<GestureDelta>,
}

impl FrameCoalescer {
    pub fn new() -> Self {
        Self { pending: None }
    }

    pub fn push(&mut self, delta: GestureDelta) {
        self.pending = Some(match self.pending.take() {
            Some(earlier) => earlier.merge(delta),
            None => delta,
        });
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drain the merged delta accumulated since the last frame.
    pub fn take(&mut self) -> Option<GestureDelta> {
        self.pending.take()
    }
}

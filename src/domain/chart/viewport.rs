use super::scales::TimeScale;
use super::value_objects::ChartLayout;

/// Normalized gesture input: one zoom factor, one pan offset, and the
/// horizontal pixel the zoom is anchored on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureDelta {
    pub zoom_factor: f64,
    pub pan_x: f64,
    pub pan_y: f64,
    pub focus_x: f64,
}

impl GestureDelta {
    pub fn new(zoom_factor: f64, pan_x: f64, pan_y: f64, focus_x: f64) -> Self {
        Self { zoom_factor, pan_x, pan_y, focus_x }
    }

    pub fn identity() -> Self {
        Self { zoom_factor: 1.0, pan_x: 0.0, pan_y: 0.0, focus_x: 0.0 }
    }

    /// Fold a later delta into this one: zoom factors multiply and the
    /// latest focus wins. Horizontal pans accumulated so far are rescaled
    /// by the later zoom before its own pan is added, because applying a
    /// zoom re-anchors the horizontal translation and thereby stretches
    /// any pan that landed before it. Vertical pans stay additive; the
    /// vertical axis is never re-anchored. The fold keeps arrival order,
    /// so a coalesced frame never reorders two gestures.
    pub fn merge(self, later: GestureDelta) -> Self {
        Self {
            zoom_factor: self.zoom_factor * later.zoom_factor,
            pan_x: self.pan_x * later.zoom_factor + later.pan_x,
            pan_y: self.pan_y + later.pan_y,
            focus_x: if later.zoom_factor != 1.0 { later.focus_x } else { self.focus_x },
        }
    }
}

/// Current zoom scale and translation of the drawing region.
///
/// A plain value type: the one transition, [`ViewportState::apply_gesture`],
/// returns a new state instead of mutating shared variables, so a redraw
/// can never observe a half-applied gesture. The time domain is always
/// derived from scale and translation, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    scale: f64,
    translate_x: f64,
    translate_y: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::identity()
    }
}

impl ViewportState {
    pub fn identity() -> Self {
        Self { scale: 1.0, translate_x: 0.0, translate_y: 0.0 }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn translate(&self) -> (f64, f64) {
        (self.translate_x, self.translate_y)
    }

    /// The single mutation point of the viewport.
    ///
    /// Clamps the proposed scale to `[1, max_zoom]`, re-anchors the
    /// translation so the source point under the gesture focus stays
    /// put, applies the pan offset, and clamps the translation so the
    /// transformed drawing region never leaves the plot box on either
    /// axis. Out-of-range deltas land exactly on the extent, which makes
    /// overshooting and hitting the extent indistinguishable.
    #[must_use]
    pub fn apply_gesture(&self, delta: &GestureDelta, layout: &ChartLayout, max_zoom: f64) -> Self {
        let max_zoom = max_zoom.max(1.0);
        let scale = (self.scale * delta.zoom_factor).clamp(1.0, max_zoom);

        let mut translate_x = if scale != self.scale {
            // Keep the pixel under the cursor mapped to the same source
            // point across the scale change.
            delta.focus_x - (delta.focus_x - self.translate_x) * (scale / self.scale)
        } else {
            self.translate_x
        };
        translate_x += delta.pan_x;
        let translate_y = self.translate_y + delta.pan_y;

        let (x0, x1) = layout.x_range();
        let (y0, y1) = layout.y_box();
        translate_x = clamp_translation(translate_x, scale, x0, x1);
        let translate_y = clamp_translation(translate_y, scale, y0, y1);

        Self { scale, translate_x, translate_y }
    }

    /// Derive the visible time domain by pulling the transformed pixel
    /// range back through the full-domain time scale.
    pub fn time_domain(&self, full: &TimeScale, layout: &ChartLayout) -> (f64, f64) {
        let (x0, x1) = layout.x_range();
        let t0 = full.invert((x0 - self.translate_x) / self.scale);
        let t1 = full.invert((x1 - self.translate_x) / self.scale);
        (t0, t1)
    }
}

/// Translation extent for pixel box `[p0, p1]` at scale `k`: the window
/// of source pixels shown, `[(p0 - t) / k, (p1 - t) / k]`, must stay
/// inside the box. At identity zoom the only admissible translation is
/// zero.
fn clamp_translation(t: f64, k: f64, p0: f64, p1: f64) -> f64 {
    t.clamp(p1 * (1.0 - k), p0 * (1.0 - k))
}

use crate::domain::market_data::Timestamp;

/// Value Object - monotonic, invertible linear mapping from a domain
/// interval onto a pixel interval.
///
/// Pure and stateless; callers re-create it whenever either interval
/// changes. The price axis passes an inverted pixel range (larger pixel
/// value first) so higher prices land closer to the top of the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// A collapsed domain cannot be mapped linearly; every input degrades
    /// to the fixed range midpoint instead of dividing by zero.
    pub fn is_degenerate(&self) -> bool {
        self.domain.0 == self.domain.1
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (p0, p1) = self.range;
        if self.is_degenerate() {
            return (p0 + p1) / 2.0;
        }
        p0 + (value - d0) / (d1 - d0) * (p1 - p0)
    }

    pub fn invert(&self, pixel: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (p0, p1) = self.range;
        if self.is_degenerate() || p0 == p1 {
            return d0;
        }
        d0 + (pixel - p0) / (p1 - p0) * (d1 - d0)
    }

    /// Roughly `count` nicely-stepped values inside the domain, for axis
    /// marks. Steps are 1/2/5 times a power of ten.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        if self.is_degenerate() {
            return vec![d0];
        }
        let (lo, hi) = if d0 < d1 { (d0, d1) } else { (d1, d0) };
        let step = tick_step(lo, hi, count.max(1));
        if step <= 0.0 || !step.is_finite() {
            return vec![lo, hi];
        }

        let first = (lo / step).ceil();
        let last = (hi / step).floor();
        let mut ticks = Vec::with_capacity((last - first) as usize + 1);
        let mut i = first;
        while i <= last {
            ticks.push(i * step);
            i += 1.0;
        }
        ticks
    }
}

/// Tick interval covering `[lo, hi]` with about `count` steps.
fn tick_step(lo: f64, hi: f64, count: usize) -> f64 {
    let step0 = (hi - lo) / count as f64;
    let magnitude = 10f64.powf(step0.log10().floor());
    let err = step0 / magnitude;

    let factor = if err >= 50f64.sqrt() {
        10.0
    } else if err >= 10f64.sqrt() {
        5.0
    } else if err >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    magnitude * factor
}

/// Time axis mapper: linear in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    scale: LinearScale,
}

impl TimeScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { scale: LinearScale::new(domain, range) }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.scale.domain()
    }

    pub fn map(&self, timestamp: Timestamp) -> f64 {
        self.scale.map(timestamp.as_f64())
    }

    pub fn map_ms(&self, epoch_ms: f64) -> f64 {
        self.scale.map(epoch_ms)
    }

    /// Pixel back to epoch milliseconds.
    pub fn invert(&self, pixel: f64) -> f64 {
        self.scale.invert(pixel)
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        self.scale.ticks(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_domain_endpoints_to_range_endpoints() {
        let scale = LinearScale::new((10.0, 20.0), (40.0, 1170.0));
        assert_eq!(scale.map(10.0), 40.0);
        assert_eq!(scale.map(20.0), 1170.0);
        assert_eq!(scale.map(15.0), 605.0);
    }

    #[test]
    fn inverted_range_maps_upward() {
        // Price axis convention: larger pixel first.
        let scale = LinearScale::new((0.0, 100.0), (570.0, 20.0));
        assert_eq!(scale.map(0.0), 570.0);
        assert_eq!(scale.map(100.0), 20.0);
        assert!(scale.map(75.0) < scale.map(25.0));
    }

    #[test]
    fn degenerate_domain_pins_to_midpoint() {
        let scale = LinearScale::new((5.0, 5.0), (0.0, 100.0));
        assert_eq!(scale.map(5.0), 50.0);
        assert_eq!(scale.map(-1e9), 50.0);
        assert_eq!(scale.invert(77.0), 5.0);
    }

    #[test]
    fn ticks_use_nice_steps() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, 100.0));
        assert_eq!(scale.ticks(5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);

        let scale = LinearScale::new((98.2, 134.7), (0.0, 100.0));
        let ticks = scale.ticks(6);
        assert!(ticks.first().copied().unwrap() >= 98.2);
        assert!(ticks.last().copied().unwrap() <= 134.7);
        assert!(ticks.windows(2).all(|w| (w[1] - w[0] - 5.0).abs() < 1e-9));
    }

    #[test]
    fn degenerate_domain_yields_single_tick() {
        let scale = LinearScale::new((3.0, 3.0), (0.0, 100.0));
        assert_eq!(scale.ticks(10), vec![3.0]);
    }
}

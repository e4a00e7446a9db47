//! Running extrema of the orbit and the map from orbit space to pixels.
//!
//! Bounds widen while the orbit is being drawn, and every point is projected
//! against the bounds known at that moment. Early points therefore land
//! against a narrow range; the image settles as the extrema stabilise.

/// Left and right margin in pixels.
pub const MARGIN_X: f64 = 50.0;
/// Top margin in pixels.
pub const MARGIN_TOP: f64 = 50.0;
/// Bottom margin in pixels, larger to leave room for the status line.
pub const MARGIN_BOTTOM: f64 = 80.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Default for Bounds {
    /// Inverted interval, so the first sample always widens it.
    fn default() -> Self {
        Self {
            min_x: 10.0,
            min_y: 10.0,
            max_x: -10.0,
            max_y: -10.0,
        }
    }
}

impl Bounds {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn observe(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.min_x <= x && x <= self.max_x && self.min_y <= y && y <= self.max_y
    }

    /// Pixel position of `(x, y)` inside the margins of a `width` x `height`
    /// canvas: x lands in [50, width-50], y in [50, height-80].
    pub fn project(&self, x: f64, y: f64, width: u32, height: u32) -> (u32, u32) {
        let px = project_axis(
            x,
            self.min_x,
            self.max_x,
            MARGIN_X,
            width as f64 - MARGIN_X,
        );
        let py = project_axis(
            y,
            self.min_y,
            self.max_y,
            MARGIN_TOP,
            height as f64 - MARGIN_BOTTOM,
        );
        (px, py)
    }
}

fn project_axis(value: f64, lo: f64, hi: f64, out_lo: f64, out_hi: f64) -> u32 {
    let span = hi - lo;
    let mapped = out_lo + (value - lo) / span * (out_hi - out_lo);
    // Zero-width axis: no information yet, place on the midpoint
    let mapped = if span == 0.0 || !mapped.is_finite() {
        (out_lo + out_hi) / 2.0
    } else {
        mapped
    };
    mapped.round().clamp(out_lo, out_hi) as u32
}

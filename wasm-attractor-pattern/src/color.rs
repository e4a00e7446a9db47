use std::f64::consts::PI;

use serde::Serialize;

use crate::rng::PatternRng;

/// Opacity of a single accumulated sample.
pub const PIXEL_ALPHA: f64 = 10.0 / 255.0;

/// Upper end of blend `t`; squared step lengths map into [0, COLOR_RANGE].
const COLOR_RANGE: f64 = 1.0;

/// RGB on the 0-255 scale. Blended colors keep their fractional part.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn lerp(&self, other: &Color, t: f64) -> Color {
        Color {
            r: self.r + t * (other.r - self.r),
            g: self.g + t * (other.g - self.g),
            b: self.b + t * (other.b - self.b),
        }
    }
}

/// RGBA with integral channels, used for clearing the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

pub const BACKGROUND: Rgba = Rgba {
    r: 15,
    g: 15,
    b: 15,
    a: 255,
};

/// HSV to RGB. Hue in degrees, saturation and value in [0, 1].
/// Channels are rounded to whole numbers.
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Color {
    let hue = if hue >= 360.0 { 0.0 } else { hue };
    let sector = (hue / 60.0).floor();
    let fraction = hue / 60.0 - sector;
    let p = value * (1.0 - saturation);
    let q = value * (1.0 - fraction * saturation);
    let t = value * (1.0 - (1.0 - fraction) * saturation);

    let (r, g, b) = match (sector as i64).rem_euclid(6) {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };

    Color::new(
        (r * 255.0).round(),
        (g * 255.0).round(),
        (b * 255.0).round(),
    )
}

/// Linear rescale of `value` from one range onto another. Values outside the
/// source range extrapolate.
pub fn map_range(value: f64, in_lo: f64, in_hi: f64, out_lo: f64, out_hi: f64) -> f64 {
    out_lo + (value - in_lo) / (in_hi - in_lo) * (out_hi - out_lo)
}

/// Two colors chosen once per pattern; every sample is a blend of the two.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Palette {
    pub hue1: i64,
    pub hue2: i64,
    pub color1: Color,
    pub color2: Color,
}

impl Palette {
    /// Two hues 100 to 259 degrees apart, sharing saturation and brightness.
    pub fn pick(rng: &mut PatternRng, saturation: f64, brightness: f64) -> Self {
        let hue1 = rng.uniform_int(0, 360);
        let hue2 = (hue1 + rng.uniform_int(100, 260)) % 360;
        Self {
            hue1,
            hue2,
            color1: hsv_to_rgb(hue1 as f64, saturation, brightness),
            color2: hsv_to_rgb(hue2 as f64, saturation, brightness),
        }
    }

    /// Color for a step of `(dx, dy)` in orbit space. Short steps stay near
    /// `color1`, steps of length pi/sqrt(50) and beyond reach `color2`.
    pub fn blend(&self, dx: f64, dy: f64) -> Color {
        let (sx, sy) = (dx * 10.0, dy * 10.0);
        let mag_sq = sx * sx + sy * sy;
        let t = map_range(mag_sq, 0.0, PI * PI * 2.0, 0.0, 1.0).clamp(-COLOR_RANGE, COLOR_RANGE);
        self.color1.lerp(&self.color2, t)
    }
}

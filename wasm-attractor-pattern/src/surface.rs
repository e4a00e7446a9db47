//! Pixel storage the session draws into.
//!
//! Channels accumulate as `f32` and may run past 255; clamping happens only
//! when the buffer is presented as RGBA bytes for the canvas.

use crate::color::{Color, Rgba};
use crate::error::{PatternError, PatternResult};

/// Smallest canvas that leaves a drawable area inside the 50/80 px margins.
pub const MIN_CANVAS_SIZE: u32 = 130;

pub fn check_dimensions(width: u32, height: u32) -> PatternResult<()> {
    if width < MIN_CANVAS_SIZE || height < MIN_CANVAS_SIZE {
        return Err(PatternError::CanvasTooSmall { width, height });
    }
    Ok(())
}

/// Row-major RGBA target, four channels per pixel at `(x + y * width) * 4`.
pub trait Surface {
    fn dimensions(&self) -> (u32, u32);

    /// Fill every pixel with `color`.
    fn clear(&mut self, color: Rgba);

    /// Add `color * alpha` onto the r, g, b channels at `(x, y)`.
    fn accumulate(&mut self, x: u32, y: u32, color: Color, alpha: f64);
}

pub struct AccumulationBuffer {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl AccumulationBuffer {
    pub fn new(width: u32, height: u32) -> PatternResult<Self> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0.0; (width * height * 4) as usize],
        })
    }

    fn idx(&self, x: u32, y: u32) -> usize {
        ((x + y * self.width) * 4) as usize
    }

    pub fn pixel(&self, x: u32, y: u32) -> [f32; 4] {
        let idx = self.idx(x, y);
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }

    /// Write the clamped RGBA bytes into `out`, which must hold
    /// `width * height * 4` bytes.
    pub fn present_into(&self, out: &mut [u8]) {
        for (dst, src) in out.iter_mut().zip(self.data.iter()) {
            *dst = src.round().clamp(0.0, 255.0) as u8;
        }
    }

    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut rgba = vec![0u8; self.data.len()];
        self.present_into(&mut rgba);
        rgba
    }
}

impl Surface for AccumulationBuffer {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Rgba) {
        for pixel in self.data.chunks_exact_mut(4) {
            pixel[0] = color.r as f32;
            pixel[1] = color.g as f32;
            pixel[2] = color.b as f32;
            pixel[3] = color.a as f32;
        }
    }

    fn accumulate(&mut self, x: u32, y: u32, color: Color, alpha: f64) {
        debug_assert!(x < self.width && y < self.height);
        let idx = self.idx(x, y);
        self.data[idx] += (color.r * alpha) as f32;
        self.data[idx + 1] += (color.g * alpha) as f32;
        self.data[idx + 2] += (color.b * alpha) as f32;
    }
}

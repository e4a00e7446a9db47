//! Seeded random stream shared by every draw of a pattern.
//!
//! Coefficients and palette are drawn from one stream in a fixed order, so a
//! seed reproduces the same pattern.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeds are kept below 10^12 so they stay exact as JS numbers.
pub const SEED_RANGE: f64 = 1.0e12;

pub struct PatternRng {
    rng: StdRng,
}

impl PatternRng {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Uniform draw in [0, 1).
    pub fn random(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Uniform draw in [low, high).
    pub fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + self.random() * (high - low)
    }

    /// Floor of a uniform draw, so `high` itself is never returned.
    pub fn uniform_int(&mut self, low: i64, high: i64) -> i64 {
        self.uniform(low as f64, high as f64).floor() as i64
    }

    pub fn chance(&mut self) -> bool {
        self.random() > 0.5
    }
}

/// Fresh seed for patterns that did not ask for one.
#[cfg(target_arch = "wasm32")]
pub fn entropy_seed() -> u64 {
    (js_sys::Math::random() * SEED_RANGE).floor() as u64
}

/// Fresh seed for patterns that did not ask for one.
#[cfg(not(target_arch = "wasm32"))]
pub fn entropy_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    (nanos % SEED_RANGE as u128) as u64
}

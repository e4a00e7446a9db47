//! Attractor families, their coefficients and the per-step equations.
//!
//! Clifford: http://paulbourke.net/fractals/clifford/
//! DeJong: http://paulbourke.net/fractals/peterdejong/
//! Fujii: sine/cosine power map with a drifting phase term.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PatternError;
use crate::rng::PatternRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Clifford,
    DeJong,
    Fujii,
}

impl Family {
    pub fn as_str(&self) -> &'static str {
        match self {
            Family::Clifford => "clifford",
            Family::DeJong => "dejong",
            Family::Fujii => "fujii",
        }
    }
}

impl FromStr for Family {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "clifford" => Ok(Family::Clifford),
            "dejong" => Ok(Family::DeJong),
            "fujii" => Ok(Family::Fujii),
            _ => Err(PatternError::UnknownFamily(s.to_string())),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Previous point and phase of the running orbit.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimulationState {
    pub prev_x: f64,
    pub prev_y: f64,
    /// Phase accumulator, only advanced by the Fujii family
    pub t: f64,
    pub iterations_done: u64,
}

impl SimulationState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Coefficients for one pattern. The variant doubles as the family tag,
/// so stepping never re-dispatches on a name.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "family", rename_all = "lowercase")]
pub enum Coefficients {
    Clifford {
        a: [f64; 2],
        f: [f64; 2],
    },
    DeJong {
        f: [f64; 4],
    },
    Fujii {
        a: [f64; 6],
        f: [f64; 6],
        velocity: f64,
        p: i32,
        q: i32,
    },
}

fn signed(rng: &mut PatternRng, low: f64, high: f64) -> f64 {
    let magnitude = rng.uniform(low, high);
    if rng.chance() {
        -magnitude
    } else {
        magnitude
    }
}

impl Coefficients {
    /// Draw a fresh coefficient set. The order of draws is fixed so that a
    /// seed always yields the same set.
    pub fn generate(family: Family, rng: &mut PatternRng) -> Self {
        match family {
            Family::Clifford => {
                let mut a = [0.0; 2];
                let mut f = [0.0; 2];
                for i in 0..2 {
                    a[i] = signed(rng, 1.0, 3.0);
                    f[i] = signed(rng, 1.0, 3.0);
                }
                Coefficients::Clifford { a, f }
            }
            Family::DeJong => {
                let mut f = [0.0; 4];
                for value in f.iter_mut() {
                    *value = signed(rng, 1.0, 3.0);
                }
                Coefficients::DeJong { f }
            }
            Family::Fujii => {
                let mut a = [0.0; 6];
                let mut f = [0.0; 6];
                for i in 0..6 {
                    a[i] = signed(rng, 0.7, 1.2);
                    f[i] = signed(rng, 0.7, 1.2);
                }
                let velocity = rng.uniform(0.001, 0.5);
                let p = rng.uniform_int(1, 5) as i32;
                let q = rng.uniform_int(1, 5) as i32;
                Coefficients::Fujii {
                    a,
                    f,
                    velocity,
                    p,
                    q,
                }
            }
        }
    }

    pub fn family(&self) -> Family {
        match self {
            Coefficients::Clifford { .. } => Family::Clifford,
            Coefficients::DeJong { .. } => Family::DeJong,
            Coefficients::Fujii { .. } => Family::Fujii,
        }
    }

    /// Number of scalar coefficients: 2+2, 4, or 6+6+3.
    pub fn len(&self) -> usize {
        match self {
            Coefficients::Clifford { .. } => 4,
            Coefficients::DeJong { .. } => 4,
            Coefficients::Fujii { .. } => 15,
        }
    }

    /// Flattened as amplitudes, frequencies, then scalars.
    pub fn values(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.len());
        match self {
            Coefficients::Clifford { a, f } => {
                out.extend_from_slice(a);
                out.extend_from_slice(f);
            }
            Coefficients::DeJong { f } => out.extend_from_slice(f),
            Coefficients::Fujii {
                a,
                f,
                velocity,
                p,
                q,
            } => {
                out.extend_from_slice(a);
                out.extend_from_slice(f);
                out.push(*velocity);
                out.push(*p as f64);
                out.push(*q as f64);
            }
        }
        out
    }

    /// Next point of the orbit from `state.prev_x/prev_y`.
    ///
    /// Only the phase `t` is written here; the caller owns the previous point.
    pub fn step(&self, state: &mut SimulationState) -> (f64, f64) {
        let (xp, yp) = (state.prev_x, state.prev_y);
        match self {
            Coefficients::Clifford { a, f } => {
                let x = (f[0] * yp).sin() + a[0] * (f[0] * xp).cos();
                let y = (f[1] * xp).sin() + a[1] * (f[1] * yp).cos();
                (x, y)
            }
            Coefficients::DeJong { f } => {
                let x = (f[0] * yp).sin() - (f[1] * xp).cos();
                let y = (f[2] * xp).sin() - (f[3] * yp).cos();
                (x, y)
            }
            Coefficients::Fujii {
                a,
                f,
                velocity,
                p,
                q,
            } => {
                let t = state.t;
                let x = a[0] * sin_pow(f[0] * xp, *p)
                    + a[1] * cos_pow(f[1] * yp, *q)
                    + a[2] * sin_pow(f[2] * t, *p);
                let y = a[3] * cos_pow(f[3] * xp, *q)
                    + a[4] * sin_pow(f[4] * yp, *p)
                    + a[5] * sin_pow(f[5] * t, *q);
                state.t += velocity;
                (x, y)
            }
        }
    }
}

/// sin(v)^k, or the asin(sin(v)) sawtooth when k is 0.
pub fn sin_pow(v: f64, k: i32) -> f64 {
    if k == 0 {
        v.sin().asin()
    } else {
        v.sin().powi(k)
    }
}

/// cos(v)^k, or the acos(cos(v)) triangle wave when k is 0.
pub fn cos_pow(v: f64, k: i32) -> f64 {
    if k == 0 {
        v.cos().acos()
    } else {
        v.cos().powi(k)
    }
}

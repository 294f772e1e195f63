//! Coherent value noise and fractal Brownian motion.
//!
//! Every organic motion in the scene (flame depth, ember drift, constellation
//! jitter) samples these functions. They are pure: the same input always
//! yields the same output.

use crate::constants::{HASH_SCALE, HASH_X_WEIGHT, HASH_Y_WEIGHT};

/// Hash of an integer lattice point into `[0, 1)`.
#[inline]
pub fn hash(ix: f64, iy: f64) -> f64 {
    let n = (ix * HASH_X_WEIGHT + iy * HASH_Y_WEIGHT).sin() * HASH_SCALE;
    let f = n - n.floor();
    // tiny negative `n` can round up to exactly 1.0
    if f >= 1.0 {
        0.0
    } else {
        f
    }
}

#[inline]
fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Bilinear value noise with smoothstep easing; continuous, in `[0, 1)`.
pub fn value_noise(x: f64, y: f64) -> f64 {
    let ix = x.floor();
    let iy = y.floor();
    let sx = smoothstep(x - ix);
    let sy = smoothstep(y - iy);

    let c00 = hash(ix, iy);
    let c10 = hash(ix + 1.0, iy);
    let c01 = hash(ix, iy + 1.0);
    let c11 = hash(ix + 1.0, iy + 1.0);

    c00 * (1.0 - sx) * (1.0 - sy) + c10 * sx * (1.0 - sy) + c01 * (1.0 - sx) * sy + c11 * sx * sy
}

/// Fractal Brownian motion: `octaves` layers of [`value_noise`], starting at
/// amplitude 0.5 / frequency 1 and halving / doubling each octave.
///
/// The sum is not clamped. With the default schedule it stays below
/// `1 - 0.5^octaves`. At least one octave is required.
pub fn fbm(x: f64, y: f64, octaves: u32) -> f64 {
    debug_assert!(octaves > 0, "fbm needs at least one octave");
    let mut value = 0.0;
    let mut amplitude = 0.5;
    let mut frequency = 1.0;
    for _ in 0..octaves {
        value += amplitude * value_noise(x * frequency, y * frequency);
        amplitude *= 0.5;
        frequency *= 2.0;
    }
    value
}

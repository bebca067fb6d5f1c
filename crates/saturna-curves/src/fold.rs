//! Foldback curves.
//!
//! Instead of clamping, out-of-range signal is reflected back into `[-1, 1]`.
//! Large inputs cross zero many times, which is the point: the result is
//! rich in (aliasing) harmonics, as in synth wavefolders.

use libm::{fmodf, sinf};

/// Sine foldback: `sin(x)`.
///
/// Periodic with period `2π`, so any input lands in `[-1, 1]`.
#[inline]
pub fn sine_foldback(x: f32) -> f32 {
    sinf(x)
}

/// Triangle (linear) foldback.
///
/// Identity inside `[-1, 1]`. Beyond that, the signal is reflected off the
/// rails with period 4: `1.5 → 0.5`, `3.0 → -1.0`, `5.0 → 1.0`.
///
/// ```text
/// |x| > 1  →  ||fmod(x - 1, 4)| - 2| - 1
/// ```
#[inline]
pub fn linear_foldback(x: f32) -> f32 {
    if x > 1.0 || x < -1.0 {
        (fmodf(x - 1.0, 4.0).abs() - 2.0).abs() - 1.0
    } else {
        x
    }
}

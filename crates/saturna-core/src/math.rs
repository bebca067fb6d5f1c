//! Mathematical utility functions shared by the curve set.
//!
//! All functions are allocation-free and suitable for `no_std`.
//!
//! # Limiting
//!
//! | Function | Character | Use Case |
//! |----------|-----------|----------|
//! | [`hard_clip`] | Abrupt, flat tops | Final safety limit of every curve |
//! | [`soft_clip`] | Smooth, asymptotic | Base saturation law |
//! | [`soft_knee`] | Linear below knee, tanh above | Flavor-curve compression |
//!
//! # Utilities
//!
//! - [`lerp`] - Linear interpolation
//! - [`limit_input`] - Bound an input so drive gains cannot overflow
//! - [`wrap_phase`] - Wrap an angle into `[0, 2π)`
//! - [`flush_denormal`] - Keep feedback registers out of the subnormal range

use core::f32::consts::TAU;
use libm::{copysignf, fmodf, tanhf};

/// Soft clip using hyperbolic tangent.
///
/// Smooth saturation that approaches ±1 asymptotically.
///
/// # Returns
/// Soft-clipped output in range [-1, 1]
#[inline]
pub fn soft_clip(x: f32) -> f32 {
    tanhf(x)
}

/// Hard clip to ±threshold range.
///
/// # Arguments
/// * `x` - Input sample
/// * `threshold` - Clipping threshold
///
/// # Returns
/// Hard-clipped output in range [-threshold, threshold]
#[inline]
pub fn hard_clip(x: f32, threshold: f32) -> f32 {
    x.clamp(-threshold, threshold)
}

/// Soft-knee compression of the magnitude above `threshold`.
///
/// Below the knee the signal passes unchanged. Above it, the excess is
/// squashed through `tanh` so the magnitude approaches `threshold + range`:
///
/// ```text
/// |y| > t  →  sign(y) · (t + range · tanh((|y| - t) · steepness))
/// ```
///
/// The sign is applied to the whole compressed magnitude, so the curve is
/// odd-symmetric.
///
/// # Example
/// ```rust
/// use saturna_core::soft_knee;
///
/// assert_eq!(soft_knee(0.5, 0.7, 0.3, 3.0), 0.5);
/// assert!(soft_knee(5.0, 0.7, 0.3, 3.0) <= 1.0);
/// assert!(soft_knee(-5.0, 0.7, 0.3, 3.0) >= -1.0);
/// ```
#[inline]
pub fn soft_knee(y: f32, threshold: f32, range: f32, steepness: f32) -> f32 {
    let magnitude = y.abs();
    if magnitude > threshold {
        copysignf(threshold + range * tanhf((magnitude - threshold) * steepness), y)
    } else {
        y
    }
}

/// Linear interpolation between two values.
///
/// # Arguments
/// * `a` - Start value (at t=0)
/// * `b` - End value (at t=1)
/// * `t` - Interpolation factor (0.0 to 1.0)
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Largest input magnitude passed on to a curve's drive stage.
///
/// The steepest drive product in the curve set is under 10x, so anything
/// below `f32::MAX / 10` keeps every intermediate finite. Audio never gets
/// near this; it only matters for garbage or test input.
pub const INPUT_LIMIT: f32 = 1.0e30;

/// Clamp `x` to `±INPUT_LIMIT`. NaN passes through unchanged.
///
/// # Example
/// ```rust
/// use saturna_core::{INPUT_LIMIT, limit_input};
///
/// assert_eq!(limit_input(0.5), 0.5);
/// assert_eq!(limit_input(f32::MAX), INPUT_LIMIT);
/// assert_eq!(limit_input(f32::NEG_INFINITY), -INPUT_LIMIT);
/// ```
#[inline]
pub fn limit_input(x: f32) -> f32 {
    x.clamp(-INPUT_LIMIT, INPUT_LIMIT)
}

/// Wrap an angle in radians into `[0, 2π)`.
///
/// Angles already in range are returned as-is. Anything else is reduced
/// with `fmod`, and a tiny negative angle that rounds up to exactly `2π`
/// lands on 0.
#[inline]
pub fn wrap_phase(phase: f32) -> f32 {
    if (0.0..TAU).contains(&phase) {
        return phase;
    }
    let wrapped = fmodf(phase, TAU);
    let wrapped = if wrapped < 0.0 { wrapped + TAU } else { wrapped };
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Flush subnormal (denormalized) floats to zero.
///
/// Subnormal floats cause severe CPU slowdowns on most architectures.
/// Values below 1e-20 are replaced with zero, leaving margin before the
/// IEEE 754 subnormal range begins.
///
/// Used on feedback registers (hysteresis memory) that decay toward zero
/// indefinitely when the input goes silent.
#[allow(clippy::inline_always)]
#[inline(always)]
pub fn flush_denormal(x: f32) -> f32 {
    if x.abs() < 1e-20 { 0.0 } else { x }
}

//! Soft and hard clipping curves.
//!
//! Memoryless transfer functions that limit amplitude, either abruptly
//! (hard clip, limit clip) or smoothly (arctan, exponential, tanh, cubic,
//! logistic). All are total over finite `f32` and deterministic.
//!
//! | Function | Character | Output bound |
//! |----------|-----------|--------------|
//! | [`arctan_soft_clip`] | Gentle, never saturates | `±π/4` |
//! | [`exp_soft_clip`] | Exponential approach | `(-1, 1)` |
//! | [`tanh_soft_clip`] | Classic tube-like | `[-1, 1]` |
//! | [`cubic_soft_clip`] | Polynomial knee, flat beyond ±1 | `[-1, 1]` |
//! | [`hard_clip`] | Transistor fuzz | `[-1, 1]` |
//! | [`sausage_fattener`] | Linear with quadratic knee | `[-1, 1]` |
//! | [`limit_clip`] | Brick wall at ±0.1 | `[-0.1, 0.1]` |
//! | [`single_sine_clip`] | One sine period, silent outside | `[-1, 1]` |
//! | [`logistic_clip`] | Logistic sigmoid, tanh-equivalent | `[-1, 1]` |
//! | [`tan_clip`] | tanh with slight linear pull-back | `[-1, 1]` |

use core::f32::consts::PI;
use libm::{atanf, expf, sinf, tanhf};
use saturna_core::math;

/// Output bound of [`arctan_soft_clip`].
pub const ARCTAN_LIMIT: f32 = PI / 4.0;
/// Output bound of [`limit_clip`].
pub const LIMIT_CLIP_LIMIT: f32 = 0.1;

/// Scaled arctangent: `atan(x) / 2`.
#[inline]
pub fn arctan_soft_clip(x: f32) -> f32 {
    atanf(x) / 2.0
}

/// Exponential soft clip: `1 - e^{-x}` for positive input, mirrored below.
///
/// Approaches ±1 asymptotically and never reaches it for finite input
/// (in `f32` the result rounds to ±1 once `|x|` exceeds about 17).
#[inline]
pub fn exp_soft_clip(x: f32) -> f32 {
    if x > 0.0 {
        1.0 - expf(-x)
    } else {
        -1.0 + expf(x)
    }
}

/// Hyperbolic tangent soft clip.
#[inline]
pub fn tanh_soft_clip(x: f32) -> f32 {
    math::soft_clip(x)
}

/// Saturated value of the cubic `x - x³/3` at `|x| = 1`.
const CUBIC_KNEE: f32 = 2.0 / 3.0;
/// Gain that brings the cubic knee back up to unity.
const CUBIC_MAKEUP: f32 = 3.0 / 2.0;

/// Cubic soft clip.
///
/// `x - x³/3` inside `[-1, 1]`, held at `±2/3` outside, then scaled by
/// `3/2` so the curve meets ±1 exactly at the boundary with zero slope.
///
/// # Example
/// ```rust
/// use saturna_curves::cubic_soft_clip;
///
/// assert_eq!(cubic_soft_clip(2.0), 1.0);
/// assert_eq!(cubic_soft_clip(0.0), 0.0);
/// ```
#[inline]
pub fn cubic_soft_clip(x: f32) -> f32 {
    let shaped = if x > 1.0 {
        CUBIC_KNEE
    } else if x < -1.0 {
        -CUBIC_KNEE
    } else {
        x - x * x * x / 3.0
    };
    shaped * CUBIC_MAKEUP
}

/// Hard clip at ±1. Identity inside the range.
///
/// Idempotent: `hard_clip(hard_clip(x)) == hard_clip(x)`.
#[inline]
pub fn hard_clip(x: f32) -> f32 {
    math::hard_clip(x, 1.0)
}

/// Analog-style clip with a quadratic knee between 0.9 and 1.1.
///
/// After a fixed `1.1×` pre-gain the signal is linear up to 0.9, follows
/// `-2.5x² + 5.5x - 2.025` (value 0.9 and slope 1 at 0.9, value 1 and slope
/// 0 at 1.1), and is pinned to 1 beyond 1.1. Mirrored for negative input.
///
/// The knee polynomial rounds a few ulps past ±1 near its top, so the knee
/// branches are clamped.
#[inline]
pub fn sausage_fattener(x: f32) -> f32 {
    let x = x * 1.1;
    if x >= 1.1 {
        1.0
    } else if x <= -1.1 {
        -1.0
    } else if x > 0.9 {
        math::hard_clip(-2.5 * x * x + 5.5 * x - 2.025, 1.0)
    } else if x < -0.9 {
        math::hard_clip(2.5 * x * x + 5.5 * x + 2.025, 1.0)
    } else {
        x
    }
}

/// Brick-wall clip at ±0.1.
#[inline]
pub fn limit_clip(x: f32) -> f32 {
    math::hard_clip(x, LIMIT_CLIP_LIMIT)
}

/// One period of sine inside `(-π, π)`, zero outside.
#[inline]
pub fn single_sine_clip(x: f32) -> f32 {
    if x.abs() < PI { sinf(x) } else { 0.0 }
}

/// Logistic clip: `2 / (1 + e^{-2x}) - 1`.
///
/// Mathematically equal to `tanh(x)`. For very negative input `e^{-2x}`
/// overflows to infinity and the result settles at exactly -1.
#[inline]
pub fn logistic_clip(x: f32) -> f32 {
    2.0 / (1.0 + expf(-2.0 * x)) - 1.0
}

/// Linear pull-back applied after the tanh in [`tan_clip`].
const TAN_CLIP_SLOPE: f32 = 0.02;

/// `tanh(x) - 0.02x`, clamped to ±1.
///
/// The linear term makes very large inputs fold slightly back from the
/// rails before the final clamp.
#[inline]
pub fn tan_clip(x: f32) -> f32 {
    math::hard_clip(tanhf(x) - TAN_CLIP_SLOPE * x, 1.0)
}

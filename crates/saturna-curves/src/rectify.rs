//! Rectification post-stage.
//!
//! Rescales the negative half-wave while leaving the positive half alone,
//! introducing asymmetry (and even harmonics) after any curve.
//!
//! | `rectification` | Negative half | Effect |
//! |-----------------|---------------|--------|
//! | 0.0 | `× 1` | Bypass |
//! | 0.5 | `× 0` | Half-wave rectifier |
//! | 1.0 | `× -1` | Full-wave rectifier |

/// Apply the rectification stage to one sample.
///
/// For `x < 0` the result is `x · (0.5 - rectification) · 2`; positive
/// samples pass unchanged. With `rectification ∈ [0, 1]` the magnitude never
/// grows, so any curve bound still holds afterwards. The amount is not
/// clamped here; the configuration layer validates it.
///
/// # Example
/// ```rust
/// use saturna_curves::rectify;
///
/// assert_eq!(rectify(0.5, 1.0), 0.5);
/// assert_eq!(rectify(-0.5, 0.5), 0.0);
/// assert_eq!(rectify(-0.5, 1.0), 0.5);
/// ```
#[inline]
pub fn rectify(x: f32, rectification: f32) -> f32 {
    if x < 0.0 {
        x * ((0.5 - rectification) * 2.0)
    } else {
        x
    }
}

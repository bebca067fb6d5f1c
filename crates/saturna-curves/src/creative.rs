//! Creative distortion curves.
//!
//! Bit-depth reduction, resonant harmonic stacks, level-dependent
//! cross-fading, wavefolding and pulse shaping. All stateless and clamped to
//! `[-1, 1]`.

use core::f32::consts::PI;
use libm::{roundf, sinf, tanhf};
use saturna_core::{hard_clip, lerp, limit_input};

/// Number of quantization steps per unit of amplitude in
/// [`quantization_distortion`].
pub const QUANTIZATION_LEVELS: f32 = 12.0;
/// Share of the quantized signal in the final blend (rest is unquantized).
pub const QUANTIZATION_MIX: f32 = 0.8;

/// Saturate, quantize to [`QUANTIZATION_LEVELS`] steps, then blend 80/20
/// quantized/unquantized.
///
/// # Example
/// ```rust
/// use saturna_curves::quantization_distortion;
///
/// let y = quantization_distortion(0.3);
/// assert!(y.abs() <= 1.0);
/// ```
#[inline]
pub fn quantization_distortion(x: f32) -> f32 {
    let x = limit_input(x);
    let saturation = tanhf(x * 1.2);
    let quantized = roundf(saturation * QUANTIZATION_LEVELS) / QUANTIZATION_LEVELS;
    let blended = QUANTIZATION_MIX * quantized + (1.0 - QUANTIZATION_MIX) * saturation;
    hard_clip(blended, 1.0)
}

/// tanh saturation with two fixed resonant sine peaks.
#[inline]
pub fn resonant_distortion(x: f32) -> f32 {
    let x = limit_input(x);
    let drive = x * 1.3;
    let saturation = tanhf(drive);
    let resonance1 = 0.3 * sinf(2.7 * drive) * tanhf(drive * 0.6);
    let resonance2 = 0.2 * sinf(4.2 * drive) * tanhf(drive * 0.4);
    hard_clip(saturation + resonance1 + resonance2, 1.0)
}

/// Level-dependent distortion.
///
/// Cross-fades from a gentle `tanh(0.8d)` law at low level to an aggressive
/// `sin(d) + 0.1 sin(3d)` law as the instantaneous magnitude rises. The blend
/// factor `1.5 |d|` is clamped to `[0, 1]`, so above `|d| = 2/3` only the
/// aggressive law remains.
#[inline]
pub fn dynamic_distortion(x: f32) -> f32 {
    let x = limit_input(x);
    let drive = x * 1.4;
    let gentle = tanhf(drive * 0.8);
    let aggressive = sinf(drive) + 0.1 * sinf(3.0 * drive);
    let blend = (drive.abs() * 1.5).clamp(0.0, 1.0);
    hard_clip(lerp(gentle, aggressive, blend), 1.0)
}

/// Asymmetric wavefolder: `sin(πd)` plus an offset second harmonic.
#[inline]
pub fn asymmetric_wavefolder(x: f32) -> f32 {
    let x = limit_input(x);
    let drive = x * 1.5;
    let folded = sinf(drive * PI);
    let asymmetry = 0.2 * sinf(2.0 * drive + 0.5);
    let harmonics = 0.15 * sinf(3.0 * drive) * (1.0 - drive.abs() * 0.3);
    hard_clip(folded + asymmetry + harmonics, 1.0)
}

/// Steep tanh pulse with softened edges and low harmonics.
#[inline]
pub fn pulse_distortion(x: f32) -> f32 {
    let x = limit_input(x);
    let drive = x * 1.2;
    let pulse = tanhf(drive * 5.0);
    let softened = pulse * (0.7 + 0.3 * tanhf(drive * 0.5));
    let harmonics = 0.1 * sinf(2.0 * drive) + 0.05 * sinf(3.0 * drive);
    hard_clip(softened + harmonics, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantization_mostly_stepped() {
        // Within one quantization step the 80% share is constant, so the
        // output slope is only the unquantized 20%
        let a = quantization_distortion(0.100);
        let b = quantization_distortion(0.101);
        let sat_slope = (tanhf(0.101 * 1.2) - tanhf(0.100 * 1.2)) * 0.2;
        assert!(((b - a) - sat_slope).abs() < 1e-5);
    }

    #[test]
    fn test_quantization_levels() {
        // Saturated input sits on the top level: 0.8·1 + 0.2·tanh(big) = 1
        assert!((quantization_distortion(100.0) - 1.0).abs() < 1e-6);
        assert_eq!(quantization_distortion(0.0), 0.0);
    }

    #[test]
    fn test_dynamic_low_level_is_gentle() {
        let x = 0.01;
        let drive = x * 1.4;
        let blend = drive * 1.5;
        let expected = tanhf(drive * 0.8) * (1.0 - blend)
            + (sinf(drive) + 0.1 * sinf(3.0 * drive)) * blend;
        assert!((dynamic_distortion(x) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_dynamic_high_level_is_aggressive() {
        let x = 1.0;
        let drive = 1.4;
        let expected = (sinf(drive) + 0.1 * sinf(3.0 * drive)).clamp(-1.0, 1.0);
        assert!((dynamic_distortion(x) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_creative_bounded() {
        for i in -1000..=1000 {
            let x = i as f32 * 0.01;
            for y in [
                quantization_distortion(x),
                resonant_distortion(x),
                dynamic_distortion(x),
                asymmetric_wavefolder(x),
                pulse_distortion(x),
            ] {
                assert!(y.abs() <= 1.0, "output {} out of range for input {}", y, x);
            }
        }
    }
}

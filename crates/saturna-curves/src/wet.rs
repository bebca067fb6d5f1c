//! "Wet" saturation flavors.
//!
//! Sine-based shapers with weighted harmonic terms and, for most flavors,
//! a soft knee before the final clamp. Each flavor is a fixed recipe: the
//! drive, harmonic weights and knee settings are part of the timbre and are
//! reproduced exactly.
//!
//! | Flavor | Character | Output bound |
//! |--------|-----------|--------------|
//! | [`water_saturation`] | Asymmetric sine with dispersion | `[-1, 1]` |
//! | [`brine_saturation`] | Aggressive sine stack, knee at 0.7 | `[-1, 1]` |
//! | [`mud_saturation`] | Thick low-mid tanh, knee at 0.8 | `[-1, 1]` |
//! | [`ice_saturation`] | Bright, ringing upper harmonics | `[-0.95, 0.95]` |
//! | [`acid_saturation`] | Corrosive resonant peaks, knee at 0.7 | `[-1, 1]` |
//! | [`steam_saturation`] | Airy, slowly moving, noisy (stateful) | `[-0.95, 0.95]` |

use libm::{expf, sinf, tanhf};
use saturna_core::{NoiseSource, ShaperState, hard_clip, limit_input, soft_knee};

/// Output bound of [`ice_saturation`].
pub const ICE_LIMIT: f32 = 0.95;
/// Output bound of [`steam_saturation`].
pub const STEAM_LIMIT: f32 = 0.95;

/// Phase increment of the steam movement oscillator, radians per call.
pub const STEAM_MOD_INCREMENT: f32 = 0.0007;
/// Noise amplitude of [`steam_saturation`], scaled by `|0.9x|`.
pub const STEAM_NOISE: f32 = 0.05;

/// Asymmetric sine with a frequency-dependent dispersion term.
#[inline]
pub fn water_saturation(x: f32) -> f32 {
    let x = limit_input(x);
    let phase = x * 0.8;
    let asym_sine = sinf(phase) + 0.2 * sinf(2.0 * phase + 0.3);
    let dispersion = 0.1 * sinf(3.0 * phase) * tanhf(x * 0.5);
    hard_clip(asym_sine + dispersion, 1.0)
}

/// Aggressive asymmetric sine stack with strong dispersion and a knee at 0.7.
#[inline]
pub fn brine_saturation(x: f32) -> f32 {
    let x = limit_input(x);
    let phase = x * 1.2;
    let asym_sine = sinf(phase)
        + 0.3 * sinf(2.0 * phase + 0.5)
        + 0.15 * sinf(3.0 * phase + 0.7);
    let dispersion = 0.2 * sinf(4.0 * phase) * tanhf(x * 0.7);
    hard_clip(soft_knee(asym_sine + dispersion, 0.7, 0.3, 3.0), 1.0)
}

/// Dense tanh saturation with low-mid resonance and a knee at 0.8.
#[inline]
pub fn mud_saturation(x: f32) -> f32 {
    let x = limit_input(x);
    let phase = x * 0.7;
    let base = tanhf(phase * 1.2);
    let low_mid = 0.25 * sinf(phase * 0.6) * tanhf(phase * 0.4);
    let harmonics = 0.15 * sinf(2.0 * phase) * (1.0 - phase.abs());
    hard_clip(soft_knee(base + low_mid + harmonics, 0.8, 0.2, 2.0), 1.0)
}

/// Crystalline saturation: reduced low end, shimmer and harmonic ringing.
#[inline]
pub fn ice_saturation(x: f32) -> f32 {
    let x = limit_input(x);
    let phase = x * 1.1;
    let base = tanhf(phase) - 0.1 * tanhf(phase * 0.5);
    let shimmer = 0.2 * sinf(3.0 * phase) * tanhf(phase * 1.5);
    let ring = 0.15 * sinf(4.0 * phase + 0.2) * (0.8 + 0.2 * sinf(8.0 * phase));
    hard_clip(base + shimmer + ring, ICE_LIMIT)
}

/// Corrosive distortion with resonant peaks, dissonance and bite.
#[inline]
pub fn acid_saturation(x: f32) -> f32 {
    let x = limit_input(x);
    let phase = x * 1.4;
    let base = tanhf(phase * 1.5);
    let resonance = 0.3 * sinf(2.5 * phase) * tanhf(phase * 0.8);
    let dissonance = 0.2 * sinf(3.7 * phase + 0.4) * sinf(1.5 * phase);
    let bite = 0.15 * sinf(5.0 * phase) * (1.0 - expf(-phase.abs()));
    hard_clip(
        soft_knee(base + resonance + dissonance + bite, 0.7, 0.3, 4.0),
        1.0,
    )
}

/// Airy, diffuse saturation with slow movement and input-scaled noise.
///
/// Stateful: advances the state's modulation phase by
/// [`STEAM_MOD_INCREMENT`] and draws one noise value per call.
#[inline]
pub fn steam_saturation<N: NoiseSource>(x: f32, state: &mut ShaperState<N>) -> f32 {
    let x = limit_input(x);
    let phase = x * 0.9;
    let base = tanhf(phase);
    let movement = 0.15 * state.advance_mod(STEAM_MOD_INCREMENT) * sinf(2.0 * phase);
    let diffusion = 0.2 * sinf(phase * 1.5 + 0.3) * (0.7 + 0.3 * sinf(3.0 * phase));
    let noise = STEAM_NOISE * state.next_noise() * phase.abs();
    hard_clip(base + movement + diffusion + noise, STEAM_LIMIT)
}

//! Tape emulation curves.
//!
//! Four static tape grades (cold, clean, warm, hot) are plain transfer
//! functions. The machine-flavored grades (cassette, vintage, lo-fi, studio)
//! add transport artifacts and therefore take a [`ShaperState`]:
//!
//! - **Wow/flutter**: a phase accumulator advanced by a fixed angular
//!   increment every call; `sin(phase)` scales the saturated signal by a few
//!   percent.
//! - **Noise**: one uniform value per call from the state's injected
//!   [`NoiseSource`], scaled to a small fixed amplitude.
//! - **Dropouts** (lo-fi only): a slow accumulator modulates the overall
//!   level by `0.95 ± 0.05`.
//!
//! [`magnetic_saturation`] models remanence instead: it keeps a decayed copy
//! of its previous output and blends it into the next sample.
//!
//! ## Machine constants
//!
//! | Grade | Drive | Increment (rad/call) | Wow depth | Noise | Bound |
//! |-------|-------|----------------------|-----------|-------|-------|
//! | Cassette | 1.5 | 0.001 | 0.04 | 0.03 | ±0.95 |
//! | Vintage | 1.3 | 0.0005 | 0.02 | 0.01 | ±0.98 |
//! | Lo-fi | 1.6 | 0.002 / 0.0013 | 0.1 / 0.05 | 0.08 | ±0.9 |
//! | Studio | 1.1 | 0.0002 | 0.01 | 0.005 | ±0.99 |

use libm::{sinf, tanhf};
use saturna_core::{NoiseSource, ShaperState, hard_clip, limit_input, soft_knee};

/// Transport constants for one machine grade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapeMachine {
    /// Input gain ahead of the saturation law.
    pub drive: f32,
    /// Wow/flutter phase increment in radians per call.
    pub increment: f32,
    /// Fraction of the saturated signal modulated by `sin(phase)`.
    pub wow_depth: f32,
    /// Peak amplitude of the uniform noise term.
    pub noise: f32,
    /// Final output clamp.
    pub limit: f32,
}

/// Cassette deck: audible flutter and hiss.
pub const CASSETTE: TapeMachine = TapeMachine {
    drive: 1.5,
    increment: 0.001,
    wow_depth: 0.04,
    noise: 0.03,
    limit: 0.95,
};

/// Vintage reel-to-reel: gentle wow, rich harmonics.
pub const VINTAGE: TapeMachine = TapeMachine {
    drive: 1.3,
    increment: 0.0005,
    wow_depth: 0.02,
    noise: 0.01,
    limit: 0.98,
};

/// Worn lo-fi tape. A second flutter oscillator and the dropout envelope
/// use [`LOFI_FLUTTER`] and [`LOFI_DROPOUT_INCREMENT`].
pub const LOFI: TapeMachine = TapeMachine {
    drive: 1.6,
    increment: 0.002,
    wow_depth: 0.1,
    noise: 0.08,
    limit: 0.9,
};

/// Well-maintained studio machine.
pub const STUDIO: TapeMachine = TapeMachine {
    drive: 1.1,
    increment: 0.0002,
    wow_depth: 0.01,
    noise: 0.005,
    limit: 0.99,
};

/// Secondary lo-fi flutter: `(increment, depth)`.
pub const LOFI_FLUTTER: (f32, f32) = (0.0013, 0.05);
/// Lo-fi dropout accumulator increment, radians per call.
pub const LOFI_DROPOUT_INCREMENT: f32 = 0.0003;

/// Output bound of [`cold_tape`].
pub const COLD_LIMIT: f32 = 0.95;
/// Output bound of [`clean_tape`].
pub const CLEAN_LIMIT: f32 = 0.98;
/// Output bound of [`magnetic_saturation`].
pub const MAGNETIC_LIMIT: f32 = 0.97;

/// Weight of the current saturation in [`magnetic_saturation`].
pub const MAGNETIC_BLEND: f32 = 0.8;
/// Weight of the hysteresis memory in [`magnetic_saturation`].
pub const MAGNETIC_MEMORY_WEIGHT: f32 = 0.2;
/// Per-call decay applied when the output is written back to memory.
pub const MAGNETIC_DECAY: f32 = 0.7;

/// Subtle tape saturation with a slight high-end roll-off.
#[inline]
pub fn cold_tape(x: f32) -> f32 {
    let x = limit_input(x);
    let drive = 0.6 * x;
    let rolloff = 0.05 * sinf(drive * 3.0);
    hard_clip(tanhf(drive) - rolloff, COLD_LIMIT)
}

/// Clean tape: soft-knee compression above 0.7, then a light tanh.
#[inline]
pub fn clean_tape(x: f32) -> f32 {
    let x = limit_input(x);
    let compressed = soft_knee(0.8 * x, 0.7, 0.3, 2.0);
    hard_clip(tanhf(compressed * 1.1), CLEAN_LIMIT)
}

/// Warm tape: asymmetric low-mid warmth with a touch of second harmonic.
#[inline]
pub fn warm_tape(x: f32) -> f32 {
    let x = limit_input(x);
    let drive = 1.2 * x;
    let warmth = 0.1 * sinf(drive * 2.0 + 0.3);
    let saturation = tanhf(drive + warmth);
    let harmonics = 0.08 * sinf(2.0 * drive) * tanhf(drive * 0.5);
    hard_clip(saturation + harmonics, 1.0)
}

/// Hot tape: driven hard into stacked tanh, knee at 0.6.
#[inline]
pub fn hot_tape(x: f32) -> f32 {
    let x = limit_input(x);
    let drive = 1.8 * x;
    let asym = tanhf(drive) + 0.2 * tanhf(2.0 * drive);
    let harmonics = 0.15 * sinf(3.0 * drive) * tanhf(drive * 0.7);
    hard_clip(soft_knee(asym + harmonics, 0.6, 0.4, 2.5), 1.0)
}

/// Cassette tape with hiss, flutter and band limiting.
#[inline]
pub fn cassette_tape<N: NoiseSource>(x: f32, state: &mut ShaperState<N>) -> f32 {
    let x = limit_input(x);
    let m = CASSETTE;
    let drive = m.drive * x;
    let saturation = tanhf(drive);
    let noise = m.noise * state.next_noise();
    let wow = m.wow_depth * state.advance_mod(m.increment) * saturation;
    let band_limited = saturation - 0.1 * sinf(drive * 4.0) - 0.05 * sinf(drive * 0.5);
    hard_clip(band_limited + wow + noise, m.limit)
}

/// Vintage tape with harmonic richness, warmth and soft compression.
#[inline]
pub fn vintage_tape<N: NoiseSource>(x: f32, state: &mut ShaperState<N>) -> f32 {
    let x = limit_input(x);
    let m = VINTAGE;
    let drive = m.drive * x;
    let saturation = tanhf(drive) + 0.1 * tanhf(2.0 * drive) * (1.0 - drive.abs() * 0.3);
    let warmth = 0.15 * sinf(drive * 0.7) * tanhf(drive * 0.4);
    let wow = m.wow_depth * state.advance_mod(m.increment) * saturation;
    let noise = m.noise * state.next_noise();
    let rolloff = saturation - 0.07 * sinf(drive * 3.0);
    hard_clip(
        soft_knee(rolloff + warmth + wow + noise, 0.8, 0.2, 2.0),
        m.limit,
    )
}

/// Lo-fi tape: heavy flutter, hiss, artifacts and slow dropouts.
#[inline]
pub fn lofi_tape<N: NoiseSource>(x: f32, state: &mut ShaperState<N>) -> f32 {
    let x = limit_input(x);
    let m = LOFI;
    let (flutter_increment, flutter_depth) = LOFI_FLUTTER;
    let drive = m.drive * x;
    let saturation = tanhf(drive);
    let noise = m.noise * state.next_noise();

    let wow = m.wow_depth * state.advance_mod(m.increment) * saturation
        + flutter_depth * state.advance_flutter(flutter_increment) * saturation;

    let band_limited = saturation - 0.2 * sinf(drive * 4.0) - 0.15 * sinf(drive * 0.4);
    let artifacts = 0.1 * sinf(5.0 * drive) * (1.0 - drive.abs() * 0.5);

    let dropout_phase = state.advance_dropout(LOFI_DROPOUT_INCREMENT);
    let dropout = 0.95 + 0.05 * sinf(dropout_phase * 5.0);

    hard_clip((band_limited + wow + noise + artifacts) * dropout, m.limit)
}

/// Studio tape: transparent saturation, minimal wow and hiss.
#[inline]
pub fn studio_tape<N: NoiseSource>(x: f32, state: &mut ShaperState<N>) -> f32 {
    let x = limit_input(x);
    let m = STUDIO;
    let drive = m.drive * x;
    let saturation = tanhf(drive * 0.9);
    let harmonics = 0.05 * sinf(2.0 * drive) * (1.0 - drive.abs() * 0.5);
    let wow = m.wow_depth * state.advance_mod(m.increment) * saturation;
    let noise = m.noise * state.next_noise();
    let rolloff = saturation - 0.03 * sinf(drive * 3.5);
    hard_clip(
        soft_knee(rolloff + harmonics + wow + noise, 0.75, 0.25, 1.5),
        m.limit,
    )
}

/// Magnetic saturation with one-sample hysteresis.
///
/// ```text
/// result = 0.8 · tanh(1.4x) + 0.2 · memory + harmonics
/// memory ← 0.7 · result
/// ```
///
/// The memory stores the unclamped result; only the returned sample is
/// clamped to ±0.97. After an impulse followed by silence, the memory decays
/// by [`MAGNETIC_DECAY`] per call and each output is
/// [`MAGNETIC_MEMORY_WEIGHT`] times the memory it read.
#[inline]
pub fn magnetic_saturation<N: NoiseSource>(x: f32, state: &mut ShaperState<N>) -> f32 {
    let x = limit_input(x);
    let drive = 1.4 * x;
    let saturation = tanhf(drive);
    let combined = MAGNETIC_BLEND * saturation + MAGNETIC_MEMORY_WEIGHT * state.hysteresis();
    let harmonics = 0.1 * sinf(2.0 * drive) * (1.0 - drive.abs() * 0.4);
    let result = combined + harmonics;
    state.set_hysteresis(result * MAGNETIC_DECAY);
    hard_clip(result, MAGNETIC_LIMIT)
}

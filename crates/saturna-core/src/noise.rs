//! Injected pseudo-random sources for noise-bearing curves.
//!
//! Tape and steam curves mix a small amount of uniform noise into their
//! output. The generator is an explicit dependency held by each
//! [`ShaperState`](crate::ShaperState) rather than a process-wide `rand()`,
//! so every signal path owns its own sequence and tests can swap in a
//! deterministic source.
//!
//! - [`Pcg32`] - default generator, PCG-XSH-RR, 64-bit state
//! - [`SilentNoise`] - always 0.0 (noise terms vanish)
//! - [`ConstantNoise`] - a fixed value, for exact-value tests

/// Source of uniformly distributed bipolar noise.
///
/// Implementations must be allocation-free and O(1) per call.
pub trait NoiseSource {
    /// Next noise value in `[-1.0, 1.0]`.
    fn next_bipolar(&mut self) -> f32;

    /// Return to the initial sequence position.
    ///
    /// After a reset the generator must replay the same sequence it produced
    /// after construction.
    fn reset(&mut self);
}

/// PCG32 pseudo-random number generator.
///
/// # Properties
///
/// - 64-bit state, 32-bit output, period 2^64
/// - Deterministic: same seed produces same sequence
/// - `Copy`, no heap, safe for the audio thread
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pcg32 {
    state: u64,
    seed: u64,
}

impl Pcg32 {
    /// Default seed used by [`Pcg32::default`].
    pub const DEFAULT_SEED: u64 = 0x1234_5678;

    const INCREMENT: u64 = 1_442_695_040_888_963_407;
    const MULTIPLIER: u64 = 6_364_136_223_846_793_005;
    const SEED_OFFSET: u64 = 0x2C92_77B5_27D4_EB2D;

    /// Create a new generator with the given seed.
    ///
    /// Follows the reference PCG seeding: one step from zero, add the seed,
    /// one more step. Seeds that differ only in low bits diverge from the
    /// first output.
    pub const fn new(seed: u64) -> Self {
        let state = Self::INCREMENT.wrapping_add(seed.wrapping_add(Self::SEED_OFFSET));
        let state = state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        Self { state, seed }
    }

    /// Seed this generator was constructed with.
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate the next random u32.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let old_state = self.state;
        self.state = old_state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);

        let xor_shifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;
        xor_shifted.rotate_right(rot)
    }
}

impl Default for Pcg32 {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

impl NoiseSource for Pcg32 {
    #[inline]
    fn next_bipolar(&mut self) -> f32 {
        // High 24 bits map exactly onto the f32 mantissa
        let normalized = (self.next_u32() >> 8) as f32 / 16_777_215.0;
        normalized * 2.0 - 1.0
    }

    fn reset(&mut self) {
        *self = Self::new(self.seed);
    }
}

/// Noise source that always returns 0.0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SilentNoise;

impl NoiseSource for SilentNoise {
    #[inline]
    fn next_bipolar(&mut self) -> f32 {
        0.0
    }

    fn reset(&mut self) {}
}

/// Noise source that always returns the same value (clamped to `[-1, 1]`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantNoise(f32);

impl ConstantNoise {
    /// Create a constant source. The value is clamped to `[-1, 1]`.
    pub fn new(value: f32) -> Self {
        Self(value.clamp(-1.0, 1.0))
    }

    /// The value returned on every call.
    pub fn value(&self) -> f32 {
        self.0
    }
}

impl NoiseSource for ConstantNoise {
    #[inline]
    fn next_bipolar(&mut self) -> f32 {
        self.0
    }

    fn reset(&mut self) {}
}

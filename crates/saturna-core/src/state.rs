//! Per-signal-path state for stateful curves.
//!
//! A [`ShaperState`] is the memory a stateful curve carries from one sample
//! to the next: modulation phases, the hysteresis register, and a noise
//! generator. Each instance belongs to exactly one signal path. Curves take
//! it by `&mut`, so two paths can only share state if the caller explicitly
//! hands the same instance to both, which the borrow checker forbids across
//! concurrent use.
//!
//! ## Lifecycle
//!
//! - **Create** with [`ShaperState::new`] (zeroed, default generator) or
//!   [`ShaperState::with_noise`] (zeroed, injected generator).
//! - **Reset** with [`ShaperState::reset`] on transport stop or sample-rate
//!   change: phases and memory return to zero, the generator rewinds.
//! - **Drop** together with the owning signal path.

use crate::math::flush_denormal;
use crate::noise::{NoiseSource, Pcg32};
use crate::phase::PhaseAccumulator;

/// Mutable state consumed by one stateful curve on one signal path.
///
/// # Example
///
/// ```rust
/// use saturna_core::{ShaperState, SilentNoise};
///
/// let mut state = ShaperState::with_noise(SilentNoise);
/// let wobble = state.advance_mod(0.001);
/// assert!(wobble > 0.0);
///
/// state.reset();
/// assert_eq!(state.mod_phase(), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct ShaperState<N = Pcg32> {
    /// Primary wow/flutter accumulator.
    mod_phase: PhaseAccumulator,
    /// Secondary flutter accumulator (lo-fi tape only).
    flutter_phase: PhaseAccumulator,
    /// Slow dropout envelope accumulator (lo-fi tape only).
    dropout_phase: PhaseAccumulator,
    /// Decayed copy of the previous output (magnetic saturation).
    hysteresis: f32,
    noise: N,
}

impl<N: NoiseSource + Default> Default for ShaperState<N> {
    fn default() -> Self {
        Self::with_noise(N::default())
    }
}

impl ShaperState<Pcg32> {
    /// Create a zeroed state with the default generator.
    pub fn new() -> Self {
        Self::with_noise(Pcg32::default())
    }

    /// Create a zeroed state whose generator starts from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_noise(Pcg32::new(seed))
    }
}

impl<N: NoiseSource> ShaperState<N> {
    /// Create a zeroed state around an injected noise source.
    pub fn with_noise(noise: N) -> Self {
        Self {
            mod_phase: PhaseAccumulator::new(),
            flutter_phase: PhaseAccumulator::new(),
            dropout_phase: PhaseAccumulator::new(),
            hysteresis: 0.0,
            noise,
        }
    }

    /// Return to the freshly created state.
    pub fn reset(&mut self) {
        self.mod_phase.reset();
        self.flutter_phase.reset();
        self.dropout_phase.reset();
        self.hysteresis = 0.0;
        self.noise.reset();

        #[cfg(feature = "tracing")]
        tracing::trace!("shaper_state: reset");
    }

    /// Advance the wow/flutter phase by `increment` radians and return
    /// `sin` of the new phase.
    #[inline]
    pub fn advance_mod(&mut self, increment: f32) -> f32 {
        self.mod_phase.advance_sin(increment)
    }

    /// Advance the secondary flutter phase and return `sin` of the new phase.
    #[inline]
    pub fn advance_flutter(&mut self, increment: f32) -> f32 {
        self.flutter_phase.advance_sin(increment)
    }

    /// Advance the dropout phase and return the new phase in radians.
    #[inline]
    pub fn advance_dropout(&mut self, increment: f32) -> f32 {
        self.dropout_phase.advance(increment)
    }

    /// Draw the next noise value in `[-1, 1]`.
    #[inline]
    pub fn next_noise(&mut self) -> f32 {
        self.noise.next_bipolar()
    }

    /// Current hysteresis memory.
    #[inline]
    pub fn hysteresis(&self) -> f32 {
        self.hysteresis
    }

    /// Overwrite the hysteresis memory.
    ///
    /// Subnormal values are flushed to zero, and so are NaN and infinity, so
    /// one bad sample cannot stick in the register.
    #[inline]
    pub fn set_hysteresis(&mut self, value: f32) {
        self.hysteresis = if value.is_finite() {
            flush_denormal(value)
        } else {
            0.0
        };
    }

    /// Current wow/flutter phase in radians.
    pub fn mod_phase(&self) -> f32 {
        self.mod_phase.phase()
    }

    /// Current secondary flutter phase in radians.
    pub fn flutter_phase(&self) -> f32 {
        self.flutter_phase.phase()
    }

    /// Current dropout phase in radians.
    pub fn dropout_phase(&self) -> f32 {
        self.dropout_phase.phase()
    }

    /// Shared access to the noise generator.
    pub fn noise(&self) -> &N {
        &self.noise
    }
}

//! Angular phase accumulator for wow/flutter and dropout modulation.
//!
//! Unlike the normalized `[0, 1)` phase of a rate-based LFO, tape
//! modulation in this crate is defined as a fixed angular increment per
//! call, independent of sample rate. The accumulator therefore stores
//! radians directly and wraps at `2π`.

use crate::math::wrap_phase;
use libm::sinf;

/// Phase accumulator in radians, always within `[0, 2π)`.
///
/// # Example
///
/// ```rust
/// use saturna_core::PhaseAccumulator;
///
/// let mut phase = PhaseAccumulator::new();
/// let angle = phase.advance(0.001);
/// assert!((angle - 0.001).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PhaseAccumulator {
    phase: f32,
}

impl PhaseAccumulator {
    /// Create a new accumulator at phase zero.
    pub const fn new() -> Self {
        Self { phase: 0.0 }
    }

    /// Advance by `increment` radians, wrap into `[0, 2π)`, and return the
    /// new phase.
    #[inline]
    pub fn advance(&mut self, increment: f32) -> f32 {
        self.phase = wrap_phase(self.phase + increment);
        self.phase
    }

    /// Advance by `increment` and return `sin` of the new phase.
    #[inline]
    pub fn advance_sin(&mut self, increment: f32) -> f32 {
        sinf(self.advance(increment))
    }

    /// Current phase in radians.
    #[inline]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Set the phase (wrapped into `[0, 2π)`).
    pub fn set_phase(&mut self, phase: f32) {
        self.phase = wrap_phase(phase);
    }

    /// Reset phase to 0.
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}

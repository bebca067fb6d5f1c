//! Per-path state storage for every stateful curve.

use crate::CurveId;
use saturna_core::{NoiseSource, Pcg32, ShaperState};

/// Spreads slot seeds across the generator's state space.
const SLOT_SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// One [`ShaperState`] per stateful curve, for exactly one signal path.
///
/// Switching curves never touches another curve's slot, so a path can flip
/// between cassette and magnetic saturation and resume each where it left
/// off. A stereo chain holds two banks.
///
/// # Example
///
/// ```rust
/// use saturna_registry::{CurveId, StateBank, shape};
///
/// let mut bank = StateBank::new(7);
/// if let Some(state) = bank.get_mut(CurveId::MagneticSaturation) {
///     shape(CurveId::MagneticSaturation, 0.8, state);
/// }
/// assert!(bank.get(CurveId::MagneticSaturation).unwrap().hysteresis() > 0.0);
/// assert!(bank.get(CurveId::HardClip).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct StateBank<N = Pcg32> {
    slots: [ShaperState<N>; CurveId::STATEFUL_COUNT],
}

impl StateBank<Pcg32> {
    /// Create a zeroed bank whose slot generators derive from `seed`.
    ///
    /// Each slot gets a distinct seed, so two stateful curves on the same
    /// path never replay the same noise.
    pub fn new(seed: u64) -> Self {
        Self::with_noise(|slot| Pcg32::new(slot_seed(seed, slot)))
    }
}

impl<N: NoiseSource> StateBank<N> {
    /// Create a zeroed bank, building each slot's generator with `factory`.
    ///
    /// `factory` receives the slot index in `0..CurveId::STATEFUL_COUNT`.
    pub fn with_noise(mut factory: impl FnMut(usize) -> N) -> Self {
        Self {
            slots: core::array::from_fn(|slot| ShaperState::with_noise(factory(slot))),
        }
    }

    /// State for `id`, or `None` if the curve is stateless.
    pub fn get(&self, id: CurveId) -> Option<&ShaperState<N>> {
        id.state_slot().map(|slot| &self.slots[slot])
    }

    /// Mutable state for `id`, or `None` if the curve is stateless.
    pub fn get_mut(&mut self, id: CurveId) -> Option<&mut ShaperState<N>> {
        id.state_slot().map(|slot| &mut self.slots[slot])
    }

    /// State in a raw slot.
    #[inline]
    pub(crate) fn slot_mut(&mut self, slot: usize) -> &mut ShaperState<N> {
        &mut self.slots[slot]
    }

    /// Reset every slot.
    pub fn reset(&mut self) {
        for state in &mut self.slots {
            state.reset();
        }
    }

    /// Reset only the slot belonging to `id`. No-op for stateless curves.
    pub fn reset_curve(&mut self, id: CurveId) {
        if let Some(state) = self.get_mut(id) {
            state.reset();
        }
    }
}

/// Seed for one slot of a bank seeded with `seed`.
#[inline]
const fn slot_seed(seed: u64, slot: usize) -> u64 {
    seed ^ (slot as u64 + 1).wrapping_mul(SLOT_SEED_STRIDE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use saturna_core::ConstantNoise;

    #[test]
    fn test_slot_seeds_distinct() {
        let bank = StateBank::new(42);
        for a in 0..CurveId::STATEFUL_COUNT {
            for b in (a + 1)..CurveId::STATEFUL_COUNT {
                assert_ne!(bank.slots[a].noise().seed(), bank.slots[b].noise().seed());
            }
        }
    }

    #[test]
    fn test_stateless_has_no_slot() {
        let mut bank = StateBank::new(0);
        for id in CurveId::ALL {
            assert_eq!(bank.get(id).is_some(), id.is_stateful());
            assert_eq!(bank.get_mut(id).is_some(), id.is_stateful());
        }
    }

    #[test]
    fn test_reset_curve_only_touches_its_slot() {
        let mut bank = StateBank::with_noise(|_| ConstantNoise::new(0.0));
        for id in [CurveId::CassetteTape, CurveId::LofiTape] {
            if let Some(state) = bank.get_mut(id) {
                state.advance_mod(0.5);
            }
        }
        bank.reset_curve(CurveId::CassetteTape);
        assert_eq!(bank.get(CurveId::CassetteTape).unwrap().mod_phase(), 0.0);
        assert_eq!(bank.get(CurveId::LofiTape).unwrap().mod_phase(), 0.5);

        bank.reset_curve(CurveId::HardClip);
        assert_eq!(bank.get(CurveId::LofiTape).unwrap().mod_phase(), 0.5);

        bank.reset();
        assert_eq!(bank.get(CurveId::LofiTape).unwrap().mod_phase(), 0.0);
    }

    #[test]
    fn test_factory_receives_slot_index() {
        let bank = StateBank::with_noise(|slot| ConstantNoise::new(slot as f32 * 0.1));
        let lofi = CurveId::LofiTape.state_slot().unwrap();
        let state = bank.get(CurveId::LofiTape).unwrap();
        assert!((state.noise().value() - lofi as f32 * 0.1).abs() < 1e-7);
    }
}

//! One signal path: selected curve, its state bank, and rectification.

use crate::CurveId;
use crate::bank::StateBank;
use crate::dispatch::{ShapeFn, shape_fn};
use saturna_core::{NoiseSource, Pcg32, Processor, ShaperState};
use saturna_curves::rectify;

/// A complete waveshaper for one signal path.
///
/// Holds the selected [`CurveId`] with its cached table entry, a
/// [`StateBank`] for every stateful curve, and the rectification amount
/// applied after the curve. `process` is one indexed call plus the
/// rectification branch.
///
/// Changing the curve does not reset any state: each stateful curve resumes
/// from its own slot.
///
/// # Example
///
/// ```rust
/// use saturna_core::Processor;
/// use saturna_registry::{CurveId, Shaper};
///
/// let mut left = Shaper::new(CurveId::CassetteTape, 1);
/// let mut right = Shaper::new(CurveId::CassetteTape, 2);
/// left.set_rectification(0.5);
///
/// let mut buffer = [0.2, -0.4, 0.9, -1.3];
/// left.process_block_inplace(&mut buffer);
/// assert!(buffer.iter().all(|&s| s >= -0.95 && s <= 0.95));
/// let _ = right.process(0.5);
/// ```
#[derive(Debug, Clone)]
pub struct Shaper<N = Pcg32> {
    curve: CurveId,
    shape: ShapeFn<N>,
    // Stateless curves ignore the state they are handed, so any slot works
    slot: usize,
    bank: StateBank<N>,
    rectification: f32,
}

impl Shaper<Pcg32> {
    /// Create a shaper running `curve`, with noise generators derived from
    /// `seed`.
    pub fn new(curve: CurveId, seed: u64) -> Self {
        Self::from_bank(curve, StateBank::new(seed))
    }
}

impl<N: NoiseSource> Shaper<N> {
    /// Create a shaper whose per-curve noise generators come from `factory`.
    pub fn with_noise(curve: CurveId, factory: impl FnMut(usize) -> N) -> Self {
        Self::from_bank(curve, StateBank::with_noise(factory))
    }

    fn from_bank(curve: CurveId, bank: StateBank<N>) -> Self {
        Self {
            curve,
            shape: shape_fn::<N>(curve),
            slot: curve.state_slot().unwrap_or(0),
            bank,
            rectification: 0.0,
        }
    }

    /// Currently selected curve.
    pub fn curve(&self) -> CurveId {
        self.curve
    }

    /// Select a new curve. No state is reset.
    pub fn set_curve(&mut self, curve: CurveId) {
        if curve == self.curve {
            return;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(from = self.curve.id(), to = curve.id(), "shaper: curve changed");

        self.curve = curve;
        self.shape = shape_fn::<N>(curve);
        self.slot = curve.state_slot().unwrap_or(0);
    }

    /// Rectification amount applied after the curve.
    pub fn rectification(&self) -> f32 {
        self.rectification
    }

    /// Set the rectification amount, clamped to `[0, 1]`.
    ///
    /// 0 bypasses, 0.5 silences the negative half-wave, 1 folds it up.
    pub fn set_rectification(&mut self, amount: f32) {
        self.rectification = amount.clamp(0.0, 1.0);
    }

    /// State held for `id` on this path, or `None` if `id` is stateless.
    pub fn state(&self, id: CurveId) -> Option<&ShaperState<N>> {
        self.bank.get(id)
    }

    /// The full state bank.
    pub fn bank(&self) -> &StateBank<N> {
        &self.bank
    }

    /// Reset only the state belonging to `id`.
    pub fn reset_curve(&mut self, id: CurveId) {
        self.bank.reset_curve(id);

        #[cfg(feature = "tracing")]
        tracing::debug!(curve = id.id(), "shaper: curve state reset");
    }
}

impl<N: NoiseSource> Processor for Shaper<N> {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        let shaped = (self.shape)(input, self.bank.slot_mut(self.slot));
        rectify(shaped, self.rectification)
    }

    fn reset(&mut self) {
        self.bank.reset();

        #[cfg(feature = "tracing")]
        tracing::debug!(curve = self.curve.id(), "shaper: all state reset");
    }
}

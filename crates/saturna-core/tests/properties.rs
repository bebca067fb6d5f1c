//! Property-based tests for saturna-core primitives.
//!
//! Tests phase wrapping, knee boundedness, and noise range using proptest
//! for randomized input generation.

use core::f32::consts::TAU;
use proptest::prelude::*;
use saturna_core::{NoiseSource, Pcg32, PhaseAccumulator, ShaperState, soft_knee, wrap_phase};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Any increment up to 2π keeps the accumulator inside [0, 2π).
    #[test]
    fn phase_stays_wrapped(
        increment in 0.0f32..TAU,
        steps in 1usize..2000,
    ) {
        let mut phase = PhaseAccumulator::new();
        for _ in 0..steps {
            let p = phase.advance(increment);
            prop_assert!(
                (0.0..TAU).contains(&p),
                "phase {} escaped [0, 2π) with increment {}", p, increment
            );
        }
    }

    /// Wrapping never changes an angle already inside the range.
    #[test]
    fn wrap_phase_is_identity_in_range(phase in 0.0f32..TAU) {
        prop_assert_eq!(wrap_phase(phase), phase);
    }

    /// Any finite angle, however far out, wraps into [0, 2π).
    #[test]
    fn wrap_phase_lands_in_range(phase in -1.0e9f32..1.0e9f32) {
        let wrapped = wrap_phase(phase);
        prop_assert!((0.0..TAU).contains(&wrapped), "{} wrapped to {}", phase, wrapped);
    }

    /// The soft knee never exceeds threshold + range and preserves sign.
    #[test]
    fn soft_knee_bounded(
        x in -1.0e6f32..1.0e6f32,
        threshold in 0.1f32..0.9f32,
        range in 0.05f32..0.5f32,
        steepness in 0.5f32..5.0f32,
    ) {
        let y = soft_knee(x, threshold, range, steepness);
        let limit = threshold + range + 1e-6;
        prop_assert!(y.abs() <= limit, "knee({}) = {} exceeds {}", x, y, limit);
        prop_assert!(y * x >= 0.0, "knee flipped sign: {} -> {}", x, y);
    }

    /// Every seed produces values inside [-1, 1] and replays after reset.
    #[test]
    fn pcg_bounded_and_replayable(seed in any::<u64>()) {
        let mut rng = Pcg32::new(seed);
        let first: Vec<f32> = (0..64).map(|_| rng.next_bipolar()).collect();
        for &v in &first {
            prop_assert!((-1.0..=1.0).contains(&v));
        }
        rng.reset();
        let second: Vec<f32> = (0..64).map(|_| rng.next_bipolar()).collect();
        prop_assert_eq!(first, second);
    }

    /// Two states built from the same seed stay in lockstep.
    #[test]
    fn states_with_same_seed_match(seed in any::<u64>(), steps in 1usize..256) {
        let mut a = ShaperState::with_seed(seed);
        let mut b = ShaperState::with_seed(seed);
        for _ in 0..steps {
            prop_assert_eq!(a.advance_mod(0.001), b.advance_mod(0.001));
            prop_assert_eq!(a.next_noise(), b.next_noise());
        }
    }
}

//! Property-based tests for registry dispatch and per-path shapers.
//!
//! Drives every curve through `Shaper` and `shape` to check bounds, path
//! isolation and reset-replay at the dispatch level.

use proptest::prelude::*;
use saturna_registry::{CurveId, Processor, Shaper, ShaperState, StateBank, shape};

fn any_curve() -> impl Strategy<Value = CurveId> {
    (0..CurveId::COUNT).prop_map(|i| CurveId::ALL[i])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every curve stays within its bound through the full shaper, with
    /// rectification applied.
    #[test]
    fn shaper_output_bounded(
        curve in any_curve(),
        seed in any::<u64>(),
        rectification in 0.0f32..=1.0f32,
        input in prop::collection::vec(-10.0f32..=10.0f32, 1..=128),
    ) {
        let mut shaper = Shaper::new(curve, seed);
        shaper.set_rectification(rectification);
        for &x in &input {
            let y = shaper.process(x);
            prop_assert!(y.abs() <= curve.bound(), "{}({}) = {}", curve, x, y);
        }
    }

    /// Two shapers built alike stay in lockstep.
    #[test]
    fn shapers_with_same_seed_match(
        curve in any_curve(),
        seed in any::<u64>(),
        input in prop::collection::vec(-4.0f32..=4.0f32, 1..=128),
    ) {
        let mut a = Shaper::new(curve, seed);
        let mut b = Shaper::new(curve, seed);
        for &x in &input {
            prop_assert_eq!(a.process(x), b.process(x));
        }
    }

    /// Running one path does not disturb another.
    #[test]
    fn paths_are_isolated(
        curve in any_curve(),
        input in prop::collection::vec(-4.0f32..=4.0f32, 1..=128),
    ) {
        let mut reference = Shaper::new(curve, 11);
        let expected: Vec<f32> = input.iter().map(|&x| reference.process(x)).collect();

        let mut left = Shaper::new(curve, 11);
        let mut right = Shaper::new(curve, 11);
        let mut actual = Vec::with_capacity(input.len());
        for &x in &input {
            right.process(x * 0.5 + 0.1);
            actual.push(left.process(x));
        }
        prop_assert_eq!(expected, actual);
    }

    /// Reset then replay reproduces the run exactly.
    #[test]
    fn reset_replays(
        curve in any_curve(),
        seed in any::<u64>(),
        input in prop::collection::vec(-4.0f32..=4.0f32, 1..=128),
    ) {
        let mut shaper = Shaper::new(curve, seed);
        let first: Vec<f32> = input.iter().map(|&x| shaper.process(x)).collect();
        shaper.reset();
        let second: Vec<f32> = input.iter().map(|&x| shaper.process(x)).collect();
        prop_assert_eq!(first, second);
    }

    /// Free-function dispatch agrees with the shaper when handed the bank's
    /// state for the selected curve.
    #[test]
    fn shape_agrees_with_shaper(
        curve in any_curve(),
        input in prop::collection::vec(-4.0f32..=4.0f32, 1..=64),
    ) {
        let mut shaper = Shaper::new(curve, 3);
        let mut bank = StateBank::new(3);
        let mut scratch = ShaperState::new();
        for &x in &input {
            let via_shaper = shaper.process(x);
            let state = match bank.get_mut(curve) {
                Some(state) => state,
                None => &mut scratch,
            };
            prop_assert_eq!(via_shaper, shape(curve, x, state));
        }
    }
}

#[test]
fn curve_switch_resumes_each_curve() {
    // A path that alternates between two stateful curves must match two
    // dedicated paths, each fed only its own samples.
    let input: Vec<f32> = (0..512).map(|i| (i as f32 * 0.05).sin() * 1.5).collect();

    let mut switching = Shaper::new(CurveId::CassetteTape, 21);
    let mut cassette = Shaper::new(CurveId::CassetteTape, 21);
    let mut magnetic = Shaper::new(CurveId::MagneticSaturation, 21);

    for (i, &x) in input.iter().enumerate() {
        if i % 2 == 0 {
            switching.set_curve(CurveId::CassetteTape);
            assert_eq!(switching.process(x), cassette.process(x));
        } else {
            switching.set_curve(CurveId::MagneticSaturation);
            assert_eq!(switching.process(x), magnetic.process(x));
        }
    }
}

//! Table dispatch from [`CurveId`] to curve function.
//!
//! Every curve, stateless or not, is reachable through one uniform
//! signature, [`ShapeFn`]. Stateless entries ignore the state argument.
//! Lookup is a single index into a fixed array, with no comparison chain on
//! the sample path.

use crate::CurveId;
use saturna_core::{NoiseSource, ShaperState};
use saturna_curves as curves;

/// Uniform curve signature used by the dispatch table.
pub type ShapeFn<N> = fn(f32, &mut ShaperState<N>) -> f32;

/// Adapts stateless curves to [`ShapeFn`].
macro_rules! stateless {
    ($($name:ident),* $(,)?) => {
        $(
            #[inline]
            fn $name<N>(x: f32, _state: &mut ShaperState<N>) -> f32 {
                curves::$name(x)
            }
        )*
    };
}

stateless!(
    arctan_soft_clip,
    exp_soft_clip,
    tanh_soft_clip,
    cubic_soft_clip,
    hard_clip,
    sausage_fattener,
    limit_clip,
    single_sine_clip,
    logistic_clip,
    tan_clip,
    sine_foldback,
    linear_foldback,
    water_saturation,
    brine_saturation,
    mud_saturation,
    ice_saturation,
    acid_saturation,
    cold_tape,
    clean_tape,
    warm_tape,
    hot_tape,
    quantization_distortion,
    resonant_distortion,
    dynamic_distortion,
    asymmetric_wavefolder,
    pulse_distortion,
);

struct Table<N>(core::marker::PhantomData<N>);

impl<N: NoiseSource> Table<N> {
    // Order must match the `CurveId` discriminants
    const SHAPES: [ShapeFn<N>; CurveId::COUNT] = [
        arctan_soft_clip::<N>,
        exp_soft_clip::<N>,
        tanh_soft_clip::<N>,
        cubic_soft_clip::<N>,
        hard_clip::<N>,
        sausage_fattener::<N>,
        limit_clip::<N>,
        single_sine_clip::<N>,
        logistic_clip::<N>,
        tan_clip::<N>,
        sine_foldback::<N>,
        linear_foldback::<N>,
        water_saturation::<N>,
        brine_saturation::<N>,
        mud_saturation::<N>,
        ice_saturation::<N>,
        acid_saturation::<N>,
        curves::steam_saturation::<N>,
        cold_tape::<N>,
        clean_tape::<N>,
        warm_tape::<N>,
        hot_tape::<N>,
        curves::cassette_tape::<N>,
        curves::vintage_tape::<N>,
        curves::lofi_tape::<N>,
        curves::studio_tape::<N>,
        curves::magnetic_saturation::<N>,
        quantization_distortion::<N>,
        resonant_distortion::<N>,
        dynamic_distortion::<N>,
        asymmetric_wavefolder::<N>,
        pulse_distortion::<N>,
    ];
}

/// The full dispatch table, indexed by `id as usize`.
pub const fn shape_table<N: NoiseSource>() -> [ShapeFn<N>; CurveId::COUNT] {
    Table::<N>::SHAPES
}

/// The function implementing `id`.
#[inline]
pub const fn shape_fn<N: NoiseSource>(id: CurveId) -> ShapeFn<N> {
    Table::<N>::SHAPES[id as usize]
}

/// Shape one sample with `id`, using caller-managed state.
///
/// For stateless curves `state` is untouched. For stateful curves the
/// caller must pass the state that belongs to this curve on this signal
/// path; [`StateBank`](crate::StateBank) does that bookkeeping.
///
/// # Example
///
/// ```rust
/// use saturna_core::ShaperState;
/// use saturna_registry::{CurveId, shape};
///
/// let mut state = ShaperState::new();
/// assert_eq!(shape(CurveId::HardClip, 1.5, &mut state), 1.0);
/// ```
#[inline]
pub fn shape<N: NoiseSource>(id: CurveId, x: f32, state: &mut ShaperState<N>) -> f32 {
    shape_fn::<N>(id)(x, state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use saturna_core::SilentNoise;

    type Direct = fn(f32, &mut ShaperState<SilentNoise>) -> f32;

    /// Reference mapping written independently of the table.
    fn direct(id: CurveId) -> Direct {
        match id {
            CurveId::ArctanSoftClip => |x, _| curves::arctan_soft_clip(x),
            CurveId::ExpSoftClip => |x, _| curves::exp_soft_clip(x),
            CurveId::TanhSoftClip => |x, _| curves::tanh_soft_clip(x),
            CurveId::CubicSoftClip => |x, _| curves::cubic_soft_clip(x),
            CurveId::HardClip => |x, _| curves::hard_clip(x),
            CurveId::SausageFattener => |x, _| curves::sausage_fattener(x),
            CurveId::LimitClip => |x, _| curves::limit_clip(x),
            CurveId::SingleSineClip => |x, _| curves::single_sine_clip(x),
            CurveId::LogisticClip => |x, _| curves::logistic_clip(x),
            CurveId::TanClip => |x, _| curves::tan_clip(x),
            CurveId::SineFoldback => |x, _| curves::sine_foldback(x),
            CurveId::LinearFoldback => |x, _| curves::linear_foldback(x),
            CurveId::WaterSaturation => |x, _| curves::water_saturation(x),
            CurveId::BrineSaturation => |x, _| curves::brine_saturation(x),
            CurveId::MudSaturation => |x, _| curves::mud_saturation(x),
            CurveId::IceSaturation => |x, _| curves::ice_saturation(x),
            CurveId::AcidSaturation => |x, _| curves::acid_saturation(x),
            CurveId::SteamSaturation => curves::steam_saturation,
            CurveId::ColdTape => |x, _| curves::cold_tape(x),
            CurveId::CleanTape => |x, _| curves::clean_tape(x),
            CurveId::WarmTape => |x, _| curves::warm_tape(x),
            CurveId::HotTape => |x, _| curves::hot_tape(x),
            CurveId::CassetteTape => curves::cassette_tape,
            CurveId::VintageTape => curves::vintage_tape,
            CurveId::LofiTape => curves::lofi_tape,
            CurveId::StudioTape => curves::studio_tape,
            CurveId::MagneticSaturation => curves::magnetic_saturation,
            CurveId::QuantizationDistortion => |x, _| curves::quantization_distortion(x),
            CurveId::ResonantDistortion => |x, _| curves::resonant_distortion(x),
            CurveId::DynamicDistortion => |x, _| curves::dynamic_distortion(x),
            CurveId::AsymmetricWavefolder => |x, _| curves::asymmetric_wavefolder(x),
            CurveId::PulseDistortion => |x, _| curves::pulse_distortion(x),
        }
    }

    #[test]
    fn test_table_matches_curve_functions() {
        let inputs = [-3.7, -1.2, -0.4, 0.0, 0.3, 0.95, 2.2, 8.0];
        for id in CurveId::ALL {
            let mut via_table = ShaperState::with_noise(SilentNoise);
            let mut via_direct = ShaperState::with_noise(SilentNoise);
            let reference = direct(id);
            for x in inputs {
                let a = shape(id, x, &mut via_table);
                let b = reference(x, &mut via_direct);
                assert_eq!(a, b, "{} mismatch at {}", id, x);
            }
        }
    }

    #[test]
    fn test_stateless_entries_leave_state_alone() {
        for id in CurveId::ALL.iter().filter(|c| !c.is_stateful()) {
            let mut state = ShaperState::with_noise(SilentNoise);
            shape(*id, 0.7, &mut state);
            assert_eq!(state.mod_phase(), 0.0, "{}", id);
            assert_eq!(state.hysteresis(), 0.0, "{}", id);
        }
    }

    #[test]
    fn test_stateful_entries_advance_state() {
        for id in CurveId::ALL.iter().filter(|c| c.is_stateful()) {
            let mut state = ShaperState::with_noise(SilentNoise);
            shape(*id, 0.7, &mut state);
            let touched = state.mod_phase() != 0.0 || state.hysteresis() != 0.0;
            assert!(touched, "{} did not update its state", id);
        }
    }

    #[test]
    fn test_shape_table_exposes_same_entries() {
        let table = shape_table::<SilentNoise>();
        let mut a = ShaperState::with_noise(SilentNoise);
        let mut b = ShaperState::with_noise(SilentNoise);
        for id in CurveId::ALL {
            assert_eq!(table[id as usize](0.42, &mut a), shape(id, 0.42, &mut b));
        }
    }
}

//! Curve identifiers and categories.

use saturna_curves::clip::{ARCTAN_LIMIT, LIMIT_CLIP_LIMIT};
use saturna_curves::tape::{
    CASSETTE, CLEAN_LIMIT, COLD_LIMIT, LOFI, MAGNETIC_LIMIT, STUDIO, VINTAGE,
};
use saturna_curves::wet::{ICE_LIMIT, STEAM_LIMIT};

/// Category of curve for organization and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveCategory {
    /// Soft and hard clippers
    Clipping,
    /// Periodic folders
    Foldback,
    /// Sine-based "wet" saturation flavors
    Wet,
    /// Tape emulation, static and transport-modelled
    Tape,
    /// Quantization, resonance, wavefolding and other creative shapers
    Creative,
}

impl CurveCategory {
    /// Every category, in display order.
    pub const ALL: [CurveCategory; 5] = [
        CurveCategory::Clipping,
        CurveCategory::Foldback,
        CurveCategory::Wet,
        CurveCategory::Tape,
        CurveCategory::Creative,
    ];

    /// Returns a human-readable name for the category.
    pub const fn name(&self) -> &'static str {
        match self {
            CurveCategory::Clipping => "Clipping",
            CurveCategory::Foldback => "Foldback",
            CurveCategory::Wet => "Wet",
            CurveCategory::Tape => "Tape",
            CurveCategory::Creative => "Creative",
        }
    }

    /// Returns a description of the category.
    pub const fn description(&self) -> &'static str {
        match self {
            CurveCategory::Clipping => "Arctan, exponential, tanh, cubic, hard and other clippers",
            CurveCategory::Foldback => "Sine and linear foldback",
            CurveCategory::Wet => "Water, brine, mud, ice, acid and steam saturation",
            CurveCategory::Tape => "Static tape grades and machines with wow, hiss and hysteresis",
            CurveCategory::Creative => {
                "Quantization, resonant, dynamic, wavefolding and pulse distortion"
            }
        }
    }
}

/// Closed set of waveshaping algorithms.
///
/// The discriminant is the dense index into the dispatch table, so
/// `id as usize` is always in `0..CurveId::COUNT`.
///
/// # Example
///
/// ```rust
/// use saturna_registry::{CurveCategory, CurveId};
///
/// let id = CurveId::from_id("vintage_tape").unwrap();
/// assert_eq!(id, CurveId::VintageTape);
/// assert_eq!(id.category(), CurveCategory::Tape);
/// assert!(id.is_stateful());
/// assert_eq!(id.bound(), 0.98);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(usize)]
pub enum CurveId {
    // Clipping
    /// `atan(x) / 2`
    ArctanSoftClip,
    /// `1 - e^{-x}` mirrored
    ExpSoftClip,
    /// `tanh(x)`
    #[default]
    TanhSoftClip,
    /// Cubic with makeup gain
    CubicSoftClip,
    /// Clamp to ±1
    HardClip,
    /// Quadratic-shouldered clipper
    SausageFattener,
    /// Clamp to ±0.1
    LimitClip,
    /// One period of sine
    SingleSineClip,
    /// Logistic sigmoid
    LogisticClip,
    /// tanh minus a small linear term
    TanClip,
    // Foldback
    /// `sin(x)`
    SineFoldback,
    /// Triangle reflection
    LinearFoldback,
    // Wet
    /// Water
    WaterSaturation,
    /// Brine
    BrineSaturation,
    /// Mud
    MudSaturation,
    /// Ice
    IceSaturation,
    /// Acid
    AcidSaturation,
    /// Steam (stateful)
    SteamSaturation,
    // Tape
    /// Cold tape
    ColdTape,
    /// Clean tape
    CleanTape,
    /// Warm tape
    WarmTape,
    /// Hot tape
    HotTape,
    /// Cassette deck (stateful)
    CassetteTape,
    /// Vintage reel-to-reel (stateful)
    VintageTape,
    /// Lo-fi tape (stateful)
    LofiTape,
    /// Studio machine (stateful)
    StudioTape,
    /// Magnetic hysteresis (stateful)
    MagneticSaturation,
    // Creative
    /// Bit-depth style quantization
    QuantizationDistortion,
    /// Resonant harmonic peaks
    ResonantDistortion,
    /// Level-dependent cross-fade
    DynamicDistortion,
    /// Asymmetric wavefolder
    AsymmetricWavefolder,
    /// Pulse shaping
    PulseDistortion,
}

impl CurveId {
    /// Every curve, in discriminant order.
    pub const ALL: [CurveId; 32] = [
        CurveId::ArctanSoftClip,
        CurveId::ExpSoftClip,
        CurveId::TanhSoftClip,
        CurveId::CubicSoftClip,
        CurveId::HardClip,
        CurveId::SausageFattener,
        CurveId::LimitClip,
        CurveId::SingleSineClip,
        CurveId::LogisticClip,
        CurveId::TanClip,
        CurveId::SineFoldback,
        CurveId::LinearFoldback,
        CurveId::WaterSaturation,
        CurveId::BrineSaturation,
        CurveId::MudSaturation,
        CurveId::IceSaturation,
        CurveId::AcidSaturation,
        CurveId::SteamSaturation,
        CurveId::ColdTape,
        CurveId::CleanTape,
        CurveId::WarmTape,
        CurveId::HotTape,
        CurveId::CassetteTape,
        CurveId::VintageTape,
        CurveId::LofiTape,
        CurveId::StudioTape,
        CurveId::MagneticSaturation,
        CurveId::QuantizationDistortion,
        CurveId::ResonantDistortion,
        CurveId::DynamicDistortion,
        CurveId::AsymmetricWavefolder,
        CurveId::PulseDistortion,
    ];

    /// Number of curves.
    pub const COUNT: usize = Self::ALL.len();

    /// Number of curves that carry a [`ShaperState`](saturna_core::ShaperState).
    pub const STATEFUL_COUNT: usize = {
        let mut count = 0;
        let mut i = 0;
        while i < Self::ALL.len() {
            if Self::ALL[i].is_stateful() {
                count += 1;
            }
            i += 1;
        }
        count
    };

    /// Look up a curve by its stable string id.
    pub fn from_id(id: &str) -> Option<CurveId> {
        Self::ALL.iter().copied().find(|curve| curve.id() == id)
    }

    /// Dense index of this curve.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable string id (lowercase, underscores).
    pub const fn id(self) -> &'static str {
        match self {
            CurveId::ArctanSoftClip => "arctan_soft_clip",
            CurveId::ExpSoftClip => "exp_soft_clip",
            CurveId::TanhSoftClip => "tanh_soft_clip",
            CurveId::CubicSoftClip => "cubic_soft_clip",
            CurveId::HardClip => "hard_clip",
            CurveId::SausageFattener => "sausage_fattener",
            CurveId::LimitClip => "limit_clip",
            CurveId::SingleSineClip => "single_sine_clip",
            CurveId::LogisticClip => "logistic_clip",
            CurveId::TanClip => "tan_clip",
            CurveId::SineFoldback => "sine_foldback",
            CurveId::LinearFoldback => "linear_foldback",
            CurveId::WaterSaturation => "water_saturation",
            CurveId::BrineSaturation => "brine_saturation",
            CurveId::MudSaturation => "mud_saturation",
            CurveId::IceSaturation => "ice_saturation",
            CurveId::AcidSaturation => "acid_saturation",
            CurveId::SteamSaturation => "steam_saturation",
            CurveId::ColdTape => "cold_tape",
            CurveId::CleanTape => "clean_tape",
            CurveId::WarmTape => "warm_tape",
            CurveId::HotTape => "hot_tape",
            CurveId::CassetteTape => "cassette_tape",
            CurveId::VintageTape => "vintage_tape",
            CurveId::LofiTape => "lofi_tape",
            CurveId::StudioTape => "studio_tape",
            CurveId::MagneticSaturation => "magnetic_saturation",
            CurveId::QuantizationDistortion => "quantization_distortion",
            CurveId::ResonantDistortion => "resonant_distortion",
            CurveId::DynamicDistortion => "dynamic_distortion",
            CurveId::AsymmetricWavefolder => "asymmetric_wavefolder",
            CurveId::PulseDistortion => "pulse_distortion",
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            CurveId::ArctanSoftClip => "Arctan Soft Clip",
            CurveId::ExpSoftClip => "Exponential Soft Clip",
            CurveId::TanhSoftClip => "Tanh Soft Clip",
            CurveId::CubicSoftClip => "Cubic Soft Clip",
            CurveId::HardClip => "Hard Clip",
            CurveId::SausageFattener => "Sausage Fattener",
            CurveId::LimitClip => "Limit Clip",
            CurveId::SingleSineClip => "Single Sine Clip",
            CurveId::LogisticClip => "Logistic Clip",
            CurveId::TanClip => "Tan Clip",
            CurveId::SineFoldback => "Sine Foldback",
            CurveId::LinearFoldback => "Linear Foldback",
            CurveId::WaterSaturation => "Water",
            CurveId::BrineSaturation => "Brine",
            CurveId::MudSaturation => "Mud",
            CurveId::IceSaturation => "Ice",
            CurveId::AcidSaturation => "Acid",
            CurveId::SteamSaturation => "Steam",
            CurveId::ColdTape => "Cold Tape",
            CurveId::CleanTape => "Clean Tape",
            CurveId::WarmTape => "Warm Tape",
            CurveId::HotTape => "Hot Tape",
            CurveId::CassetteTape => "Cassette Tape",
            CurveId::VintageTape => "Vintage Tape",
            CurveId::LofiTape => "Lo-Fi Tape",
            CurveId::StudioTape => "Studio Tape",
            CurveId::MagneticSaturation => "Magnetic Saturation",
            CurveId::QuantizationDistortion => "Quantization",
            CurveId::ResonantDistortion => "Resonant",
            CurveId::DynamicDistortion => "Dynamic",
            CurveId::AsymmetricWavefolder => "Asymmetric Wavefolder",
            CurveId::PulseDistortion => "Pulse",
        }
    }

    /// Brief description of the curve's character.
    pub const fn description(self) -> &'static str {
        match self {
            CurveId::ArctanSoftClip => "Gentle arctangent saturation, peaks at ±π/4",
            CurveId::ExpSoftClip => "Exponential approach to ±1",
            CurveId::TanhSoftClip => "Classic tanh saturation",
            CurveId::CubicSoftClip => "Cubic polynomial with makeup gain",
            CurveId::HardClip => "Brick-wall clamp at ±1",
            CurveId::SausageFattener => "Linear with quadratic shoulders",
            CurveId::LimitClip => "Brick-wall clamp at ±0.1",
            CurveId::SingleSineClip => "One sine period, silent beyond ±π",
            CurveId::LogisticClip => "Logistic sigmoid rescaled to ±1",
            CurveId::TanClip => "tanh with a linear pull-back at extremes",
            CurveId::SineFoldback => "Sine foldback, period 2π",
            CurveId::LinearFoldback => "Triangle foldback, period 4",
            CurveId::WaterSaturation => "Asymmetric sine with dispersion",
            CurveId::BrineSaturation => "Aggressive sine stack with a soft knee",
            CurveId::MudSaturation => "Thick low-mid tanh with a soft knee",
            CurveId::IceSaturation => "Bright, ringing upper harmonics",
            CurveId::AcidSaturation => "Corrosive resonant peaks and bite",
            CurveId::SteamSaturation => "Airy movement with input-scaled noise",
            CurveId::ColdTape => "Subtle tape saturation with roll-off",
            CurveId::CleanTape => "Soft-knee compression into light tanh",
            CurveId::WarmTape => "Low-mid warmth and second harmonic",
            CurveId::HotTape => "Driven tape with a hard knee",
            CurveId::CassetteTape => "Cassette hiss, flutter and band limiting",
            CurveId::VintageTape => "Reel-to-reel warmth and gentle wow",
            CurveId::LofiTape => "Heavy flutter, hiss and dropouts",
            CurveId::StudioTape => "Transparent machine with minimal wow",
            CurveId::MagneticSaturation => "Saturation with one-sample hysteresis",
            CurveId::QuantizationDistortion => "Twelve-step quantization blended with tanh",
            CurveId::ResonantDistortion => "tanh with two resonant sine peaks",
            CurveId::DynamicDistortion => "Gentle at low level, aggressive when loud",
            CurveId::AsymmetricWavefolder => "sin(πd) folder with offset harmonics",
            CurveId::PulseDistortion => "Steep pulse with softened edges",
        }
    }

    /// Category for organization.
    pub const fn category(self) -> CurveCategory {
        match self {
            CurveId::ArctanSoftClip
            | CurveId::ExpSoftClip
            | CurveId::TanhSoftClip
            | CurveId::CubicSoftClip
            | CurveId::HardClip
            | CurveId::SausageFattener
            | CurveId::LimitClip
            | CurveId::SingleSineClip
            | CurveId::LogisticClip
            | CurveId::TanClip => CurveCategory::Clipping,
            CurveId::SineFoldback | CurveId::LinearFoldback => CurveCategory::Foldback,
            CurveId::WaterSaturation
            | CurveId::BrineSaturation
            | CurveId::MudSaturation
            | CurveId::IceSaturation
            | CurveId::AcidSaturation
            | CurveId::SteamSaturation => CurveCategory::Wet,
            CurveId::ColdTape
            | CurveId::CleanTape
            | CurveId::WarmTape
            | CurveId::HotTape
            | CurveId::CassetteTape
            | CurveId::VintageTape
            | CurveId::LofiTape
            | CurveId::StudioTape
            | CurveId::MagneticSaturation => CurveCategory::Tape,
            CurveId::QuantizationDistortion
            | CurveId::ResonantDistortion
            | CurveId::DynamicDistortion
            | CurveId::AsymmetricWavefolder
            | CurveId::PulseDistortion => CurveCategory::Creative,
        }
    }

    /// Closed output bound: every finite input maps into `[-bound, bound]`.
    pub const fn bound(self) -> f32 {
        match self {
            CurveId::ArctanSoftClip => ARCTAN_LIMIT,
            CurveId::LimitClip => LIMIT_CLIP_LIMIT,
            CurveId::IceSaturation => ICE_LIMIT,
            CurveId::SteamSaturation => STEAM_LIMIT,
            CurveId::ColdTape => COLD_LIMIT,
            CurveId::CleanTape => CLEAN_LIMIT,
            CurveId::CassetteTape => CASSETTE.limit,
            CurveId::VintageTape => VINTAGE.limit,
            CurveId::LofiTape => LOFI.limit,
            CurveId::StudioTape => STUDIO.limit,
            CurveId::MagneticSaturation => MAGNETIC_LIMIT,
            _ => 1.0,
        }
    }

    /// Slot of this curve's state in a [`StateBank`](crate::StateBank), or
    /// `None` for stateless curves.
    pub const fn state_slot(self) -> Option<usize> {
        match self {
            CurveId::SteamSaturation => Some(0),
            CurveId::CassetteTape => Some(1),
            CurveId::VintageTape => Some(2),
            CurveId::LofiTape => Some(3),
            CurveId::StudioTape => Some(4),
            CurveId::MagneticSaturation => Some(5),
            _ => None,
        }
    }

    /// Whether this curve reads and updates a `ShaperState`.
    pub const fn is_stateful(self) -> bool {
        self.state_slot().is_some()
    }
}

impl core::fmt::Display for CurveId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discriminants_are_dense() {
        for (i, id) in CurveId::ALL.iter().enumerate() {
            assert_eq!(*id as usize, i, "{} out of order", id);
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn test_ids_round_trip_and_are_unique() {
        for id in CurveId::ALL {
            assert_eq!(CurveId::from_id(id.id()), Some(id));
        }
        let mut ids: Vec<&str> = CurveId::ALL.iter().map(|c| c.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), CurveId::COUNT);
    }

    #[test]
    fn test_unknown_id() {
        assert_eq!(CurveId::from_id("fuzz"), None);
        assert_eq!(CurveId::from_id(""), None);
        assert_eq!(CurveId::from_id("Hard_Clip"), None);
    }

    #[test]
    fn test_state_slots_cover_bank() {
        let mut seen = [false; CurveId::STATEFUL_COUNT];
        for id in CurveId::ALL {
            if let Some(slot) = id.state_slot() {
                assert!(!seen[slot], "slot {} assigned twice", slot);
                seen[slot] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
        let stateful = CurveId::ALL.iter().filter(|c| c.is_stateful()).count();
        assert_eq!(stateful, CurveId::STATEFUL_COUNT);
        assert_eq!(CurveId::STATEFUL_COUNT, 6);
    }

    #[test]
    fn test_categories() {
        assert_eq!(CurveId::HardClip.category(), CurveCategory::Clipping);
        assert_eq!(CurveId::LinearFoldback.category(), CurveCategory::Foldback);
        assert_eq!(CurveId::SteamSaturation.category(), CurveCategory::Wet);
        assert_eq!(CurveId::MagneticSaturation.category(), CurveCategory::Tape);
        assert_eq!(CurveId::PulseDistortion.category(), CurveCategory::Creative);
        for cat in CurveCategory::ALL {
            assert!(!cat.name().is_empty());
            assert!(!cat.description().is_empty());
        }
    }

    #[test]
    fn test_bounds_within_unity() {
        for id in CurveId::ALL {
            assert!(id.bound() > 0.0 && id.bound() <= 1.0, "{}", id);
        }
        assert_eq!(CurveId::LimitClip.bound(), 0.1);
        assert_eq!(CurveId::LofiTape.bound(), 0.9);
    }
}

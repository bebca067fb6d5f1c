//! Saturna Curves - waveshaping transfer functions
//!
//! One sample in, one sample out. Every curve is allocation-free, never
//! panics, and returns a value inside its documented bound for any finite
//! input. Curves with a drive gain first bound their input with
//! [`limit_input`](saturna_core::limit_input), so no intermediate product
//! overflows. NaN input propagates through IEEE 754 rules.
//!
//! ## Stateless curves
//!
//! - [`clip`] - arctan, exponential, tanh, cubic, hard, sausage, limit,
//!   single-sine, logistic and tan clippers
//! - [`fold`] - sine and linear foldback
//! - [`wet`] - water, brine, mud, ice and acid saturation
//! - [`tape`] - cold, clean, warm and hot tape
//! - [`creative`] - quantization, resonant, dynamic, wavefolder and pulse
//!
//! ## Stateful curves
//!
//! These take a caller-owned [`ShaperState`] and advance it by one step per
//! call: [`steam_saturation`], [`cassette_tape`], [`vintage_tape`],
//! [`lofi_tape`], [`studio_tape`] and [`magnetic_saturation`].
//!
//! ## Post-stage
//!
//! - [`rectify`] - negative half-wave rescaling, usable after any curve
//!
//! ## Example
//!
//! ```rust
//! use saturna_core::ShaperState;
//! use saturna_curves::{cassette_tape, hard_clip, rectify};
//!
//! let y = rectify(hard_clip(1.5), 0.25);
//! assert_eq!(y, 1.0);
//!
//! // One state per signal path
//! let mut left = ShaperState::with_seed(1);
//! let mut right = ShaperState::with_seed(2);
//! let l = cassette_tape(0.4, &mut left);
//! let r = cassette_tape(0.4, &mut right);
//! assert!(l.abs() <= 0.95 && r.abs() <= 0.95);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod clip;
pub mod creative;
pub mod fold;
pub mod rectify;
pub mod tape;
pub mod wet;

pub use saturna_core::ShaperState;

// Re-export main functions at crate root
pub use clip::{
    arctan_soft_clip, cubic_soft_clip, exp_soft_clip, hard_clip, limit_clip, logistic_clip,
    sausage_fattener, single_sine_clip, tan_clip, tanh_soft_clip,
};
pub use creative::{
    asymmetric_wavefolder, dynamic_distortion, pulse_distortion, quantization_distortion,
    resonant_distortion,
};
pub use fold::{linear_foldback, sine_foldback};
pub use rectify::rectify;
pub use tape::{
    TapeMachine, cassette_tape, clean_tape, cold_tape, hot_tape, lofi_tape, magnetic_saturation,
    studio_tape, vintage_tape, warm_tape,
};
pub use wet::{
    acid_saturation, brine_saturation, ice_saturation, mud_saturation, steam_saturation,
    water_saturation,
};

//! Saturna Core - primitives for real-time waveshapers
//!
//! This crate provides the building blocks shared by the saturna curve set,
//! designed for real-time audio processing with zero allocation in the
//! audio path.
//!
//! # Core Abstractions
//!
//! - [`ShaperState`] - Per-signal-path memory for stateful curves
//! - [`PhaseAccumulator`] - Radian accumulator wrapped into `[0, 2π)`
//! - [`NoiseSource`] - Injected noise generator ([`Pcg32`], [`SilentNoise`], [`ConstantNoise`])
//! - [`Processor`] - One-sample-in, one-sample-out trait with block helpers
//!
//! ## Utilities
//!
//! - Math functions: [`hard_clip`], [`soft_clip`], [`soft_knee`], [`flush_denormal`], etc.
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible for embedded audio applications.
//! Disable the default `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! saturna-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: No allocations, locks, or panics in processing paths
//! - **Owned state**: No global or function-local persistent storage; every
//!   stateful value lives in a caller-owned [`ShaperState`]
//! - **No dependencies on std**: Pure `no_std` with `libm` for math

#![cfg_attr(not(feature = "std"), no_std)]

pub mod math;
pub mod noise;
pub mod phase;
pub mod processor;
pub mod state;

// Re-export main types at crate root
pub use math::{
    INPUT_LIMIT, flush_denormal, hard_clip, lerp, limit_input, soft_clip, soft_knee, wrap_phase,
};
pub use noise::{ConstantNoise, NoiseSource, Pcg32, SilentNoise};
pub use phase::PhaseAccumulator;
pub use processor::Processor;
pub use state::ShaperState;

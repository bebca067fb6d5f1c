//! Curve registry and dispatch for saturna waveshapers.
//!
//! This crate names every curve, maps each name to its function through a
//! fixed table, and owns the per-path state that stateful curves need.
//!
//! # Features
//!
//! - **Curve Discovery**: [`CurveRegistry`] lists every curve with metadata
//! - **Table Dispatch**: [`shape`] and [`shape_table`] index by [`CurveId`]
//! - **State Banks**: [`StateBank`] keeps one [`ShaperState`] per stateful curve
//! - **Signal Paths**: [`Shaper`] ties a curve, a bank and rectification
//!   together behind the [`Processor`] trait
//!
//! # Example
//!
//! ```rust
//! use saturna_core::Processor;
//! use saturna_registry::{CurveId, Shaper};
//!
//! // Select once, at parameter-change time
//! let curve = CurveId::from_id("vintage_tape").unwrap();
//!
//! // One shaper per channel
//! let mut left = Shaper::new(curve, 1);
//! let mut right = Shaper::new(curve, 2);
//!
//! let (l, r) = (left.process(0.7), right.process(0.7));
//! assert!(l.abs() <= curve.bound() && r.abs() <= curve.bound());
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible (the registry listing needs `alloc`).
//! Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! saturna-registry = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod bank;
mod curve_id;
mod dispatch;
mod registry;
mod shaper;

pub use bank::StateBank;
pub use curve_id::{CurveCategory, CurveId};
pub use dispatch::{ShapeFn, shape, shape_fn, shape_table};
pub use registry::{CurveDescriptor, CurveRegistry};
pub use shaper::Shaper;

pub use saturna_core::{NoiseSource, Pcg32, Processor, ShaperState};

//! Curve metadata listing.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::{CurveCategory, CurveId, Shaper};

/// Describes a curve in the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveDescriptor {
    /// The curve this entry describes.
    pub curve: CurveId,
    /// Unique identifier for the curve (lowercase, no spaces).
    pub id: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// Brief description of the curve.
    pub description: &'static str,
    /// Category for organization.
    pub category: CurveCategory,
    /// Output bound: every finite input maps into `[-bound, bound]`.
    pub bound: f32,
    /// Whether the curve carries per-path state.
    pub stateful: bool,
}

impl From<CurveId> for CurveDescriptor {
    fn from(curve: CurveId) -> Self {
        Self {
            curve,
            id: curve.id(),
            name: curve.name(),
            description: curve.description(),
            category: curve.category(),
            bound: curve.bound(),
            stateful: curve.is_stateful(),
        }
    }
}

/// Registry of all available curves.
///
/// Provides discovery by id and category for UIs and configuration
/// layers, plus a factory for ready-to-run [`Shaper`]s.
///
/// # Example
///
/// ```rust
/// use saturna_core::Processor;
/// use saturna_registry::{CurveCategory, CurveRegistry};
///
/// let registry = CurveRegistry::new();
/// for curve in registry.curves_in_category(CurveCategory::Tape) {
///     assert!(curve.bound <= 1.0);
/// }
///
/// if let Some(mut shaper) = registry.create("lofi_tape", 1) {
///     let y = shaper.process(0.5);
///     assert!(y.abs() <= 0.9);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurveRegistry {
    entries: Vec<CurveDescriptor>,
}

impl Default for CurveRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CurveRegistry {
    /// Create a registry listing every built-in curve.
    pub fn new() -> Self {
        Self {
            entries: CurveId::ALL.iter().copied().map(CurveDescriptor::from).collect(),
        }
    }

    /// All curves, in [`CurveId`] order.
    pub fn all_curves(&self) -> Vec<&CurveDescriptor> {
        self.entries.iter().collect()
    }

    /// Curves in a specific category.
    pub fn curves_in_category(&self, category: CurveCategory) -> Vec<&CurveDescriptor> {
        self.entries
            .iter()
            .filter(|e| e.category == category)
            .collect()
    }

    /// Get a curve descriptor by id.
    pub fn get(&self, id: &str) -> Option<&CurveDescriptor> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Create a shaper running the curve named `id`.
    pub fn create(&self, id: &str, seed: u64) -> Option<Shaper> {
        self.get(id).map(|e| Shaper::new(e.curve, seed))
    }

    /// Number of registered curves.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//! Shaper configuration parsed from TOML text.

use crate::error::{ConfigError, ConfigResult};
use saturna_core::Pcg32;
use saturna_registry::{CurveId, Shaper};
use serde::{Deserialize, Serialize};

/// Spreads per-path seeds so channels never share a noise sequence.
const PATH_SEED_STRIDE: u64 = 0xD1B5_4A32_D192_ED03;

fn default_seed() -> u64 {
    Pcg32::DEFAULT_SEED
}

/// Configuration for one waveshaper, shared by every channel it builds.
///
/// # Example
///
/// ```rust
/// use saturna_config::ShaperConfig;
/// use saturna_core::Processor;
///
/// let config = ShaperConfig::from_toml_str(
///     r#"
///     curve = "cassette_tape"
///     rectification = 0.25
///     "#,
/// )
/// .unwrap();
///
/// let mut channels = config.build_paths(2).unwrap();
/// for shaper in &mut channels {
///     assert!(shaper.process(0.5).abs() <= 0.95);
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ShaperConfig {
    /// Curve id, as returned by `CurveId::id` (e.g. "vintage_tape").
    pub curve: String,

    /// Rectification amount in `[0, 1]`.
    #[serde(default)]
    pub rectification: f32,

    /// Base seed for the noise generators.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for ShaperConfig {
    fn default() -> Self {
        Self::new(CurveId::default().id())
    }
}

impl ShaperConfig {
    /// Create a configuration for `curve` with no rectification and the
    /// default seed.
    pub fn new(curve: impl Into<String>) -> Self {
        Self {
            curve: curve.into(),
            rectification: 0.0,
            seed: default_seed(),
        }
    }

    /// Set the rectification amount.
    pub fn with_rectification(mut self, rectification: f32) -> Self {
        self.rectification = rectification;
        self
    }

    /// Set the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML text.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Check the configuration and resolve its curve.
    pub fn validate(&self) -> ConfigResult<CurveId> {
        let result = self.check();
        if let Err(ref err) = result {
            tracing::warn!(curve = %self.curve, error = %err, "shaper config rejected");
        }
        result
    }

    fn check(&self) -> ConfigResult<CurveId> {
        let curve = CurveId::from_id(&self.curve)
            .ok_or_else(|| ConfigError::UnknownCurve(self.curve.clone()))?;

        if !self.rectification.is_finite() {
            return Err(ConfigError::invalid_parameter(
                "rectification",
                self.rectification,
                "must be finite",
            ));
        }
        if !(0.0..=1.0).contains(&self.rectification) {
            return Err(ConfigError::invalid_parameter(
                "rectification",
                self.rectification,
                "must be within [0, 1]",
            ));
        }

        Ok(curve)
    }

    /// Build a shaper for a single signal path.
    pub fn build(&self) -> ConfigResult<Shaper> {
        let curve = self.validate()?;
        tracing::debug!(curve = curve.id(), seed = self.seed, "building shaper");
        Ok(self.shaper(curve, self.seed))
    }

    /// Build `paths` independent shapers, one per channel.
    ///
    /// Every path gets its own state and a distinct seed, so no two
    /// channels share phases, memory or noise.
    pub fn build_paths(&self, paths: usize) -> ConfigResult<Vec<Shaper>> {
        let curve = self.validate()?;
        tracing::debug!(curve = curve.id(), paths, "building shapers");
        Ok((0..paths)
            .map(|path| self.shaper(curve, path_seed(self.seed, path)))
            .collect())
    }

    fn shaper(&self, curve: CurveId, seed: u64) -> Shaper {
        let mut shaper = Shaper::new(curve, seed);
        shaper.set_rectification(self.rectification);
        shaper
    }
}

/// Seed for channel `path` of a configuration seeded with `seed`.
fn path_seed(seed: u64, path: usize) -> u64 {
    seed.wrapping_add((path as u64).wrapping_mul(PATH_SEED_STRIDE))
}

//! Configuration for saturna waveshapers.
//!
//! Parses a [`ShaperConfig`] from TOML text, validates it against the curve
//! registry, and builds one [`Shaper`](saturna_registry::Shaper) per signal
//! path. There is no file I/O here: callers read and store the text
//! themselves.
//!
//! # Example
//!
//! ```rust
//! use saturna_config::{ConfigError, ShaperConfig};
//!
//! let config = ShaperConfig::from_toml_str(r#"curve = "vintage_tape""#).unwrap();
//! let shaper = config.build().unwrap();
//! assert_eq!(shaper.curve().id(), "vintage_tape");
//!
//! let err = ShaperConfig::from_toml_str(r#"curve = "nope""#).unwrap_err();
//! assert!(matches!(err, ConfigError::UnknownCurve(_)));
//! ```
//!
//! Validation failures are logged with `tracing::warn!`; install a
//! subscriber to see them.

mod error;
mod shaper_config;

pub use error::{ConfigError, ConfigResult};
pub use shaper_config::ShaperConfig;

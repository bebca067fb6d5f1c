//! Error types for configuration operations.

use thiserror::Error;

/// Errors that can occur while loading or validating a shaper configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse TOML
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Unknown curve id
    #[error("unknown curve: {0}")]
    UnknownCurve(String),

    /// Invalid parameter
    #[error("invalid parameter '{param}' = {value}: {reason}")]
    InvalidParameter {
        /// Name of the invalid parameter.
        param: String,
        /// The rejected value.
        value: f32,
        /// Description of why the parameter is invalid.
        reason: String,
    },
}

impl ConfigError {
    /// Create an invalid parameter error.
    pub fn invalid_parameter(
        param: impl Into<String>,
        value: f32,
        reason: impl Into<String>,
    ) -> Self {
        ConfigError::InvalidParameter {
            param: param.into(),
            value,
            reason: reason.into(),
        }
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn invalid_parameter_factory_produces_correct_variant() {
        let err = ConfigError::invalid_parameter("rectification", 2.0, "out of range");
        assert!(matches!(
            err,
            ConfigError::InvalidParameter { ref param, value, .. }
                if param == "rectification" && value == 2.0
        ));
    }

    #[test]
    fn unknown_curve_display() {
        let err = ConfigError::UnknownCurve("super_fuzz".to_string());
        assert_eq!(err.to_string(), "unknown curve: super_fuzz");
    }

    #[test]
    fn invalid_parameter_display() {
        let err = ConfigError::invalid_parameter("rectification", 1.5, "must be within [0, 1]");
        assert_eq!(
            err.to_string(),
            "invalid parameter 'rectification' = 1.5: must be within [0, 1]"
        );
    }

    #[test]
    fn toml_parse_display_and_source() {
        let parse_err = toml::from_str::<toml::Table>("curve = ").unwrap_err();
        let err = ConfigError::from(parse_err);
        assert!(err.to_string().starts_with("failed to parse TOML"));
        assert!(err.source().is_some(), "TomlParse must expose its source");
    }

    #[test]
    fn unknown_curve_source_is_none() {
        let err = ConfigError::UnknownCurve("c".to_string());
        assert!(err.source().is_none());
    }

    #[test]
    fn invalid_parameter_source_is_none() {
        let err = ConfigError::invalid_parameter("p", 0.0, "r");
        assert!(err.source().is_none());
    }
}

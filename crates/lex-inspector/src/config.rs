//! Configuration types for the inspector.
//!
//! This module provides configuration options using the builder pattern.

use serde::{Deserialize, Serialize};

/// Default IQR fence multiplier (Tukey's fences).
pub const DEFAULT_IQR_MULTIPLIER: f64 = 1.5;

/// Configuration for an [`Inspector`](crate::Inspector).
///
/// Use [`InspectorConfig::builder()`] to create a new configuration
/// with fluent API.
///
/// # Example
///
/// ```rust,ignore
/// use lex_inspector::InspectorConfig;
///
/// let config = InspectorConfig::builder()
///     .iqr_multiplier(3.0)
///     .nulls_equal(true)
///     .build()?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectorConfig {
    /// Width of the outlier fences in multiples of the IQR.
    /// Values outside `[Q1 - k*IQR, Q3 + k*IQR]` are outliers.
    /// Default: 1.5
    pub iqr_multiplier: f64,

    /// Whether two missing cells in the same column compare equal when
    /// looking for duplicate rows.
    /// When false, a row holding any missing cell never duplicates another row.
    /// Default: false
    pub nulls_equal: bool,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            iqr_multiplier: DEFAULT_IQR_MULTIPLIER,
            nulls_equal: false,
        }
    }
}

impl InspectorConfig {
    /// Create a new configuration builder.
    pub fn builder() -> InspectorConfigBuilder {
        InspectorConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !self.iqr_multiplier.is_finite() || self.iqr_multiplier <= 0.0 {
            return Err(ConfigValidationError::InvalidIqrMultiplier(
                self.iqr_multiplier,
            ));
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid IQR multiplier: {0} (must be a finite number greater than 0)")]
    InvalidIqrMultiplier(f64),
}

/// Builder for [`InspectorConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct InspectorConfigBuilder {
    iqr_multiplier: Option<f64>,
    nulls_equal: Option<bool>,
}

impl InspectorConfigBuilder {
    /// Set the IQR fence multiplier used by the outlier check.
    ///
    /// # Arguments
    /// * `multiplier` - Finite value greater than 0 (1.5 is the usual choice,
    ///   3.0 flags only extreme values)
    pub fn iqr_multiplier(mut self, multiplier: f64) -> Self {
        self.iqr_multiplier = Some(multiplier);
        self
    }

    /// Treat missing cells as equal to each other in duplicate detection.
    pub fn nulls_equal(mut self, equal: bool) -> Self {
        self.nulls_equal = Some(equal);
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `InspectorConfig` or an error if validation fails.
    pub fn build(self) -> Result<InspectorConfig, ConfigValidationError> {
        let config = InspectorConfig {
            iqr_multiplier: self.iqr_multiplier.unwrap_or(DEFAULT_IQR_MULTIPLIER),
            nulls_equal: self.nulls_equal.unwrap_or(false),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InspectorConfig::default();
        assert_eq!(config.iqr_multiplier, 1.5);
        assert!(!config.nulls_equal);
    }

    #[test]
    fn test_builder_defaults_match_default() {
        let config = InspectorConfig::builder().build().unwrap();
        assert_eq!(config, InspectorConfig::default());
    }

    #[test]
    fn test_builder_custom_values() {
        let config = InspectorConfig::builder()
            .iqr_multiplier(3.0)
            .nulls_equal(true)
            .build()
            .unwrap();

        assert_eq!(config.iqr_multiplier, 3.0);
        assert!(config.nulls_equal);
    }

    #[test]
    fn test_validation_rejects_bad_multiplier() {
        for bad in [0.0, -1.5, f64::NAN, f64::INFINITY] {
            let result = InspectorConfig::builder().iqr_multiplier(bad).build();
            assert!(
                matches!(result, Err(ConfigValidationError::InvalidIqrMultiplier(_))),
                "multiplier {bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{ "iqr_multiplier": 2.0, "nulls_equal": true }"#;

        let config: InspectorConfig = serde_json::from_str(json).expect("Should deserialize");

        assert_eq!(config.iqr_multiplier, 2.0);
        assert!(config.nulls_equal);
        assert!(config.validate().is_ok());
    }
}

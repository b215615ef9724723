// ============================================================================
// Calculator Configuration
// Rounding precision and sign policy shared by every operation
// ============================================================================

use crate::domain::{CalculatorError, CalculatorResult};
use crate::numeric::MAX_PRECISION;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Configuration Value Object
// ============================================================================

/// Immutable calculator configuration.
///
/// Both options must be supplied; there is no default precision. Once built
/// the configuration is read-only and is shared by all operations through an
/// `Arc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Number of decimal places results are rounded to
    precision: u32,

    /// Whether a negative result is returned or rejected
    allow_negative_results: bool,
}

impl CalculatorConfig {
    /// Create a configuration with both required options
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if `precision` exceeds
    /// [`MAX_PRECISION`].
    pub fn new(precision: u32, allow_negative_results: bool) -> CalculatorResult<Self> {
        let config = Self {
            precision,
            allow_negative_results,
        };
        config.validate()?;
        Ok(config)
    }

    /// Start a builder with no options set
    pub fn builder() -> CalculatorConfigBuilder {
        CalculatorConfigBuilder::default()
    }

    /// Decimal places results are rounded to
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Whether negative results are permitted
    pub fn allow_negative_results(&self) -> bool {
        self.allow_negative_results
    }

    /// Validate the configuration
    pub fn validate(&self) -> CalculatorResult<()> {
        if self.precision > MAX_PRECISION {
            return Err(CalculatorError::InvalidConfiguration(format!(
                "precision {} exceeds the maximum of {} decimal places",
                self.precision, MAX_PRECISION
            )));
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl CalculatorConfig {
    /// Negative results rejected
    pub fn strict(precision: u32) -> CalculatorResult<Self> {
        Self::new(precision, false)
    }

    /// Negative results allowed
    pub fn permissive(precision: u32) -> CalculatorResult<Self> {
        Self::new(precision, true)
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for [`CalculatorConfig`]
///
/// # Example
/// ```
/// use decimal_calculator::domain::CalculatorConfig;
///
/// let config = CalculatorConfig::builder()
///     .result_precision(2)
///     .allow_negative_results(false)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.precision(), 2);
/// assert!(!config.allow_negative_results());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CalculatorConfigBuilder {
    precision: Option<u32>,
    allow_negative_results: Option<bool>,
}

impl CalculatorConfigBuilder {
    /// Set the number of decimal places results are rounded to
    pub fn result_precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Set whether negative results are permitted
    pub fn allow_negative_results(mut self, allow: bool) -> Self {
        self.allow_negative_results = Some(allow);
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if an option was never set or the
    /// precision is out of range.
    pub fn build(self) -> CalculatorResult<CalculatorConfig> {
        let precision = self.precision.ok_or_else(|| {
            CalculatorError::InvalidConfiguration("result precision is required".to_string())
        })?;
        let allow_negative_results = self.allow_negative_results.ok_or_else(|| {
            CalculatorError::InvalidConfiguration(
                "negative result policy is required".to_string(),
            )
        })?;

        CalculatorConfig::new(precision, allow_negative_results)
    }
}

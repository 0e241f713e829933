//! Configuration for the Z-transform lens.

use serde::{Deserialize, Serialize};

use crate::error::ZTransformError;

/// Largest Butterworth order accepted.
pub const MAX_ORDER: usize = 16;

/// Configuration for [`z_transform_lens`](crate::z_transform_lens).
///
/// # Example
///
/// ```
/// use biolens_ztransform::ZTransformConfig;
///
/// let config = ZTransformConfig::new().with_order(4).with_hint_multiplier(3.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZTransformConfig {
    /// Butterworth order (even).
    order: usize,
    /// Cutoff = multiplier * hinted frequency.
    hint_multiplier: f64,
    /// Cutoff as a fraction of Nyquist when no hint is given.
    nyquist_fraction: f64,
    /// Upper clamp on the cutoff as a fraction of Nyquist.
    max_nyquist_fraction: f64,
}

impl ZTransformConfig {
    /// Creates a new `ZTransformConfig` with default parameters.
    ///
    /// Defaults: `order = 2`, `hint_multiplier = 4.0`,
    /// `nyquist_fraction = 0.1`, `max_nyquist_fraction = 0.9`.
    pub fn new() -> Self {
        Self {
            order: 2,
            hint_multiplier: 4.0,
            nyquist_fraction: 0.1,
            max_nyquist_fraction: 0.9,
        }
    }

    /// Sets the Butterworth order.
    pub fn with_order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    /// Sets the multiplier applied to a cutoff hint.
    pub fn with_hint_multiplier(mut self, multiplier: f64) -> Self {
        self.hint_multiplier = multiplier;
        self
    }

    /// Sets the default cutoff as a fraction of Nyquist.
    pub fn with_nyquist_fraction(mut self, fraction: f64) -> Self {
        self.nyquist_fraction = fraction;
        self
    }

    /// Sets the upper clamp on the cutoff as a fraction of Nyquist.
    pub fn with_max_nyquist_fraction(mut self, fraction: f64) -> Self {
        self.max_nyquist_fraction = fraction;
        self
    }

    /// Returns the Butterworth order.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns the multiplier applied to a cutoff hint.
    pub fn hint_multiplier(&self) -> f64 {
        self.hint_multiplier
    }

    /// Returns the default cutoff as a fraction of Nyquist.
    pub fn nyquist_fraction(&self) -> f64 {
        self.nyquist_fraction
    }

    /// Returns the upper clamp on the cutoff as a fraction of Nyquist.
    pub fn max_nyquist_fraction(&self) -> f64 {
        self.max_nyquist_fraction
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), ZTransformError> {
        if self.order == 0 || self.order % 2 != 0 || self.order > MAX_ORDER {
            return Err(ZTransformError::InvalidConfig(format!(
                "order must be even and in 2..={MAX_ORDER}, got {}",
                self.order
            )));
        }
        if !(self.hint_multiplier > 0.0) || !self.hint_multiplier.is_finite() {
            return Err(ZTransformError::InvalidConfig(
                "hint_multiplier must be > 0".to_string(),
            ));
        }
        if !(self.max_nyquist_fraction > 0.0 && self.max_nyquist_fraction < 1.0) {
            return Err(ZTransformError::InvalidConfig(
                "max_nyquist_fraction must be in (0, 1)".to_string(),
            ));
        }
        if !(self.nyquist_fraction > 0.0 && self.nyquist_fraction <= self.max_nyquist_fraction) {
            return Err(ZTransformError::InvalidConfig(
                "nyquist_fraction must be in (0, max_nyquist_fraction]".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ZTransformConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = ZTransformConfig::new();
        assert_eq!(config.order(), 2);
        assert!((config.hint_multiplier() - 4.0).abs() < f64::EPSILON);
        assert!((config.nyquist_fraction() - 0.1).abs() < f64::EPSILON);
        assert!((config.max_nyquist_fraction() - 0.9).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
        assert_eq!(config, ZTransformConfig::default());
    }

    #[test]
    fn config_builder() {
        let config = ZTransformConfig::new()
            .with_order(6)
            .with_hint_multiplier(2.0)
            .with_nyquist_fraction(0.2)
            .with_max_nyquist_fraction(0.8);
        assert_eq!(config.order(), 6);
        assert!((config.hint_multiplier() - 2.0).abs() < f64::EPSILON);
        assert!((config.nyquist_fraction() - 0.2).abs() < f64::EPSILON);
        assert!((config.max_nyquist_fraction() - 0.8).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn odd_or_zero_order_rejected() {
        assert!(ZTransformConfig::new().with_order(3).validate().is_err());
        assert!(ZTransformConfig::new().with_order(0).validate().is_err());
        assert!(ZTransformConfig::new().with_order(18).validate().is_err());
    }

    #[test]
    fn fractions_checked() {
        assert!(
            ZTransformConfig::new()
                .with_max_nyquist_fraction(1.0)
                .validate()
                .is_err()
        );
        assert!(
            ZTransformConfig::new()
                .with_nyquist_fraction(0.95)
                .validate()
                .is_err()
        );
        assert!(
            ZTransformConfig::new()
                .with_hint_multiplier(0.0)
                .validate()
                .is_err()
        );
    }
}

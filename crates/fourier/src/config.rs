//! Configuration for the Fourier lens.

use serde::{Deserialize, Serialize};

use biolens_signal::DEFAULT_MAX_SPAN_RATIO;

use crate::error::FourierError;

/// Configuration for [`fourier_lens`](crate::fourier_lens).
///
/// The grid spans `1 / max_period_hours` up to the Nyquist frequency, with a
/// density chosen so the step at any frequency `f` is at most
/// `f * tolerance_fraction`.
///
/// # Example
///
/// ```
/// use biolens_fourier::FourierConfig;
///
/// let config = FourierConfig::new()
///     .with_expected_period_hours(24.0)
///     .with_tolerance_fraction(0.001);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FourierConfig {
    /// Longest period of interest (hours); sets the lowest grid frequency.
    max_period_hours: f64,
    /// Period the grid must resolve (hours).
    expected_period_hours: f64,
    /// Relative frequency resolution.
    tolerance_fraction: f64,
    /// Allowed deviation between observed and nominal timestamp span.
    max_span_ratio: f64,
    /// Upper bound on grid size.
    max_grid_points: usize,
}

impl FourierConfig {
    /// Creates a new `FourierConfig` with default parameters.
    ///
    /// Defaults: `max_period_hours = 100`, `expected_period_hours = 24`,
    /// `tolerance_fraction = 0.001`, `max_span_ratio = 10`,
    /// `max_grid_points = 1_000_000`.
    pub fn new() -> Self {
        Self {
            max_period_hours: 100.0,
            expected_period_hours: 24.0,
            tolerance_fraction: 1e-3,
            max_span_ratio: DEFAULT_MAX_SPAN_RATIO,
            max_grid_points: 1_000_000,
        }
    }

    /// Sets the longest period of interest, in hours.
    pub fn with_max_period_hours(mut self, hours: f64) -> Self {
        self.max_period_hours = hours;
        self
    }

    /// Sets the period the grid must resolve, in hours.
    pub fn with_expected_period_hours(mut self, hours: f64) -> Self {
        self.expected_period_hours = hours;
        self
    }

    /// Sets the relative frequency resolution.
    pub fn with_tolerance_fraction(mut self, tolerance: f64) -> Self {
        self.tolerance_fraction = tolerance;
        self
    }

    /// Sets the allowed timestamp span ratio.
    pub fn with_max_span_ratio(mut self, ratio: f64) -> Self {
        self.max_span_ratio = ratio;
        self
    }

    /// Sets the grid size limit.
    pub fn with_max_grid_points(mut self, max: usize) -> Self {
        self.max_grid_points = max;
        self
    }

    /// Returns the longest period of interest, in hours.
    pub fn max_period_hours(&self) -> f64 {
        self.max_period_hours
    }

    /// Returns the expected period, in hours.
    pub fn expected_period_hours(&self) -> f64 {
        self.expected_period_hours
    }

    /// Returns the relative frequency resolution.
    pub fn tolerance_fraction(&self) -> f64 {
        self.tolerance_fraction
    }

    /// Returns the allowed timestamp span ratio.
    pub fn max_span_ratio(&self) -> f64 {
        self.max_span_ratio
    }

    /// Returns the grid size limit.
    pub fn max_grid_points(&self) -> usize {
        self.max_grid_points
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), FourierError> {
        if !self.max_period_hours.is_finite() || self.max_period_hours <= 0.0 {
            return Err(FourierError::InvalidConfig(format!(
                "max_period_hours must be finite and positive, got {}",
                self.max_period_hours
            )));
        }
        if !self.expected_period_hours.is_finite() || self.expected_period_hours <= 0.0 {
            return Err(FourierError::InvalidConfig(format!(
                "expected_period_hours must be finite and positive, got {}",
                self.expected_period_hours
            )));
        }
        if !(self.tolerance_fraction > 0.0 && self.tolerance_fraction < 1.0) {
            return Err(FourierError::InvalidConfig(format!(
                "tolerance_fraction must be in (0, 1), got {}",
                self.tolerance_fraction
            )));
        }
        if !(self.max_span_ratio >= 1.0) || !self.max_span_ratio.is_finite() {
            return Err(FourierError::InvalidConfig(format!(
                "max_span_ratio must be finite and >= 1, got {}",
                self.max_span_ratio
            )));
        }
        if self.max_grid_points < 2 {
            return Err(FourierError::InvalidConfig(
                "max_grid_points must be >= 2".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for FourierConfig {
    fn default() -> Self {
        Self::new()
    }
}

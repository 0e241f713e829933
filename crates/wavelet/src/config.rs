//! Configuration for the wavelet lens.

use serde::{Deserialize, Serialize};

use crate::error::WaveletError;

/// Configuration for [`wavelet_lens`](crate::wavelet_lens).
///
/// Use the builder methods to customize the analysis parameters.
///
/// # Example
///
/// ```
/// use biolens_wavelet::WaveletConfig;
///
/// let config = WaveletConfig::new()
///     .with_dj(0.25)
///     .with_threshold_sigma(4.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaveletConfig {
    /// Morlet non-dimensional frequency.
    omega0: f64,
    /// Fractional octave spacing.
    dj: f64,
    /// Smallest scale, in samples.
    s0_samples: f64,
    /// Number of scales above the smallest (None = up to the full record).
    j_max: Option<usize>,
    /// Per-scale threshold in robust standard deviations above the median power.
    threshold_sigma: f64,
    /// Confidence level of the red-noise background test, in `(0, 1)`.
    significance_level: f64,
    /// Whether cells inside the cone of influence are ignored for detection.
    mask_coi: bool,
}

impl WaveletConfig {
    /// Creates a new `WaveletConfig` with default parameters.
    ///
    /// Defaults: `omega0 = 6.0`, `dj = 0.125`, `s0_samples = 2.0`,
    /// `j_max = None`, `threshold_sigma = 3.0`, `significance_level = 0.99`,
    /// `mask_coi = true`.
    pub fn new() -> Self {
        Self {
            omega0: 6.0,
            dj: 0.125,
            s0_samples: 2.0,
            j_max: None,
            threshold_sigma: 3.0,
            significance_level: 0.99,
            mask_coi: true,
        }
    }

    /// Sets the Morlet non-dimensional frequency.
    pub fn with_omega0(mut self, omega0: f64) -> Self {
        self.omega0 = omega0;
        self
    }

    /// Sets the fractional octave spacing.
    pub fn with_dj(mut self, dj: f64) -> Self {
        self.dj = dj;
        self
    }

    /// Sets the smallest scale, in samples.
    pub fn with_s0_samples(mut self, s0: f64) -> Self {
        self.s0_samples = s0;
        self
    }

    /// Sets the number of scales above the smallest.
    pub fn with_j_max(mut self, j_max: usize) -> Self {
        self.j_max = Some(j_max);
        self
    }

    /// Sets the detection threshold, in standard deviations.
    pub fn with_threshold_sigma(mut self, k: f64) -> Self {
        self.threshold_sigma = k;
        self
    }

    /// Sets the confidence level of the red-noise background test.
    pub fn with_significance_level(mut self, level: f64) -> Self {
        self.significance_level = level;
        self
    }

    /// Sets whether edge-affected cells are ignored for detection.
    pub fn with_mask_coi(mut self, mask: bool) -> Self {
        self.mask_coi = mask;
        self
    }

    /// Returns the Morlet non-dimensional frequency.
    pub fn omega0(&self) -> f64 {
        self.omega0
    }

    /// Returns the fractional octave spacing.
    pub fn dj(&self) -> f64 {
        self.dj
    }

    /// Returns the smallest scale, in samples.
    pub fn s0_samples(&self) -> f64 {
        self.s0_samples
    }

    /// Returns the number of scales, if explicitly set.
    pub fn j_max(&self) -> Option<usize> {
        self.j_max
    }

    /// Returns the detection threshold, in standard deviations.
    pub fn threshold_sigma(&self) -> f64 {
        self.threshold_sigma
    }

    /// Returns the confidence level of the red-noise background test.
    pub fn significance_level(&self) -> f64 {
        self.significance_level
    }

    /// Returns whether edge-affected cells are ignored for detection.
    pub fn mask_coi(&self) -> bool {
        self.mask_coi
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), WaveletError> {
        if !(self.omega0 >= 5.0) || !self.omega0.is_finite() {
            return Err(WaveletError::InvalidConfig(
                "omega0 must be >= 5.0".to_string(),
            ));
        }
        if !(self.dj > 0.0) || !self.dj.is_finite() {
            return Err(WaveletError::InvalidConfig("dj must be > 0".to_string()));
        }
        if !(self.s0_samples > 0.0) || !self.s0_samples.is_finite() {
            return Err(WaveletError::InvalidConfig(
                "s0_samples must be > 0".to_string(),
            ));
        }
        if !(self.threshold_sigma > 0.0) || !self.threshold_sigma.is_finite() {
            return Err(WaveletError::InvalidConfig(
                "threshold_sigma must be > 0".to_string(),
            ));
        }
        if !(self.significance_level > 0.0 && self.significance_level < 1.0) {
            return Err(WaveletError::InvalidConfig(
                "significance_level must be in (0, 1)".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for WaveletConfig {
    fn default() -> Self {
        Self::new()
    }
}

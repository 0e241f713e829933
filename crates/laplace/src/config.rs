//! Configuration for the Laplace lens.

use serde::{Deserialize, Serialize};

use crate::error::LaplaceError;

/// Largest autoregressive order accepted.
pub const MAX_ORDER: usize = 32;

/// Configuration for [`laplace_lens`](crate::laplace_lens).
///
/// # Example
///
/// ```
/// use biolens_laplace::LaplaceConfig;
///
/// let config = LaplaceConfig::new().with_order(4);
/// assert_eq!(config.order(), 4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LaplaceConfig {
    /// Requested autoregressive order.
    order: usize,
    /// Relative band `|Re(s)| <= tol * |s|` treated as purely oscillatory.
    oscillation_tolerance: f64,
    /// Iteration cap for polynomial root finding.
    max_root_iterations: usize,
    /// Samples between AR lags; derived from the autocorrelation when `None`.
    lag_stride: Option<usize>,
}

impl LaplaceConfig {
    /// Creates a new `LaplaceConfig` with default parameters.
    ///
    /// Defaults: `order = 2`, `oscillation_tolerance = 0.01`,
    /// `max_root_iterations = 500`, `lag_stride = None` (automatic).
    pub fn new() -> Self {
        Self {
            order: 2,
            oscillation_tolerance: 0.01,
            max_root_iterations: 500,
            lag_stride: None,
        }
    }

    /// Sets the autoregressive order.
    pub fn with_order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    /// Sets the oscillation tolerance.
    pub fn with_oscillation_tolerance(mut self, tolerance: f64) -> Self {
        self.oscillation_tolerance = tolerance;
        self
    }

    /// Sets the iteration cap for root finding.
    pub fn with_max_root_iterations(mut self, iterations: usize) -> Self {
        self.max_root_iterations = iterations;
        self
    }

    /// Fixes the lag stride in samples.
    ///
    /// A stride of 1 fits the raw samples on consecutive lags. Larger strides
    /// pre-average over `stride` samples and fit lags `stride` apart. Without
    /// this call the stride is the first zero crossing of the
    /// autocorrelation, capped by the record length.
    pub fn with_lag_stride(mut self, stride: usize) -> Self {
        self.lag_stride = Some(stride);
        self
    }

    /// Returns the requested autoregressive order.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns the oscillation tolerance.
    pub fn oscillation_tolerance(&self) -> f64 {
        self.oscillation_tolerance
    }

    /// Returns the iteration cap for root finding.
    pub fn max_root_iterations(&self) -> usize {
        self.max_root_iterations
    }

    /// Returns the fixed lag stride, or `None` when it is derived from the data.
    pub fn lag_stride(&self) -> Option<usize> {
        self.lag_stride
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), LaplaceError> {
        if self.order == 0 || self.order > MAX_ORDER {
            return Err(LaplaceError::InvalidConfig(format!(
                "order must be in 1..={MAX_ORDER}, got {}",
                self.order
            )));
        }
        if !(0.0..1.0).contains(&self.oscillation_tolerance) {
            return Err(LaplaceError::InvalidConfig(format!(
                "oscillation_tolerance must be in [0, 1), got {}",
                self.oscillation_tolerance
            )));
        }
        if self.max_root_iterations == 0 {
            return Err(LaplaceError::InvalidConfig(
                "max_root_iterations must be > 0".to_string(),
            ));
        }
        if self.lag_stride == Some(0) {
            return Err(LaplaceError::InvalidConfig(
                "lag_stride must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LaplaceConfig {
    fn default() -> Self {
        Self::new()
    }
}

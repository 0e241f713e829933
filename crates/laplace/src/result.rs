//! Laplace lens output.

use num_complex::Complex;
use serde::{Deserialize, Serialize};

use crate::poles::Stability;

/// Result of [`laplace_lens`](crate::laplace_lens).
///
/// Poles are continuous-time (rad/s) and never empty. The dominant pole is the
/// one with the largest real part; `natural_frequency` and `damping_ratio`
/// describe it. Discrete poles and AR coefficients refer to the lag stride:
/// one AR step spans [`stride`](Self::stride) samples.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LaplaceResult {
    poles: Vec<Complex<f64>>,
    discrete_poles: Vec<Complex<f64>>,
    dominant_pole: Complex<f64>,
    stability: Stability,
    natural_frequency: f64,
    damping_ratio: f64,
    ar_coefficients: Vec<f64>,
    order: usize,
    stride: usize,
    residual_variance: f64,
}

impl LaplaceResult {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        poles: Vec<Complex<f64>>,
        discrete_poles: Vec<Complex<f64>>,
        dominant_pole: Complex<f64>,
        stability: Stability,
        natural_frequency: f64,
        damping_ratio: f64,
        ar_coefficients: Vec<f64>,
        stride: usize,
        residual_variance: f64,
    ) -> Self {
        let order = ar_coefficients.len();
        Self {
            poles,
            discrete_poles,
            dominant_pole,
            stability,
            natural_frequency,
            damping_ratio,
            ar_coefficients,
            order,
            stride,
            residual_variance,
        }
    }

    /// Returns the continuous-time poles (rad/s).
    pub fn poles(&self) -> &[Complex<f64>] {
        &self.poles
    }

    /// Returns the discrete-time poles (roots of the AR characteristic
    /// polynomial), per stride step.
    pub fn discrete_poles(&self) -> &[Complex<f64>] {
        &self.discrete_poles
    }

    /// Returns the dominant continuous-time pole.
    pub fn dominant_pole(&self) -> Complex<f64> {
        self.dominant_pole
    }

    /// Returns the stability classification.
    pub fn stability(&self) -> Stability {
        self.stability
    }

    /// Returns the natural frequency of the dominant pole (Hz).
    pub fn natural_frequency(&self) -> f64 {
        self.natural_frequency
    }

    /// Returns the damping ratio of the dominant pole.
    ///
    /// Positive for decaying, near zero for sustained and negative for growing modes.
    pub fn damping_ratio(&self) -> f64 {
        self.damping_ratio
    }

    /// Returns the fitted AR coefficients `a1..ap`.
    pub fn ar_coefficients(&self) -> &[f64] {
        &self.ar_coefficients
    }

    /// Returns the fitted AR order (may be below the requested order).
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns the lag stride in samples.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns the residual variance of the fit, in squared signal units.
    ///
    /// Measured on the pre-averaged series when the stride exceeds 1.
    pub fn residual_variance(&self) -> f64 {
        self.residual_variance
    }
}

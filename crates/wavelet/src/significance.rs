//! Red-noise background for transient detection.
//!
//! Wavelet power of an AR(1) background with lag-1 autocorrelation `a` and
//! variance `var` is chi-squared with two degrees of freedom around
//! `var * P(period)`, where `P` is the red-noise spectrum of Torrence &
//! Compo (1998, eq. 16). The variance is estimated robustly (median absolute
//! deviation) so the transients being looked for do not inflate their own
//! background.

use statrs::distribution::{ChiSquared, ContinuousCDF};
use std::f64::consts::{LN_2, PI};

use crate::error::WaveletError;

/// Degrees of freedom of a single complex Morlet coefficient.
const MORLET_DOF: f64 = 2.0;

/// Per-scale background a flagged cell must clear.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Background {
    /// Estimated lag-1 autocorrelation, clamped to `[0, 0.99]`.
    pub(crate) lag1: f64,
    /// Red-noise power at the significance quantile, per scale (signal units squared).
    pub(crate) floor: Vec<f64>,
    /// Quantile of `chi2_2 / 2` over its median: the factor by which a cell
    /// must exceed its scale's median power.
    pub(crate) median_ratio: f64,
}

impl Background {
    /// A background that never blocks a cell.
    #[cfg(test)]
    pub(crate) fn none(n_scales: usize) -> Self {
        Self {
            lag1: 0.0,
            floor: vec![0.0; n_scales],
            median_ratio: 0.0,
        }
    }
}

/// Builds the red-noise background of `signal` (sampled every `dt` seconds)
/// at confidence `level` for each period in `periods` (seconds).
pub(crate) fn red_noise_background(
    signal: &[f64],
    dt: f64,
    periods: &[f64],
    level: f64,
) -> Result<Background, WaveletError> {
    let chisq = ChiSquared::new(MORLET_DOF)
        .map_err(|e| WaveletError::SignificanceFailed(e.to_string()))?;
    let quantile = chisq.inverse_cdf(level) / MORLET_DOF;

    let lag1 = estimate_lag1(signal);
    let (_, robust_sd) = biolens_stats::median_and_robust_sd(signal);
    let variance = robust_sd * robust_sd;
    let floor = red_noise_spectrum(lag1, dt, periods)
        .into_iter()
        .map(|p| variance * p * quantile)
        .collect();

    Ok(Background {
        lag1,
        floor,
        median_ratio: quantile / LN_2,
    })
}

/// Estimates lag-1 autocorrelation via the Yule-Walker method.
///
/// Clamped to `[0.0, 0.99]`; 0.0 for constant or single-sample input.
fn estimate_lag1(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let mean = biolens_stats::mean(data);
    let centered: Vec<f64> = data.iter().map(|&x| x - mean).collect();

    let sum_sq: f64 = centered.iter().map(|&x| x * x).sum();
    if sum_sq < f64::EPSILON {
        return 0.0;
    }

    let sum_cross: f64 = centered.windows(2).map(|w| w[0] * w[1]).sum();
    (sum_cross / sum_sq).clamp(0.0, 0.99)
}

/// Red-noise spectrum normalized to unit variance (Torrence & Compo eq. 16).
fn red_noise_spectrum(lag1: f64, dt: f64, periods: &[f64]) -> Vec<f64> {
    periods
        .iter()
        .map(|&period| {
            let cos_term = (2.0 * PI * dt / period).cos();
            (1.0 - lag1 * lag1) / (1.0 - 2.0 * lag1 * cos_term + lag1 * lag1)
        })
        .collect()
}

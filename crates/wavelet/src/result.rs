//! Wavelet lens output.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::transient::TransientEvent;

/// Result of [`wavelet_lens`](crate::wavelet_lens).
///
/// The power map has one row per scale and one column per sample. Scales,
/// periods and the cone of influence are in seconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaveletResult {
    scales: Vec<f64>,
    periods: Vec<f64>,
    coi: Vec<f64>,
    power: Array2<f64>,
    transients: Vec<TransientEvent>,
    noise_floor: Vec<f64>,
    lag1: f64,
    dt: f64,
    dj: f64,
}

impl WaveletResult {
    pub(crate) fn new(
        scales: Vec<f64>,
        periods: Vec<f64>,
        coi: Vec<f64>,
        power: Array2<f64>,
        transients: Vec<TransientEvent>,
        noise_floor: Vec<f64>,
        lag1: f64,
        dt: f64,
        dj: f64,
    ) -> Self {
        Self {
            scales,
            periods,
            coi,
            power,
            transients,
            noise_floor,
            lag1,
            dt,
            dj,
        }
    }

    /// Returns the scale values (seconds), ascending.
    pub fn scales(&self) -> &[f64] {
        &self.scales
    }

    /// Returns the Fourier-equivalent periods (seconds).
    pub fn periods(&self) -> &[f64] {
        &self.periods
    }

    /// Returns the cone of influence per sample (seconds).
    ///
    /// Cells whose period exceeds this value are affected by the record edges.
    pub fn coi(&self) -> &[f64] {
        &self.coi
    }

    /// Returns the power map `|W(s, t)|^2`, shape `(n_scales, n_times)`.
    pub fn power(&self) -> &Array2<f64> {
        &self.power
    }

    /// Returns the detected transient events, sorted by time.
    pub fn transients(&self) -> &[TransientEvent] {
        &self.transients
    }

    /// Returns `true` when at least one transient was detected.
    pub fn has_transients(&self) -> bool {
        !self.transients.is_empty()
    }

    /// Returns the red-noise power per scale at the configured confidence
    /// level. No transient cell lies below it.
    pub fn noise_floor(&self) -> &[f64] {
        &self.noise_floor
    }

    /// Returns the lag-1 autocorrelation of the red-noise background.
    pub fn lag1(&self) -> f64 {
        self.lag1
    }

    /// Returns the sampling interval used (seconds).
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the scale spacing used.
    pub fn dj(&self) -> f64 {
        self.dj
    }

    /// Returns the number of scales.
    pub fn n_scales(&self) -> usize {
        self.scales.len()
    }

    /// Returns the number of time points.
    pub fn n_times(&self) -> usize {
        self.coi.len()
    }

    /// Computes the global wavelet spectrum.
    ///
    /// For each scale, returns the time-averaged power `(1/N) * sum_t |W(s,t)|^2`.
    pub fn global_wavelet_spectrum(&self) -> Vec<f64> {
        self.power
            .rows()
            .into_iter()
            .map(|row| row.mean().unwrap_or(0.0))
            .collect()
    }
}

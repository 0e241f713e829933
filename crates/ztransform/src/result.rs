//! Z-transform lens output.

use serde::{Deserialize, Serialize};

use crate::biquad::{Biquad, cascade_magnitude};
use crate::cutoff::Cutoff;

/// Result of [`z_transform_lens`](crate::z_transform_lens).
///
/// `filtered_signal` has exactly the input length and the cutoff never
/// exceeds the Nyquist frequency.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZTransformResult {
    filtered_signal: Vec<f64>,
    cutoff: Cutoff,
    noise_reduction_percent: f64,
    sections: Vec<Biquad>,
    rate_hz: f64,
}

impl ZTransformResult {
    pub(crate) fn new(
        filtered_signal: Vec<f64>,
        cutoff: Cutoff,
        noise_reduction_percent: f64,
        sections: Vec<Biquad>,
        rate_hz: f64,
    ) -> Self {
        Self {
            filtered_signal,
            cutoff,
            noise_reduction_percent,
            sections,
            rate_hz,
        }
    }

    /// Returns the zero-phase filtered signal.
    pub fn filtered_signal(&self) -> &[f64] {
        &self.filtered_signal
    }

    /// Consumes the result and returns the filtered signal.
    pub fn into_filtered_signal(self) -> Vec<f64> {
        self.filtered_signal
    }

    /// Returns the cutoff frequency (Hz).
    pub fn cutoff_frequency(&self) -> f64 {
        self.cutoff.frequency_hz
    }

    /// Returns how the cutoff was chosen.
    pub fn cutoff(&self) -> &Cutoff {
        &self.cutoff
    }

    /// Returns `max(0, (1 - std(filtered) / std(raw)) * 100)`.
    pub fn noise_reduction_percent(&self) -> f64 {
        self.noise_reduction_percent
    }

    /// Returns the filter as second-order sections.
    pub fn coefficients(&self) -> &[Biquad] {
        &self.sections
    }

    /// Returns the Butterworth order.
    pub fn order(&self) -> usize {
        2 * self.sections.len()
    }

    /// Single-pass magnitude response at `frequency_hz`.
    pub fn frequency_response(&self, frequency_hz: f64) -> f64 {
        cascade_magnitude(&self.sections, frequency_hz, self.rate_hz)
    }

    /// Magnitude response of the forward-backward application (the square of
    /// [`frequency_response`](Self::frequency_response)).
    pub fn zero_phase_response(&self, frequency_hz: f64) -> f64 {
        self.frequency_response(frequency_hz).powi(2)
    }
}

//! Fourier lens output.

use serde::{Deserialize, Serialize};

use biolens_signal::SECONDS_PER_HOUR;

/// Converts a frequency in Hz to a period in hours (infinite for 0 Hz).
pub fn period_hours(frequency_hz: f64) -> f64 {
    if frequency_hz > 0.0 {
        1.0 / (frequency_hz * SECONDS_PER_HOUR)
    } else {
        f64::INFINITY
    }
}

/// A local maximum of the periodogram.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpectralPeak {
    /// Index into the frequency grid.
    pub index: usize,
    /// Peak frequency (Hz).
    pub frequency: f64,
    /// Normalized power at the peak.
    pub power: f64,
}

impl SpectralPeak {
    /// Returns the period of this peak, in hours.
    pub fn period_hours(&self) -> f64 {
        period_hours(self.frequency)
    }
}

/// Result of [`fourier_lens`](crate::fourier_lens).
///
/// `frequencies` is strictly ascending, in Hz, and never exceeds the Nyquist
/// frequency. `power` is the normalized GLS power (0 to 1) at each frequency.
///
/// A degenerate result (see [`FourierResult::is_degenerate`]) carries
/// `dominant_frequency = 0`, an infinite period and zero significance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FourierResult {
    frequencies: Vec<f64>,
    power: Vec<f64>,
    dominant_frequency: f64,
    dominant_power: f64,
    significance: f64,
    n_independent: f64,
    resolves_expected: bool,
}

impl FourierResult {
    pub(crate) fn new(
        frequencies: Vec<f64>,
        power: Vec<f64>,
        dominant_frequency: f64,
        dominant_power: f64,
        significance: f64,
        n_independent: f64,
        resolves_expected: bool,
    ) -> Self {
        Self {
            frequencies,
            power,
            dominant_frequency,
            dominant_power,
            significance,
            n_independent,
            resolves_expected,
        }
    }

    pub(crate) fn degenerate(frequencies: Vec<f64>) -> Self {
        let power = vec![0.0; frequencies.len()];
        Self::new(frequencies, power, 0.0, 0.0, 0.0, 0.0, false)
    }

    /// Returns the frequency grid (Hz, ascending).
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// Returns the normalized power at each grid frequency.
    pub fn power(&self) -> &[f64] {
        &self.power
    }

    /// Returns the grid expressed as periods in hours (descending).
    pub fn periods_hours(&self) -> Vec<f64> {
        self.frequencies.iter().map(|&f| period_hours(f)).collect()
    }

    /// Returns the frequency of maximum power (Hz), or 0 when degenerate.
    pub fn dominant_frequency(&self) -> f64 {
        self.dominant_frequency
    }

    /// Returns `1 / (dominant_frequency * 3600)`, infinite when degenerate.
    pub fn dominant_period_hours(&self) -> f64 {
        period_hours(self.dominant_frequency)
    }

    /// Returns the normalized power of the dominant peak.
    pub fn dominant_power(&self) -> f64 {
        self.dominant_power
    }

    /// Returns the confidence (0 to 1) that the dominant peak is not noise.
    pub fn significance(&self) -> f64 {
        self.significance
    }

    /// Returns the false-alarm probability of the dominant peak (`1 - significance`).
    pub fn false_alarm_probability(&self) -> f64 {
        1.0 - self.significance
    }

    /// Returns the number of independent frequencies used for the false-alarm model.
    pub fn n_independent(&self) -> f64 {
        self.n_independent
    }

    /// Returns whether the grid resolves the configured expected period.
    pub fn resolves_expected(&self) -> bool {
        self.resolves_expected
    }

    /// Returns `true` when no meaningful dominant frequency was found.
    pub fn is_degenerate(&self) -> bool {
        !(self.dominant_frequency > 0.0)
    }

    /// Returns up to `k` local maxima of the periodogram, strongest first.
    pub fn top_peaks(&self, k: usize) -> Vec<SpectralPeak> {
        let p = &self.power;
        let len = p.len();
        let mut peaks: Vec<SpectralPeak> = (0..len)
            .filter(|&i| {
                let left = i == 0 || p[i] > p[i - 1];
                let right = i + 1 == len || p[i] >= p[i + 1];
                left && right && p[i] > 0.0
            })
            .map(|i| SpectralPeak {
                index: i,
                frequency: self.frequencies[i],
                power: p[i],
            })
            .collect();
        peaks.sort_by(|a, b| b.power.total_cmp(&a.power).then(a.index.cmp(&b.index)));
        peaks.truncate(k);
        peaks
    }
}

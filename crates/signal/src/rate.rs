//! Nominal sampling rate of a signal.

use serde::{Deserialize, Serialize};

use crate::error::SignalError;

/// Seconds per hour; periods are reported in hours, frequencies in Hz.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// A validated nominal sampling rate in samples per second (Hz).
///
/// The Nyquist frequency is derived once at construction and never changes.
///
/// # Example
///
/// ```
/// use biolens_signal::SamplingRate;
///
/// let rate = SamplingRate::new(1.0 / 300.0)?; // one sample every 5 minutes
/// assert!((rate.interval_secs() - 300.0).abs() < 1e-9);
/// # Ok::<(), biolens_signal::SignalError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct SamplingRate {
    hz: f64,
    nyquist: f64,
}

impl SamplingRate {
    /// Creates a sampling rate.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`SignalError::InvalidSamplingRate`] | `hz` is zero, negative, NaN or infinite |
    pub fn new(hz: f64) -> Result<Self, SignalError> {
        if !hz.is_finite() || hz <= 0.0 {
            return Err(SignalError::InvalidSamplingRate(hz));
        }
        Ok(Self {
            hz,
            nyquist: hz / 2.0,
        })
    }

    /// Creates a sampling rate from the spacing between samples, in seconds.
    pub fn from_interval_secs(secs: f64) -> Result<Self, SignalError> {
        if !secs.is_finite() || secs <= 0.0 {
            return Err(SignalError::InvalidSamplingRate(1.0 / secs));
        }
        Self::new(1.0 / secs)
    }

    /// Returns the rate in Hz.
    pub fn hz(&self) -> f64 {
        self.hz
    }

    /// Returns the Nyquist frequency (`hz / 2`).
    pub fn nyquist(&self) -> f64 {
        self.nyquist
    }

    /// Returns the nominal spacing between samples, in seconds.
    pub fn interval_secs(&self) -> f64 {
        1.0 / self.hz
    }

    /// Nominal time span covered by `n` samples, in seconds.
    pub fn span_secs(&self, n: usize) -> f64 {
        n.saturating_sub(1) as f64 / self.hz
    }
}

impl TryFrom<f64> for SamplingRate {
    type Error = SignalError;

    fn try_from(hz: f64) -> Result<Self, Self::Error> {
        Self::new(hz)
    }
}

impl From<SamplingRate> for f64 {
    fn from(rate: SamplingRate) -> Self {
        rate.hz
    }
}

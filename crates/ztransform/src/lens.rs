//! The Z-transform lens: zero-phase low-pass denoising.

use tracing::debug;

use biolens_signal::{SamplingRate, check_signal};

use crate::biquad::butterworth_lowpass;
use crate::config::ZTransformConfig;
use crate::cutoff::resolve_cutoff;
use crate::error::ZTransformError;
use crate::filtfilt::filtfilt;
use crate::result::ZTransformResult;

/// Minimum samples for a meaningful noise-reduction estimate.
pub const MIN_SAMPLES: usize = 4;

/// Percentage drop in standard deviation from `raw` to `filtered`, floored at 0.
pub fn noise_reduction_percent(raw: &[f64], filtered: &[f64]) -> f64 {
    let sd_raw = biolens_stats::sd(raw);
    if !(sd_raw > 0.0) {
        return 0.0;
    }
    let ratio = biolens_stats::sd(filtered) / sd_raw;
    ((1.0 - ratio) * 100.0).max(0.0)
}

/// Low-pass filters `signal` with a zero-phase Butterworth cascade.
///
/// `cutoff_hint` is typically the dominant frequency found by the Fourier
/// lens; see [`resolve_cutoff`](crate::resolve_cutoff) for how the cutoff is
/// chosen. The input is never modified.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`ZTransformError::InvalidConfig`] | `config` fails validation |
/// | [`ZTransformError::InvalidCutoffHint`] | hint is zero, negative or non-finite |
/// | [`ZTransformError::Signal`] | too few samples, non-finite or constant signal |
#[tracing::instrument(skip_all, fields(n = signal.len(), rate = rate.hz(), hint = ?cutoff_hint))]
pub fn z_transform_lens(
    signal: &[f64],
    rate: SamplingRate,
    cutoff_hint: Option<f64>,
    config: &ZTransformConfig,
) -> Result<ZTransformResult, ZTransformError> {
    config.validate()?;
    let cutoff = resolve_cutoff(cutoff_hint, rate.nyquist(), config)?;
    check_signal(signal, MIN_SAMPLES)?;

    let sections = butterworth_lowpass(config.order(), cutoff.frequency_hz, rate.hz());
    debug!(
        cutoff_hz = cutoff.frequency_hz,
        clamped = cutoff.clamped,
        order = config.order(),
        "filter designed"
    );

    let filtered = filtfilt(&sections, signal);
    let reduction = noise_reduction_percent(signal, &filtered);
    debug!(noise_reduction_percent = reduction, "signal filtered");

    Ok(ZTransformResult::new(
        filtered, cutoff, reduction, sections, rate.hz(),
    ))
}

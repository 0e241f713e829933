//! The wavelet lens: localized transient events in a uniformly sampled signal.

use ndarray::Array2;
use tracing::debug;

use biolens_signal::{SamplingRate, check_signal};

use crate::config::WaveletConfig;
use crate::cwt::{coi_mask, cwt_morlet};
use crate::error::WaveletError;
use crate::result::WaveletResult;
use crate::significance::red_noise_background;
use crate::transient::{Detection, EDGE_PERIOD_SAMPLES, detect_transients};

/// Minimum samples for per-scale statistics to be meaningful.
pub const MIN_SAMPLES: usize = 8;

/// Computes the Morlet power map of `signal` and detects transient events.
///
/// The signal must be uniformly sampled at `rate`. Power is reported in
/// squared signal units (the signal is centred but not rescaled). A cell is
/// part of a transient only when it stands out from its own scale and from a
/// red-noise background fitted to the whole record; see the
/// [`noise_floor`](WaveletResult::noise_floor) of the result.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`WaveletError::InvalidConfig`] | `config` fails validation |
/// | [`WaveletError::Signal`] | too few samples, non-finite or constant signal |
/// | [`WaveletError::SignificanceFailed`] | background quantile could not be evaluated |
#[tracing::instrument(skip_all, fields(n = signal.len(), rate = rate.hz()))]
pub fn wavelet_lens(
    signal: &[f64],
    rate: SamplingRate,
    config: &WaveletConfig,
) -> Result<WaveletResult, WaveletError> {
    config.validate()?;
    check_signal(signal, MIN_SAMPLES)?;

    let dt = rate.interval_secs();
    let cwt = cwt_morlet(
        signal,
        dt,
        config.omega0(),
        config.dj(),
        config.s0_samples() * dt,
        config.j_max(),
    );
    debug!(
        n_scales = cwt.scales.len(),
        max_period_s = cwt.periods.last().copied().unwrap_or(0.0),
        "wavelet transform computed"
    );

    let reliable = if config.mask_coi() {
        coi_mask(&cwt.periods, &cwt.coi)
    } else {
        Array2::from_elem(cwt.power.dim(), true)
    };
    let background = red_noise_background(
        signal,
        dt,
        &cwt.periods,
        config.significance_level(),
    )?;
    debug!(lag1 = background.lag1, "red-noise background fitted");

    let detection = Detection {
        threshold_sigma: config.threshold_sigma(),
        short_scales: cwt
            .periods
            .iter()
            .map(|&p| p <= EDGE_PERIOD_SAMPLES * dt)
            .collect(),
        octave: (1.0 / config.dj()).round().max(1.0) as usize,
        background,
    };
    let transients = detect_transients(&cwt.power, &reliable, &detection);
    debug!(n_transients = transients.len(), "transient detection done");

    Ok(WaveletResult::new(
        cwt.scales,
        cwt.periods,
        cwt.coi,
        cwt.power,
        transients,
        detection.background.floor,
        detection.background.lag1,
        dt,
        config.dj(),
    ))
}

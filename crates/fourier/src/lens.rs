//! The Fourier lens: dominant periodicity of a possibly irregular signal.

use tracing::{debug, warn};

use biolens_signal::{SECONDS_PER_HOUR, SamplingRate, check_signal, resolve_timestamps};

use crate::config::FourierConfig;
use crate::error::FourierError;
use crate::grid::{frequency_grid, grid_resolves};
use crate::periodogram::{gls_power, independent_frequencies, peak_significance};
use crate::result::FourierResult;

/// Minimum samples for a sinusoid-plus-offset fit to leave residual freedom.
pub const MIN_SAMPLES: usize = 4;

/// Detects the dominant periodic rhythm of `signal`.
///
/// `timestamps`, when given, must be seconds and match `signal` in length;
/// `None` means uniform spacing at `1 / rate` starting at 0. The caller's
/// buffers are never modified.
///
/// When the longest period of interest lies above the Nyquist frequency the
/// grid cannot bracket the target range and a degenerate result is returned
/// (see [`FourierResult::is_degenerate`]).
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`FourierError::InvalidConfig`] | `config` fails validation |
/// | [`FourierError::Signal`] | too few samples, non-finite or constant signal, bad timestamps |
/// | [`FourierError::GridTooLarge`] | tolerance needs more grid points than allowed |
#[tracing::instrument(skip_all, fields(n = signal.len(), rate = rate.hz()))]
pub fn fourier_lens(
    signal: &[f64],
    timestamps: Option<&[f64]>,
    rate: SamplingRate,
    config: &FourierConfig,
) -> Result<FourierResult, FourierError> {
    config.validate()?;
    check_signal(signal, MIN_SAMPLES)?;
    let times = resolve_timestamps(signal.len(), timestamps, rate, config.max_span_ratio())?;

    let f_min = 1.0 / (config.max_period_hours() * SECONDS_PER_HOUR);
    let f_max = rate.nyquist();
    let tolerance = config.tolerance_fraction();
    let grid = frequency_grid(f_min, f_max, tolerance, config.max_grid_points())?;
    if grid.is_empty() {
        warn!(f_min, f_max, "frequency grid cannot bracket the target range");
        return Ok(FourierResult::degenerate(grid));
    }

    let expected = 1.0 / (config.expected_period_hours() * SECONDS_PER_HOUR);
    let resolves_expected = grid_resolves(&grid, expected, tolerance);
    if !resolves_expected {
        warn!(
            expected_hz = expected,
            "expected period lies outside the frequency grid"
        );
    }
    debug!(n_grid = grid.len(), f_min, f_max, "frequency grid built");

    let power = gls_power(&times, signal, &grid);

    let Some(peak) = biolens_stats::argmax(&power).filter(|&i| power[i] > 0.0 && grid[i] > 0.0)
    else {
        warn!("periodogram has no positive peak");
        return Ok(FourierResult::degenerate(grid));
    };

    let span = times[times.len() - 1] - times[0];
    let n_independent = independent_frequencies(span, f_min, f_max, grid.len());
    let significance = peak_significance(power[peak], signal.len(), n_independent);
    debug!(
        dominant_hz = grid[peak],
        dominant_hours = 1.0 / (grid[peak] * SECONDS_PER_HOUR),
        power = power[peak],
        significance,
        "dominant frequency found"
    );

    let dominant_frequency = grid[peak];
    let dominant_power = power[peak];
    Ok(FourierResult::new(
        grid,
        power,
        dominant_frequency,
        dominant_power,
        significance,
        n_independent,
        resolves_expected,
    ))
}

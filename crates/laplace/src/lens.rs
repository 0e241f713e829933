//! The Laplace lens: dynamic stability of a uniformly sampled signal.

use tracing::{debug, warn};

use biolens_signal::{SamplingRate, check_signal};

use crate::ar::{ArFit, fit_ar};
use crate::config::LaplaceConfig;
use crate::error::LaplaceError;
use crate::poles::{
    classify, damping_ratio, discrete_to_continuous, dominant_pole, natural_frequency_hz,
};
use crate::result::LaplaceResult;
use crate::roots::characteristic_roots;
use crate::stride::{autocorrelation_zero_lag, max_stride, moving_average};

/// Minimum samples for an AR(1) fit with intercept to leave residual freedom.
pub const MIN_SAMPLES: usize = 4;

/// Highest order not above `order` that leaves one residual degree of freedom
/// for `n` samples at stride 1.
fn usable_order(n: usize, order: usize) -> usize {
    order.min(n.saturating_sub(2) / 2)
}

/// Picks the lag stride: the configured one, or the autocorrelation zero
/// crossing, capped so an AR(`order`) fit still has rows to spare.
fn choose_stride(data: &[f64], order: usize, config: &LaplaceConfig) -> usize {
    let cap = max_stride(data.len(), order);
    match config.lag_stride() {
        Some(stride) if stride > cap => {
            warn!(requested = stride, usable = cap, "record too short for requested lag stride");
            cap
        }
        Some(stride) => stride,
        None => autocorrelation_zero_lag(data).min(cap),
    }
}

/// Fits the highest order not above `order` whose normal equations are solvable.
fn fit_reducing(data: &[f64], order: usize, stride: usize) -> Result<ArFit, LaplaceError> {
    // rows n - p m >= p + 2 keep at least one residual degree of freedom
    let max_order = order.min(data.len().saturating_sub(2) / (stride + 1));
    if max_order < order {
        warn!(requested = order, usable = max_order, "record too short for requested order");
    }
    for p in (1..=max_order).rev() {
        if let Some(fit) = fit_ar(data, p, stride) {
            if p < order {
                warn!(requested = order, fitted = p, "reduced AR order");
            }
            return Ok(fit);
        }
        debug!(order = p, stride, "normal equations singular");
    }
    Err(LaplaceError::FitFailed { order: max_order })
}

/// Fits an autoregressive model to `signal` and classifies its poles.
///
/// The signal is standardized, averaged over the lag stride and fitted on
/// lags one stride apart; see [`LaplaceConfig::with_lag_stride`]. Continuous
/// poles follow from `s = ln(z) * rate / stride`. AR coefficients are
/// scale-invariant, and the residual variance is reported back in signal units.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`LaplaceError::InvalidConfig`] | `config` fails validation |
/// | [`LaplaceError::Signal`] | too few samples, non-finite or constant signal |
/// | [`LaplaceError::FitFailed`] | no order down to 1 can be fitted |
/// | [`LaplaceError::RootsDidNotConverge`] | characteristic roots did not converge |
#[tracing::instrument(skip_all, fields(n = signal.len(), rate = rate.hz()))]
pub fn laplace_lens(
    signal: &[f64],
    rate: SamplingRate,
    config: &LaplaceConfig,
) -> Result<LaplaceResult, LaplaceError> {
    config.validate()?;
    check_signal(signal, MIN_SAMPLES)?;

    let (_, sd, standardized) = biolens_stats::standardize(signal);
    let order = usable_order(standardized.len(), config.order());
    let stride = choose_stride(&standardized, order, config);
    let averaged = moving_average(&standardized, stride);
    let fit = fit_reducing(&averaged, config.order(), stride)?;
    debug!(
        order = fit.coefficients.len(),
        stride,
        coefficients = ?fit.coefficients,
        "AR model fitted"
    );

    let discrete = characteristic_roots(&fit.coefficients, config.max_root_iterations()).ok_or(
        LaplaceError::RootsDidNotConverge {
            iterations: config.max_root_iterations(),
        },
    )?;
    let step_rate = rate.hz() / stride as f64;
    let poles: Vec<_> = discrete
        .iter()
        .map(|&z| discrete_to_continuous(z, step_rate))
        .collect();
    let dominant = dominant_pole(&poles).ok_or(LaplaceError::FitFailed {
        order: config.order(),
    })?;
    let stability = classify(&poles, config.oscillation_tolerance());
    debug!(%stability, dominant = %dominant, "poles classified");

    Ok(LaplaceResult::new(
        poles,
        discrete,
        dominant,
        stability,
        natural_frequency_hz(dominant),
        damping_ratio(dominant),
        fit.coefficients,
        stride,
        fit.residual_variance * sd * sd,
    ))
}

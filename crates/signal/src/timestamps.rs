//! Timestamp resolution and unit consistency checks.
//!
//! Timestamps are always seconds. Nothing here guesses or rescales units:
//! timestamps that disagree with the nominal sampling rate are rejected with
//! [`SignalError::UnitMismatch`].

use crate::error::SignalError;
use crate::rate::SamplingRate;

/// Default bound on how far the observed span may deviate from the nominal
/// span `(n - 1) / rate`, as a ratio in either direction.
///
/// Hours passed as seconds shrink the span by 3600x; gaps in the record
/// stretch it by a small factor. A ratio of 10 separates the two.
pub const DEFAULT_MAX_SPAN_RATIO: f64 = 10.0;

/// Returns `i / rate` for `i` in `0..n`.
pub fn uniform_timestamps(n: usize, rate: SamplingRate) -> Vec<f64> {
    (0..n).map(|i| i as f64 / rate.hz()).collect()
}

/// Resolves the timestamps (seconds) used by a lens.
///
/// With `None`, synthesizes uniform timestamps at `1 / rate`. Otherwise the
/// provided timestamps are checked and copied unchanged.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SignalError::LengthMismatch`] | `timestamps.len() != n` |
/// | [`SignalError::UnitMismatch`] | non-finite, decreasing, zero span, or span outside `[nominal / max_span_ratio, nominal * max_span_ratio]` |
pub fn resolve_timestamps(
    n: usize,
    timestamps: Option<&[f64]>,
    rate: SamplingRate,
    max_span_ratio: f64,
) -> Result<Vec<f64>, SignalError> {
    let Some(ts) = timestamps else {
        return Ok(uniform_timestamps(n, rate));
    };

    if ts.len() != n {
        return Err(SignalError::LengthMismatch {
            signal: n,
            timestamps: ts.len(),
        });
    }
    if let Some(index) = ts.iter().position(|t| !t.is_finite()) {
        return Err(SignalError::UnitMismatch {
            reason: format!("non-finite timestamp at index {index}"),
        });
    }
    if let Some(index) = ts.windows(2).position(|w| w[1] < w[0]) {
        return Err(SignalError::UnitMismatch {
            reason: format!("timestamps decrease at index {}", index + 1),
        });
    }

    if n < 2 {
        return Ok(ts.to_vec());
    }

    let span = ts[n - 1] - ts[0];
    if span <= 0.0 {
        return Err(SignalError::UnitMismatch {
            reason: "timestamps span zero seconds".to_string(),
        });
    }

    let nominal = rate.span_secs(n);
    let ratio = span / nominal;
    if ratio < 1.0 / max_span_ratio || ratio > max_span_ratio {
        return Err(SignalError::UnitMismatch {
            reason: format!(
                "timestamps span {span} s but {n} samples at {} Hz span {nominal} s \
                 (ratio {ratio:.3e}); timestamps must be in seconds",
                rate.hz()
            ),
        });
    }

    Ok(ts.to_vec())
}

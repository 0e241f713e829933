//! Lag stride selection and pre-averaging for oversampled records.
//!
//! A rhythm sampled hundreds of times per cycle puts its AR(2) poles almost
//! on `z = 1`, where a little measurement noise drags them onto the real
//! axis. Fitting `x[t]` on `x[t-m], x[t-2m], ...` with `m` near a quarter
//! cycle moves the poles out to `z ~ i`, and averaging each sample with its
//! `m - 1` predecessors divides white measurement noise by `m` while keeping
//! every mode of the signal (a moving average is linear and time invariant).
//! The lagged windows `t-m, t-2m, ...` do not overlap, so their noise stays
//! uncorrelated.

/// First lag at which the sample autocorrelation of `data` drops to zero or
/// below, searched up to `n / 2`.
///
/// Returns 1 for slowly decorrelating records that never cross zero within
/// that range, and for records too short to search.
pub(crate) fn autocorrelation_zero_lag(data: &[f64]) -> usize {
    let n = data.len();
    if n < 4 {
        return 1;
    }
    let mean = data.iter().sum::<f64>() / n as f64;
    let centered: Vec<f64> = data.iter().map(|&x| x - mean).collect();
    let sum_sq: f64 = centered.iter().map(|&x| x * x).sum();
    if sum_sq < f64::EPSILON {
        return 1;
    }

    (1..=n / 2)
        .find(|&lag| {
            let cross: f64 = centered
                .iter()
                .zip(&centered[lag..])
                .map(|(a, b)| a * b)
                .sum();
            cross <= 0.0
        })
        .unwrap_or(1)
}

/// Largest stride that leaves an AR(`order`) fit on the averaged series at
/// least one residual degree of freedom.
///
/// Averaging over `m` samples drops `m - 1` values and the first `order * m`
/// averaged values only serve as lags, so `n - m + 1 - order * m` rows must
/// reach `order + 2`.
pub(crate) fn max_stride(n: usize, order: usize) -> usize {
    (n.saturating_sub(order + 1) / (order + 1)).max(1)
}

/// Trailing moving average over `window` samples.
///
/// The output has `n - window + 1` values; `out[i]` averages
/// `data[i..i + window]`. A window of 1 returns the input unchanged.
pub(crate) fn moving_average(data: &[f64], window: usize) -> Vec<f64> {
    if window <= 1 {
        return data.to_vec();
    }
    data.windows(window)
        .map(|w| w.iter().sum::<f64>() / window as f64)
        .collect()
}

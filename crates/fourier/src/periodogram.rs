//! Generalized Lomb-Scargle periodogram (floating mean).
//!
//! Follows Zechmeister & Kürster (2009) with uniform weights. The power at a
//! frequency is the fraction of variance explained by a sinusoid plus offset
//! fitted at that frequency, so it lies in `[0, 1]` and is valid for
//! irregular or gapped sampling.

use statrs::distribution::{Beta, ContinuousCDF};
use std::f64::consts::PI;

/// Normalized GLS power at every frequency of `grid`.
///
/// `times` are seconds, `values` are raw samples; both must have the same
/// length. Values are centred internally.
pub(crate) fn gls_power(times: &[f64], values: &[f64], grid: &[f64]) -> Vec<f64> {
    let n = values.len();
    let w = 1.0 / n as f64;
    let t0 = times.first().copied().unwrap_or(0.0);
    let t: Vec<f64> = times.iter().map(|&ti| ti - t0).collect();
    let mean = biolens_stats::mean(values);
    let y: Vec<f64> = values.iter().map(|&v| v - mean).collect();
    let yy: f64 = y.iter().map(|&v| w * v * v).sum();

    grid.iter()
        .map(|&f| single_frequency_power(&t, &y, yy, w, 2.0 * PI * f))
        .collect()
}

fn single_frequency_power(t: &[f64], y: &[f64], yy: f64, w: f64, omega: f64) -> f64 {
    if yy <= 0.0 {
        return 0.0;
    }

    let mut c = 0.0;
    let mut s = 0.0;
    let mut yc = 0.0;
    let mut ys = 0.0;
    let mut cc_hat = 0.0;
    let mut cs_hat = 0.0;
    for (&ti, &yi) in t.iter().zip(y) {
        let (sin, cos) = (omega * ti).sin_cos();
        c += w * cos;
        s += w * sin;
        yc += w * yi * cos;
        ys += w * yi * sin;
        cc_hat += w * cos * cos;
        cs_hat += w * cos * sin;
    }
    let ss_hat = 1.0 - cc_hat;

    let cc = cc_hat - c * c;
    let ss = ss_hat - s * s;
    let cs = cs_hat - c * s;
    let d = cc * ss - cs * cs;
    if d <= 1e-12 {
        return 0.0;
    }

    let p = (ss * yc * yc + cc * ys * ys - 2.0 * cs * yc * ys) / (yy * d);
    p.clamp(0.0, 1.0)
}

/// Number of independent frequencies in `[f_min, f_max]` for a record
/// spanning `span` seconds, clamped to `[1, grid_len]`.
pub(crate) fn independent_frequencies(span: f64, f_min: f64, f_max: f64, grid_len: usize) -> f64 {
    let m = (span * (f_max - f_min)).ceil();
    m.clamp(1.0, grid_len.max(1) as f64)
}

/// Probability that the highest of `m` independent noise powers stays below
/// `power`, for `n` samples.
///
/// A single GLS power of pure Gaussian noise follows `Beta(1, (n - 3) / 2)`.
pub(crate) fn peak_significance(power: f64, n: usize, m: f64) -> f64 {
    if n <= 3 || !(power > 0.0) {
        return 0.0;
    }
    let Ok(null) = Beta::new(1.0, (n as f64 - 3.0) / 2.0) else {
        return 0.0;
    };
    let exceed = null.sf(power.min(1.0)).clamp(0.0, 1.0);
    // (1 - exceed)^m without losing precision when exceed is tiny.
    (m * (-exceed).ln_1p()).exp().clamp(0.0, 1.0)
}

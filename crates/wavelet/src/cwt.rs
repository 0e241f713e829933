//! Continuous Wavelet Transform (CWT) with the Morlet wavelet.
//!
//! Computes the time-frequency power map via FFT-based convolution,
//! following Torrence & Compo (1998). The mean-removed signal is even-extended
//! to twice its length before the transform so both record edges see a
//! continuous neighbour instead of a jump to zero.

use ndarray::Array2;
use num_complex::Complex;
use rustfft::FftPlanner;
use std::f64::consts::PI;

/// Raw output of [`cwt_morlet`], in original signal units.
#[derive(Clone, Debug)]
pub(crate) struct Cwt {
    /// Scale values (seconds), ascending.
    pub(crate) scales: Vec<f64>,
    /// Fourier-equivalent periods (seconds), parallel to `scales`.
    pub(crate) periods: Vec<f64>,
    /// Cone of influence per time point (seconds).
    pub(crate) coi: Vec<f64>,
    /// `|W(s, t)|^2`, shape `(n_scales, n_times)`.
    pub(crate) power: Array2<f64>,
}

/// Returns the Morlet Fourier factor that converts scale to period.
pub fn fourier_factor(omega0: f64) -> f64 {
    4.0 * PI / (omega0 + (2.0 + omega0 * omega0).sqrt())
}

/// Computes the Morlet CWT power map of `signal` sampled every `dt` seconds.
///
/// The caller guarantees a finite signal of at least two samples and a
/// validated configuration.
pub(crate) fn cwt_morlet(
    signal: &[f64],
    dt: f64,
    omega0: f64,
    dj: f64,
    s0: f64,
    j_max: Option<usize>,
) -> Cwt {
    let n = signal.len();
    let mean = biolens_stats::mean(signal);

    // Even extension: x0..x(n-1), x(n-1)..x0
    let npad = 2 * n;
    let mut extended: Vec<Complex<f64>> = signal
        .iter()
        .chain(signal.iter().rev())
        .map(|&x| Complex::new(x - mean, 0.0))
        .collect();

    let mut planner = FftPlanner::new();
    let fft_forward = planner.plan_fft_forward(npad);
    let fft_inverse = planner.plan_fft_inverse(npad);

    fft_forward.process(&mut extended);
    let signal_fft = extended;

    let scales = build_scales(n, dt, s0, dj, j_max);
    let k = build_wavenumbers(npad, dt);

    let mut power = Array2::<f64>::zeros((scales.len(), n));
    let norm = 1.0 / npad as f64;

    for (row, &scale) in power.rows_mut().into_iter().zip(scales.iter()) {
        let daughter = morlet_daughter(&k, scale, omega0, dt);

        let mut product: Vec<Complex<f64>> = signal_fft
            .iter()
            .zip(daughter.iter())
            .map(|(&s, &d)| s * d)
            .collect();

        fft_inverse.process(&mut product);

        // rustfft is unnormalized; keep the first n points
        for (cell, c) in row.into_iter().zip(product[..n].iter()) {
            *cell = c.norm_sqr() * norm * norm;
        }
    }

    let ff = fourier_factor(omega0);
    let periods: Vec<f64> = scales.iter().map(|&s| s * ff).collect();
    let coi = compute_coi(n, dt, omega0);

    Cwt {
        scales,
        periods,
        coi,
        power,
    }
}

/// Builds the geometric scale array.
///
/// Scales follow `s0 * 2^(j * dj)` for `j = 0..=J`, where `J` defaults to the
/// largest value keeping the scale within the record length `n * dt`.
fn build_scales(n: usize, dt: f64, s0: f64, dj: f64, j_max: Option<usize>) -> Vec<f64> {
    let j_count = match j_max {
        Some(j) => j,
        None => {
            let val = ((n as f64) * dt / s0).log2() / dj;
            val.floor().max(0.0) as usize
        }
    };
    (0..=j_count)
        .map(|j| s0 * 2.0_f64.powf(j as f64 * dj))
        .collect()
}

/// Builds the angular wavenumber array for the FFT grid.
///
/// Positive frequencies for `i = 0..=npad/2`, negative for `i = npad/2+1..npad`.
fn build_wavenumbers(npad: usize, dt: f64) -> Vec<f64> {
    let df = 2.0 * PI / (npad as f64 * dt);
    (0..npad)
        .map(|i| {
            if i <= npad / 2 {
                i as f64 * df
            } else {
                -((npad - i) as f64) * df
            }
        })
        .collect()
}

/// Builds the Morlet wavelet daughter in the frequency domain.
///
/// Applies the Heaviside function (zero for non-positive wavenumbers).
fn morlet_daughter(k: &[f64], scale: f64, omega0: f64, dt: f64) -> Vec<Complex<f64>> {
    let norm = (2.0 * PI * scale / dt).sqrt() * PI.powf(-0.25);
    k.iter()
        .map(|&ki| {
            if ki > 0.0 {
                let exponent = -0.5 * (scale * ki - omega0).powi(2);
                Complex::new(norm * exponent.exp(), 0.0)
            } else {
                Complex::new(0.0, 0.0)
            }
        })
        .collect()
}

/// Computes the e-folding cone of influence (seconds) for each time point.
fn compute_coi(n: usize, dt: f64, omega0: f64) -> Vec<f64> {
    let coi_factor = fourier_factor(omega0) / 2.0_f64.sqrt();
    (0..n)
        .map(|t| {
            let dist = t.min(n - 1 - t) as f64;
            coi_factor * dt * dist
        })
        .collect()
}

/// Marks cells whose period fits inside the cone of influence.
///
/// `true` means the cell is free of edge effects.
pub(crate) fn coi_mask(periods: &[f64], coi: &[f64]) -> Array2<bool> {
    Array2::from_shape_fn((periods.len(), coi.len()), |(s, t)| periods[s] <= coi[t])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sine(n: usize, period: f64) -> Vec<f64> {
        (0..n)
            .map(|i| (2.0 * PI * i as f64 / period).sin())
            .collect()
    }

    #[test]
    fn scales_are_geometric() {
        let scales = build_scales(64, 1.0, 2.0, 0.5, None);
        // log2(64 / 2) / 0.5 = 10
        assert_eq!(scales.len(), 11);
        assert_relative_eq!(scales[0], 2.0);
        assert_relative_eq!(scales[10], 64.0, max_relative = 1e-12);
        for w in scales.windows(2) {
            assert_relative_eq!(w[1] / w[0], 2.0_f64.sqrt(), max_relative = 1e-12);
        }
    }

    #[test]
    fn scales_with_j_max() {
        let scales = build_scales(64, 1.0, 2.0, 0.25, Some(3));
        assert_eq!(scales.len(), 4);
    }

    #[test]
    fn scales_when_s0_exceeds_record() {
        let scales = build_scales(4, 1.0, 8.0, 0.25, None);
        assert_eq!(scales.len(), 1);
    }

    #[test]
    fn wavenumbers_symmetry() {
        let k = build_wavenumbers(8, 1.0);
        assert_eq!(k[0], 0.0);
        assert!(k[1..=4].iter().all(|&v| v > 0.0));
        assert!(k[5..].iter().all(|&v| v < 0.0));
        assert_relative_eq!(k[1], -k[7], max_relative = 1e-12);
    }

    #[test]
    fn fourier_factor_omega6() {
        // Torrence & Compo: period ~ 1.033 * scale for omega0 = 6
        assert_relative_eq!(fourier_factor(6.0), 1.0330, epsilon = 1e-4);
    }

    #[test]
    fn coi_is_symmetric_and_zero_at_edges() {
        let coi = compute_coi(9, 1.0, 6.0);
        assert_eq!(coi[0], 0.0);
        assert_eq!(coi[8], 0.0);
        for t in 0..9 {
            assert_relative_eq!(coi[t], coi[8 - t]);
        }
        assert!(coi[4] > coi[3]);
    }

    #[test]
    fn power_shape() {
        let data = sine(128, 16.0);
        let cwt = cwt_morlet(&data, 1.0, 6.0, 0.25, 2.0, None);
        assert_eq!(cwt.power.dim(), (cwt.scales.len(), 128));
        assert_eq!(cwt.periods.len(), cwt.scales.len());
        assert_eq!(cwt.coi.len(), 128);
        assert!(cwt.power.iter().all(|p| p.is_finite() && *p >= 0.0));
    }

    #[test]
    fn sine_energy_peaks_at_its_period() {
        let period = 16.0;
        let data = sine(512, period);
        let cwt = cwt_morlet(&data, 1.0, 6.0, 0.125, 2.0, None);

        // Time-averaged power over the interior
        let interior = 128..384;
        let gws: Vec<f64> = cwt
            .power
            .rows()
            .into_iter()
            .map(|row| row.slice(ndarray::s![interior.clone()]).mean().unwrap_or(0.0))
            .collect();
        let best = biolens_stats::argmax(&gws).unwrap();
        assert_relative_eq!(cwt.periods[best], period, max_relative = 0.1);
    }

    #[test]
    fn constant_offset_has_no_power() {
        let data = vec![5.0; 64];
        let cwt = cwt_morlet(&data, 1.0, 6.0, 0.25, 2.0, None);
        assert!(cwt.power.iter().all(|&p| p < 1e-20));
    }

    #[test]
    fn mask_excludes_edges() {
        let data = sine(64, 8.0);
        let cwt = cwt_morlet(&data, 1.0, 6.0, 0.25, 2.0, None);
        let mask = coi_mask(&cwt.periods, &cwt.coi);
        assert_eq!(mask.dim(), cwt.power.dim());
        // Edge samples have zero cone of influence
        assert!(mask.column(0).iter().all(|&m| !m));
        assert!(mask.column(63).iter().all(|&m| !m));
        // The smallest scale is reliable in the middle
        assert!(mask[[0, 32]]);
    }
}

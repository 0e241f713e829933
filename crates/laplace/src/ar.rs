//! Least-squares autoregressive fit.
//!
//! Fits `x[t] = c + a1 x[t-m] + ... + ap x[t-pm] + e[t]` by ordinary least
//! squares over every `t >= pm` (covariance method), where `m` is the lag
//! stride. Unlike Yule-Walker this
//! does not force the fitted model to be stationary, so growing oscillations
//! keep their poles outside the unit circle.

use ndarray::{Array1, Array2};

use crate::linalg::solve;

/// A fitted AR(p) model on (standardized) data.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ArFit {
    /// `a1..ap`.
    pub(crate) coefficients: Vec<f64>,
    /// Constant term `c`.
    pub(crate) intercept: f64,
    /// Mean squared residual.
    pub(crate) residual_variance: f64,
}

/// Fits an AR(`order`) model with intercept on lags that are `stride` samples
/// apart, or `None` if the normal equations are singular or there are too few
/// rows to leave residual freedom.
pub(crate) fn fit_ar(data: &[f64], order: usize, stride: usize) -> Option<ArFit> {
    let n = data.len();
    let k = order + 1;
    let start = order * stride;
    if order == 0 || stride == 0 || n < start + k + 1 {
        return None;
    }

    // Regressor row for time t: [1, x[t-m], ..., x[t-pm]]
    let regressors = move |t: usize| {
        std::iter::once(1.0).chain((1..=order).map(move |i| data[t - i * stride]))
    };

    let mut xtx = Array2::<f64>::zeros((k, k));
    let mut xty = Array1::<f64>::zeros(k);
    for t in start..n {
        let row: Vec<f64> = regressors(t).collect();
        for i in 0..k {
            xty[i] += row[i] * data[t];
            for j in i..k {
                xtx[[i, j]] += row[i] * row[j];
            }
        }
    }
    for i in 0..k {
        for j in 0..i {
            xtx[[i, j]] = xtx[[j, i]];
        }
    }

    let beta = solve(xtx, xty)?;
    let rows = n - start;
    let sse: f64 = (start..n)
        .map(|t| {
            let fitted: f64 = regressors(t).zip(beta.iter()).map(|(r, b)| r * b).sum();
            (data[t] - fitted).powi(2)
        })
        .sum();

    Some(ArFit {
        coefficients: beta.iter().skip(1).copied().collect(),
        intercept: beta[0],
        residual_variance: sse / (rows - k) as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_distr::{Distribution, Normal};

    #[test]
    fn recovers_exact_ar2() {
        let (a1, a2) = (1.6, -0.8);
        let mut x = vec![1.0, 0.5];
        for t in 2..100 {
            x.push(a1 * x[t - 1] + a2 * x[t - 2]);
        }
        let fit = fit_ar(&x, 2, 1).unwrap();
        assert_relative_eq!(fit.coefficients[0], a1, epsilon = 1e-8);
        assert_relative_eq!(fit.coefficients[1], a2, epsilon = 1e-8);
        assert_relative_eq!(fit.intercept, 0.0, epsilon = 1e-8);
        assert!(fit.residual_variance < 1e-12);
    }

    #[test]
    fn recovers_noisy_ar1_with_offset() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(11);
        let noise = Normal::new(0.0, 1.0).unwrap();
        let mut x = vec![10.0];
        for t in 1..5000 {
            x.push(5.0 + 0.5 * x[t - 1] + noise.sample(&mut rng));
        }
        let fit = fit_ar(&x, 1, 1).unwrap();
        assert_relative_eq!(fit.coefficients[0], 0.5, epsilon = 0.05);
        assert_relative_eq!(fit.intercept, 5.0, epsilon = 0.5);
        assert_relative_eq!(fit.residual_variance, 1.0, epsilon = 0.1);
    }

    #[test]
    fn collinear_lags_are_singular() {
        // Pure geometric decay is exactly AR(1), so two lags are collinear
        let x: Vec<f64> = (0..50).map(|t| 0.9_f64.powi(t)).collect();
        assert!(fit_ar(&x, 2, 1).is_none());
        assert!(fit_ar(&x, 2, 3).is_none());
        let fit = fit_ar(&x, 1, 1).unwrap();
        assert_relative_eq!(fit.coefficients[0], 0.9, epsilon = 1e-8);
    }

    #[test]
    fn too_few_rows() {
        assert!(fit_ar(&[1.0, 2.0, 3.0], 2, 1).is_none());
        assert!(fit_ar(&[1.0, 2.0, 3.0], 0, 1).is_none());
        assert!(fit_ar(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 1, 0).is_none());
        // Six rows are enough at stride 1 but not at stride 3
        let x = [1.0, 3.0, 2.0, 5.0, 4.0, 6.0];
        assert!(fit_ar(&x, 2, 1).is_some());
        assert!(fit_ar(&x, 2, 3).is_none());
    }

    #[test]
    fn strided_fit_recovers_powered_poles() {
        // Every third sample of an AR(2) with poles r e^{+-i theta} follows an
        // AR(2) with poles r^3 e^{+-3 i theta}
        let (r, theta) = (0.98_f64, 0.2_f64);
        let x: Vec<f64> = (0..300)
            .map(|t| r.powi(t) * (theta * t as f64).cos())
            .collect();
        let fit = fit_ar(&x, 2, 3).unwrap();
        let (r3, theta3) = (r.powi(3), 3.0 * theta);
        assert_relative_eq!(fit.coefficients[0], 2.0 * r3 * theta3.cos(), epsilon = 1e-8);
        assert_relative_eq!(fit.coefficients[1], -r3 * r3, epsilon = 1e-8);
    }
}

//! Roots of the AR characteristic polynomial.

use num_complex::Complex;

/// Convergence threshold on the largest root update, relative to root size.
const CONVERGENCE_TOL: f64 = 1e-13;

/// Returns the roots of `z^p - a1 z^(p-1) - ... - ap`, where `ar = [a1..ap]`.
///
/// Orders 1 and 2 are solved in closed form; higher orders use the
/// Durand-Kerner iteration. Returns `None` if the iteration does not converge
/// within `max_iterations`.
pub(crate) fn characteristic_roots(ar: &[f64], max_iterations: usize) -> Option<Vec<Complex<f64>>> {
    match ar {
        [] => Some(Vec::new()),
        [a1] => Some(vec![Complex::new(*a1, 0.0)]),
        [a1, a2] => Some(quadratic_roots(*a1, *a2).to_vec()),
        _ => {
            // Monic coefficients, highest degree first
            let coeffs: Vec<f64> = std::iter::once(1.0).chain(ar.iter().map(|a| -a)).collect();
            durand_kerner(&coeffs, max_iterations)
        }
    }
}

/// Roots of `z^2 - a1 z - a2`, conjugate pair first with positive imaginary part.
fn quadratic_roots(a1: f64, a2: f64) -> [Complex<f64>; 2] {
    let disc = a1 * a1 + 4.0 * a2;
    if disc >= 0.0 {
        let sq = disc.sqrt();
        [
            Complex::new((a1 + sq) / 2.0, 0.0),
            Complex::new((a1 - sq) / 2.0, 0.0),
        ]
    } else {
        let im = (-disc).sqrt() / 2.0;
        [Complex::new(a1 / 2.0, im), Complex::new(a1 / 2.0, -im)]
    }
}

/// Evaluates a polynomial (highest degree first) at `z` by Horner's rule.
fn horner(coeffs: &[f64], z: Complex<f64>) -> Complex<f64> {
    coeffs
        .iter()
        .fold(Complex::new(0.0, 0.0), |acc, &c| acc * z + c)
}

/// Simultaneous iteration for all roots of a monic polynomial.
fn durand_kerner(coeffs: &[f64], max_iterations: usize) -> Option<Vec<Complex<f64>>> {
    let degree = coeffs.len() - 1;
    // Cauchy bound on root magnitude
    let radius = 1.0 + coeffs[1..].iter().fold(0.0_f64, |m, c| m.max(c.abs()));
    // Start points on that circle at angles that are never conjugate pairs
    let angle = Complex::new(0.4, 0.9).arg();
    let mut roots: Vec<Complex<f64>> = (0..degree)
        .map(|k| Complex::from_polar(radius, angle * (k as f64 + 0.5)))
        .collect();

    for _ in 0..max_iterations {
        let mut max_step = 0.0_f64;
        for i in 0..degree {
            let zi = roots[i];
            let denom = (0..degree)
                .filter(|&j| j != i)
                .fold(Complex::new(1.0, 0.0), |acc, j| acc * (zi - roots[j]));
            if denom.norm() == 0.0 {
                // Coincident estimates: nudge apart
                roots[i] = zi + Complex::new(1e-8, 1e-8);
                max_step = f64::INFINITY;
                continue;
            }
            let step = horner(coeffs, zi) / denom;
            roots[i] = zi - step;
            max_step = max_step.max(step.norm() / (1.0 + zi.norm()));
        }
        if max_step < CONVERGENCE_TOL {
            return Some(roots);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sorted_re(mut roots: Vec<Complex<f64>>) -> Vec<Complex<f64>> {
        roots.sort_by(|a, b| a.re.total_cmp(&b.re).then(a.im.total_cmp(&b.im)));
        roots
    }

    #[test]
    fn order_one() {
        let roots = characteristic_roots(&[0.7], 100).unwrap();
        assert_eq!(roots, vec![Complex::new(0.7, 0.0)]);
    }

    #[test]
    fn complex_pair() {
        // z^2 - 1.6 z + 0.8: roots 0.8 +- 0.4i
        let roots = characteristic_roots(&[1.6, -0.8], 100).unwrap();
        assert_relative_eq!(roots[0].re, 0.8, epsilon = 1e-12);
        assert_relative_eq!(roots[0].im, 0.4, epsilon = 1e-12);
        assert_eq!(roots[1], roots[0].conj());
    }

    #[test]
    fn real_pair() {
        // (z - 0.5)(z - 0.2) = z^2 - 0.7 z + 0.1
        let roots = characteristic_roots(&[0.7, -0.1], 100).unwrap();
        assert_relative_eq!(roots[0].re, 0.5, epsilon = 1e-12);
        assert_relative_eq!(roots[1].re, 0.2, epsilon = 1e-12);
    }

    #[test]
    fn cubic_by_iteration() {
        // (z - 0.5)(z^2 - 1.6 z + 0.8) = z^3 - 2.1 z^2 + 1.6 z - 0.4
        let roots = sorted_re(characteristic_roots(&[2.1, -1.6, 0.4], 500).unwrap());
        assert_relative_eq!(roots[0].re, 0.5, epsilon = 1e-9);
        assert_relative_eq!(roots[0].im, 0.0, epsilon = 1e-9);
        assert_relative_eq!(roots[1].re, 0.8, epsilon = 1e-9);
        assert_relative_eq!(roots[1].im.abs(), 0.4, epsilon = 1e-9);
        assert_relative_eq!(roots[2].im.abs(), 0.4, epsilon = 1e-9);
    }

    #[test]
    fn quartic_residuals_vanish() {
        let ar = [0.5, 0.3, -0.2, 0.1];
        let coeffs: Vec<f64> = std::iter::once(1.0).chain(ar.iter().map(|a| -a)).collect();
        let roots = characteristic_roots(&ar, 500).unwrap();
        assert_eq!(roots.len(), 4);
        for z in roots {
            assert!(horner(&coeffs, z).norm() < 1e-10);
        }
    }

    #[test]
    fn horner_evaluates() {
        // z^2 - 3z + 2 at z = 3 -> 2
        let v = horner(&[1.0, -3.0, 2.0], Complex::new(3.0, 0.0));
        assert_relative_eq!(v.re, 2.0);
        assert_relative_eq!(v.im, 0.0);
    }
}

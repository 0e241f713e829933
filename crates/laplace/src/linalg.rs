//! Dense solver for the small normal-equation systems of an AR fit.

use ndarray::{Array1, Array2};

/// Relative pivot magnitude below which a system is treated as singular.
const SINGULAR_TOL: f64 = 1e-10;

/// Solves `a * x = b` by Gaussian elimination with partial pivoting.
///
/// Returns `None` when `a` is singular to working precision (a pivot falls
/// below `SINGULAR_TOL` times the largest diagonal magnitude).
pub(crate) fn solve(mut a: Array2<f64>, mut b: Array1<f64>) -> Option<Array1<f64>> {
    let n = b.len();
    debug_assert_eq!(a.dim(), (n, n));

    let scale = a.diag().iter().fold(0.0_f64, |m, v| m.max(v.abs()));
    if !(scale > 0.0) {
        return None;
    }

    for col in 0..n {
        let pivot_row = (col..n)
            .max_by(|&i, &j| a[[i, col]].abs().total_cmp(&a[[j, col]].abs()))
            .unwrap_or(col);
        if a[[pivot_row, col]].abs() < SINGULAR_TOL * scale {
            return None;
        }
        if pivot_row != col {
            for k in 0..n {
                a.swap([col, k], [pivot_row, k]);
            }
            b.swap(col, pivot_row);
        }

        for row in col + 1..n {
            let factor = a[[row, col]] / a[[col, col]];
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                a[[row, k]] -= factor * a[[col, k]];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = Array1::<f64>::zeros(n);
    for row in (0..n).rev() {
        let tail: f64 = (row + 1..n).map(|k| a[[row, k]] * x[k]).sum();
        x[row] = (b[row] - tail) / a[[row, row]];
    }
    Some(x)
}

//! Frequency grid construction.
//!
//! The grid is geometric: neighbouring frequencies differ by a constant ratio
//! `r <= 1 + tolerance`. The absolute step at frequency `f` is therefore at
//! most `f * tolerance`, which keeps the relative period error bounded for
//! every period in range, not only the expected one.

use crate::error::FourierError;

/// Number of points a geometric grid over `[f_min, f_max]` needs so that the
/// neighbour ratio stays strictly below `1 + tolerance`.
///
/// Returns 0 when the range is empty.
pub fn grid_len(f_min: f64, f_max: f64, tolerance: f64) -> usize {
    if !(f_min > 0.0 && f_max > f_min) || !(tolerance > 0.0) {
        return 0;
    }
    let steps = (f_max / f_min).ln() / tolerance.ln_1p();
    steps.floor() as usize + 2
}

/// Builds the ascending geometric frequency grid `[f_min, ..., f_max]` (Hz).
///
/// An empty grid is returned when `f_min >= f_max`; the caller reports that
/// as a degenerate result.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`FourierError::GridTooLarge`] | the tolerance needs more than `max_points` |
pub fn frequency_grid(
    f_min: f64,
    f_max: f64,
    tolerance: f64,
    max_points: usize,
) -> Result<Vec<f64>, FourierError> {
    let n = grid_len(f_min, f_max, tolerance);
    if n == 0 {
        return Ok(Vec::new());
    }
    if n > max_points {
        return Err(FourierError::GridTooLarge {
            required: n,
            max: max_points,
        });
    }

    let log_ratio = (f_max / f_min).ln() / (n - 1) as f64;
    let mut grid: Vec<f64> = (0..n)
        .map(|k| f_min * (k as f64 * log_ratio).exp())
        .collect();
    grid[0] = f_min;
    grid[n - 1] = f_max;
    Ok(grid)
}

/// Returns `true` if some grid point lies within `tolerance * f` of `f`.
pub fn grid_resolves(grid: &[f64], f: f64, tolerance: f64) -> bool {
    let idx = grid.partition_point(|&g| g < f);
    let lo = idx.checked_sub(1).map(|i| grid[i]);
    let hi = grid.get(idx).copied();
    [lo, hi]
        .into_iter()
        .flatten()
        .any(|g| (g - f).abs() <= tolerance * f)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: f64 = 3600.0;

    #[test]
    fn grid_is_strictly_ascending_and_bounded() {
        let f_min = 1.0 / (100.0 * HOUR);
        let f_max = 1.0 / 600.0;
        let grid = frequency_grid(f_min, f_max, 1e-3, 1_000_000).unwrap();
        assert_eq!(grid[0], f_min);
        assert_eq!(*grid.last().unwrap(), f_max);
        assert!(grid.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn neighbour_ratio_below_tolerance() {
        let tol = 5e-3;
        let grid = frequency_grid(1e-6, 1e-3, tol, 1_000_000).unwrap();
        for w in grid.windows(2) {
            assert!(w[1] / w[0] < 1.0 + tol + 1e-12);
        }
    }

    #[test]
    fn empty_range_gives_empty_grid() {
        assert!(frequency_grid(1.0, 1.0, 1e-3, 100).unwrap().is_empty());
        assert!(frequency_grid(2.0, 1.0, 1e-3, 100).unwrap().is_empty());
        assert!(frequency_grid(0.0, 1.0, 1e-3, 100).unwrap().is_empty());
    }

    #[test]
    fn too_many_points_rejected() {
        let err = frequency_grid(1e-6, 1.0, 1e-6, 1000).unwrap_err();
        assert!(matches!(err, FourierError::GridTooLarge { max: 1000, .. }));
    }

    #[test]
    fn resolves_expected_frequency() {
        let grid = frequency_grid(1e-6, 1e-3, 1e-3, 1_000_000).unwrap();
        assert!(grid_resolves(&grid, 1.0 / (24.0 * HOUR), 1e-3));
        assert!(!grid_resolves(&grid, 2e-3, 1e-3));
        assert!(!grid_resolves(&[], 1e-4, 1e-3));
    }

    #[test]
    fn coarse_grid_does_not_resolve() {
        // A 3-point grid over three decades cannot resolve 0.1%.
        let grid = vec![1e-6, 3.16e-5, 1e-3];
        assert!(!grid_resolves(&grid, 1.0 / (24.0 * HOUR), 1e-3));
    }
}

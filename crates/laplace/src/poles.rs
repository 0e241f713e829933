//! Discrete-to-continuous pole mapping and stability classification.

use std::f64::consts::PI;
use std::fmt;

use num_complex::Complex;
use serde::{Deserialize, Serialize};

/// Smallest discrete pole magnitude before taking the logarithm.
const MIN_MODULUS: f64 = 1e-300;

/// Absolute slack on the oscillation band; covers poles at the s-plane origin.
const ABS_SLACK: f64 = 1e-12;

/// Qualitative behaviour of the fitted system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stability {
    /// Every mode decays.
    Stable,
    /// The dominant mode neither decays nor grows within tolerance.
    Oscillatory,
    /// At least one mode grows.
    Unstable,
}

impl Stability {
    /// Returns the lowercase name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Stability::Stable => "stable",
            Stability::Oscillatory => "oscillatory",
            Stability::Unstable => "unstable",
        }
    }
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps a discrete pole `z` to the s-plane: `s = rate * ln z` (rad/s).
pub fn discrete_to_continuous(z: Complex<f64>, rate_hz: f64) -> Complex<f64> {
    let modulus = z.norm().max(MIN_MODULUS);
    Complex::new(modulus.ln(), z.arg()) * rate_hz
}

/// Returns the pole with the largest real part.
///
/// Real parts within rounding of each other are ties, resolved in favour of
/// the larger imaginary part. Returns `None` for an empty slice.
pub fn dominant_pole(poles: &[Complex<f64>]) -> Option<Complex<f64>> {
    let max_re = poles.iter().map(|p| p.re).fold(f64::NEG_INFINITY, f64::max);
    if !max_re.is_finite() {
        return None;
    }
    let tie = 1e-9 * (1.0 + max_re.abs());
    poles
        .iter()
        .filter(|p| max_re - p.re <= tie)
        .copied()
        .max_by(|a, b| a.im.total_cmp(&b.im))
}

/// Returns `true` when `|Re(s)| <= tolerance * |s|`.
fn within_band(s: Complex<f64>, tolerance: f64) -> bool {
    s.re.abs() <= tolerance * s.norm() + ABS_SLACK
}

/// Classifies a set of continuous-time poles.
///
/// Any pole growing faster than the oscillation band makes the system
/// [`Stability::Unstable`]. Otherwise the dominant pole decides between
/// [`Stability::Oscillatory`] (inside the band) and [`Stability::Stable`].
pub fn classify(poles: &[Complex<f64>], tolerance: f64) -> Stability {
    if poles
        .iter()
        .any(|s| s.re > 0.0 && !within_band(*s, tolerance))
    {
        return Stability::Unstable;
    }
    match dominant_pole(poles) {
        Some(s) if within_band(s, tolerance) => Stability::Oscillatory,
        _ => Stability::Stable,
    }
}

/// Natural frequency of a continuous pole, in Hz.
pub fn natural_frequency_hz(s: Complex<f64>) -> f64 {
    s.norm() / (2.0 * PI)
}

/// Damping ratio `-Re(s) / |s|` (0 for a pole at the origin).
pub fn damping_ratio(s: Complex<f64>) -> f64 {
    let norm = s.norm();
    if norm > 0.0 { -s.re / norm } else { 0.0 }
}

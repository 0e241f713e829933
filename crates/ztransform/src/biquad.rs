//! Butterworth low-pass design as cascaded second-order sections.
//!
//! Each section is the bilinear transform of one analog Butterworth pole pair,
//! prewarped so the cascade is exactly -3 dB at the cutoff.

use std::f64::consts::PI;

use num_complex::Complex;
use serde::{Deserialize, Serialize};

/// One second-order section, normalized so `a0 = 1`.
///
/// `H(z) = (b0 + b1 z^-1 + b2 z^-2) / (1 + a1 z^-1 + a2 z^-2)`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Biquad {
    /// Numerator `[b0, b1, b2]`.
    pub b: [f64; 3],
    /// Denominator `[a1, a2]`.
    pub a: [f64; 2],
}

impl Biquad {
    /// Designs a low-pass section with quality factor `q`.
    ///
    /// `w0` is the cutoff in radians per sample (`2 pi fc / fs`).
    pub fn lowpass(w0: f64, q: f64) -> Self {
        let (sin, cos) = w0.sin_cos();
        let alpha = sin / (2.0 * q);
        let a0 = 1.0 + alpha;
        let b1 = (1.0 - cos) / a0;
        Self {
            b: [b1 / 2.0, b1, b1 / 2.0],
            a: [-2.0 * cos / a0, (1.0 - alpha) / a0],
        }
    }

    /// Gain at zero frequency.
    pub fn dc_gain(&self) -> f64 {
        self.b.iter().sum::<f64>() / (1.0 + self.a[0] + self.a[1])
    }

    /// Complex response at `w` radians per sample.
    pub fn response(&self, w: f64) -> Complex<f64> {
        let z1 = Complex::from_polar(1.0, -w);
        let z2 = z1 * z1;
        let num = self.b[0] + z1 * self.b[1] + z2 * self.b[2];
        let den = 1.0 + z1 * self.a[0] + z2 * self.a[1];
        num / den
    }

    /// Filter state after a constant unit input has settled.
    ///
    /// Scaling by the first sample starts the filter without an edge transient.
    pub(crate) fn steady_state(&self) -> [f64; 2] {
        let g = self.dc_gain();
        [g - self.b[0], self.b[2] - self.a[1] * g]
    }

    /// Runs the section over `x` in transposed direct form II.
    pub(crate) fn run(&self, x: &[f64], state: [f64; 2]) -> Vec<f64> {
        let [b0, b1, b2] = self.b;
        let [a1, a2] = self.a;
        let [mut z1, mut z2] = state;
        x.iter()
            .map(|&xi| {
                let y = b0 * xi + z1;
                z1 = b1 * xi - a1 * y + z2;
                z2 = b2 * xi - a2 * y;
                y
            })
            .collect()
    }
}

/// Quality factors of the pole pairs of an even-order Butterworth filter.
fn butterworth_q(order: usize) -> impl Iterator<Item = f64> {
    (1..=order / 2).map(move |k| {
        let theta = (2 * k - 1) as f64 * PI / (2 * order) as f64;
        1.0 / (2.0 * theta.sin())
    })
}

/// Designs an even-order Butterworth low-pass cascade.
///
/// `cutoff_hz` must lie strictly between 0 and the Nyquist frequency of `rate_hz`.
pub fn butterworth_lowpass(order: usize, cutoff_hz: f64, rate_hz: f64) -> Vec<Biquad> {
    let w0 = 2.0 * PI * cutoff_hz / rate_hz;
    butterworth_q(order).map(|q| Biquad::lowpass(w0, q)).collect()
}

/// Magnitude of a cascade at `frequency_hz`.
pub fn cascade_magnitude(sections: &[Biquad], frequency_hz: f64, rate_hz: f64) -> f64 {
    let w = 2.0 * PI * frequency_hz / rate_hz;
    sections
        .iter()
        .map(|s| s.response(w).norm())
        .product()
}

//! Zero-phase (forward-backward) filtering of a finite record.

use crate::biquad::Biquad;

/// Number of samples reflected at each edge, capped by the record length.
fn pad_len(n_sections: usize, n: usize) -> usize {
    (3 * (2 * n_sections + 1)).min(n.saturating_sub(1))
}

/// Extends `x` by odd reflection about both end points.
fn odd_extend(x: &[f64], pad: usize) -> Vec<f64> {
    let n = x.len();
    let (first, last) = (x[0], x[n - 1]);
    let left = (1..=pad).rev().map(|i| 2.0 * first - x[i]);
    let right = (1..=pad).map(|i| 2.0 * last - x[n - 1 - i]);
    left.chain(x.iter().copied()).chain(right).collect()
}

/// Runs every section in turn, each started from its steady state.
fn cascade(sections: &[Biquad], x: Vec<f64>) -> Vec<f64> {
    sections.iter().fold(x, |signal, section| {
        let x0 = signal.first().copied().unwrap_or(0.0);
        let [z1, z2] = section.steady_state();
        section.run(&signal, [z1 * x0, z2 * x0])
    })
}

/// Applies `sections` forward and backward so the net phase shift is zero.
///
/// The output has exactly the input length. An empty input yields an empty
/// output.
pub fn filtfilt(sections: &[Biquad], x: &[f64]) -> Vec<f64> {
    if x.is_empty() {
        return Vec::new();
    }
    let pad = pad_len(sections.len(), x.len());
    let extended = odd_extend(x, pad);

    let mut y = cascade(sections, extended);
    y.reverse();
    let mut y = cascade(sections, y);
    y.reverse();

    y[pad..pad + x.len()].to_vec()
}

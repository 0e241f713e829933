//! Transient event detection on a wavelet power map.
//!
//! A cell is flagged when its power clears every test of its scale:
//!
//! - `median + k * robust_sd` of the scale's reliable cells,
//! - `median_ratio` times that median, the chi-squared quantile of a
//!   stationary background,
//! - the red-noise floor of the whole record.
//!
//! Cells inside the cone of influence never feed the statistics. On short
//! scales (period up to [`EDGE_PERIOD_SAMPLES`]) they stay eligible for
//! flagging, so spikes and steps at either end of the record are still
//! reported. A scale with fewer than [`MIN_RELIABLE_CELLS`] reliable cells has
//! no usable statistics: short scales fall back to the red-noise floor alone,
//! longer ones are skipped.
//!
//! Flagged cells that touch across adjacent times or adjacent scales form one
//! region; regions that overlap in time within one octave of scale are merged,
//! so a single sharp feature produces a single event regardless of how many
//! scales it excites.

use std::collections::VecDeque;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::significance::Background;

/// A localized burst of wavelet power.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransientEvent {
    time_index: usize,
    duration_samples: usize,
    intensity: f64,
}

impl TransientEvent {
    pub(crate) fn new(time_index: usize, duration_samples: usize, intensity: f64) -> Self {
        Self {
            time_index,
            duration_samples,
            intensity,
        }
    }

    /// Sample index at which the event is strongest.
    pub fn time_index(&self) -> usize {
        self.time_index
    }

    /// Width of the event around its peak, in samples (at least 1).
    pub fn duration_samples(&self) -> usize {
        self.duration_samples
    }

    /// Largest raw wavelet power inside the event, in squared signal units.
    pub fn intensity(&self) -> f64 {
        self.intensity
    }
}

/// Longest period, in samples, whose edge cells stay eligible for detection.
pub(crate) const EDGE_PERIOD_SAMPLES: f64 = 8.0;

/// Fewest reliable cells that give a scale usable statistics.
pub(crate) const MIN_RELIABLE_CELLS: usize = 8;

/// Per-scale detection rules, built by the lens from its configuration.
#[derive(Clone, Debug)]
pub(crate) struct Detection {
    /// `k` in `median + k * robust_sd`.
    pub(crate) threshold_sigma: f64,
    /// Red-noise background of the record.
    pub(crate) background: Background,
    /// Scales short enough for edge cells to stay eligible.
    pub(crate) short_scales: Vec<bool>,
    /// Scales per octave; also the scale gap bridged when merging regions.
    pub(crate) octave: usize,
}

/// Threshold and typical level of one scale.
#[derive(Clone, Copy, Debug, PartialEq)]
struct ScaleThreshold {
    threshold: f64,
    median: f64,
}

/// Computes each scale's threshold, or `None` when the scale is skipped.
fn scale_thresholds(
    power: &Array2<f64>,
    reliable: &Array2<bool>,
    detection: &Detection,
) -> Vec<Option<ScaleThreshold>> {
    let bg = &detection.background;
    power
        .rows()
        .into_iter()
        .zip(reliable.rows())
        .enumerate()
        .map(|(s, (row, mask))| {
            let values: Vec<f64> = row
                .iter()
                .zip(mask.iter())
                .filter(|&(_, &m)| m)
                .map(|(&p, _)| p)
                .collect();
            if values.len() >= MIN_RELIABLE_CELLS {
                let (median, robust_sd) = biolens_stats::median_and_robust_sd(&values);
                let threshold = (median + detection.threshold_sigma * robust_sd)
                    .max(median * bg.median_ratio)
                    .max(bg.floor[s]);
                Some(ScaleThreshold { threshold, median })
            } else if detection.short_scales[s] {
                Some(ScaleThreshold {
                    threshold: bg.floor[s],
                    median: 0.0,
                })
            } else {
                None
            }
        })
        .collect()
}

/// Flags eligible cells above their scale's threshold.
///
/// Returns the flags and the per-scale normalizer used for event profiles.
pub(crate) fn flag_cells(
    power: &Array2<f64>,
    reliable: &Array2<bool>,
    detection: &Detection,
) -> (Array2<bool>, Vec<f64>) {
    let thresholds = scale_thresholds(power, reliable, detection);
    let norms: Vec<f64> = thresholds
        .iter()
        .map(|t| match t {
            Some(t) if t.threshold > 0.0 => t.threshold,
            _ => 1.0,
        })
        .collect();
    let flags = Array2::from_shape_fn(power.dim(), |(s, t)| match thresholds[s] {
        Some(th) => {
            let eligible = reliable[[s, t]] || detection.short_scales[s];
            let p = power[[s, t]];
            eligible && p > th.threshold && p > th.median
        }
        None => false,
    });
    (flags, norms)
}

/// A connected set of flagged cells with its bounding box.
#[derive(Clone, Debug, PartialEq)]
struct Region {
    cells: Vec<(usize, usize)>,
    scales: (usize, usize),
    times: (usize, usize),
}

impl Region {
    fn new(cells: Vec<(usize, usize)>) -> Self {
        let bounds = |pick: fn(&(usize, usize)) -> usize| {
            let lo = cells.iter().map(pick).min().unwrap_or(0);
            let hi = cells.iter().map(pick).max().unwrap_or(0);
            (lo, hi)
        };
        let scales = bounds(|c| c.0);
        let times = bounds(|c| c.1);
        Self {
            cells,
            scales,
            times,
        }
    }

    /// Overlapping in time and no more than `max_gap` scales apart.
    fn touches(&self, other: &Region, max_gap: usize) -> bool {
        let time_overlap = self.times.0 <= other.times.1 && other.times.0 <= self.times.1;
        let gap = other
            .scales
            .0
            .saturating_sub(self.scales.1)
            .max(self.scales.0.saturating_sub(other.scales.1));
        time_overlap && gap <= max_gap
    }

    fn absorb(&mut self, other: Region) {
        self.scales = (
            self.scales.0.min(other.scales.0),
            self.scales.1.max(other.scales.1),
        );
        self.times = (
            self.times.0.min(other.times.0),
            self.times.1.max(other.times.1),
        );
        self.cells.extend(other.cells);
    }
}

/// Groups flagged cells into 4-connected components.
///
/// Components are returned in discovery order (scale-major scan); each is a
/// list of `(scale, time)` cells.
fn components(flags: &Array2<bool>) -> Vec<Vec<(usize, usize)>> {
    let (n_scales, n_times) = flags.dim();
    let mut seen = Array2::from_elem(flags.dim(), false);
    let mut out = Vec::new();

    for s in 0..n_scales {
        for t in 0..n_times {
            if !flags[[s, t]] || seen[[s, t]] {
                continue;
            }
            seen[[s, t]] = true;
            let mut cells = Vec::new();
            let mut queue = VecDeque::from([(s, t)]);
            while let Some((cs, ct)) = queue.pop_front() {
                cells.push((cs, ct));
                let neighbours = [
                    (cs.wrapping_sub(1), ct),
                    (cs + 1, ct),
                    (cs, ct.wrapping_sub(1)),
                    (cs, ct + 1),
                ];
                for (ns, nt) in neighbours {
                    if ns < n_scales && nt < n_times && flags[[ns, nt]] && !seen[[ns, nt]] {
                        seen[[ns, nt]] = true;
                        queue.push_back((ns, nt));
                    }
                }
            }
            out.push(cells);
        }
    }
    out
}

/// Merges regions that overlap in time within `max_gap` scales, until stable.
fn merge_regions(mut regions: Vec<Region>, max_gap: usize) -> Vec<Region> {
    loop {
        let mut merged: Vec<Region> = Vec::with_capacity(regions.len());
        let mut changed = false;
        for region in regions {
            match merged.iter_mut().find(|m| m.touches(&region, max_gap)) {
                Some(target) => {
                    target.absorb(region);
                    changed = true;
                }
                None => merged.push(region),
            }
        }
        if !changed {
            return merged;
        }
        regions = merged;
    }
}

/// Summarizes one region as an event.
///
/// The peak and half-power width come from the region's finest octave, where
/// time resolution is best; intensity is the largest raw power anywhere in it.
fn summarize(region: &Region, power: &Array2<f64>, norms: &[f64], octave: usize) -> TransientEvent {
    let finest = region.scales.0 + octave;
    let fine: Vec<(usize, usize)> = region
        .cells
        .iter()
        .copied()
        .filter(|&(s, _)| s <= finest)
        .collect();
    let t_lo = fine.iter().map(|&(_, t)| t).min().unwrap_or(region.times.0);
    let t_hi = fine.iter().map(|&(_, t)| t).max().unwrap_or(region.times.1);

    // Power normalized per scale, summed over the finest octave at each time
    let mut profile = vec![0.0; t_hi - t_lo + 1];
    for &(s, t) in &fine {
        profile[t - t_lo] += power[[s, t]] / norms[s];
    }
    let intensity = region
        .cells
        .iter()
        .map(|&(s, t)| power[[s, t]])
        .fold(0.0_f64, f64::max);

    let peak = biolens_stats::argmax(&profile).unwrap_or(0);
    let half = profile[peak] / 2.0;
    let left = profile[..peak]
        .iter()
        .rposition(|&v| v < half)
        .map_or(0, |i| i + 1);
    let right = profile[peak..]
        .iter()
        .position(|&v| v < half)
        .map_or(profile.len(), |i| peak + i);

    TransientEvent::new(t_lo + peak, right - left, intensity)
}

/// Detects transient events in `power`.
///
/// `reliable` marks cells outside the cone of influence. Events are sorted by
/// `time_index`. An empty list means nothing crossed the threshold.
pub(crate) fn detect_transients(
    power: &Array2<f64>,
    reliable: &Array2<bool>,
    detection: &Detection,
) -> Vec<TransientEvent> {
    let (flags, norms) = flag_cells(power, reliable, detection);
    let regions: Vec<Region> = components(&flags).into_iter().map(Region::new).collect();
    let mut events: Vec<TransientEvent> = merge_regions(regions, detection.octave)
        .iter()
        .map(|region| summarize(region, power, &norms, detection.octave))
        .collect();
    events.sort_by_key(TransientEvent::time_index);
    events
}

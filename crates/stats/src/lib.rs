//! Statistical helper functions shared by the biolens lenses.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Sample variance with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let nf = n as f64;
    let mean = data.iter().sum::<f64>() / nf;
    data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / (nf - 1.0)
}

/// Sample standard deviation with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Centres and scales `data` to zero mean and unit sample standard deviation.
///
/// Returns `(mean, sd, standardized)`. When the standard deviation is zero the
/// values are only centred (divided by 1.0).
pub fn standardize(data: &[f64]) -> (f64, f64, Vec<f64>) {
    let m = mean(data);
    let s = sd(data);
    let scale = if s > 0.0 { s } else { 1.0 };
    let out = data.iter().map(|&x| (x - m) / scale).collect();
    (m, s, out)
}

/// Median of a slice; the mean of the two middle values for even lengths.
///
/// Returns 0.0 if empty. NaN sorts last.
pub fn median(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        0.5 * (sorted[mid - 1] + sorted[mid])
    } else {
        sorted[mid]
    }
}

/// Scale factor turning a median absolute deviation into a Gaussian
/// standard deviation.
pub const MAD_TO_SD: f64 = 1.4826;

/// Robust standard deviation: `MAD_TO_SD` times the median absolute
/// deviation from the median.
///
/// Returns `(median, robust_sd)`; both are 0.0 for an empty slice.
pub fn median_and_robust_sd(data: &[f64]) -> (f64, f64) {
    let m = median(data);
    let deviations: Vec<f64> = data.iter().map(|&x| (x - m).abs()).collect();
    (m, MAD_TO_SD * median(&deviations))
}

/// Index of the largest finite value. The first occurrence wins on ties.
///
/// Returns `None` if the slice holds no finite value.
pub fn argmax(data: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in data.iter().enumerate() {
        if !v.is_finite() {
            continue;
        }
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

/// Pearson correlation coefficient.
///
/// Filters to indices where both `x[i]` and `y[i]` are finite.
/// Returns `None` if fewer than 3 finite pairs or if the denominator is zero
/// (constant input).
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y.iter())
        .filter(|(xi, yi)| xi.is_finite() && yi.is_finite())
        .map(|(xi, yi)| (*xi, *yi))
        .collect();

    if pairs.len() < 3 {
        return None;
    }

    let n = pairs.len() as f64;
    let mx: f64 = pairs.iter().map(|(xi, _)| xi).sum::<f64>() / n;
    let my: f64 = pairs.iter().map(|(_, yi)| yi).sum::<f64>() / n;

    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    let mut sum_yy = 0.0;
    for &(xi, yi) in &pairs {
        let dx = xi - mx;
        let dy = yi - my;
        sum_xy += dx * dy;
        sum_xx += dx * dx;
        sum_yy += dy * dy;
    }

    let denom = (sum_xx * sum_yy).sqrt();
    if denom == 0.0 {
        return None;
    }

    Some(sum_xy / denom)
}

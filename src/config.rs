use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level biolens configuration.
///
/// Every section is optional; missing sections fall back to library defaults.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct BiolensConfig {
    /// Facade settings.
    #[serde(default)]
    pub analyzer: AnalyzerToml,

    /// Validator settings.
    #[serde(default)]
    pub validation: ValidationToml,

    /// Fourier lens settings.
    #[serde(default)]
    pub fourier: FourierToml,

    /// Wavelet lens settings.
    #[serde(default)]
    pub wavelet: WaveletToml,

    /// Laplace lens settings.
    #[serde(default)]
    pub laplace: LaplaceToml,

    /// Z-transform lens settings.
    #[serde(default)]
    pub ztransform: ZTransformToml,
}

impl BiolensConfig {
    /// Reads a TOML file, or returns defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&contents).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct AnalyzerToml {
    /// Sampling rate in Hz; inferred from the time column when unset.
    pub sampling_rate_hz: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidationToml {
    #[serde(default = "default_min_len")]
    pub min_len: usize,
    /// Enables the duration check when set.
    pub shortest_period_hours: Option<f64>,
    #[serde(default = "default_min_cycles")]
    pub min_cycles: f64,
}

fn default_min_len() -> usize {
    8
}
fn default_min_cycles() -> f64 {
    2.0
}

impl Default for ValidationToml {
    fn default() -> Self {
        Self {
            min_len: default_min_len(),
            shortest_period_hours: None,
            min_cycles: default_min_cycles(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FourierToml {
    #[serde(default = "default_max_period_hours")]
    pub max_period_hours: f64,
    #[serde(default = "default_expected_period_hours")]
    pub expected_period_hours: f64,
    #[serde(default = "default_tolerance_fraction")]
    pub tolerance_fraction: f64,
    #[serde(default = "default_max_span_ratio")]
    pub max_span_ratio: f64,
    #[serde(default = "default_max_grid_points")]
    pub max_grid_points: usize,
}

fn default_max_period_hours() -> f64 {
    100.0
}
fn default_expected_period_hours() -> f64 {
    24.0
}
fn default_tolerance_fraction() -> f64 {
    1e-3
}
fn default_max_span_ratio() -> f64 {
    10.0
}
fn default_max_grid_points() -> usize {
    1_000_000
}

impl Default for FourierToml {
    fn default() -> Self {
        Self {
            max_period_hours: default_max_period_hours(),
            expected_period_hours: default_expected_period_hours(),
            tolerance_fraction: default_tolerance_fraction(),
            max_span_ratio: default_max_span_ratio(),
            max_grid_points: default_max_grid_points(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WaveletToml {
    #[serde(default = "default_omega0")]
    pub omega0: f64,
    #[serde(default = "default_dj")]
    pub dj: f64,
    #[serde(default = "default_s0_samples")]
    pub s0_samples: f64,
    /// Highest scale index; derived from the record length when unset.
    pub j_max: Option<usize>,
    #[serde(default = "default_threshold_sigma")]
    pub threshold_sigma: f64,
    #[serde(default = "default_significance_level")]
    pub significance_level: f64,
    #[serde(default = "default_true")]
    pub mask_coi: bool,
}

fn default_omega0() -> f64 {
    6.0
}
fn default_dj() -> f64 {
    0.125
}
fn default_s0_samples() -> f64 {
    2.0
}
fn default_threshold_sigma() -> f64 {
    3.0
}
fn default_significance_level() -> f64 {
    0.99
}
fn default_true() -> bool {
    true
}

impl Default for WaveletToml {
    fn default() -> Self {
        Self {
            omega0: default_omega0(),
            dj: default_dj(),
            s0_samples: default_s0_samples(),
            j_max: None,
            threshold_sigma: default_threshold_sigma(),
            significance_level: default_significance_level(),
            mask_coi: default_true(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LaplaceToml {
    #[serde(default = "default_ar_order")]
    pub order: usize,
    #[serde(default = "default_oscillation_tolerance")]
    pub oscillation_tolerance: f64,
    #[serde(default = "default_max_root_iterations")]
    pub max_root_iterations: usize,
    /// Samples between AR lags; derived from the autocorrelation when unset.
    pub lag_stride: Option<usize>,
}

fn default_ar_order() -> usize {
    2
}
fn default_oscillation_tolerance() -> f64 {
    0.01
}
fn default_max_root_iterations() -> usize {
    500
}

impl Default for LaplaceToml {
    fn default() -> Self {
        Self {
            order: default_ar_order(),
            oscillation_tolerance: default_oscillation_tolerance(),
            max_root_iterations: default_max_root_iterations(),
            lag_stride: None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZTransformToml {
    #[serde(default = "default_filter_order")]
    pub order: usize,
    #[serde(default = "default_hint_multiplier")]
    pub hint_multiplier: f64,
    #[serde(default = "default_nyquist_fraction")]
    pub nyquist_fraction: f64,
    #[serde(default = "default_max_nyquist_fraction")]
    pub max_nyquist_fraction: f64,
}

fn default_filter_order() -> usize {
    2
}
fn default_hint_multiplier() -> f64 {
    4.0
}
fn default_nyquist_fraction() -> f64 {
    0.1
}
fn default_max_nyquist_fraction() -> f64 {
    0.9
}

impl Default for ZTransformToml {
    fn default() -> Self {
        Self {
            order: default_filter_order(),
            hint_multiplier: default_hint_multiplier(),
            nyquist_fraction: default_nyquist_fraction(),
            max_nyquist_fraction: default_max_nyquist_fraction(),
        }
    }
}

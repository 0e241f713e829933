//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};

use crate::config::*;

use biolens_analyzer::AnalyzerConfig;
use biolens_fourier::FourierConfig;
use biolens_laplace::LaplaceConfig;
use biolens_signal::{SamplingRate, ValidationConfig};
use biolens_wavelet::WaveletConfig;
use biolens_ztransform::ZTransformConfig;

/// Builds a [`ValidationConfig`] from the TOML validation section.
pub fn build_validation_config(validation: &ValidationToml) -> ValidationConfig {
    let mut cfg = ValidationConfig::new()
        .with_min_len(validation.min_len)
        .with_min_cycles(validation.min_cycles);
    if let Some(hours) = validation.shortest_period_hours {
        cfg = cfg.with_shortest_period_hours(hours);
    }
    cfg
}

/// Builds a [`FourierConfig`] from the TOML Fourier section.
pub fn build_fourier_config(fourier: &FourierToml) -> FourierConfig {
    FourierConfig::new()
        .with_max_period_hours(fourier.max_period_hours)
        .with_expected_period_hours(fourier.expected_period_hours)
        .with_tolerance_fraction(fourier.tolerance_fraction)
        .with_max_span_ratio(fourier.max_span_ratio)
        .with_max_grid_points(fourier.max_grid_points)
}

/// Builds a [`WaveletConfig`] from the TOML wavelet section.
pub fn build_wavelet_config(wavelet: &WaveletToml) -> WaveletConfig {
    let mut cfg = WaveletConfig::new()
        .with_omega0(wavelet.omega0)
        .with_dj(wavelet.dj)
        .with_s0_samples(wavelet.s0_samples)
        .with_threshold_sigma(wavelet.threshold_sigma)
        .with_significance_level(wavelet.significance_level)
        .with_mask_coi(wavelet.mask_coi);
    if let Some(j_max) = wavelet.j_max {
        cfg = cfg.with_j_max(j_max);
    }
    cfg
}

/// Builds a [`LaplaceConfig`] from the TOML Laplace section.
pub fn build_laplace_config(laplace: &LaplaceToml) -> LaplaceConfig {
    let mut cfg = LaplaceConfig::new()
        .with_order(laplace.order)
        .with_oscillation_tolerance(laplace.oscillation_tolerance)
        .with_max_root_iterations(laplace.max_root_iterations);
    if let Some(stride) = laplace.lag_stride {
        cfg = cfg.with_lag_stride(stride);
    }
    cfg
}

/// Builds a [`ZTransformConfig`] from the TOML Z-transform section.
pub fn build_ztransform_config(ztransform: &ZTransformToml) -> ZTransformConfig {
    ZTransformConfig::new()
        .with_order(ztransform.order)
        .with_hint_multiplier(ztransform.hint_multiplier)
        .with_nyquist_fraction(ztransform.nyquist_fraction)
        .with_max_nyquist_fraction(ztransform.max_nyquist_fraction)
}

/// Builds and validates the full [`AnalyzerConfig`].
pub fn build_analyzer_config(cfg: &BiolensConfig) -> Result<AnalyzerConfig> {
    let analyzer = AnalyzerConfig::new()
        .with_validation(build_validation_config(&cfg.validation))
        .with_fourier(build_fourier_config(&cfg.fourier))
        .with_wavelet(build_wavelet_config(&cfg.wavelet))
        .with_laplace(build_laplace_config(&cfg.laplace))
        .with_ztransform(build_ztransform_config(&cfg.ztransform));
    analyzer.validate().context("invalid analyzer configuration")?;
    Ok(analyzer)
}

/// Picks the sampling rate: CLI flag, then config, then the time column.
///
/// `inferred` is the rate estimated from the input's timestamps, if any.
pub fn resolve_sampling_rate(
    cli: Option<f64>,
    cfg: &AnalyzerToml,
    inferred: Option<f64>,
) -> Result<SamplingRate> {
    let hz = match (cli, cfg.sampling_rate_hz, inferred) {
        (Some(hz), _, _) | (None, Some(hz), _) | (None, None, Some(hz)) => hz,
        (None, None, None) => bail!(
            "sampling rate unknown: pass --sampling-rate, set [analyzer].sampling_rate_hz, \
             or provide a time_s column"
        ),
    };
    SamplingRate::new(hz).with_context(|| format!("invalid sampling rate: {hz}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_config_builds_library_defaults() {
        let cfg = build_analyzer_config(&BiolensConfig::default()).unwrap();
        assert_eq!(cfg, AnalyzerConfig::default());
    }

    #[test]
    fn duration_check_enabled_only_when_set() {
        let mut v = ValidationToml::default();
        assert!(build_validation_config(&v).shortest_period_hours().is_none());
        v.shortest_period_hours = Some(24.0);
        assert_eq!(build_validation_config(&v).shortest_period_hours(), Some(24.0));
    }

    #[test]
    fn non_finite_shortest_period_rejected() {
        let cfg = BiolensConfig {
            validation: ValidationToml {
                shortest_period_hours: Some(f64::INFINITY),
                ..ValidationToml::default()
            },
            ..BiolensConfig::default()
        };
        let err = build_analyzer_config(&cfg).unwrap_err();
        assert!(format!("{err:#}").contains("shortest_period_hours"));
    }

    #[test]
    fn wavelet_j_max_forwarded() {
        let w = WaveletToml {
            j_max: Some(20),
            ..WaveletToml::default()
        };
        assert_eq!(build_wavelet_config(&w).j_max(), Some(20));
        assert!(build_wavelet_config(&WaveletToml::default()).j_max().is_none());
    }

    #[test]
    fn wavelet_significance_level_forwarded() {
        let w = WaveletToml {
            significance_level: 0.9,
            ..WaveletToml::default()
        };
        assert_relative_eq!(build_wavelet_config(&w).significance_level(), 0.9);

        let cfg = BiolensConfig {
            wavelet: WaveletToml {
                significance_level: 1.0,
                ..WaveletToml::default()
            },
            ..BiolensConfig::default()
        };
        assert!(build_analyzer_config(&cfg).is_err());
    }

    #[test]
    fn laplace_lag_stride_forwarded() {
        let l = LaplaceToml {
            lag_stride: Some(3),
            ..LaplaceToml::default()
        };
        assert_eq!(build_laplace_config(&l).lag_stride(), Some(3));
        assert!(build_laplace_config(&LaplaceToml::default()).lag_stride().is_none());
    }

    #[test]
    fn zero_lag_stride_rejected() {
        let cfg = BiolensConfig {
            laplace: LaplaceToml {
                lag_stride: Some(0),
                ..LaplaceToml::default()
            },
            ..BiolensConfig::default()
        };
        assert!(build_analyzer_config(&cfg).is_err());
    }

    #[test]
    fn odd_filter_order_rejected() {
        let cfg = BiolensConfig {
            ztransform: ZTransformToml {
                order: 3,
                ..ZTransformToml::default()
            },
            ..BiolensConfig::default()
        };
        let err = build_analyzer_config(&cfg).unwrap_err();
        assert!(format!("{err:#}").contains("invalid analyzer configuration"));
    }

    #[test]
    fn zero_ar_order_rejected() {
        let cfg = BiolensConfig {
            laplace: LaplaceToml {
                order: 0,
                ..LaplaceToml::default()
            },
            ..BiolensConfig::default()
        };
        assert!(build_analyzer_config(&cfg).is_err());
    }

    #[test]
    fn sampling_rate_precedence() {
        let cfg = AnalyzerToml {
            sampling_rate_hz: Some(2.0),
        };
        let rate = resolve_sampling_rate(Some(4.0), &cfg, Some(1.0)).unwrap();
        assert_relative_eq!(rate.hz(), 4.0);
        let rate = resolve_sampling_rate(None, &cfg, Some(1.0)).unwrap();
        assert_relative_eq!(rate.hz(), 2.0);
        let rate = resolve_sampling_rate(None, &AnalyzerToml::default(), Some(1.0)).unwrap();
        assert_relative_eq!(rate.hz(), 1.0);
    }

    #[test]
    fn sampling_rate_missing_everywhere() {
        let err = resolve_sampling_rate(None, &AnalyzerToml::default(), None).unwrap_err();
        assert!(err.to_string().contains("sampling rate unknown"));
    }

    #[test]
    fn non_positive_sampling_rate_rejected() {
        assert!(resolve_sampling_rate(Some(0.0), &AnalyzerToml::default(), None).is_err());
        assert!(resolve_sampling_rate(Some(-1.0), &AnalyzerToml::default(), None).is_err());
    }
}

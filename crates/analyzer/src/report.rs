//! Combined output of [`SystemAnalyzer::analyze`](crate::SystemAnalyzer::analyze).

use serde::{Deserialize, Serialize};

use biolens_fourier::FourierResult;
use biolens_laplace::{LaplaceResult, Stability};
use biolens_signal::ValidationReport;
use biolens_wavelet::WaveletResult;
use biolens_ztransform::ZTransformResult;

use crate::error::AnalyzerError;

/// Every lens result for one signal, plus the validation report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    sampling_rate_hz: f64,
    nyquist_hz: f64,
    n_samples: usize,
    validation: ValidationReport,
    fourier: FourierResult,
    wavelet: WaveletResult,
    laplace: LaplaceResult,
    ztransform: ZTransformResult,
}

/// Headline numbers of an [`AnalysisReport`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Whether every validator check passed.
    pub valid: bool,
    /// Dominant period (hours); `None` when the Fourier result is degenerate.
    pub dominant_period_hours: Option<f64>,
    /// Significance of the dominant period, 0 to 1.
    pub significance: f64,
    /// Number of transient events found by the wavelet lens.
    pub n_transients: usize,
    /// Laplace stability classification.
    pub stability: Stability,
    /// Natural frequency of the dominant pole (Hz).
    pub natural_frequency_hz: f64,
    /// Damping ratio of the dominant pole.
    pub damping_ratio: f64,
    /// Low-pass cutoff used for denoising (Hz).
    pub cutoff_frequency_hz: f64,
    /// Variability removed by denoising (%).
    pub noise_reduction_percent: f64,
}

impl AnalysisReport {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        sampling_rate_hz: f64,
        nyquist_hz: f64,
        n_samples: usize,
        validation: ValidationReport,
        fourier: FourierResult,
        wavelet: WaveletResult,
        laplace: LaplaceResult,
        ztransform: ZTransformResult,
    ) -> Self {
        Self {
            sampling_rate_hz,
            nyquist_hz,
            n_samples,
            validation,
            fourier,
            wavelet,
            laplace,
            ztransform,
        }
    }

    /// Returns the sampling rate (Hz).
    pub fn sampling_rate_hz(&self) -> f64 {
        self.sampling_rate_hz
    }

    /// Returns the Nyquist frequency (Hz).
    pub fn nyquist_hz(&self) -> f64 {
        self.nyquist_hz
    }

    /// Returns the number of samples analysed.
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Returns the validation report.
    pub fn validation(&self) -> &ValidationReport {
        &self.validation
    }

    /// Returns the Fourier lens result.
    pub fn fourier(&self) -> &FourierResult {
        &self.fourier
    }

    /// Returns the wavelet lens result.
    pub fn wavelet(&self) -> &WaveletResult {
        &self.wavelet
    }

    /// Returns the Laplace lens result.
    pub fn laplace(&self) -> &LaplaceResult {
        &self.laplace
    }

    /// Returns the Z-transform lens result.
    pub fn ztransform(&self) -> &ZTransformResult {
        &self.ztransform
    }

    /// Collects the headline numbers of every lens.
    pub fn summary(&self) -> AnalysisSummary {
        AnalysisSummary {
            valid: self.validation.all_passed(),
            dominant_period_hours: (!self.fourier.is_degenerate())
                .then(|| self.fourier.dominant_period_hours()),
            significance: self.fourier.significance(),
            n_transients: self.wavelet.transients().len(),
            stability: self.laplace.stability(),
            natural_frequency_hz: self.laplace.natural_frequency(),
            damping_ratio: self.laplace.damping_ratio(),
            cutoff_frequency_hz: self.ztransform.cutoff_frequency(),
            noise_reduction_percent: self.ztransform.noise_reduction_percent(),
        }
    }

    /// Serializes the full report to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// [`AnalyzerError::Serialization`] if serialization fails.
    pub fn to_json(&self) -> Result<String, AnalyzerError> {
        to_json(self)
    }
}

impl AnalysisSummary {
    /// Serializes the summary to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// [`AnalyzerError::Serialization`] if serialization fails.
    pub fn to_json(&self) -> Result<String, AnalyzerError> {
        to_json(self)
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, AnalyzerError> {
    serde_json::to_string_pretty(value).map_err(|e| AnalyzerError::Serialization {
        reason: e.to_string(),
    })
}

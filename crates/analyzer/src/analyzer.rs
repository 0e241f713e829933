//! The system analyzer facade.

use tracing::{debug, info};

use biolens_fourier::{FourierResult, fourier_lens};
use biolens_laplace::{LaplaceResult, laplace_lens};
use biolens_signal::{SamplingRate, ValidationReport, validate};
use biolens_wavelet::{WaveletResult, wavelet_lens};
use biolens_ztransform::{ZTransformResult, z_transform_lens};

use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use crate::report::AnalysisReport;

/// Runs the validator and the four lenses over signals sampled at one rate.
///
/// The sampling rate and Nyquist frequency are fixed at construction. Every
/// method takes the signal by shared reference and returns a fresh result, so
/// one analyzer can serve many signals and threads.
///
/// # Example
///
/// ```ignore
/// use biolens_analyzer::SystemAnalyzer;
///
/// let analyzer = SystemAnalyzer::new(1.0 / 300.0)?;
/// if analyzer.validate(&samples).all_passed() {
///     let report = analyzer.analyze(&samples, None)?;
///     println!("{}", report.summary().to_json()?);
/// }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SystemAnalyzer {
    rate: SamplingRate,
    config: AnalyzerConfig,
}

impl SystemAnalyzer {
    /// Creates an analyzer with default lens configurations.
    ///
    /// # Errors
    ///
    /// [`AnalyzerError::Signal`] when `sampling_rate_hz` is not positive and finite.
    pub fn new(sampling_rate_hz: f64) -> Result<Self, AnalyzerError> {
        Ok(Self {
            rate: SamplingRate::new(sampling_rate_hz)?,
            config: AnalyzerConfig::new(),
        })
    }

    /// Replaces the lens configurations.
    ///
    /// # Errors
    ///
    /// The first lens configuration that fails validation.
    pub fn with_config(mut self, config: AnalyzerConfig) -> Result<Self, AnalyzerError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Returns the sampling rate.
    pub fn sampling_rate(&self) -> SamplingRate {
        self.rate
    }

    /// Returns the Nyquist frequency (Hz).
    pub fn nyquist(&self) -> f64 {
        self.rate.nyquist()
    }

    /// Returns the lens configurations.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Runs the independent validator checks. Never fails.
    pub fn validate(&self, signal: &[f64]) -> ValidationReport {
        validate(signal, self.rate, self.config.validation())
    }

    /// Runs the Fourier lens; `timestamps` are seconds or `None` for uniform sampling.
    pub fn fourier_lens(
        &self,
        signal: &[f64],
        timestamps: Option<&[f64]>,
    ) -> Result<FourierResult, AnalyzerError> {
        Ok(fourier_lens(signal, timestamps, self.rate, self.config.fourier())?)
    }

    /// Runs the wavelet lens.
    pub fn wavelet_lens(&self, signal: &[f64]) -> Result<WaveletResult, AnalyzerError> {
        Ok(wavelet_lens(signal, self.rate, self.config.wavelet())?)
    }

    /// Runs the Laplace lens.
    pub fn laplace_lens(&self, signal: &[f64]) -> Result<LaplaceResult, AnalyzerError> {
        Ok(laplace_lens(signal, self.rate, self.config.laplace())?)
    }

    /// Runs the Z-transform lens with the default cutoff.
    pub fn z_transform_lens(&self, signal: &[f64]) -> Result<ZTransformResult, AnalyzerError> {
        Ok(z_transform_lens(signal, self.rate, None, self.config.ztransform())?)
    }

    /// Runs the Z-transform lens with a cutoff hint (Hz), typically the
    /// Fourier dominant frequency.
    pub fn z_transform_lens_with_hint(
        &self,
        signal: &[f64],
        cutoff_hint: f64,
    ) -> Result<ZTransformResult, AnalyzerError> {
        Ok(z_transform_lens(
            signal,
            self.rate,
            Some(cutoff_hint),
            self.config.ztransform(),
        )?)
    }

    /// Validates `signal` and runs all four lenses.
    ///
    /// The Fourier dominant frequency is passed to the Z-transform lens as its
    /// cutoff hint unless the Fourier result is degenerate. `timestamps` only
    /// feed the Fourier lens; the other lenses assume uniform sampling.
    ///
    /// # Errors
    ///
    /// The first lens error encountered, in Fourier, wavelet, Laplace,
    /// Z-transform order.
    #[tracing::instrument(skip_all, fields(n = signal.len(), rate = self.rate.hz()))]
    pub fn analyze(
        &self,
        signal: &[f64],
        timestamps: Option<&[f64]>,
    ) -> Result<AnalysisReport, AnalyzerError> {
        let validation = self.validate(signal);
        if !validation.all_passed() {
            info!(failures = ?validation.failures(), "validator checks failed");
        }

        let fourier = self.fourier_lens(signal, timestamps)?;
        let wavelet = self.wavelet_lens(signal)?;
        let laplace = self.laplace_lens(signal)?;
        let ztransform = if fourier.is_degenerate() {
            self.z_transform_lens(signal)?
        } else {
            self.z_transform_lens_with_hint(signal, fourier.dominant_frequency())?
        };
        debug!(
            dominant_hours = fourier.dominant_period_hours(),
            n_transients = wavelet.transients().len(),
            stability = %laplace.stability(),
            cutoff_hz = ztransform.cutoff_frequency(),
            "analysis complete"
        );

        Ok(AnalysisReport::new(
            self.rate.hz(),
            self.rate.nyquist(),
            signal.len(),
            validation,
            fourier,
            wavelet,
            laplace,
            ztransform,
        ))
    }
}
